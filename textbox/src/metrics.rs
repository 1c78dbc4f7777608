// Copyright 2026 the Typecase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boundary to the native glyph metrics provider.

use typecase::FaceId;

/// Vertical metrics of a face at a given size.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct LineMetrics {
    /// Distance from the baseline to the top of the tallest glyphs.
    pub ascent: f32,
    /// Distance from the baseline to the bottom of the lowest glyphs.
    pub descent: f32,
    /// Extra space allocated between consecutive lines.
    pub leading: f32,
}

impl LineMetrics {
    /// Height of a line using these metrics.
    pub fn height(&self) -> f32 {
        self.ascent + self.descent + self.leading
    }
}

/// Per-character advance and line metrics, as reported by a text-shaping
/// engine.
///
/// Implementations must be deterministic for a given face and size; the
/// layout engine treats them as pure functions and never retries or masks
/// their results. The concrete numbers depend entirely on the provider's
/// font data, which is why measurements are only reproducible against the
/// identical provider.
pub trait GlyphMetrics {
    /// Returns the horizontal space the character occupies when laid out
    /// with the given face and size.
    fn advance_width(&self, face: &FaceId, size: f32, ch: char) -> f32;

    /// Returns the vertical metrics of the face at the given size.
    fn line_metrics(&self, face: &FaceId, size: f32) -> LineMetrics;
}
