// Copyright 2026 the Typecase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measurement of styled runs against an available width.

use crate::line_break::{Breaker, Line, PendingChar};
use crate::metrics::GlyphMetrics;
use crate::run::StyledRun;
use typecase::{Catalog, ResolvedFont, TextStyle};

/// The bounding box a wrapped paragraph occupies.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct LayoutResult {
    /// Widest line, rounded up to whole layout units.
    pub width: f32,
    /// Sum of the per-line heights.
    pub height: f32,
}

/// Context for resolving fonts and measuring text against a catalog and a
/// metrics provider.
///
/// The context is stateless apart from the two shared references, so it is
/// cheap to construct per call and safe to use from any number of threads.
#[derive(Clone, Copy, Debug)]
pub struct MeasureContext<'a, M> {
    catalog: &'a Catalog,
    metrics: &'a M,
}

impl<'a, M: GlyphMetrics> MeasureContext<'a, M> {
    /// Creates a context over a catalog and a metrics provider.
    pub fn new(catalog: &'a Catalog, metrics: &'a M) -> Self {
        Self { catalog, metrics }
    }

    /// Resolves a style to a concrete face and size.
    pub fn resolve_font(&self, style: &TextStyle) -> ResolvedFont {
        self.catalog.resolve(style)
    }

    /// Splits the concatenated run contents into lines that fit the
    /// available width.
    ///
    /// Every character keeps the face its run's style resolved to. Empty
    /// input yields exactly one empty line whose height comes from the
    /// default style.
    pub fn break_lines(&self, runs: &[StyledRun], available_width: f32) -> Vec<Line> {
        let initial_height = match runs.first() {
            Some(run) => self.line_height_of(&run.style),
            None => self.line_height_of(&TextStyle::default()),
        };
        let mut breaker = Breaker::new(available_width, initial_height);
        for run in runs {
            let font = self.catalog.resolve(&run.style);
            let height = run
                .style
                .line_height
                .unwrap_or_else(|| self.metrics.line_metrics(&font.face, font.size).height());
            for ch in run.content.chars() {
                let advance = if ch == '\n' {
                    0.0
                } else {
                    self.metrics.advance_width(&font.face, font.size, ch)
                        + run.style.letter_spacing
                };
                breaker.push(PendingChar {
                    ch,
                    font: font.clone(),
                    advance,
                    height,
                });
            }
        }
        breaker.finish()
    }

    /// Computes the bounding box of the runs wrapped to the available
    /// width.
    ///
    /// Alignment never enters the computation: the box is identical for
    /// all `textAlign` values. The width is rounded up because layout
    /// space is allocated in whole units.
    pub fn measure(&self, runs: &[StyledRun], available_width: f32) -> LayoutResult {
        let lines = self.break_lines(runs, available_width);
        let width = lines.iter().map(|line| line.width).fold(0.0, f32::max).ceil();
        let height = lines.iter().map(|line| line.height).sum();
        LayoutResult { width, height }
    }

    fn line_height_of(&self, style: &TextStyle) -> f32 {
        style.line_height.unwrap_or_else(|| {
            let font = self.catalog.resolve(style);
            self.metrics.line_metrics(&font.face, font.size).height()
        })
    }
}
