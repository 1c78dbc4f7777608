// Copyright 2026 the Typecase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! System font naming.
//!
//! The system family is not a catalog entry: the platform synthesizes a
//! face name from the requested size, weight and slope. The base names and
//! suffix spelling below follow the reference platform's text engine and
//! have changed between platform revisions (other revisions append an
//! explicit `-Regular`), so callers should match the result structurally
//! rather than against full literals.

use crate::attributes::{FontStyle, FontWeight};
use crate::catalog::FaceId;

/// Portable name of the system font family.
pub const SYSTEM_FAMILY: &str = "System";

/// Platform-internal alias for the system font family.
pub const SYSTEM_FAMILY_ALIAS: &str = ".AppleSystemUIFont";

/// Sizes at or above this threshold select the display variant of the
/// system font; smaller sizes select the text variant.
pub const DISPLAY_SIZE_THRESHOLD: f32 = 20.0;

const TEXT_BASE: &str = ".SFNSText";
const DISPLAY_BASE: &str = ".SFNSDisplay";

/// Returns `true` if the name requests the system font family.
pub fn is_system_family(name: &str) -> bool {
    name == SYSTEM_FAMILY || name == SYSTEM_FAMILY_ALIAS
}

/// Synthesizes the system face for the given size, weight and slope.
///
/// A weight class of 600 or more selects the bold variant; weight and slope
/// suffixes are appended only when non-default.
pub fn system_face(size: f32, weight: FontWeight, style: FontStyle) -> FaceId {
    let base = if size >= DISPLAY_SIZE_THRESHOLD {
        DISPLAY_BASE
    } else {
        TEXT_BASE
    };
    let bold = weight.value() >= FontWeight::SEMI_BOLD.value();
    let suffix = match (bold, style.is_slanted()) {
        (true, true) => "-BoldItalic",
        (true, false) => "-Bold",
        (false, true) => "-Italic",
        (false, false) => "",
    };
    if suffix.is_empty() {
        FaceId::new(base)
    } else {
        FaceId::new(format!("{base}{suffix}"))
    }
}
