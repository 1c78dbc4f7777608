// Copyright 2026 the Typecase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolution of symbolic styles to concrete faces.

use crate::catalog::{Catalog, FaceId};
use crate::style::TextStyle;
use crate::system::{is_system_family, system_face};
use log::debug;

/// A concrete face at a concrete size, ready for the metrics provider.
///
/// Resolution is total: every [`TextStyle`] maps to a face that exists,
/// with the system font as the terminal fallback.
#[derive(Clone, PartialEq, Debug)]
pub struct ResolvedFont {
    /// The matched face.
    pub face: FaceId,
    /// The requested size, carried through unchanged.
    pub size: f32,
}

impl Catalog {
    /// Resolves a style to a concrete face.
    ///
    /// Missing, blank and unknown families all degrade to the system font;
    /// weight and slope degrade through nearest-fit matching. The result is
    /// a pure function of the style and the catalog contents.
    pub fn resolve(&self, style: &TextStyle) -> ResolvedFont {
        let size = style.font_size;
        let face = self.resolve_face(style);
        ResolvedFont { face, size }
    }

    fn resolve_face(&self, style: &TextStyle) -> FaceId {
        let system = |reason: &str| {
            debug!("{reason}; falling back to the system font");
            system_face(style.font_size, style.font_weight, style.font_style)
        };
        let name = style
            .font_family
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty());
        let Some(name) = name else {
            return system("no font family requested");
        };
        if is_system_family(name) {
            return system_face(style.font_size, style.font_weight, style.font_style);
        }
        let Some(family) = self.lookup(name) else {
            return system(&format!("font family {name:?} is not in the catalog"));
        };
        match family.match_face(style.font_style, style.font_weight) {
            Some(face) => face.id().clone(),
            // Catalog families always carry at least one face; an empty one
            // behaves like a family that failed to load.
            None => system(&format!("font family {name:?} has no faces")),
        }
    }
}
