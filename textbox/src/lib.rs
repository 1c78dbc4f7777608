// Copyright 2026 the Typecase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wrapped-paragraph measurement for styled text runs.
//!
//! Given a sequence of [`StyledRun`]s and an available width, this crate
//! computes the bounding box the text will occupy once wrapped, without
//! rasterizing anything. Faces are resolved through a [`Catalog`]; advances
//! and line metrics come from a caller-supplied [`GlyphMetrics`] provider,
//! which keeps the engine independent of any particular shaping backend.
//!
//! ```
//! use textbox::{GlyphMetrics, LineMetrics, MeasureContext, StyledRun};
//! use typecase::{Catalog, FaceId, TextStyle};
//!
//! // A toy provider: every glyph is half an em wide.
//! struct HalfEm;
//!
//! impl GlyphMetrics for HalfEm {
//!     fn advance_width(&self, _face: &FaceId, size: f32, _ch: char) -> f32 {
//!         size * 0.5
//!     }
//!     fn line_metrics(&self, _face: &FaceId, size: f32) -> LineMetrics {
//!         LineMetrics { ascent: size * 0.8, descent: size * 0.2, leading: size * 0.2 }
//!     }
//! }
//!
//! let catalog = Catalog::builtin();
//! let cx = MeasureContext::new(&catalog, &HalfEm);
//! let style = TextStyle { font_size: 10.0, line_height: Some(12.0), ..TextStyle::default() };
//! let result = cx.measure(&[StyledRun::new("Hello", style)], 400.0);
//! assert_eq!(result.width, 25.0);
//! assert_eq!(result.height, 12.0);
//! ```

mod line_break;
mod measure;
mod metrics;
mod run;

pub use line_break::{Line, LineChar};
pub use measure::{LayoutResult, MeasureContext};
pub use metrics::{GlyphMetrics, LineMetrics};
pub use run::StyledRun;

pub use typecase::{
    Catalog, FaceId, FontStyle, FontWeight, ResolvedFont, StyleError, TextAlign, TextStyle,
    DEFAULT_FONT_SIZE,
};
