// Copyright 2026 the Typecase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font face catalog, nearest-fit matching and style resolution.
//!
//! This crate maps symbolic text styles (family name, weight, slope, size)
//! to concrete font faces ahead of rendering. Resolution never fails: an
//! unknown family, weight or slope degrades step by step until it reaches a
//! face that exists, with the platform system font as the terminal
//! fallback.
//!
//! ```
//! use serde_json::json;
//! use typecase::{Catalog, TextStyle};
//!
//! let catalog = Catalog::builtin();
//! let style = TextStyle::from_json(&json!({
//!     "fontFamily": "Helvetica",
//!     "fontWeight": "500",
//! }))
//! .unwrap();
//! // 500 is not available; the nearest class at or above it is 700.
//! assert_eq!(catalog.resolve(&style).face.name(), "Helvetica-Bold");
//! ```

mod attributes;
mod catalog;
mod error;
mod matching;
mod resolve;
mod style;
mod system;

pub use attributes::{FontStyle, FontWeight, TextAlign};
pub use catalog::{Catalog, FaceId, FaceInfo, FamilyInfo};
pub use error::StyleError;
pub use resolve::ResolvedFont;
pub use style::{TextStyle, DEFAULT_FONT_SIZE};
pub use system::{
    is_system_family, system_face, DISPLAY_SIZE_THRESHOLD, SYSTEM_FAMILY, SYSTEM_FAMILY_ALIAS,
};
