// Copyright 2026 the Typecase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for style construction.

use thiserror::Error;

/// Failure to construct a [`TextStyle`](crate::TextStyle) from host data.
///
/// Resolution itself never fails; unknown families, weights and styles all
/// degrade through the fallback chain. The only hard error is a caller
/// contract violation in the style record itself, surfaced at construction.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StyleError {
    /// The style record violated the host contract, e.g. a `fontWeight`
    /// supplied as a number instead of a string.
    #[error("invalid text style: {0}")]
    InvalidArgument(String),
}
