// Copyright 2026 the Typecase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Styled content runs.

use typecase::TextStyle;

/// A piece of content carrying a single style.
///
/// A paragraph is an ordered sequence of runs; the layout engine treats
/// their concatenated content as one character stream in which every
/// character keeps the style of its originating run.
#[derive(Clone, PartialEq, Debug)]
pub struct StyledRun {
    /// The text of the run.
    pub content: String,
    /// The style applied to every character of the run.
    pub style: TextStyle,
}

impl StyledRun {
    /// Creates a run from content and a style.
    pub fn new(content: impl Into<String>, style: TextStyle) -> Self {
        Self {
            content: content.into(),
            style,
        }
    }
}
