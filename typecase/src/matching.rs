// Copyright 2026 the Typecase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nearest-fit face matching within a family.

use crate::attributes::{FontStyle, FontWeight};
use crate::catalog::FaceInfo;
use core::cmp::Ordering::Less;

/// Selects the best face from `set` for the requested slope and weight.
///
/// Weight classes available in a family are finite, so the policy is
/// "round up, else clamp to max": the smallest available class that is
/// greater than or equal to the request wins, and a request heavier than
/// everything on offer takes the heaviest class. The slope is then matched
/// within the chosen class, falling back to the upright face of that same
/// class when no slanted face exists (and vice versa).
///
/// Returns `None` only for an empty set.
pub(crate) fn match_face(set: &[FaceInfo], style: FontStyle, weight: FontWeight) -> Option<usize> {
    match set.len() {
        0 => return None,
        1 => return Some(0),
        _ => {}
    }
    let weight = weight.value();
    // font-weight is tried first: round up...
    let use_weight = set
        .iter()
        .map(|f| f.weight().value())
        .filter(|w| *w >= weight)
        .min_by(|x, y| x.partial_cmp(y).unwrap_or(Less))
        // ...else clamp to the heaviest class.
        .or_else(|| {
            set.iter()
                .map(|f| f.weight().value())
                .max_by(|x, y| x.partial_cmp(y).unwrap_or(Less))
        })?;
    let class = |f: &&FaceInfo| f.weight().value() == use_weight;
    // font-style is matched within the chosen class.
    let want_slanted = style.is_slanted();
    if let Some(index) = set
        .iter()
        .position(|f| f.weight().value() == use_weight && f.style().is_slanted() == want_slanted)
    {
        return Some(index);
    }
    // The requested slope has no face in this class; any face of the class
    // (in practice, the upright one) stands in.
    set.iter().enumerate().find(|(_, f)| class(f)).map(|(i, _)| i)
}
