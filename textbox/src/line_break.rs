// Copyright 2026 the Typecase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Greedy line breaking with a forced character-level fallback.

use typecase::ResolvedFont;

/// A character placed on a line, together with the face it resolved to.
#[derive(Clone, PartialEq, Debug)]
pub struct LineChar {
    /// The character.
    pub ch: char,
    /// The face and size used for its metrics.
    pub font: ResolvedFont,
}

/// One laid-out line of the paragraph.
#[derive(Clone, PartialEq, Debug)]
pub struct Line {
    /// The characters on the line, in stream order.
    pub chars: Vec<LineChar>,
    /// Sum of the per-character advances, including letter spacing.
    pub width: f32,
    /// Effective height of the line: the maximum over its characters of
    /// the style's line-height override or the provider-derived height.
    pub height: f32,
}

/// A character waiting to be placed, with its advance and effective line
/// height already computed.
pub(crate) struct PendingChar {
    pub(crate) ch: char,
    pub(crate) font: ResolvedFont,
    pub(crate) advance: f32,
    pub(crate) height: f32,
}

/// Position within the pending line where a word break may be taken: just
/// after the most recent whitespace character.
struct BreakPoint {
    index: usize,
    width: f32,
}

/// Incremental greedy breaker over one character stream.
///
/// Break opportunities exist after each whitespace character. When the next
/// word would overflow, the line is closed at the last opportunity and the
/// partial word carries over; a word with no opportunity on its line is
/// force-broken one character before the overflow point. Every pushed
/// character makes progress, so the breaker cannot fail, even at zero
/// available width.
pub(crate) struct Breaker {
    available: f32,
    lines: Vec<Line>,
    chars: Vec<PendingChar>,
    width: f32,
    break_at: Option<BreakPoint>,
    /// Effective line height of the style currently in effect; used for
    /// lines that close without any characters on them.
    pending_height: f32,
}

impl Breaker {
    pub(crate) fn new(available: f32, initial_height: f32) -> Self {
        Self {
            available,
            lines: Vec::new(),
            chars: Vec::new(),
            width: 0.0,
            break_at: None,
            pending_height: initial_height,
        }
    }

    pub(crate) fn push(&mut self, pc: PendingChar) {
        self.pending_height = pc.height;
        if pc.ch == '\n' {
            // An explicit newline always closes the line, whatever the
            // width, and contributes no advance.
            self.commit();
            return;
        }
        let is_ws = pc.ch.is_whitespace();
        if !is_ws && !self.chars.is_empty() && self.width + pc.advance > self.available {
            match self.break_at.take() {
                // A word is in progress; close at the opportunity and
                // carry the partial word over.
                Some(bp) if bp.index < self.chars.len() => self.rewrap(bp),
                // The opportunity is at the line end, or there is none:
                // close the whole line.
                _ => self.commit(),
            }
            // The carried word plus this character can still overflow when
            // the word alone is wider than the available width: force a
            // character-level break.
            if !self.chars.is_empty() && self.width + pc.advance > self.available {
                self.commit();
            }
        }
        self.width += pc.advance;
        self.chars.push(pc);
        if is_ws {
            self.break_at = Some(BreakPoint {
                index: self.chars.len(),
                width: self.width,
            });
        }
    }

    pub(crate) fn finish(mut self) -> Vec<Line> {
        // Commits the remaining line. For empty input this is the single
        // empty line; after a trailing newline it is the empty line the
        // newline opened.
        self.commit();
        self.lines
    }

    fn commit(&mut self) {
        let height = if self.chars.is_empty() {
            self.pending_height
        } else {
            self.chars.iter().map(|c| c.height).fold(0.0, f32::max)
        };
        let chars = self
            .chars
            .drain(..)
            .map(|c| LineChar {
                ch: c.ch,
                font: c.font,
            })
            .collect();
        self.lines.push(Line {
            chars,
            width: self.width,
            height,
        });
        self.width = 0.0;
        self.break_at = None;
    }

    fn rewrap(&mut self, bp: BreakPoint) {
        let carried = self.chars.split_off(bp.index);
        let carried_width = self.width - bp.width;
        self.width = bp.width;
        self.commit();
        self.chars = carried;
        self.width = carried_width;
    }
}
