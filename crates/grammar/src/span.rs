// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Source location tracking for grammar strings and input lines.

use serde::{Deserialize, Serialize};

/// A byte range in a grammar string or an input line.
///
/// # Examples
///
/// ```
/// use jc_grammar::Span;
///
/// let source = "tenant tname [tid]?";
/// let span = Span::new(7, 12);
/// assert_eq!(span.slice(source), "tname");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span from start to end byte positions.
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    /// Create an empty span at a position.
    #[inline]
    pub fn empty(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Returns the length of the span in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Merge two spans into one that covers both.
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Extract the spanned text from source.
    ///
    /// Returns an empty string if the span is out of bounds or not on valid
    /// UTF-8 character boundaries.
    #[inline]
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or("")
    }
}

/// Render the source with carets under the span.
///
/// Grammar strings and input lines are single-line, so the whole source is
/// shown:
///
/// ```text
/// node name [nid|nsig
///           ^
/// ```
pub fn context_snippet(source: &str, span: Span) -> String {
    let line = source.lines().next().unwrap_or("");
    let start = span.start.min(line.len());
    let col = line.get(..start).map_or(0, |s| s.chars().count());
    let width = span.slice(source).chars().count().max(1);

    format!("{}\n{}{}", line, " ".repeat(col), "^".repeat(width))
}

/// Generate a diagnostic message in the style of rustc errors.
///
/// ```text
/// error: unbalanced '[' in grammar
///   --> column 11
///    |
///    | node name [nid|nsig
///    |           ^
/// ```
pub fn diagnostic_context(source: &str, span: Span, message: &str) -> String {
    let line = source.lines().next().unwrap_or("");
    let start = span.start.min(line.len());
    let col = line.get(..start).map_or(0, |s| s.chars().count());
    let width = span.slice(source).chars().count().max(1);

    format!(
        "error: {}\n  --> column {}\n   |\n   | {}\n   | {}{}",
        message,
        col + 1,
        line,
        " ".repeat(col),
        "^".repeat(width)
    )
}

#[cfg(test)]
#[path = "span_tests.rs"]
mod tests;
