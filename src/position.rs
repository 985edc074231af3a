//! Offset to line/column translation
//!
//! A [`LineStarts`] table holds the byte offset at which every line of a
//! source text begins. Looking up an offset is a binary search over that
//! table.

use crate::ast::{Location, TextPosition};
use regex::Regex;
use std::sync::OnceLock;

static LINE_BREAK: OnceLock<Regex> = OnceLock::new();

fn line_break() -> &'static Regex {
    LINE_BREAK.get_or_init(|| Regex::new(r"\r?\n").expect("line break pattern is valid"))
}

/// Ascending byte offsets of line starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineStarts {
    starts: Vec<usize>,
}

impl LineStarts {
    /// Wrap a table produced elsewhere. The table must be strictly increasing.
    pub fn new(starts: Vec<usize>) -> Self {
        debug_assert!(starts.windows(2).all(|w| w[0] < w[1]), "line starts must be strictly increasing");
        Self { starts }
    }

    /// Build the table for `text`: offset 0, then one entry after every `\n`
    pub fn from_text(text: &str) -> Self {
        let starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { starts }
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.starts
    }

    pub fn len(&self) -> usize {
        self.starts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// Position of `offset`.
    ///
    /// The line is the number of table entries at or before `offset`. When the
    /// table does not start at 0 and `offset` precedes its first entry, the
    /// offset is on line 1 and its column is the offset itself.
    pub fn position(&self, offset: usize) -> TextPosition {
        let line = self.starts.partition_point(|&start| start <= offset);
        if line == 0 {
            return TextPosition::new(1, offset);
        }
        TextPosition::new(line, offset - self.starts[line - 1])
    }

    /// Location spanning `[start, end)`
    pub fn location(&self, start: usize, end: usize) -> Location {
        Location::new(self.position(start), self.position(end))
    }
}

/// Position just past the last character of `text`.
///
/// Lines are split on `\r?\n`; the result is the number of lines and the
/// length of the last one.
pub fn end_position(text: &str) -> TextPosition {
    let mut lines = 0;
    let mut last = "";
    for line in line_break().split(text) {
        lines += 1;
        last = line;
    }
    TextPosition::new(lines.max(1), last.len())
}
