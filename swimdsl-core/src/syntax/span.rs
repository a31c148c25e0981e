//! Byte spans and line/column positions
//!
//! Nodes and diagnostics carry byte-offset [`Span`]s; [`SourceMap`] converts
//! offsets to line:column [`Position`]s when a human needs to read them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A half-open byte range into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The empty span at a single offset, used for pure insertions.
    pub fn empty_at(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    pub fn contains_offset(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// The smallest span covering both `self` and `other`.
    pub fn cover(&self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A line:column position in source code, both zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Fast conversion from byte offsets to line/column positions.
pub struct SourceMap {
    /// Byte offsets where each line starts.
    line_starts: Vec<usize>,
}

impl SourceMap {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }
        Self { line_starts }
    }

    /// Convert a byte offset to a line/column position.
    pub fn position(&self, byte_offset: usize) -> Position {
        let line = self
            .line_starts
            .binary_search(&byte_offset)
            .unwrap_or_else(|i| i - 1);
        Position::new(line, byte_offset - self.line_starts[line])
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cover_takes_the_outer_bounds() {
        let a = Span::new(2, 5);
        let b = Span::new(4, 9);
        assert_eq!(a.cover(b), Span::new(2, 9));
        assert_eq!(b.cover(a), Span::new(2, 9));
    }

    #[test]
    fn contains_offset_is_half_open() {
        let span = Span::new(3, 6);
        assert!(!span.contains_offset(2));
        assert!(span.contains_offset(3));
        assert!(span.contains_offset(5));
        assert!(!span.contains_offset(6));
    }

    #[test]
    fn empty_at_is_a_pure_insertion_point() {
        let span = Span::empty_at(7);
        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
    }

    #[test]
    fn position_conversion_multiline() {
        let map = SourceMap::new("Pace A = 80%\n2x100 Free\n");
        assert_eq!(map.position(0), Position::new(0, 0));
        assert_eq!(map.position(5), Position::new(0, 5));
        assert_eq!(map.position(13), Position::new(1, 0));
        assert_eq!(map.position(19), Position::new(1, 6));
        assert_eq!(map.line_count(), 3);
    }

    #[test]
    fn position_conversion_with_unicode() {
        let map = SourceMap::new("Bäder\nRest");
        assert_eq!(map.position(7), Position::new(1, 0));
    }

    #[test]
    fn span_and_position_display() {
        assert_eq!(format!("{}", Span::new(1, 4)), "1..4");
        assert_eq!(format!("{}", Position::new(2, 7)), "2:7");
    }
}
