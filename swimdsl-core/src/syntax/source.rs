//! Read-only view over the flat source text
//!
//! The compiler never owns the document; the host hands it a borrowed string
//! and node spans index into it. Slicing is total: a span that falls outside
//! the text (or off a character boundary) yields the empty string rather
//! than panicking, since span data comes from an external component.

use super::span::Span;

/// The source document backing a concrete syntax tree.
#[derive(Debug, Clone, Copy)]
pub struct SourceText<'a> {
    text: &'a str,
}

impl<'a> SourceText<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    pub fn as_str(&self) -> &'a str {
        self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The text a span covers, or `""` if the span is out of bounds.
    pub fn slice(&self, span: Span) -> &'a str {
        self.text.get(span.start..span.end).unwrap_or("")
    }
}
