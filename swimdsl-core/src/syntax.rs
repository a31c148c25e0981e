//! Syntax-side contracts: node kinds, spans, cursors and materialized nodes
//!
//! The external parser exposes its concrete syntax tree through the
//! [`TreeCursor`] trait and the flat source text. Everything downstream of
//! that boundary works on [`SyntaxNode`] values materialized once per
//! compile, so lowering and analysis stay pure functions over immutable data
//! instead of juggling a shared mutable walker.

pub mod cursor;
pub mod kind;
pub mod node;
pub mod source;
pub mod span;

pub use cursor::TreeCursor;
pub use kind::NodeKind;
pub use node::SyntaxNode;
pub use source::SourceText;
pub use span::{Position, SourceMap, Span};
