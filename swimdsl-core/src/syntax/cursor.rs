//! The tree-cursor contract the external parser implements
//!
//! The grammar and parser for SwimDSL live outside this workspace; the only
//! thing the compiler asks of them is this trait plus the backing source
//! text. The compiler itself touches a cursor in exactly one place,
//! [`SyntaxNode::from_cursor`](super::node::SyntaxNode::from_cursor), which
//! materializes the tree and restores the cursor before returning. Everything
//! else is pure functions over the materialized nodes, so no other code needs
//! to reason about save/restore discipline.

use super::kind::NodeKind;
use super::span::Span;

/// A mutable walker over a concrete syntax tree.
///
/// Navigation methods return whether the move happened; when they return
/// `false` the cursor has not moved.
pub trait TreeCursor {
    /// Move to the first child of the current node.
    fn goto_first_child(&mut self) -> bool;

    /// Move to the next sibling of the current node.
    fn goto_next_sibling(&mut self) -> bool;

    /// Move to the parent of the current node.
    fn goto_parent(&mut self) -> bool;

    /// Advance to the next node in pre-order, descending into children.
    ///
    /// Returns `false` (without moving) once the whole tree has been
    /// visited.
    fn goto_next(&mut self) -> bool;

    /// The kind of the current node.
    fn kind(&self) -> NodeKind;

    /// The byte span of the current node.
    fn span(&self) -> Span;
}
