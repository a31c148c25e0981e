//! Materialized syntax nodes
//!
//! [`SyntaxNode`] is the compiler's working form of the concrete syntax
//! tree: a plain owned tree of `(kind, span, children)` built once per
//! compile from the external cursor. Lowering and analysis take
//! `&SyntaxNode` and return values; nothing downstream of materialization
//! mutates tree state or tracks cursor positions.

use super::cursor::TreeCursor;
use super::kind::NodeKind;
use super::span::Span;

/// An immutable node of the concrete syntax tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    pub span: Span,
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    pub fn new(kind: NodeKind, span: Span, children: Vec<SyntaxNode>) -> Self {
        Self {
            kind,
            span,
            children,
        }
    }

    /// Materialize the subtree rooted at the cursor's current node.
    ///
    /// Postcondition: the cursor points to the same node it pointed to when
    /// passed in, on every path. This is the single place in the compiler
    /// where cursor navigation happens.
    pub fn from_cursor<C: TreeCursor>(cursor: &mut C) -> SyntaxNode {
        let mut node = SyntaxNode::new(cursor.kind(), cursor.span(), Vec::new());

        if cursor.goto_first_child() {
            loop {
                node.children.push(SyntaxNode::from_cursor(cursor));
                if !cursor.goto_next_sibling() {
                    break;
                }
            }
            cursor.goto_parent();
        }

        node
    }

    /// The first child of the given kind, if any.
    pub fn child_of_kind(&self, kind: NodeKind) -> Option<&SyntaxNode> {
        self.children.iter().find(|child| child.kind == kind)
    }

    /// All children of the given kind, in order.
    pub fn children_of_kind(&self, kind: NodeKind) -> impl Iterator<Item = &SyntaxNode> {
        self.children.iter().filter(move |child| child.kind == kind)
    }

    /// All nodes of the subtree in pre-order, starting with `self`.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// The deepest node whose span contains the byte offset.
    ///
    /// When siblings have touching spans the later child wins, matching how
    /// a reader resolves "the node just typed".
    pub fn node_at_offset(&self, offset: usize) -> Option<&SyntaxNode> {
        if !self.span.contains_offset(offset) {
            return None;
        }
        let mut current = self;
        'descend: loop {
            for child in current.children.iter().rev() {
                if child.span.contains_offset(offset) {
                    current = child;
                    continue 'descend;
                }
            }
            return Some(current);
        }
    }
}

/// Pre-order iterator over a subtree.
pub struct Descendants<'a> {
    stack: Vec<&'a SyntaxNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a SyntaxNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
