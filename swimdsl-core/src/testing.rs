//! Test fixtures: hand-built syntax trees and a cursor over them
//!
//! The real parser lives outside this workspace, so tests build concrete
//! syntax trees by hand with [`TreeBuilder`] and walk them through
//! [`TestCursor`], an in-memory [`TreeCursor`] implementation. Token spans
//! are located by searching the source text left to right, so a fixture
//! reads like the programme it represents:
//!
//! ```
//! use swimdsl_core::syntax::NodeKind;
//! use swimdsl_core::testing::build_tree;
//!
//! let tree = build_tree("100 Free\n", |b| {
//!     b.node(NodeKind::SwimInstruction, |b| {
//!         b.node(NodeKind::SingleInstruction, |b| {
//!             b.token(NodeKind::Number, "100");
//!             b.token(NodeKind::Stroke, "Free");
//!         });
//!     });
//! });
//! assert_eq!(tree.kind, NodeKind::Program);
//! ```
//!
//! Available to other crates under the `test-support` feature.

use crate::syntax::{NodeKind, Span, SyntaxNode, TreeCursor};

/// An owned tree node for fixtures. Structurally identical to
/// [`SyntaxNode`], but walked through [`TestCursor`] so code under test sees
/// only the [`TreeCursor`] contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreenNode {
    pub kind: NodeKind,
    pub span: Span,
    pub children: Vec<GreenNode>,
}

impl GreenNode {
    pub fn new(kind: NodeKind, span: Span, children: Vec<GreenNode>) -> Self {
        Self {
            kind,
            span,
            children,
        }
    }

    /// A cursor positioned at this node.
    pub fn cursor(&self) -> TestCursor<'_> {
        TestCursor {
            root: self,
            path: Vec::new(),
        }
    }

    /// The [`SyntaxNode`] this tree should materialize to.
    pub fn to_syntax(&self) -> SyntaxNode {
        SyntaxNode::new(
            self.kind,
            self.span,
            self.children.iter().map(GreenNode::to_syntax).collect(),
        )
    }
}

/// Build a [`NodeKind::Program`] tree spanning the whole source.
pub fn build_tree(source: &str, build: impl FnOnce(&mut TreeBuilder)) -> GreenNode {
    let mut builder = TreeBuilder {
        source,
        find_from: 0,
        stack: vec![GreenNode::new(
            NodeKind::Program,
            Span::new(0, source.len()),
            Vec::new(),
        )],
    };
    build(&mut builder);
    builder.stack.pop().expect("root stays on the stack")
}

/// Incrementally builds a fixture tree against a source string.
///
/// Tokens must be declared in source order; each `token` call searches
/// forward from the end of the previous token, so repeated text resolves to
/// successive occurrences.
pub struct TreeBuilder<'a> {
    source: &'a str,
    find_from: usize,
    stack: Vec<GreenNode>,
}

impl TreeBuilder<'_> {
    /// Add a leaf whose span is the next occurrence of `text`.
    pub fn token(&mut self, kind: NodeKind, text: &str) {
        let span = self.locate(text);
        self.find_from = span.end;
        self.attach(GreenNode::new(kind, span, Vec::new()));
    }

    /// Add an interior node; its span is the bounding box of its children.
    pub fn node(&mut self, kind: NodeKind, build: impl FnOnce(&mut Self)) {
        self.stack
            .push(GreenNode::new(kind, Span::empty_at(self.find_from), Vec::new()));
        build(self);
        let mut node = self.stack.pop().expect("builder stack is balanced");
        if let (Some(first), Some(last)) = (node.children.first(), node.children.last()) {
            node.span = first.span.cover(last.span);
        }
        self.attach(node);
    }

    /// Add an interior node spanning the next occurrence of `text`, for
    /// nodes whose span covers more than their children (statements with
    /// surrounding syntax like `Pace A = 80%`).
    pub fn node_spanning(&mut self, kind: NodeKind, text: &str, build: impl FnOnce(&mut Self)) {
        let span = self.locate(text);
        self.stack.push(GreenNode::new(kind, span, Vec::new()));
        build(self);
        let node = self.stack.pop().expect("builder stack is balanced");
        self.attach(node);
    }

    fn locate(&self, text: &str) -> Span {
        let start = self.source[self.find_from..]
            .find(text)
            .map(|at| at + self.find_from)
            .unwrap_or_else(|| {
                panic!(
                    "fixture text {text:?} not found after byte {} of {:?}",
                    self.find_from, self.source
                )
            });
        Span::new(start, start + text.len())
    }

    fn attach(&mut self, node: GreenNode) {
        self.stack
            .last_mut()
            .expect("builder stack is balanced")
            .children
            .push(node);
    }
}

/// A [`TreeCursor`] over a [`GreenNode`] tree.
///
/// The position is a path of child indices from the root, so tests can
/// assert a cursor ends up exactly where it started.
pub struct TestCursor<'a> {
    root: &'a GreenNode,
    path: Vec<usize>,
}

impl<'a> TestCursor<'a> {
    fn node(&self) -> &'a GreenNode {
        let mut node = self.root;
        for &index in &self.path {
            node = &node.children[index];
        }
        node
    }

    /// The current position as `(kind, span, path)`.
    pub fn position(&self) -> (NodeKind, Span, Vec<usize>) {
        let node = self.node();
        (node.kind, node.span, self.path.clone())
    }
}

impl TreeCursor for TestCursor<'_> {
    fn goto_first_child(&mut self) -> bool {
        if self.node().children.is_empty() {
            return false;
        }
        self.path.push(0);
        true
    }

    fn goto_next_sibling(&mut self) -> bool {
        let Some(&index) = self.path.last() else {
            return false;
        };
        let parent_path = &self.path[..self.path.len() - 1];
        let mut parent = self.root;
        for &step in parent_path {
            parent = &parent.children[step];
        }
        if index + 1 < parent.children.len() {
            *self.path.last_mut().expect("path is non-empty") = index + 1;
            true
        } else {
            false
        }
    }

    fn goto_parent(&mut self) -> bool {
        self.path.pop().is_some()
    }

    fn goto_next(&mut self) -> bool {
        if self.goto_first_child() {
            return true;
        }
        let saved = self.path.clone();
        loop {
            if self.goto_next_sibling() {
                return true;
            }
            if self.path.pop().is_none() {
                self.path = saved;
                return false;
            }
        }
    }

    fn kind(&self) -> NodeKind {
        self.node().kind
    }

    fn span(&self) -> Span {
        self.node().span
    }
}
