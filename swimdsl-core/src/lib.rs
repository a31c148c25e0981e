//! Core of the SwimDSL compiler: syntax contracts, vocabulary, AST and lowering
//!
//! This crate holds everything the compiler needs short of analysis and code
//! generation:
//!
//! - The [`syntax`] module: the closed set of grammar node kinds, byte spans,
//!   the `TreeCursor` trait the external parser implements, and the
//!   materialized [`syntax::SyntaxNode`] tree the rest of the compiler works
//!   on as plain immutable data.
//! - The [`vocabulary`] module: the valid-value tables of the language
//!   (strokes, modifiers, gear, constants, booleans), stroke
//!   canonicalization, and the stroke-modifier/gear compatibility matrix.
//! - The [`ast`] module: the strongly-shaped Programme model.
//! - The [`lowering`] module: CST → AST lowering.
//!
//! The crate is a pure library: it performs no I/O, keeps no state across
//! calls, and rebuilds everything from scratch on each invocation. The parser
//! that produces the concrete syntax tree is an external collaborator; the
//! only thing it must provide is a [`syntax::TreeCursor`] and the flat source
//! text.

pub mod ast;
pub mod lowering;
pub mod syntax;
pub mod vocabulary;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use ast::Programme;
pub use lowering::lower_programme;
pub use syntax::{NodeKind, SourceText, Span, SyntaxNode, TreeCursor};
pub use vocabulary::Vocabulary;
