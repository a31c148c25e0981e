//! Semantic analysis for SwimDSL
//!
//! A single-pass analyzer over the concrete syntax tree producing
//! user-facing diagnostics with suggested fixes, plus the editor-independent
//! building blocks around it: the diagnostics data model, fuzzy "did you
//! mean" matching, fix-action builders, declared-name collection and
//! completion candidates.
//!
//! Analysis is independent of lowering: it walks the tree itself and never
//! assumes syntactic well-formedness. An empty diagnostics list is the
//! signal that the document is ready for code generation.

pub mod actions;
pub mod completion;
pub mod diagnostics;
pub mod fuzzy;
pub mod lint;

pub use completion::{completion_candidates, CandidateKind, CompletionCandidate};
pub use diagnostics::{Diagnostic, FixAction, Severity, TextEdit};
pub use lint::{analyze, analyze_tree, analyze_with_vocabulary, declared_pace_names};
