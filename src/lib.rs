//! swimdsl — a compiler from SwimDSL to swiML
//!
//! SwimDSL is a small language for describing swim-training programmes:
//! repeated swim legs, rest intervals, pace targets, required gear and
//! free-text messages. This crate compiles it to swiML, an XML interchange
//! format for swim programmes, and produces interactive diagnostics with
//! suggested fixes along the way.
//!
//! The pipeline is split across three member crates re-exported here:
//!
//! - [`swimdsl_core`]: the syntax contracts (node kinds, spans, the
//!   `TreeCursor` trait the external parser implements), the language
//!   vocabulary, the AST and CST → AST lowering;
//! - [`swimdsl_analysis`]: the single-pass semantic analyzer, its
//!   diagnostics model and completion candidates;
//! - [`swimdsl_swiml`]: the deterministic Programme → XML serializer.
//!
//! The [`compile`] entry point ties them together: analyze first, and only
//! generate XML when no diagnostics were reported.

pub mod compile;

pub use compile::{compile, compile_with_vocabulary, Compilation};

pub use swimdsl_analysis::{
    analyze, completion_candidates, CandidateKind, CompletionCandidate, Diagnostic, FixAction,
    Severity, TextEdit,
};
pub use swimdsl_core::{lower_programme, NodeKind, Programme, SourceText, Span, TreeCursor, Vocabulary};
pub use swimdsl_swiml::{serialize_programme, SerializeError};
