//! The end-to-end compilation pipeline
//!
//! Materializes the tree once, runs the semantic analyzer over it, and
//! lowers and serializes only when the analyzer reported nothing. Lowering
//! is undefined on malformed trees, so the empty diagnostics list is the
//! gate, not an optimization.

use swimdsl_analysis::{analyze_tree, Diagnostic};
use swimdsl_core::lowering::lower_tree;
use swimdsl_core::syntax::{SourceText, SyntaxNode, TreeCursor};
use swimdsl_core::vocabulary::Vocabulary;
use swimdsl_swiml::{serialize_programme, SerializeError};

/// The outcome of one compilation run.
#[derive(Debug)]
pub struct Compilation {
    /// Everything the analyzer found, in traversal order.
    pub diagnostics: Vec<Diagnostic>,
    /// The rendered swiML document; `None` whenever diagnostics exist.
    pub xml: Option<String>,
}

impl Compilation {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Compile the programme under the cursor with the standard vocabulary.
///
/// Postcondition: the cursor points to the same node it pointed to when
/// passed in.
pub fn compile<C: TreeCursor>(
    cursor: &mut C,
    source: &SourceText,
) -> Result<Compilation, SerializeError> {
    compile_with_vocabulary(cursor, source, Vocabulary::standard())
}

/// Compile against an injected vocabulary.
pub fn compile_with_vocabulary<C: TreeCursor>(
    cursor: &mut C,
    source: &SourceText,
    vocabulary: &Vocabulary,
) -> Result<Compilation, SerializeError> {
    let root = SyntaxNode::from_cursor(cursor);
    let diagnostics = analyze_tree(&root, source, vocabulary);
    let xml = if diagnostics.is_empty() {
        Some(serialize_programme(&lower_tree(&root, source))?)
    } else {
        None
    };
    Ok(Compilation { diagnostics, xml })
}
