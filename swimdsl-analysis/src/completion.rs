//! Editor-independent completion candidates
//!
//! Given a byte offset, the deepest node containing the offset selects which
//! candidate list applies: the vocabulary tables for enumerated tokens, the
//! declared pace names for alias positions. Rendering a popup is the host's
//! business.

use swimdsl_core::syntax::{NodeKind, SourceText, SyntaxNode};
use swimdsl_core::vocabulary::Vocabulary;

use crate::lint::declared_pace_names;

/// What a candidate completes to, for hosts that style them differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateKind {
    /// A fixed vocabulary word (stroke, modifier, gear, constant, boolean).
    Vocabulary,
    /// A pace name declared in the current document.
    PaceName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionCandidate {
    pub label: String,
    pub kind: CandidateKind,
}

impl CompletionCandidate {
    fn vocabulary(label: &str) -> Self {
        Self {
            label: label.to_string(),
            kind: CandidateKind::Vocabulary,
        }
    }

    fn pace_name(label: String) -> Self {
        Self {
            label,
            kind: CandidateKind::PaceName,
        }
    }
}

/// Completion candidates for the position just typed at `offset`.
///
/// Resolves the node ending at the offset (the character before it), so
/// completions keep flowing while an identifier is mid-word.
pub fn completion_candidates(
    root: &SyntaxNode,
    source: &SourceText,
    offset: usize,
    vocabulary: &Vocabulary,
) -> Vec<CompletionCandidate> {
    let Some(node) = root.node_at_offset(offset.saturating_sub(1)) else {
        return Vec::new();
    };

    match node.kind {
        NodeKind::Stroke
        | NodeKind::StrokeModifier
        | NodeKind::GearName
        | NodeKind::ConstantName
        | NodeKind::Boolean => vocabulary
            .valid_values(node.kind)
            .unwrap_or_default()
            .iter()
            .copied()
            .map(CompletionCandidate::vocabulary)
            .collect(),
        // Just typed the '@' of a gear specification.
        NodeKind::GearSpecification => vocabulary
            .gear_names
            .iter()
            .copied()
            .map(CompletionCandidate::vocabulary)
            .collect(),
        NodeKind::Pace | NodeKind::PaceAlias => declared_pace_names(root, source)
            .into_iter()
            .map(CompletionCandidate::pace_name)
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swimdsl_core::testing::build_tree;
    use swimdsl_core::vocabulary::{GEAR_NAMES, STROKE_NAMES};

    fn fixture() -> (&'static str, SyntaxNode) {
        let source_text = "Pace A = 80%\n2x100 Free @A @Fins\n";
        let tree = build_tree(source_text, |b| {
            b.node_spanning(NodeKind::PaceDefinition, "Pace A = 80%", |b| {
                b.token(NodeKind::PaceDefinitionName, "A");
                b.node(NodeKind::Pace, |b| {
                    b.token(NodeKind::Number, "80");
                });
            });
            b.node(NodeKind::SwimInstruction, |b| {
                b.token(NodeKind::Number, "2");
                b.node(NodeKind::SingleInstruction, |b| {
                    b.token(NodeKind::Number, "100");
                    b.token(NodeKind::Stroke, "Free");
                });
                b.node(NodeKind::Pace, |b| {
                    b.token(NodeKind::PaceAlias, "A");
                });
                b.node(NodeKind::GearSpecification, |b| {
                    b.token(NodeKind::GearName, "Fins");
                });
            });
        });
        (source_text, tree.to_syntax())
    }

    #[test]
    fn stroke_position_offers_the_stroke_table() {
        let (source_text, root) = fixture();
        let source = SourceText::new(source_text);
        // Inside "Free".
        let offset = source_text.find("Free").unwrap() + 2;
        let candidates = completion_candidates(&root, &source, offset, Vocabulary::standard());
        assert_eq!(candidates.len(), STROKE_NAMES.len());
        assert!(candidates
            .iter()
            .all(|candidate| candidate.kind == CandidateKind::Vocabulary));
    }

    #[test]
    fn gear_position_offers_the_gear_table() {
        let (source_text, root) = fixture();
        let source = SourceText::new(source_text);
        let offset = source_text.find("Fins").unwrap() + 1;
        let candidates = completion_candidates(&root, &source, offset, Vocabulary::standard());
        assert_eq!(candidates.len(), GEAR_NAMES.len());
        assert!(candidates
            .iter()
            .any(|candidate| candidate.label == "Snorkel"));
    }

    #[test]
    fn alias_position_offers_declared_pace_names() {
        let (source_text, root) = fixture();
        let source = SourceText::new(source_text);
        // Just after the alias "A" in "@A".
        let offset = source_text.find("@A").unwrap() + 2;
        let candidates = completion_candidates(&root, &source, offset, Vocabulary::standard());
        assert_eq!(
            candidates,
            vec![CompletionCandidate {
                label: "A".to_string(),
                kind: CandidateKind::PaceName,
            }]
        );
    }

    #[test]
    fn offsets_outside_any_interesting_node_offer_nothing() {
        let (source_text, root) = fixture();
        let source = SourceText::new(source_text);
        // Inside the repetition numeral.
        let offset = source_text.find("2x").unwrap() + 1;
        let candidates = completion_candidates(&root, &source, offset, Vocabulary::standard());
        assert!(candidates.is_empty());
    }
}
