//! The single-pass semantic analyzer
//!
//! One pre-order walk over the materialized tree, with one piece of running
//! state: the set of pace names declared so far. Every rule appends to the
//! shared diagnostics list in traversal order; rules never deduplicate
//! across each other, never stop the walk early, and never fail on
//! malformed input. An empty result is the gate for code generation.

use std::collections::BTreeSet;

use swimdsl_core::syntax::{NodeKind, SourceText, Span, SyntaxNode, TreeCursor};
use swimdsl_core::vocabulary::{Vocabulary, DEFAULT_MODIFIER_KEY};

use crate::diagnostics::{self, Diagnostic};

/// The largest value either duration numeral may carry; "59:59" is the
/// longest expressible duration.
const MAXIMUM_DURATION_COMPONENT: u32 = 59;

/// Analyze the tree under the cursor against the standard vocabulary.
///
/// Postcondition: the cursor points to the same node it pointed to when
/// passed in.
pub fn analyze<C: TreeCursor>(cursor: &mut C, source: &SourceText) -> Vec<Diagnostic> {
    analyze_with_vocabulary(cursor, source, Vocabulary::standard())
}

/// Analyze against an injected vocabulary.
pub fn analyze_with_vocabulary<C: TreeCursor>(
    cursor: &mut C,
    source: &SourceText,
    vocabulary: &Vocabulary,
) -> Vec<Diagnostic> {
    let root = SyntaxNode::from_cursor(cursor);
    analyze_tree(&root, source, vocabulary)
}

/// Analyze an already-materialized tree.
pub fn analyze_tree(
    root: &SyntaxNode,
    source: &SourceText,
    vocabulary: &Vocabulary,
) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut declared_names: BTreeSet<String> = BTreeSet::new();

    for node in root.descendants() {
        check_undefined_pace_name(node, source, &declared_names, &mut diagnostics);
        check_duplicate_pace_definition(node, source, &mut declared_names, &mut diagnostics);
        check_syntax_error(node, &mut diagnostics);
        check_gear(node, source, vocabulary, &mut diagnostics);
        check_enumerated_value(node, source, vocabulary, &mut diagnostics);
        check_duration(node, source, &mut diagnostics);
    }

    diagnostics
}

/// Every pace name declared anywhere in the document, order-independent.
///
/// The analyzer's own running set deliberately sees only names declared
/// before the point of use; consumers that need full-document resolution
/// (completion, hosts resolving aliases) use this instead.
pub fn declared_pace_names(root: &SyntaxNode, source: &SourceText) -> BTreeSet<String> {
    root.descendants()
        .filter(|node| node.kind == NodeKind::PaceDefinition)
        .filter_map(|node| node.child_of_kind(NodeKind::PaceDefinitionName))
        .map(|name| source.slice(name.span).to_string())
        .collect()
}

fn check_undefined_pace_name(
    node: &SyntaxNode,
    source: &SourceText,
    declared_names: &BTreeSet<String>,
    diagnostics: &mut Vec<Diagnostic>,
) {
    if node.kind != NodeKind::PaceAlias {
        return;
    }
    let name = source.slice(node.span);
    if !declared_names.contains(name) {
        diagnostics.push(diagnostics::undefined_pace_name(
            node.span,
            name,
            declared_names,
        ));
    }
}

fn check_duplicate_pace_definition(
    node: &SyntaxNode,
    source: &SourceText,
    declared_names: &mut BTreeSet<String>,
    diagnostics: &mut Vec<Diagnostic>,
) {
    if node.kind != NodeKind::PaceDefinition {
        return;
    }
    let Some(name_node) = node.child_of_kind(NodeKind::PaceDefinitionName) else {
        return;
    };
    let name = source.slice(name_node.span);
    if !declared_names.insert(name.to_string()) {
        diagnostics.push(diagnostics::duplicate_pace_name_definition(
            name,
            name_node.span,
            node.span,
        ));
    }
}

fn check_syntax_error(node: &SyntaxNode, diagnostics: &mut Vec<Diagnostic>) {
    if node.kind.is_error() {
        diagnostics.push(diagnostics::syntax_error(node.span));
    }
}

/// The gear rules of a swim instruction: duplicates first, then each
/// distinct gear item against the stroke modifier's disallowed set.
fn check_gear(
    node: &SyntaxNode,
    source: &SourceText,
    vocabulary: &Vocabulary,
    diagnostics: &mut Vec<Diagnostic>,
) {
    if node.kind != NodeKind::SwimInstruction {
        return;
    }

    let modifier_node = node.child_of_kind(NodeKind::StrokeModifier);
    let modifier = modifier_node
        .map(|found| source.slice(found.span))
        .unwrap_or(DEFAULT_MODIFIER_KEY);

    for specification in node.children_of_kind(NodeKind::GearSpecification) {
        // The reported span reaches back to the modifier when one is named.
        let start = modifier_node
            .map(|found| found.span.start)
            .unwrap_or(specification.span.start);
        let span = Span::new(start, specification.span.end);

        let gear_names: Vec<&str> = specification
            .children
            .iter()
            .map(|child| source.slice(child.span))
            .collect();
        let mut distinct: Vec<&str> = Vec::new();
        for &name in &gear_names {
            if !distinct.contains(&name) {
                distinct.push(name);
            }
        }

        if distinct.len() != gear_names.len() {
            diagnostics.push(diagnostics::duplicate_gear(span));
        }

        let Some(disallowed) = vocabulary.disallowed_gear(modifier) else {
            continue;
        };
        for name in distinct {
            if disallowed.contains(name) {
                diagnostics.push(diagnostics::incompatible_gear(span, name, modifier));
            }
        }
    }
}

fn check_enumerated_value(
    node: &SyntaxNode,
    source: &SourceText,
    vocabulary: &Vocabulary,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let Some(valid_values) = vocabulary.valid_values(node.kind) else {
        return;
    };
    let value = source.slice(node.span);
    if !valid_values.contains(&value) {
        diagnostics.push(diagnostics::invalid_value(
            node.span,
            value,
            node.kind,
            valid_values,
        ));
    }
}

fn check_duration(node: &SyntaxNode, source: &SourceText, diagnostics: &mut Vec<Diagnostic>) {
    if node.kind != NodeKind::Duration {
        return;
    }
    for number in node.children_of_kind(NodeKind::Number) {
        let too_large = source
            .slice(number.span)
            .parse::<u32>()
            .map_or(false, |value| value > MAXIMUM_DURATION_COMPONENT);
        if too_large {
            diagnostics.push(diagnostics::invalid_duration(number.span));
        }
    }
}
