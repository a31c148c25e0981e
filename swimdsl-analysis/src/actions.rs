//! Fix-action builders for the diagnostics that offer resolutions

use std::collections::BTreeSet;

use swimdsl_core::syntax::Span;

use crate::diagnostics::{FixAction, TextEdit};
use crate::fuzzy;

/// Actions for an undefined pace name: a did-you-mean replacement when a
/// declared name is close enough, and always the option to define the name
/// at the start of the document.
pub fn undefined_pace_name_actions(
    alias_span: Span,
    undefined_name: &str,
    declared_names: &BTreeSet<String>,
) -> Vec<FixAction> {
    let mut actions = Vec::new();

    if let Some(closest_name) =
        fuzzy::suggest(undefined_name, declared_names.iter().map(String::as_str))
    {
        actions.push(FixAction::new(
            format!("Did you mean '{closest_name}'?"),
            TextEdit::replace(alias_span, closest_name),
        ));
    }

    actions.push(FixAction::new(
        "Define pace name",
        TextEdit::insert_at_start(format!("Pace {undefined_name} = _%\n")),
    ));

    actions
}

/// The single action for a duplicated pace definition: delete it.
pub fn remove_duplicated_definition(definition_span: Span) -> Vec<FixAction> {
    vec![FixAction::new(
        "Remove duplicated definition",
        TextEdit::delete(definition_span),
    )]
}

/// The did-you-mean action for an invalid enumerated value, or nothing when
/// no valid value is close enough.
pub fn replace_with_closest(span: Span, invalid_value: &str, valid_values: &[&str]) -> Vec<FixAction> {
    match fuzzy::suggest(invalid_value, valid_values.iter().copied()) {
        Some(closest_value) => vec![FixAction::new(
            format!("Did you mean {closest_value}"),
            TextEdit::replace(span, closest_value),
        )],
        None => Vec::new(),
    }
}
