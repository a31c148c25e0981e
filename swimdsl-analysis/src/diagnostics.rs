//! The diagnostics data model and per-rule constructors
//!
//! Diagnostics are pure data: a span, a severity, a message and zero or more
//! [`FixAction`]s, each a named [`TextEdit`]. No editor types appear here;
//! a host applies an edit by replacing the edit's span with its replacement
//! text.
//!
//! The constructor functions own the exact user-facing wording of every
//! rule. Messages interpolate the verbatim source text the user wrote.

use std::collections::BTreeSet;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use swimdsl_core::syntax::{NodeKind, Span};

use crate::actions;

/// How severe a diagnostic is. The analyzer currently only emits errors;
/// warnings exist for hosts that downgrade rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
            Severity::Warning => f.write_str("warning"),
        }
    }
}

/// A single replacement of a span with new text. Deletions use an empty
/// replacement; insertions use an empty span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEdit {
    pub span: Span,
    pub replacement: String,
}

impl TextEdit {
    pub fn replace(span: Span, replacement: impl Into<String>) -> Self {
        Self {
            span,
            replacement: replacement.into(),
        }
    }

    pub fn delete(span: Span) -> Self {
        Self::replace(span, "")
    }

    pub fn insert_at_start(text: impl Into<String>) -> Self {
        Self::replace(Span::empty_at(0), text)
    }
}

/// A resolution the user can choose to take, shown under its `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixAction {
    pub name: String,
    pub edit: TextEdit,
}

impl FixAction {
    pub fn new(name: impl Into<String>, edit: TextEdit) -> Self {
        Self {
            name: name.into(),
            edit,
        }
    }
}

/// A user-facing finding about a span of the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub span: Span,
    pub severity: Severity,
    pub message: String,
    pub actions: Vec<FixAction>,
}

impl Diagnostic {
    pub fn error(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            severity: Severity::Error,
            message: message.into(),
            actions: Vec::new(),
        }
    }

    pub fn with_actions(mut self, actions: Vec<FixAction>) -> Self {
        self.actions = actions;
        self
    }
}

/// A pace name was defined a second time. Reported at the name's span; the
/// fix deletes the whole duplicated definition.
pub fn duplicate_pace_name_definition(
    name: &str,
    name_span: Span,
    definition_span: Span,
) -> Diagnostic {
    Diagnostic::error(
        name_span,
        format!("A pace named '{name}' has already been defined"),
    )
    .with_actions(actions::remove_duplicated_definition(definition_span))
}

/// A pace alias references a name with no definition. The message spells
/// out the declaration syntax the user needs.
pub fn undefined_pace_name(
    alias_span: Span,
    name: &str,
    declared_names: &BTreeSet<String>,
) -> Diagnostic {
    Diagnostic::error(
        alias_span,
        format!(
            "'{name}' is not a defined pace name.\n\
             If you wish to be able to use '{name}' in the place of a pace percentage, \
             please define it with the following line:\n\
             Pace {name} = _%"
        ),
    )
    .with_actions(actions::undefined_pace_name_actions(
        alias_span,
        name,
        declared_names,
    ))
}

/// The parser flagged this node as erroneous.
pub fn syntax_error(span: Span) -> Diagnostic {
    Diagnostic::error(span, "Syntax error")
}

/// The same gear name appears more than once in one specification.
pub fn duplicate_gear(span: Span) -> Diagnostic {
    Diagnostic::error(
        span,
        "Duplicate gear specified. Please do not use the same gear multiple times",
    )
}

/// A gear item is disallowed for the instruction's stroke modifier.
pub fn incompatible_gear(span: Span, gear: &str, modifier: &str) -> Diagnostic {
    Diagnostic::error(
        span,
        format!("'{gear}' is not compatible with stroke modifier '{modifier}'"),
    )
}

/// A token is not in its kind's valid-value table.
pub fn invalid_value(
    span: Span,
    value: &str,
    kind: NodeKind,
    valid_values: &[&str],
) -> Diagnostic {
    Diagnostic::error(
        span,
        format!("{value} is not a valid {}.", humanize_kind(kind)),
    )
    .with_actions(actions::replace_with_closest(span, value, valid_values))
}

/// A duration numeral exceeds the maximum component value.
pub fn invalid_duration(number_span: Span) -> Diagnostic {
    Diagnostic::error(number_span, "Number too large for duration")
}

/// A node-kind name in sentence case, for interpolation into messages
/// ("StrokeModifier" reads as "stroke modifier").
fn humanize_kind(kind: NodeKind) -> String {
    static WORD_BOUNDARY: Lazy<Regex> =
        Lazy::new(|| Regex::new("([a-z])([A-Z])").expect("word boundary pattern"));
    WORD_BOUNDARY
        .replace_all(kind.name(), "$1 $2")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(NodeKind::Stroke, "stroke")]
    #[case(NodeKind::StrokeModifier, "stroke modifier")]
    #[case(NodeKind::GearName, "gear name")]
    #[case(NodeKind::ConstantName, "constant name")]
    #[case(NodeKind::Boolean, "boolean")]
    fn kind_names_humanize_to_sentence_case(#[case] kind: NodeKind, #[case] expected: &str) {
        assert_eq!(humanize_kind(kind), expected);
    }

    #[test]
    fn undefined_pace_message_spells_out_the_declaration_syntax() {
        let diagnostic = undefined_pace_name(Span::new(10, 11), "Z", &BTreeSet::new());
        assert_eq!(
            diagnostic.message,
            "'Z' is not a defined pace name.\n\
             If you wish to be able to use 'Z' in the place of a pace percentage, \
             please define it with the following line:\n\
             Pace Z = _%"
        );
        assert_eq!(diagnostic.severity, Severity::Error);
    }

    #[test]
    fn invalid_value_message_ends_with_a_period() {
        let diagnostic = invalid_value(Span::new(0, 8), "Airplane", NodeKind::Stroke, &["Free"]);
        assert_eq!(diagnostic.message, "Airplane is not a valid stroke.");
    }

    #[test]
    fn diagnostics_serialize_as_plain_data() {
        let diagnostic = syntax_error(Span::new(3, 7));
        let json = serde_json::to_value(&diagnostic).unwrap();
        assert_eq!(json["severity"], "error");
        assert_eq!(json["message"], "Syntax error");
        assert_eq!(json["span"]["start"], 3);
        assert_eq!(json["span"]["end"], 7);
    }
}
