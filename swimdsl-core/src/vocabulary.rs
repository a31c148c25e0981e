//! The fixed vocabulary of the SwimDSL language
//!
//! Valid-value tables for every enumerated token kind, the canonical stroke
//! table collapsing alias spellings, and the stroke-modifier/gear
//! compatibility matrix. The tables are process-wide immutable data built
//! once; the analyzer receives them by reference so alternative vocabularies
//! can be substituted in tests.

use crate::syntax::NodeKind;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Every string accepted where a stroke name is expected, including all
/// abbreviation aliases.
pub const STROKE_NAMES: &[&str] = &[
    "Freestyle",
    "Free",
    "Fr",
    "Backstroke",
    "Back",
    "Bk",
    "Breaststroke",
    "Breast",
    "Br",
    "Butterfly",
    "Fly",
    "Fl",
    "Choice",
    "IndividualMedley",
    "Medley",
    "Im",
    "ReverseIndividualMedley",
    "ReverseMedley",
    "ReverseIm",
    "IndividualMedleyOverlap",
    "MedleyOverlap",
    "ImOverlap",
    "IndividualMedleyOrder",
    "MedleyOrder",
    "ImOrder",
    "ReverseIndividualMedleyOrder",
    "ReverseMedleyOrder",
    "ReverseImOrder",
    "NumberOne",
    "NumberTwo",
    "NumberThree",
    "NumberFour",
    "NotFreestyle",
    "NotFree",
    "NotFr",
    "NotBackstroke",
    "NotBack",
    "NotBk",
    "NotBreastroke",
    "NotBreast",
    "NotBr",
    "NotButterfly",
    "NotFly",
    "NotFl",
];

/// Every string accepted where a stroke modifier is expected.
pub const STROKE_MODIFIERS: &[&str] = &["Pull", "Kick", "Drill"];

/// Every string accepted where a gear name is expected.
pub const GEAR_NAMES: &[&str] = &[
    "Board",
    "Pads",
    "PullBuoy",
    "Fins",
    "Snorkel",
    "Chute",
    "StretchCord",
];

/// Every string accepted where a constant name is expected.
pub const CONSTANT_NAMES: &[&str] = &[
    "Title",
    "Author",
    "Description",
    "Date",
    "PoolLength",
    "LengthUnit",
    "Align",
    "NumeralSystem",
    "HideIntro",
    "LayoutWidth",
];

/// Every string accepted where a boolean literal is expected.
pub const BOOLEAN_LITERALS: &[&str] = &["True", "False"];

/// The compatibility-matrix key used when an instruction names no stroke
/// modifier.
pub const DEFAULT_MODIFIER_KEY: &str = "Default";

/// Collapse a stroke token to its canonical swiML identifier.
///
/// Every accepted alias spelling maps to exactly one identifier; anything
/// unrecognized (including the explicit `Choice` token) maps to the
/// catch-all `any`. This never fails: invalid stroke names are the semantic
/// analyzer's business, not the lowerer's.
pub fn canonical_stroke(stroke: &str) -> &'static str {
    match stroke {
        "Freestyle" | "Free" | "Fr" => "freestyle",
        "Backstroke" | "Back" | "Bk" => "backstroke",
        "Breaststroke" | "Breast" | "Br" => "breaststroke",
        "Butterfly" | "Fly" | "Fl" => "butterfly",
        "IndividualMedley" | "Medley" | "Im" => "individualMedley",
        "ReverseIndividualMedley" | "ReverseMedley" | "ReverseIm" => "reverseIndividualMedley",
        "IndividualMedleyOverlap" | "MedleyOverlap" | "ImOverlap" => "individualMedleyOverlap",
        "IndividualMedleyOrder" | "MedleyOrder" | "ImOrder" => "individualMedleyOrder",
        "ReverseIndividualMedleyOrder" | "ReverseMedleyOrder" | "ReverseImOrder" => {
            "reverseIndividualMedleyOrder"
        }
        "NumberOne" => "nr1",
        "NumberTwo" => "nr2",
        "NumberThree" => "nr3",
        "NumberFour" => "nr4",
        "NotFreestyle" | "NotFree" | "NotFr" => "notFreestyle",
        "NotBackstroke" | "NotBack" | "NotBk" => "notBackstroke",
        "NotBreastroke" | "NotBreast" | "NotBr" => "notBreastroke",
        "NotButterfly" | "NotFly" | "NotFl" => "notButterfly",
        _ => "any",
    }
}

/// The language's valid-value tables and compatibility rules.
pub struct Vocabulary {
    pub stroke_names: &'static [&'static str],
    pub stroke_modifiers: &'static [&'static str],
    pub gear_names: &'static [&'static str],
    pub constant_names: &'static [&'static str],
    pub boolean_literals: &'static [&'static str],
    /// Stroke modifier → gear that must not be combined with it.
    pub incompatible_gear: HashMap<&'static str, HashSet<&'static str>>,
}

impl Vocabulary {
    /// The standard SwimDSL vocabulary, built once per process.
    pub fn standard() -> &'static Vocabulary {
        static STANDARD: Lazy<Vocabulary> = Lazy::new(|| Vocabulary {
            stroke_names: STROKE_NAMES,
            stroke_modifiers: STROKE_MODIFIERS,
            gear_names: GEAR_NAMES,
            constant_names: CONSTANT_NAMES,
            boolean_literals: BOOLEAN_LITERALS,
            incompatible_gear: HashMap::from([
                (DEFAULT_MODIFIER_KEY, HashSet::from(["Board", "PullBuoy"])),
                ("Kick", HashSet::from(["PullBuoy", "Pads"])),
                ("Pull", HashSet::from(["Board", "Fins"])),
            ]),
        });
        &STANDARD
    }

    /// The valid-value table for an enumerated node kind, or `None` for
    /// kinds that carry free-form text.
    pub fn valid_values(&self, kind: NodeKind) -> Option<&'static [&'static str]> {
        match kind {
            NodeKind::Stroke => Some(self.stroke_names),
            NodeKind::StrokeModifier => Some(self.stroke_modifiers),
            NodeKind::GearName => Some(self.gear_names),
            NodeKind::ConstantName => Some(self.constant_names),
            NodeKind::Boolean => Some(self.boolean_literals),
            _ => None,
        }
    }

    /// The gear disallowed for a stroke modifier, if the modifier has any
    /// restrictions.
    pub fn disallowed_gear(&self, modifier: &str) -> Option<&HashSet<&'static str>> {
        self.incompatible_gear.get(modifier)
    }
}
