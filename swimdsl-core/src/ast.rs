//! The abstract syntax tree of a swim programme
//!
//! Strongly-shaped, owned data built once per compile by the lowering pass
//! and never mutated afterwards. Ownership is strictly tree-shaped; the one
//! indirection is [`Intensity::Alias`], which names a [`PaceDefinition`] by
//! string rather than holding a reference to it. Numerals are stored as the
//! verbatim source text so code generation reproduces the author's literal
//! formatting.

use serde::{Deserialize, Serialize};

/// An ordered swim-training programme: the root of the AST.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Programme {
    pub statements: Vec<Statement>,
}

impl Programme {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }
}

/// A top-level statement of a programme, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Statement {
    Swim(SwimInstruction),
    Rest(RestInstruction),
    Message(Message),
    PaceDefinition(PaceDefinition),
    ConstantDefinition(ConstantDefinition),
}

/// A swim statement: a body repeated `repetitions` times, with an optional
/// stroke modifier and ordered instruction modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwimInstruction {
    /// At least 1; an absent repetition prefix lowers to 1.
    pub repetitions: u32,
    pub instruction: Instruction,
    /// `"default"` when the source names none.
    pub stroke_modifier: String,
    pub modifiers: Vec<InstructionModifier>,
}

/// The body of a swim statement: one leg, or a block of instructions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    Single(SingleInstruction),
    Block(BlockInstruction),
}

/// A single uninterrupted distance-and-stroke leg.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleInstruction {
    /// Verbatim distance numeral.
    pub distance: String,
    /// Canonical stroke identifier (see [`crate::vocabulary::canonical_stroke`]).
    pub stroke: String,
}

/// A group of instructions repeated as a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockInstruction {
    pub instructions: Vec<NestedInstruction>,
}

/// An instruction nested inside a block: swim, rest or message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NestedInstruction {
    Swim(SwimInstruction),
    Rest(RestInstruction),
    Message(Message),
}

/// A rest period. Minutes and seconds keep their literal source formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestInstruction {
    pub minutes: String,
    pub seconds: String,
}

/// A free-text message, captured verbatim from the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
}

/// `Pace <name> = <pace>`: declares a named intensity usable as an alias.
///
/// Consumed for name declaration only; never emitted into the output
/// document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaceDefinition {
    pub name: String,
    pub pace: Pace,
}

/// Programme metadata: one of the fixed constant names with a verbatim
/// value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstantDefinition {
    pub name: String,
    pub value: String,
}

/// A modifier attached to a swim instruction, kept in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstructionModifier {
    /// Required gear names, in source order.
    Gear(Vec<String>),
    Pace(Pace),
    /// Elapsed-since-start marker.
    Time { minutes: String, seconds: String },
}

/// An intensity target: a fixed value, or a ramp from `start` to `stop`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pace {
    pub start: Intensity,
    pub stop: Option<Intensity>,
}

impl Pace {
    pub fn fixed(start: Intensity) -> Self {
        Self { start, stop: None }
    }

    pub fn ramp(start: Intensity, stop: Intensity) -> Self {
        Self {
            start,
            stop: Some(stop),
        }
    }
}

/// A single intensity value: a literal percentage of effort, or the name of
/// a defined pace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intensity {
    /// Names a [`PaceDefinition`]; resolution is by name, not reference.
    Alias(String),
    /// A literal percentage, verbatim.
    Percentage(String),
}

impl Intensity {
    pub fn is_alias(&self) -> bool {
        matches!(self, Intensity::Alias(_))
    }

    pub fn value(&self) -> &str {
        match self {
            Intensity::Alias(value) | Intensity::Percentage(value) => value,
        }
    }
}
