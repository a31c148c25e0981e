//! The closed set of node kinds the SwimDSL grammar produces
//!
//! Dispatch on node kinds is done with exhaustive matches over this enum, so
//! the compiler fails to build if a kind is added without every consumer
//! handling it.

use std::fmt;

/// A node type in the SwimDSL concrete syntax tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// The programme root.
    Program,
    /// A swim statement: optional repetition count, body, modifiers.
    SwimInstruction,
    /// A distance-and-stroke swim leg.
    SingleInstruction,
    /// A braced group of instructions repeated as a unit.
    BlockInstruction,
    /// A rest period between swim legs.
    RestInstruction,
    /// A free-text message shown to the swimmer.
    Message,
    /// `Pace <name> = <pace>`.
    PaceDefinition,
    /// The name token of a pace definition.
    PaceDefinitionName,
    /// An intensity target: fixed value, ramp, or alias.
    Pace,
    /// A reference to a defined pace name.
    PaceAlias,
    /// `Set <name> = <value>` programme metadata.
    ConstantDefinition,
    /// The name token of a constant definition.
    ConstantName,
    /// A `minutes:seconds` pair.
    Duration,
    /// A numeral token.
    Number,
    /// A quoted string token.
    StringLiteral,
    /// A `True`/`False` token.
    Boolean,
    /// A stroke name token.
    Stroke,
    /// A stroke modifier token (`Pull`, `Kick`, `Drill`).
    StrokeModifier,
    /// A comma-separated list of required gear.
    GearSpecification,
    /// A single gear name within a gear specification.
    GearName,
    /// A node the parser flagged as a syntax error.
    Error,
}

impl NodeKind {
    /// The grammar's name for this node kind.
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Program => "Program",
            NodeKind::SwimInstruction => "SwimInstruction",
            NodeKind::SingleInstruction => "SingleInstruction",
            NodeKind::BlockInstruction => "BlockInstruction",
            NodeKind::RestInstruction => "RestInstruction",
            NodeKind::Message => "Message",
            NodeKind::PaceDefinition => "PaceDefinition",
            NodeKind::PaceDefinitionName => "PaceDefinitionName",
            NodeKind::Pace => "Pace",
            NodeKind::PaceAlias => "PaceAlias",
            NodeKind::ConstantDefinition => "ConstantDefinition",
            NodeKind::ConstantName => "ConstantName",
            NodeKind::Duration => "Duration",
            NodeKind::Number => "Number",
            NodeKind::StringLiteral => "String",
            NodeKind::Boolean => "Boolean",
            NodeKind::Stroke => "Stroke",
            NodeKind::StrokeModifier => "StrokeModifier",
            NodeKind::GearSpecification => "GearSpecification",
            NodeKind::GearName => "GearName",
            NodeKind::Error => "Error",
        }
    }

    /// Look up a kind from the grammar's node name.
    ///
    /// The parser spells its error nodes `⚠`; both that and `Error` map to
    /// [`NodeKind::Error`].
    pub fn from_name(name: &str) -> Option<NodeKind> {
        let kind = match name {
            "Program" => NodeKind::Program,
            "SwimInstruction" => NodeKind::SwimInstruction,
            "SingleInstruction" => NodeKind::SingleInstruction,
            "BlockInstruction" => NodeKind::BlockInstruction,
            "RestInstruction" => NodeKind::RestInstruction,
            "Message" => NodeKind::Message,
            "PaceDefinition" => NodeKind::PaceDefinition,
            "PaceDefinitionName" => NodeKind::PaceDefinitionName,
            "Pace" => NodeKind::Pace,
            "PaceAlias" => NodeKind::PaceAlias,
            "ConstantDefinition" => NodeKind::ConstantDefinition,
            "ConstantName" => NodeKind::ConstantName,
            "Duration" => NodeKind::Duration,
            "Number" => NodeKind::Number,
            "String" => NodeKind::StringLiteral,
            "Boolean" => NodeKind::Boolean,
            "Stroke" => NodeKind::Stroke,
            "StrokeModifier" => NodeKind::StrokeModifier,
            "GearSpecification" => NodeKind::GearSpecification,
            "GearName" => NodeKind::GearName,
            "Error" | "⚠" => NodeKind::Error,
            _ => return None,
        };
        Some(kind)
    }

    /// Whether the parser flagged this node as a syntax error.
    pub fn is_error(self) -> bool {
        self == NodeKind::Error
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
