//! Tree lowering: concrete syntax tree → Programme
//!
//! A type-directed recursive descent over the materialized syntax tree, one
//! function per grammar shape. The pass is only defined for syntactically
//! well-formed trees: syntax-error detection belongs to the semantic
//! analyzer, and the orchestrator must gate on its diagnostics before
//! trusting a lowered Programme. On a well-formed tree every lookup below
//! succeeds; the fallbacks exist so a degenerate tree still produces a value
//! instead of a panic.
//!
//! Lowering applies the language's defaulting rules:
//!
//! - an absent repetition prefix lowers to `repetitions = 1`, and a swim
//!   instruction without a leading numeral never steals the following node
//!   as its count;
//! - an absent stroke modifier lowers to `"default"`;
//! - stroke tokens collapse through [`canonical_stroke`], with unknown
//!   spellings mapping to `"any"`;
//! - block detection is structural (node kind), never value-based.

use crate::ast::{
    BlockInstruction, ConstantDefinition, Instruction, InstructionModifier, Intensity, Message,
    NestedInstruction, Pace, PaceDefinition, Programme, RestInstruction, SingleInstruction,
    Statement, SwimInstruction,
};
use crate::syntax::{NodeKind, SourceText, SyntaxNode, TreeCursor};
use crate::vocabulary::canonical_stroke;

/// Lower the programme rooted at the cursor's current node.
///
/// Postcondition: the cursor points to the same node it pointed to when
/// passed in.
pub fn lower_programme<C: TreeCursor>(cursor: &mut C, source: &SourceText) -> Programme {
    let root = SyntaxNode::from_cursor(cursor);
    lower_tree(&root, source)
}

/// Lower an already-materialized programme root.
pub fn lower_tree(root: &SyntaxNode, source: &SourceText) -> Programme {
    Programme::new(
        root.children
            .iter()
            .filter_map(|child| lower_statement(child, source))
            .collect(),
    )
}

fn lower_statement(node: &SyntaxNode, source: &SourceText) -> Option<Statement> {
    let statement = match node.kind {
        NodeKind::SwimInstruction => Statement::Swim(lower_swim_instruction(node, source)),
        NodeKind::RestInstruction => Statement::Rest(lower_rest_instruction(node, source)),
        NodeKind::Message => Statement::Message(lower_message(node, source)),
        NodeKind::PaceDefinition => Statement::PaceDefinition(lower_pace_definition(node, source)),
        NodeKind::ConstantDefinition => {
            Statement::ConstantDefinition(lower_constant_definition(node, source))
        }
        _ => return None,
    };
    Some(statement)
}

fn lower_swim_instruction(node: &SyntaxNode, source: &SourceText) -> SwimInstruction {
    let mut children = node.children.iter().peekable();

    // A leading numeral is a repetition count; anything else belongs to the
    // instruction body.
    let mut repetitions = 1;
    if let Some(first) = children.peek() {
        if first.kind == NodeKind::Number {
            repetitions = source.slice(first.span).parse().unwrap_or(1);
            children.next();
        }
    }

    let instruction = match children.next() {
        Some(body) if body.kind == NodeKind::BlockInstruction => {
            Instruction::Block(lower_block_instruction(body, source))
        }
        Some(body) => Instruction::Single(lower_single_instruction(body, source)),
        None => Instruction::Block(BlockInstruction {
            instructions: Vec::new(),
        }),
    };

    let mut stroke_modifier = String::from("default");
    let mut modifiers = Vec::new();
    for child in children {
        match child.kind {
            NodeKind::StrokeModifier => {
                stroke_modifier = source.slice(child.span).to_string();
            }
            NodeKind::GearSpecification => {
                modifiers.push(InstructionModifier::Gear(lower_gear_list(child, source)));
            }
            NodeKind::Pace => {
                modifiers.push(InstructionModifier::Pace(lower_pace(child, source)));
            }
            NodeKind::Duration => {
                let (minutes, seconds) = lower_duration(child, source);
                modifiers.push(InstructionModifier::Time { minutes, seconds });
            }
            _ => {}
        }
    }

    SwimInstruction {
        repetitions,
        instruction,
        stroke_modifier,
        modifiers,
    }
}

fn lower_single_instruction(node: &SyntaxNode, source: &SourceText) -> SingleInstruction {
    let distance = node
        .child_of_kind(NodeKind::Number)
        .map(|child| source.slice(child.span).to_string())
        .unwrap_or_default();
    let stroke = node
        .child_of_kind(NodeKind::Stroke)
        .map(|child| source.slice(child.span))
        .unwrap_or("");
    SingleInstruction {
        distance,
        stroke: canonical_stroke(stroke).to_string(),
    }
}

fn lower_block_instruction(node: &SyntaxNode, source: &SourceText) -> BlockInstruction {
    BlockInstruction {
        instructions: node
            .children
            .iter()
            .filter_map(|child| lower_nested_instruction(child, source))
            .collect(),
    }
}

fn lower_nested_instruction(node: &SyntaxNode, source: &SourceText) -> Option<NestedInstruction> {
    let nested = match node.kind {
        NodeKind::SwimInstruction => NestedInstruction::Swim(lower_swim_instruction(node, source)),
        NodeKind::RestInstruction => NestedInstruction::Rest(lower_rest_instruction(node, source)),
        NodeKind::Message => NestedInstruction::Message(lower_message(node, source)),
        _ => return None,
    };
    Some(nested)
}

fn lower_rest_instruction(node: &SyntaxNode, source: &SourceText) -> RestInstruction {
    let (minutes, seconds) = node
        .child_of_kind(NodeKind::Duration)
        .map(|duration| lower_duration(duration, source))
        .unwrap_or_default();
    RestInstruction { minutes, seconds }
}

/// The two numerals of a duration, as verbatim text.
fn lower_duration(node: &SyntaxNode, source: &SourceText) -> (String, String) {
    let mut numbers = node
        .children_of_kind(NodeKind::Number)
        .map(|child| source.slice(child.span).to_string());
    let minutes = numbers.next().unwrap_or_default();
    let seconds = numbers.next().unwrap_or_default();
    (minutes, seconds)
}

/// A message captures its full matched span verbatim.
fn lower_message(node: &SyntaxNode, source: &SourceText) -> Message {
    Message {
        text: source.slice(node.span).to_string(),
    }
}

fn lower_pace_definition(node: &SyntaxNode, source: &SourceText) -> PaceDefinition {
    let name = node
        .child_of_kind(NodeKind::PaceDefinitionName)
        .map(|child| source.slice(child.span).to_string())
        .unwrap_or_default();
    let pace = node
        .child_of_kind(NodeKind::Pace)
        .map(|child| lower_pace(child, source))
        .unwrap_or_else(|| Pace::fixed(Intensity::Percentage(String::new())));
    PaceDefinition { name, pace }
}

/// Normalize the three pace shapes (bare numeral, two-numeral ramp, alias)
/// into the Intensity model.
fn lower_pace(node: &SyntaxNode, source: &SourceText) -> Pace {
    let mut intensities = node
        .children
        .iter()
        .map(|child| lower_intensity(child, source));
    let start = intensities
        .next()
        .unwrap_or_else(|| Intensity::Percentage(String::new()));
    let stop = intensities.next();
    Pace { start, stop }
}

fn lower_intensity(node: &SyntaxNode, source: &SourceText) -> Intensity {
    let value = source.slice(node.span).to_string();
    if node.kind == NodeKind::PaceAlias {
        Intensity::Alias(value)
    } else {
        Intensity::Percentage(value)
    }
}

/// Every child of a gear specification is a gear name; a one-child
/// specification yields a one-element list.
fn lower_gear_list(node: &SyntaxNode, source: &SourceText) -> Vec<String> {
    node.children
        .iter()
        .map(|child| source.slice(child.span).to_string())
        .collect()
}

fn lower_constant_definition(node: &SyntaxNode, source: &SourceText) -> ConstantDefinition {
    let name = node
        .child_of_kind(NodeKind::ConstantName)
        .map(|child| source.slice(child.span).to_string())
        .unwrap_or_default();
    let value = node
        .children
        .iter()
        .find(|child| child.kind != NodeKind::ConstantName)
        .map(|child| source.slice(child.span).to_string())
        .unwrap_or_default();
    ConstantDefinition { name, value }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::build_tree;

    #[test]
    fn swim_instruction_with_repetitions_and_pace_alias() {
        let source_text = "Pace A = 80%\n2x100 Free @A\n";
        let tree = build_tree(source_text, |b| {
            b.node(NodeKind::PaceDefinition, |b| {
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
            });
        });
        let source = SourceText::new(source_text);

        let mut cursor = tree.cursor();
        let programme = lower_programme(&mut cursor, &source);

        assert_eq!(programme.statements.len(), 2);
        assert_eq!(
            programme.statements[0],
            Statement::PaceDefinition(PaceDefinition {
                name: "A".to_string(),
                pace: Pace::fixed(Intensity::Percentage("80".to_string())),
            })
        );
        assert_eq!(
            programme.statements[1],
            Statement::Swim(SwimInstruction {
                repetitions: 2,
                instruction: Instruction::Single(SingleInstruction {
                    distance: "100".to_string(),
                    stroke: "freestyle".to_string(),
                }),
                stroke_modifier: "default".to_string(),
                modifiers: vec![InstructionModifier::Pace(Pace::fixed(Intensity::Alias(
                    "A".to_string()
                )))],
            })
        );
    }

    #[test]
    fn missing_repetition_prefix_defaults_to_one_without_consuming_the_body() {
        let source_text = "400 Choice\n";
        let tree = build_tree(source_text, |b| {
            b.node(NodeKind::SwimInstruction, |b| {
                b.node(NodeKind::SingleInstruction, |b| {
                    b.token(NodeKind::Number, "400");
                    b.token(NodeKind::Stroke, "Choice");
                });
            });
        });
        let source = SourceText::new(source_text);

        let mut cursor = tree.cursor();
        let programme = lower_programme(&mut cursor, &source);

        let Statement::Swim(swim) = &programme.statements[0] else {
            panic!("expected a swim statement");
        };
        assert_eq!(swim.repetitions, 1);
        assert_eq!(
            swim.instruction,
            Instruction::Single(SingleInstruction {
                distance: "400".to_string(),
                stroke: "any".to_string(),
            })
        );
    }

    #[test]
    fn block_instruction_recurses_into_nested_instructions() {
        let source_text = "4x{100 Free 0:30 'sprint!'}\n";
        let tree = build_tree(source_text, |b| {
            b.node(NodeKind::SwimInstruction, |b| {
                b.token(NodeKind::Number, "4");
                b.node(NodeKind::BlockInstruction, |b| {
                    b.node(NodeKind::SwimInstruction, |b| {
                        b.node(NodeKind::SingleInstruction, |b| {
                            b.token(NodeKind::Number, "100");
                            b.token(NodeKind::Stroke, "Free");
                        });
                    });
                    b.node(NodeKind::RestInstruction, |b| {
                        b.node(NodeKind::Duration, |b| {
                            b.token(NodeKind::Number, "0");
                            b.token(NodeKind::Number, "30");
                        });
                    });
                    b.token(NodeKind::Message, "'sprint!'");
                });
            });
        });
        let source = SourceText::new(source_text);

        let mut cursor = tree.cursor();
        let programme = lower_programme(&mut cursor, &source);

        let Statement::Swim(swim) = &programme.statements[0] else {
            panic!("expected a swim statement");
        };
        assert_eq!(swim.repetitions, 4);
        let Instruction::Block(block) = &swim.instruction else {
            panic!("expected a block body");
        };
        assert_eq!(block.instructions.len(), 3);
        assert!(matches!(
            &block.instructions[0],
            NestedInstruction::Swim(nested) if nested.repetitions == 1
        ));
        assert_eq!(
            block.instructions[1],
            NestedInstruction::Rest(RestInstruction {
                minutes: "0".to_string(),
                seconds: "30".to_string(),
            })
        );
        assert_eq!(
            block.instructions[2],
            NestedInstruction::Message(Message {
                text: "'sprint!'".to_string(),
            })
        );
    }

    #[test]
    fn stroke_modifier_and_ordered_instruction_modifiers() {
        let source_text = "8x50 Breast Kick @Fins,Snorkel @60-90% T3:00\n";
        let tree = build_tree(source_text, |b| {
            b.node(NodeKind::SwimInstruction, |b| {
                b.token(NodeKind::Number, "8");
                b.node(NodeKind::SingleInstruction, |b| {
                    b.token(NodeKind::Number, "50");
                    b.token(NodeKind::Stroke, "Breast");
                });
                b.token(NodeKind::StrokeModifier, "Kick");
                b.node(NodeKind::GearSpecification, |b| {
                    b.token(NodeKind::GearName, "Fins");
                    b.token(NodeKind::GearName, "Snorkel");
                });
                b.node(NodeKind::Pace, |b| {
                    b.token(NodeKind::Number, "60");
                    b.token(NodeKind::Number, "90");
                });
                b.node(NodeKind::Duration, |b| {
                    b.token(NodeKind::Number, "3");
                    b.token(NodeKind::Number, "00");
                });
            });
        });
        let source = SourceText::new(source_text);

        let mut cursor = tree.cursor();
        let programme = lower_programme(&mut cursor, &source);

        let Statement::Swim(swim) = &programme.statements[0] else {
            panic!("expected a swim statement");
        };
        assert_eq!(swim.stroke_modifier, "Kick");
        assert_eq!(
            swim.modifiers,
            vec![
                InstructionModifier::Gear(vec!["Fins".to_string(), "Snorkel".to_string()]),
                InstructionModifier::Pace(Pace::ramp(
                    Intensity::Percentage("60".to_string()),
                    Intensity::Percentage("90".to_string()),
                )),
                InstructionModifier::Time {
                    minutes: "3".to_string(),
                    seconds: "00".to_string(),
                },
            ]
        );
    }

    #[test]
    fn one_gear_specification_child_yields_a_one_element_list() {
        let source_text = "100 Free @Board\n";
        let tree = build_tree(source_text, |b| {
            b.node(NodeKind::SwimInstruction, |b| {
                b.node(NodeKind::SingleInstruction, |b| {
                    b.token(NodeKind::Number, "100");
                    b.token(NodeKind::Stroke, "Free");
                });
                b.node(NodeKind::GearSpecification, |b| {
                    b.token(NodeKind::GearName, "Board");
                });
            });
        });
        let source = SourceText::new(source_text);

        let mut cursor = tree.cursor();
        let programme = lower_programme(&mut cursor, &source);

        let Statement::Swim(swim) = &programme.statements[0] else {
            panic!("expected a swim statement");
        };
        assert_eq!(
            swim.modifiers,
            vec![InstructionModifier::Gear(vec!["Board".to_string()])]
        );
    }

    #[test]
    fn constant_definition_keeps_name_and_verbatim_value() {
        let source_text = "Set Title = \"Tuesday endurance\"\nSet HideIntro = True\n";
        let tree = build_tree(source_text, |b| {
            b.node(NodeKind::ConstantDefinition, |b| {
                b.token(NodeKind::ConstantName, "Title");
                b.token(NodeKind::StringLiteral, "\"Tuesday endurance\"");
            });
            b.node(NodeKind::ConstantDefinition, |b| {
                b.token(NodeKind::ConstantName, "HideIntro");
                b.token(NodeKind::Boolean, "True");
            });
        });
        let source = SourceText::new(source_text);

        let mut cursor = tree.cursor();
        let programme = lower_programme(&mut cursor, &source);

        assert_eq!(
            programme.statements[0],
            Statement::ConstantDefinition(ConstantDefinition {
                name: "Title".to_string(),
                value: "\"Tuesday endurance\"".to_string(),
            })
        );
        assert_eq!(
            programme.statements[1],
            Statement::ConstantDefinition(ConstantDefinition {
                name: "HideIntro".to_string(),
                value: "True".to_string(),
            })
        );
    }

    #[test]
    fn pace_definition_with_alias_value() {
        let source_text = "Pace B = A\n";
        let tree = build_tree(source_text, |b| {
            b.node(NodeKind::PaceDefinition, |b| {
                b.token(NodeKind::PaceDefinitionName, "B");
                b.node(NodeKind::Pace, |b| {
                    b.token(NodeKind::PaceAlias, "A");
                });
            });
        });
        let source = SourceText::new(source_text);

        let mut cursor = tree.cursor();
        let programme = lower_programme(&mut cursor, &source);

        assert_eq!(
            programme.statements[0],
            Statement::PaceDefinition(PaceDefinition {
                name: "B".to_string(),
                pace: Pace::fixed(Intensity::Alias("A".to_string())),
            })
        );
    }

    #[test]
    fn lowering_restores_the_cursor_position() {
        let source_text = "2x100 Free\n1:30\n";
        let tree = build_tree(source_text, |b| {
            b.node(NodeKind::SwimInstruction, |b| {
                b.token(NodeKind::Number, "2");
                b.node(NodeKind::SingleInstruction, |b| {
                    b.token(NodeKind::Number, "100");
                    b.token(NodeKind::Stroke, "Free");
                });
            });
            b.node(NodeKind::RestInstruction, |b| {
                b.node(NodeKind::Duration, |b| {
                    b.token(NodeKind::Number, "1");
                    b.token(NodeKind::Number, "30");
                });
            });
        });
        let source = SourceText::new(source_text);

        let mut cursor = tree.cursor();
        let before = cursor.position();
        lower_programme(&mut cursor, &source);
        assert_eq!(cursor.position(), before);
    }
}
