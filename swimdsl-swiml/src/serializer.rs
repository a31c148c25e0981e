//! The Programme → swiML serializer
//!
//! One pass over the statements in order, writing events into an indenting
//! XML writer. Output is fully deterministic: fixed namespace and
//! schema-location attributes, two-space indentation, text content inline
//! with its element, no trailing newline.
//!
//! Statement mapping:
//!
//! - swim → `instruction`, wrapping its contents in `repetition` (with a
//!   leading `repetitionCount`) when `repetitions` > 1;
//! - rest → `instruction/rest/afterStop`;
//! - message → `instruction/segmentName`;
//! - constant definitions → their fixed metadata elements;
//! - pace definitions → nothing, they exist only to declare names.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use swimdsl_core::ast::{
    ConstantDefinition, Instruction, InstructionModifier, Intensity, Message, NestedInstruction,
    Pace, Programme, RestInstruction, Statement, SwimInstruction,
};

use crate::duration::xml_duration;
use crate::error::SerializeError;

const XML_NAMESPACE: &str = "https://github.com/bartneck/swiML";
const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
const SCHEMA_LOCATION: &str = "https://github.com/bartneck/swiML \
     https://raw.githubusercontent.com/bartneck/swiML/main/version/latest/swiML.xsd";

type XmlWriter = Writer<Vec<u8>>;

/// Render a programme as a complete swiML document.
pub fn serialize_programme(programme: &Programme) -> Result<String, SerializeError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut root = BytesStart::new("program");
    root.push_attribute(("xmlns", XML_NAMESPACE));
    root.push_attribute(("xmlns:xsi", XSI_NAMESPACE));
    root.push_attribute(("xsi:schemaLocation", SCHEMA_LOCATION));
    writer.write_event(Event::Start(root))?;

    for statement in &programme.statements {
        match statement {
            Statement::Swim(swim) => write_swim_instruction(&mut writer, swim)?,
            Statement::Rest(rest) => write_rest_instruction(&mut writer, rest)?,
            Statement::Message(message) => write_message(&mut writer, message)?,
            Statement::PaceDefinition(_) => {}
            Statement::ConstantDefinition(definition) => {
                write_constant_definition(&mut writer, definition)?
            }
        }
    }

    writer.write_event(Event::End(BytesEnd::new("program")))?;

    Ok(String::from_utf8(writer.into_inner())?)
}

fn write_swim_instruction(
    writer: &mut XmlWriter,
    swim: &SwimInstruction,
) -> Result<(), SerializeError> {
    writer.write_event(Event::Start(BytesStart::new("instruction")))?;

    let repeated = swim.repetitions > 1;
    if repeated {
        writer.write_event(Event::Start(BytesStart::new("repetition")))?;
        write_text_element(writer, "repetitionCount", &swim.repetitions.to_string())?;
    }

    match &swim.instruction {
        Instruction::Single(single) => {
            writer.write_event(Event::Start(BytesStart::new("length")))?;
            write_text_element(writer, "lengthAsDistance", &single.distance)?;
            writer.write_event(Event::End(BytesEnd::new("length")))?;

            writer.write_event(Event::Start(BytesStart::new("stroke")))?;
            write_text_element(writer, "standardStroke", &single.stroke)?;
            writer.write_event(Event::End(BytesEnd::new("stroke")))?;
        }
        Instruction::Block(block) => {
            for nested in &block.instructions {
                match nested {
                    NestedInstruction::Swim(nested_swim) => {
                        write_swim_instruction(writer, nested_swim)?
                    }
                    NestedInstruction::Rest(rest) => write_rest_instruction(writer, rest)?,
                    NestedInstruction::Message(message) => write_message(writer, message)?,
                }
            }
        }
    }

    for modifier in &swim.modifiers {
        write_instruction_modifier(writer, modifier)?;
    }

    if repeated {
        writer.write_event(Event::End(BytesEnd::new("repetition")))?;
    }
    writer.write_event(Event::End(BytesEnd::new("instruction")))?;
    Ok(())
}

fn write_instruction_modifier(
    writer: &mut XmlWriter,
    modifier: &InstructionModifier,
) -> Result<(), SerializeError> {
    match modifier {
        InstructionModifier::Gear(gear) => {
            for item in gear {
                write_text_element(writer, "equipment", item)?;
            }
        }
        InstructionModifier::Pace(pace) => write_pace(writer, pace)?,
        InstructionModifier::Time { minutes, seconds } => {
            writer.write_event(Event::Start(BytesStart::new("rest")))?;
            write_text_element(writer, "sinceStart", &xml_duration(minutes, seconds))?;
            writer.write_event(Event::End(BytesEnd::new("rest")))?;
        }
    }
    Ok(())
}

fn write_pace(writer: &mut XmlWriter, pace: &Pace) -> Result<(), SerializeError> {
    writer.write_event(Event::Start(BytesStart::new("intensity")))?;

    writer.write_event(Event::Start(BytesStart::new("startIntensity")))?;
    write_intensity(writer, &pace.start)?;
    writer.write_event(Event::End(BytesEnd::new("startIntensity")))?;

    if let Some(stop) = &pace.stop {
        writer.write_event(Event::Start(BytesStart::new("stopIntensity")))?;
        write_intensity(writer, stop)?;
        writer.write_event(Event::End(BytesEnd::new("stopIntensity")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("intensity")))?;
    Ok(())
}

/// Aliases render as a `zone` carrying the raw name, literals as
/// `percentageEffort`. Unresolved aliases pass through untouched.
fn write_intensity(writer: &mut XmlWriter, intensity: &Intensity) -> Result<(), SerializeError> {
    let element = if intensity.is_alias() {
        "zone"
    } else {
        "percentageEffort"
    };
    write_text_element(writer, element, intensity.value())
}

fn write_rest_instruction(
    writer: &mut XmlWriter,
    rest: &RestInstruction,
) -> Result<(), SerializeError> {
    writer.write_event(Event::Start(BytesStart::new("instruction")))?;
    writer.write_event(Event::Start(BytesStart::new("rest")))?;
    write_text_element(
        writer,
        "afterStop",
        &xml_duration(&rest.minutes, &rest.seconds),
    )?;
    writer.write_event(Event::End(BytesEnd::new("rest")))?;
    writer.write_event(Event::End(BytesEnd::new("instruction")))?;
    Ok(())
}

fn write_message(writer: &mut XmlWriter, message: &Message) -> Result<(), SerializeError> {
    writer.write_event(Event::Start(BytesStart::new("instruction")))?;
    write_text_element(writer, "segmentName", &message.text)?;
    writer.write_event(Event::End(BytesEnd::new("instruction")))?;
    Ok(())
}

/// Constant names map to fixed metadata elements; unrecognized names render
/// nothing, the analyzer already flagged them.
fn write_constant_definition(
    writer: &mut XmlWriter,
    definition: &ConstantDefinition,
) -> Result<(), SerializeError> {
    match definition.name.as_str() {
        "Title" => write_text_element(writer, "title", &definition.value),
        "Author" => {
            writer.write_event(Event::Start(BytesStart::new("author")))?;
            write_text_element(writer, "firstName", &definition.value)?;
            writer.write_event(Event::End(BytesEnd::new("author")))?;
            Ok(())
        }
        "Description" => write_text_element(writer, "programDescription", &definition.value),
        "Date" => write_text_element(writer, "creationDate", &definition.value),
        "PoolLength" => write_text_element(writer, "poolLength", &definition.value),
        "LengthUnit" => write_text_element(writer, "lengthUnit", &definition.value),
        "Align" => write_text_element(writer, "programAlign", &definition.value),
        "NumeralSystem" => write_text_element(writer, "numeralSystem", &definition.value),
        "HideIntro" => write_text_element(writer, "hideIntro", &definition.value),
        "LayoutWidth" => write_text_element(writer, "layoutWidth", &definition.value),
        _ => Ok(()),
    }
}

fn write_text_element(
    writer: &mut XmlWriter,
    name: &str,
    text: &str,
) -> Result<(), SerializeError> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
