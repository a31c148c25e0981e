//! Serialization failures

use std::fmt;
use std::string::FromUtf8Error;

/// An error produced while rendering a programme to XML.
///
/// Both variants are I/O-shaped failures of the writing machinery; the
/// generator itself has no invalid inputs.
#[derive(Debug)]
pub enum SerializeError {
    /// The XML writer rejected an event.
    Xml(quick_xml::Error),
    /// The rendered bytes were not valid UTF-8.
    Utf8(FromUtf8Error),
}

impl fmt::Display for SerializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerializeError::Xml(error) => write!(f, "failed to write XML: {error}"),
            SerializeError::Utf8(error) => write!(f, "generated XML is not valid UTF-8: {error}"),
        }
    }
}

impl std::error::Error for SerializeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SerializeError::Xml(error) => Some(error),
            SerializeError::Utf8(error) => Some(error),
        }
    }
}

impl From<quick_xml::Error> for SerializeError {
    fn from(error: quick_xml::Error) -> Self {
        SerializeError::Xml(error)
    }
}

impl From<FromUtf8Error> for SerializeError {
    fn from(error: FromUtf8Error) -> Self {
        SerializeError::Utf8(error)
    }
}
