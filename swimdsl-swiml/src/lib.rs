//! swiML code generation
//!
//! Deterministic rendering of a lowered [`swimdsl_core::Programme`] into a
//! swiML XML document. The generator validates nothing: it assumes the
//! semantic analyzer reported no diagnostics and renders whatever it is
//! given, including unresolved alias names, verbatim.

pub mod duration;
pub mod error;
pub mod serializer;

pub use duration::xml_duration;
pub use error::SerializeError;
pub use serializer::serialize_programme;
