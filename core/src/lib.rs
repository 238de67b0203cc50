//! # crtgen core
//!
//! Turns a bracket-delimited host hierarchy into a SecureCRT session export.
//!
//! * **[`parser`]**: text → [`Group`] tree.
//! * **[`generator`]**: [`Group`] tree → [`markup::Document`] → XML text.
//! * **[`markup`]**: the `VanDyke` document model and its serializer.

pub mod error;
pub mod generator;
pub mod markup;
pub mod parser;

pub use crtgen_common::config::SessionDefaults;
pub use crtgen_common::session::Group;
pub use error::{Error, GenerateError, ParseError};

/// Parses `text` and renders the resulting tree in one step.
pub fn convert(text: &str, defaults: &SessionDefaults) -> Result<String, Error> {
    let root: Group = parser::parse(text, defaults)?;
    Ok(generator::generate(&root)?)
}
