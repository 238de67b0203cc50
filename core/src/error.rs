use std::num::{IntErrorKind, ParseIntError};

use thiserror::Error;

/// Reasons a hierarchy description is rejected. The first one found aborts
/// the whole parse.
///
/// Besides the bracket and port errors, two inputs are refused outright:
/// a host line with no address (`alice@`, `:22`) fails with
/// [`ParseError::EmptyHost`] instead of producing a session with an empty
/// name, and nesting past [`crate::parser::MAX_DEPTH`] groups fails with
/// [`ParseError::TooDeep`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty group name")]
    EmptyGroupName,

    /// Brackets do not balance. `closer_line` is set when a `]` turned up
    /// with no group open, and is `None` when an opener was never closed.
    #[error("{}", unclosed_message(.closer_line))]
    UnclosedGroup { closer_line: Option<String> },

    #[error("{} in host '{line}'", port_problem(.source))]
    InvalidPort {
        line: String,
        #[source]
        source: ParseIntError,
    },

    /// Host line without an address. Rejected on purpose.
    #[error("missing host address in '{line}'")]
    EmptyHost { line: String },

    #[error("cannot add children to host '{name}'")]
    InvalidGroupTarget { name: String },

    #[error("groups nested deeper than {limit} levels")]
    TooDeep { limit: usize },
}

impl ParseError {
    /// An opener whose `]` never came.
    pub fn unclosed() -> Self {
        ParseError::UnclosedGroup { closer_line: None }
    }

    /// A `]` with nothing to close, found on `line`.
    pub fn stray_closer(line: &str) -> Self {
        ParseError::UnclosedGroup {
            closer_line: Some(line.to_string()),
        }
    }
}

fn unclosed_message(closer_line: &Option<String>) -> String {
    match closer_line {
        Some(line) => format!("unexpected `]` in '{line}': no group is open"),
        None => "unclosed group".to_string(),
    }
}

fn port_problem(source: &ParseIntError) -> &'static str {
    match source.kind() {
        IntErrorKind::PosOverflow => "port out of range",
        _ => "invalid port",
    }
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to serialize session document")]
    Serialization(#[from] std::fmt::Error),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Generate(#[from] GenerateError),
}
