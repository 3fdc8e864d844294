//! Crate-level error types.

use std::fmt;

/// Errors produced by the arbo crate.
#[derive(Debug)]
pub enum ArboError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// A hand snapshot did not carry the expected landmark layout.
    Landmarks(String),
}

impl fmt::Display for ArboError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Landmarks(msg) => write!(f, "landmark error: {msg}"),
        }
    }
}

impl std::error::Error for ArboError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ArboError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
