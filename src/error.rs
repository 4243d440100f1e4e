//! Crate-level error types.

use std::fmt;

/// Errors produced by the isoview crate.
///
/// Controller operations are total functions and never fail; the only
/// fallible surface is options file handling.
#[derive(Debug)]
pub enum IsoviewError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for IsoviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for IsoviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for IsoviewError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
