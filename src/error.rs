//! Error types

use thiserror::Error;

/// Errors raised while parsing identifiers from config files or the command line
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Unknown screen slug
    #[error("unknown screen '{0}'")]
    UnknownScreen(String),
    /// Unknown theme slug
    #[error("unknown theme '{0}' (expected 'dark' or 'light')")]
    UnknownTheme(String),
    /// Unknown CLI command or flag
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    /// CLI flag given without its value
    #[error("missing value for '{0}'")]
    MissingValue(String),
}
