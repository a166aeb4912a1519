use thiserror::Error;

/// Malformed Go syntax. Parsing stops at the first error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{filename}:{line}:{column}: {message}")]
pub struct ParseError {
    pub filename: String,
    pub line: u32,
    pub column: u32,
    pub message: String,
}
