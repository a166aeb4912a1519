//! Convention verdicts: accepted declarations and diagnostics.

use crate::position::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Error Codes
// =============================================================================

/// Kind of convention violation.
///
/// `Undefined` is never produced by the checker; it only names a code
/// value outside the defined kinds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    #[default]
    Undefined,
    /// The first statement is not a single string constant named `op`.
    NotFound,
    /// `op` is declared but its value differs from the qualified name.
    NotSame,
}

impl ErrorCode {
    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "not found constant `op`",
            ErrorCode::NotSame => "not same values",
            ErrorCode::Undefined => "undefined error code value",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

// =============================================================================
// Diagnostic
// =============================================================================

/// A single convention violation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub position: Position,
    pub code: ErrorCode,
    /// Qualified name the checker expected `op` to hold.
    pub expected: String,
}

impl Diagnostic {
    pub fn not_found(position: Position, expected: impl Into<String>) -> Self {
        Diagnostic {
            position,
            code: ErrorCode::NotFound,
            expected: expected.into(),
        }
    }

    pub fn not_same(position: Position, expected: impl Into<String>) -> Self {
        Diagnostic {
            position,
            code: ErrorCode::NotSame,
            expected: expected.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.position, self.code)?;
        if !self.expected.is_empty() {
            write!(f, ". Expect: \"{}\"", self.expected)?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostic {}

// =============================================================================
// Declaration
// =============================================================================

/// A function or method whose first statement satisfies the convention.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    /// Bare function name, or `Receiver.Name` for methods (`*Receiver.Name`
    /// for pointer receivers).
    pub name: String,
    pub position: Position,
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} find op with name `{}`", self.position, self.name)
    }
}
