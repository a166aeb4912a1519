//! Failures collected during a check run.

use opcheck_common::Diagnostic;
use opcheck_parser::ParseError;
use std::path::PathBuf;
use thiserror::Error;

/// One failure of a check run.
///
/// `Io`, `Walk` and `Parse` end the processing of a single path or file;
/// `Convention` is reported per function. None of them stop the run.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Convention(#[from] Diagnostic),
}

impl CheckError {
    /// Short machine-readable name of the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            CheckError::Io { .. } => "io",
            CheckError::Walk { .. } => "walk",
            CheckError::Parse(_) => "parse",
            CheckError::Convention(_) => "convention",
        }
    }

    pub fn as_diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            CheckError::Convention(diag) => Some(diag),
            _ => None,
        }
    }
}
