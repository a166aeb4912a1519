//! Checks the `const op` convention in Go sources.
//!
//! Every function and method body must begin with
//! `const op = "<qualified name>"`, where the qualified name is the function
//! name, prefixed by the receiver type (`*T.Name` for pointer receivers) for
//! methods. `main` is exempt.
//!
//! Pipeline per run:
//! - `resolver` - paths to the ordered list of Go files
//! - `declarations` - parsed file to functions with qualified names
//! - `convention` - one verdict per function
//! - `aggregate` - accepted declarations and every failure, in order
//!
//! `check`, `check_path` and `check_source` drive the pipeline; `harness`
//! adapts it to test runners.

pub mod aggregate;
pub mod check;
pub mod convention;
pub mod declarations;
pub mod error;
pub mod harness;
pub mod resolver;

pub use aggregate::{AggregateError, CheckReport};
pub use check::{CheckOptions, check, check_path, check_source};
pub use convention::{Verdict, check_function};
pub use error::CheckError;
pub use harness::{RecordingReporter, Reporter};
pub use resolver::ResolverOptions;

pub use opcheck_common::{Declaration, Diagnostic, ErrorCode, Position};
pub use opcheck_parser::ParseError;
