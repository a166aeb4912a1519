//! Test-harness adapter.
//!
//! Lets a test suite assert that a package follows the convention by
//! reporting through the suite's own error and log sinks.

use crate::check::check_path;
use std::fmt;
use std::path::Path;

/// Sink for harness output, modelled on a test runner's error and log calls.
pub trait Reporter {
    /// Report a failure. The caller's test should fail.
    fn errorf(&mut self, args: fmt::Arguments<'_>);

    fn logf(&mut self, args: fmt::Arguments<'_>);
}

/// Check `path` and report the outcome through `reporter`.
///
/// Logs the number of conforming functions; on any violation or failure
/// calls `errorf` once with every failure, one per line.
pub fn run<R: Reporter + ?Sized>(reporter: &mut R, path: impl AsRef<Path>) {
    let (declarations, errors) = check_path(path).into_result();
    reporter.logf(format_args!(
        "found {} functions with op constant",
        declarations.len()
    ));
    if let Some(errors) = errors {
        reporter.errorf(format_args!("check. {errors}"));
    }
}

/// A `Reporter` that records everything it receives.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub errors: Vec<String>,
    pub logs: Vec<String>,
}

impl RecordingReporter {
    pub fn failed(&self) -> bool {
        !self.errors.is_empty()
    }
}

impl Reporter for RecordingReporter {
    fn errorf(&mut self, args: fmt::Arguments<'_>) {
        self.errors.push(args.to_string());
    }

    fn logf(&mut self, args: fmt::Arguments<'_>) {
        self.logs.push(args.to_string());
    }
}
