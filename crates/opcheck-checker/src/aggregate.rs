//! Run-level collection of accepted declarations and failures.

use crate::error::CheckError;
use opcheck_common::{Declaration, Diagnostic};
use std::fmt;

/// Every failure of one run, kept distinct and in the order encountered.
#[derive(Debug, Default)]
pub struct AggregateError {
    errors: Vec<CheckError>,
}

impl AggregateError {
    pub fn errors(&self) -> &[CheckError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<CheckError> {
        self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CheckError> {
        self.errors.iter()
    }
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, err) in self.errors.iter().enumerate() {
            if idx > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for AggregateError {}

impl<'a> IntoIterator for &'a AggregateError {
    type Item = &'a CheckError;
    type IntoIter = std::slice::Iter<'a, CheckError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Outcome of checking a set of paths.
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Conforming functions, in file discovery order then source order.
    pub declarations: Vec<Declaration>,
    pub errors: Vec<CheckError>,
}

impl CheckReport {
    /// No violations and no failures.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Convention violations only, skipping I/O and parse failures.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.errors.iter().filter_map(CheckError::as_diagnostic)
    }

    /// Append `other` after everything already collected.
    pub fn merge(&mut self, other: CheckReport) {
        self.declarations.extend(other.declarations);
        self.errors.extend(other.errors);
    }

    pub fn push_error(&mut self, err: impl Into<CheckError>) {
        self.errors.push(err.into());
    }

    /// Split into the accepted declarations and, if anything failed, the
    /// aggregate of all failures.
    pub fn into_result(self) -> (Vec<Declaration>, Option<AggregateError>) {
        let errors = if self.errors.is_empty() {
            None
        } else {
            Some(AggregateError {
                errors: self.errors,
            })
        };
        (self.declarations, errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opcheck_common::Position;

    #[test]
    fn clean_report_has_no_aggregate() {
        let report = CheckReport {
            declarations: vec![Declaration {
                name: "f".to_string(),
                position: Position::new("a.go", 2),
            }],
            errors: Vec::new(),
        };
        assert!(report.is_clean());
        let (declarations, errors) = report.into_result();
        assert_eq!(declarations.len(), 1);
        assert!(errors.is_none());
    }

    #[test]
    fn aggregate_lists_every_failure_on_its_own_line() {
        let mut report = CheckReport::default();
        report.push_error(Diagnostic::not_found(Position::new("a.go", 3), "f"));
        report.push_error(Diagnostic::not_same(Position::new("a.go", 7), "g"));
        report.push_error(Diagnostic::not_same(Position::new("a.go", 7), "g"));
        assert_eq!(report.diagnostics().count(), 3);

        let (_, errors) = report.into_result();
        let errors = errors.unwrap();
        assert_eq!(errors.len(), 3);
        assert_eq!(
            errors.to_string(),
            "a.go:3: not found constant `op`. Expect: \"f\"\n\
             a.go:7: not same values. Expect: \"g\"\n\
             a.go:7: not same values. Expect: \"g\""
        );
    }

    #[test]
    fn merge_preserves_order() {
        let decl = |name: &str| Declaration {
            name: name.to_string(),
            position: Position::new("x.go", 1),
        };
        let mut first = CheckReport {
            declarations: vec![decl("a")],
            errors: Vec::new(),
        };
        let second = CheckReport {
            declarations: vec![decl("b"), decl("c")],
            errors: Vec::new(),
        };
        first.merge(second);
        let names: Vec<_> = first.declarations.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }
}
