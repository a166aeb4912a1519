//! Check entry points: paths, single path, or in-memory source.

use crate::aggregate::CheckReport;
use crate::convention::{Verdict, check_function};
use crate::declarations::extract;
use crate::error::CheckError;
use crate::resolver::{ResolverOptions, resolve};
use opcheck_parser::parse_file;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{Span, debug, info_span, trace};

/// Options for a check run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckOptions {
    #[serde(flatten)]
    pub resolver: ResolverOptions,
    /// Check files on the rayon thread pool. Results keep discovery order.
    pub parallel: bool,
}

/// Check every Go file reachable from `paths`.
pub fn check<P: AsRef<Path>>(paths: &[P], options: &CheckOptions) -> CheckReport {
    let span = info_span!(
        "check",
        paths = paths.len(),
        parallel = options.parallel
    );
    let _guard = span.enter();

    let entries = resolve(paths, &options.resolver);
    let reports: Vec<CheckReport> = if options.parallel {
        let parent = Span::current();
        entries
            .into_par_iter()
            .map(|entry| parent.in_scope(|| check_entry(entry)))
            .collect()
    } else {
        entries.into_iter().map(check_entry).collect()
    };

    let mut report = CheckReport::default();
    for file_report in reports {
        report.merge(file_report);
    }
    debug!(
        declarations = report.declarations.len(),
        errors = report.errors.len(),
        "check finished"
    );
    report
}

/// Check a single file or directory with default options.
pub fn check_path(path: impl AsRef<Path>) -> CheckReport {
    check(&[path.as_ref()], &CheckOptions::default())
}

/// Check one in-memory Go file. `file_name` is used in positions.
pub fn check_source(file_name: &str, source: &str) -> CheckReport {
    let mut report = CheckReport::default();
    let file = match parse_file(file_name, source) {
        Ok(file) => file,
        Err(err) => {
            debug!(file = file_name, error = %err, "parse failed");
            report.push_error(err);
            return report;
        }
    };

    for record in extract(&file) {
        let verdict = check_function(file_name, record.decl, &record.qualified_name);
        trace!(file = file_name, function = %record.qualified_name, ?verdict, "checked function");
        match verdict {
            Verdict::Accepted(declaration) => report.declarations.push(declaration),
            Verdict::Rejected(diagnostic) => report.push_error(diagnostic),
            Verdict::Skipped => {}
        }
    }

    debug!(
        file = file_name,
        accepted = report.declarations.len(),
        rejected = report.errors.len(),
        "checked file"
    );
    report
}

fn check_entry(entry: Result<PathBuf, CheckError>) -> CheckReport {
    match entry {
        Ok(path) => check_file(&path),
        Err(err) => CheckReport {
            declarations: Vec::new(),
            errors: vec![err],
        },
    }
}

fn check_file(path: &Path) -> CheckReport {
    match fs::read_to_string(path) {
        Ok(source) => check_source(&path.display().to_string(), &source),
        Err(source) => CheckReport {
            declarations: Vec::new(),
            errors: vec![CheckError::Io {
                path: path.to_path_buf(),
                source,
            }],
        },
    }
}
