use anyhow::Result;
use opcheck_checker::check;
use tracing::info;

use crate::args::{CliArgs, OutputFormat};
use crate::config::resolve_options;
use crate::reporter::Reporter;

/// Every checked function conforms.
pub const EXIT_SUCCESS: i32 = 0;
/// Violations, unreadable paths or parse errors were reported.
pub const EXIT_PROBLEMS: i32 = 1;
/// Invalid arguments or configuration.
pub const EXIT_USAGE: i32 = 2;

/// Rendered output of a run and the process exit status it maps to.
#[derive(Debug)]
pub struct RunOutcome {
    pub output: String,
    pub exit_code: i32,
}

/// Resolve options, check every path and render the report.
///
/// Errors are configuration failures; check failures are part of the
/// rendered report.
pub fn run(args: &CliArgs, color: bool) -> Result<RunOutcome> {
    let options = resolve_options(args)?;
    info!(
        paths = args.paths.len(),
        suffixes = ?options.resolver.suffixes,
        excludes = ?options.resolver.excludes,
        parallel = options.parallel,
        "starting check"
    );

    let report = check(&args.paths, &options);
    let reporter = Reporter::new(color, args.verbose);
    let output = match args.format {
        OutputFormat::Text => reporter.render_text(&report),
        OutputFormat::Json => reporter.render_json(&report)?,
    };
    let exit_code = if report.is_clean() {
        EXIT_SUCCESS
    } else {
        EXIT_PROBLEMS
    };

    Ok(RunOutcome { output, exit_code })
}
