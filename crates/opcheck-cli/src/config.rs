use anyhow::{Context, Result};
use opcheck_checker::CheckOptions;
use std::path::Path;

use crate::args::CliArgs;

/// Parse a JSON configuration. Missing fields keep their defaults.
pub fn parse_config(source: &str) -> Result<CheckOptions> {
    let options = serde_json::from_str(source).context("failed to parse config JSON")?;
    Ok(options)
}

pub fn load_config(path: &Path) -> Result<CheckOptions> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    parse_config(&source).with_context(|| format!("failed to parse config: {}", path.display()))
}

/// Merge defaults, the config file (if any) and command-line flags, in that
/// order of increasing precedence.
pub fn resolve_options(args: &CliArgs) -> Result<CheckOptions> {
    let mut options = match &args.config {
        Some(path) => load_config(path)?,
        None => CheckOptions::default(),
    };

    if !args.suffixes.is_empty() {
        options.resolver.suffixes = args.suffixes.clone();
    }
    if !args.excludes.is_empty() {
        options.resolver.excludes = args.excludes.clone();
    }
    if args.parallel {
        options.parallel = true;
    }

    Ok(options)
}
