use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the opcheck binary.
#[derive(Parser, Debug)]
#[command(
    name = "opcheck",
    version,
    about = "Check that Go functions start with `const op = \"<qualified name>\"`"
)]
pub struct CliArgs {
    /// Go files or directories to check. Directories are walked recursively.
    #[arg(required = true, value_name = "PATHS")]
    pub paths: Vec<PathBuf>,

    /// File name suffix selected during directory walks (repeatable).
    #[arg(long = "suffix", value_name = "SUFFIX")]
    pub suffixes: Vec<String>,

    /// Skip files whose name contains this text during directory walks (repeatable).
    #[arg(long = "exclude", value_name = "TEXT")]
    pub excludes: Vec<String>,

    /// JSON configuration file with `suffixes`, `excludes` and `parallel`.
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, ignore_case = true)]
    pub format: OutputFormat,

    /// Check files in parallel.
    #[arg(long)]
    pub parallel: bool,

    /// Also list every conforming function.
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
