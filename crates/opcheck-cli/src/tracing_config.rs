//! Diagnostic logging for the opcheck binary, written to stderr.
//!
//! `OPCHECK_LOG` (falling back to `RUST_LOG`) holds the filter directives;
//! `OPCHECK_LOG_FORMAT` picks `text`, `tree` or `json`. Nothing is installed
//! when no directives are set, so stdout stays the report alone.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    /// Indented span tree, one level per check/file.
    Tree,
    Json,
}

/// What to install, resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub directives: String,
    pub format: LogFormat,
}

impl LogSettings {
    /// Resolve settings through `lookup`. `None` means logging stays off.
    pub fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let directives = lookup("OPCHECK_LOG").or_else(|| lookup("RUST_LOG"))?;
        let format = match lookup("OPCHECK_LOG_FORMAT")
            .unwrap_or_default()
            .to_ascii_lowercase()
            .as_str()
        {
            "tree" => LogFormat::Tree,
            "json" => LogFormat::Json,
            _ => LogFormat::Text,
        };
        Some(LogSettings { directives, format })
    }
}

/// Install the global subscriber described by the process environment.
pub fn init_tracing() {
    if let Some(settings) = LogSettings::resolve(|key| std::env::var(key).ok()) {
        install(&settings);
    }
}

fn install(settings: &LogSettings) {
    let filter = EnvFilter::builder().parse_lossy(&settings.directives);
    match settings.format {
        LogFormat::Tree => {
            let layer = tracing_tree::HierarchicalLayer::new(2)
                .with_writer(std::io::stderr)
                .with_targets(true);
            Registry::default().with(filter).with(layer).init();
        }
        LogFormat::Json => {
            let layer = fmt::layer().json().with_writer(std::io::stderr);
            Registry::default().with(filter).with(layer).init();
        }
        LogFormat::Text => {
            let layer = fmt::layer().with_writer(std::io::stderr);
            Registry::default().with(filter).with(layer).init();
        }
    }
}
