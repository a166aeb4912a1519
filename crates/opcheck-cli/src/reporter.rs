use anyhow::{Context, Result};
use colored::Colorize;
use opcheck_checker::{CheckError, CheckReport};
use opcheck_common::{Declaration, Diagnostic};
use serde::Serialize;

/// Renders a check report for the terminal or as JSON.
pub struct Reporter {
    color: bool,
    verbose: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    declarations: &'a [Declaration],
    errors: Vec<JsonError<'a>>,
}

#[derive(Serialize)]
struct JsonError<'a> {
    kind: &'static str,
    message: String,
    #[serde(flatten)]
    diagnostic: Option<&'a Diagnostic>,
}

impl Reporter {
    pub fn new(color: bool, verbose: bool) -> Self {
        Reporter { color, verbose }
    }

    pub fn render_text(&self, report: &CheckReport) -> String {
        let mut lines = Vec::new();
        if self.verbose {
            for declaration in &report.declarations {
                lines.push(self.format_declaration(declaration));
            }
        }
        for err in &report.errors {
            lines.push(self.format_error(err));
        }
        lines.push(self.format_summary(report));
        lines.join("\n")
    }

    pub fn render_json(&self, report: &CheckReport) -> Result<String> {
        let json = JsonReport {
            declarations: &report.declarations,
            errors: report
                .errors
                .iter()
                .map(|err| JsonError {
                    kind: err.kind(),
                    message: err.to_string(),
                    diagnostic: err.as_diagnostic(),
                })
                .collect(),
        };
        serde_json::to_string_pretty(&json).context("failed to serialize report")
    }

    fn format_declaration(&self, declaration: &Declaration) -> String {
        let line = declaration.to_string();
        if self.color { line.dimmed().to_string() } else { line }
    }

    fn format_error(&self, err: &CheckError) -> String {
        let Some(diagnostic) = err.as_diagnostic() else {
            let label = if self.color {
                "error".red().bold().to_string()
            } else {
                "error".to_string()
            };
            return format!("{label}: {err}");
        };
        if !self.color {
            return diagnostic.to_string();
        }

        let mut out = format!(
            "{}: {}",
            diagnostic.position.to_string().bold(),
            diagnostic.code.to_string().red()
        );
        if !diagnostic.expected.is_empty() {
            out.push_str(&format!(
                ". Expect: {}",
                format!("\"{}\"", diagnostic.expected).green()
            ));
        }
        out
    }

    fn format_summary(&self, report: &CheckReport) -> String {
        let problems = report.errors.len();
        let summary = format!(
            "{} conforming {}, {} {}",
            report.declarations.len(),
            plural(report.declarations.len(), "function", "functions"),
            problems,
            plural(problems, "problem", "problems"),
        );
        if !self.color {
            summary
        } else if problems == 0 {
            summary.green().to_string()
        } else {
            summary.red().bold().to_string()
        }
    }
}

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 { one } else { many }
}
