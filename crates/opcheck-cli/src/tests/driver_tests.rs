use clap::Parser;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use super::args::CliArgs;
use super::driver::{EXIT_PROBLEMS, EXIT_SUCCESS, run};

fn write(dir: &Path, rel: &str, contents: &str) {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

fn args(extra: &[&str], dir: &Path) -> CliArgs {
    let mut argv = vec!["opcheck", "--no-color"];
    argv.extend_from_slice(extra);
    argv.push(dir.to_str().unwrap());
    CliArgs::try_parse_from(argv).unwrap()
}

#[test]
fn clean_directory_exits_zero() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "a.go", "package a\n\nfunc A() {\n\tconst op = \"A\"\n}\n");

    let outcome = run(&args(&[], temp.path()), false).unwrap();
    assert_eq!(outcome.exit_code, EXIT_SUCCESS);
    assert_eq!(outcome.output, "1 conforming function, 0 problems");
}

#[test]
fn violations_exit_one_with_diagnostics() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "a.go", "package a\n\nfunc A() {\n\tconst op = \"B\"\n}\n");

    let outcome = run(&args(&[], temp.path()), false).unwrap();
    assert_eq!(outcome.exit_code, EXIT_PROBLEMS);
    let lines: Vec<_> = outcome.output.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("a.go:4: not same values. Expect: \"A\""), "{}", lines[0]);
    assert_eq!(lines[1], "0 conforming functions, 1 problem");
}

#[test]
fn verbose_lists_accepted_functions() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "a.go", "package a\n\nfunc A() {\n\tconst op = \"A\"\n}\n");

    let outcome = run(&args(&["--verbose"], temp.path()), false).unwrap();
    let first = outcome.output.lines().next().unwrap();
    assert!(first.ends_with("a.go:4 find op with name `A`"), "{first}");
}

#[test]
fn json_output_is_structured() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "a.go", "package a\n\nfunc A() {}\n\nfunc B() {\n\tconst op = \"B\"\n}\n");
    write(temp.path(), "b.go", "package\n");

    let outcome = run(&args(&["--format", "json"], temp.path()), false).unwrap();
    assert_eq!(outcome.exit_code, EXIT_PROBLEMS);

    let json: serde_json::Value = serde_json::from_str(&outcome.output).unwrap();
    assert_eq!(json["declarations"][0]["name"], "B");
    assert_eq!(json["errors"][0]["kind"], "convention");
    assert_eq!(json["errors"][0]["code"], "NotFound");
    assert_eq!(json["errors"][0]["expected"], "A");
    assert_eq!(json["errors"][0]["position"]["line"], 3);
    assert_eq!(json["errors"][1]["kind"], "parse");
    assert!(json["errors"][1].get("code").is_none());
}

#[test]
fn unreadable_config_is_an_error() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("missing.json");
    let args = args(&["--config", config.to_str().unwrap()], temp.path());
    assert!(run(&args, false).is_err());
}
