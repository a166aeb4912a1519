//! End-to-end checks over files on disk.
use opcheck_checker::{
    CheckError, CheckOptions, CheckReport, ErrorCode, ResolverOptions, check, check_path,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn testdata(rel: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/testdata")
        .join(rel)
}

fn names(report: &CheckReport) -> Vec<&str> {
    report.declarations.iter().map(|d| d.name.as_str()).collect()
}

fn write(dir: &Path, rel: &str, contents: &str) -> PathBuf {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn mixed_fixture_reports_each_violation_once() {
    let report = check_path(testdata("funcs.go"));

    assert_eq!(names(&report), vec!["func1", "st.func1"]);

    let diagnostics: Vec<_> = report
        .diagnostics()
        .map(|d| (d.code, d.position.line, d.expected.as_str()))
        .collect();
    assert_eq!(
        diagnostics,
        vec![
            (ErrorCode::NotSame, 11, "Func2"),
            (ErrorCode::NotSame, 23, "*st.func3"),
            (ErrorCode::NotFound, 27, "*st.Func4"),
        ]
    );
    assert_eq!(report.errors.len(), 3, "no errors beyond the diagnostics");
    assert!(
        !report.errors.iter().any(|e| e.to_string().contains("main")),
        "main must never be reported"
    );
}

#[test]
fn diagnostics_name_the_file_and_line() {
    let path = testdata("funcs.go");
    let (_, errors) = check_path(&path).into_result();
    let text = errors.expect("fixture has violations").to_string();
    let first = text.lines().next().unwrap();
    assert_eq!(
        first,
        format!("{}:11: not same values. Expect: \"Func2\"", path.display())
    );
    assert_eq!(text.lines().count(), 3);
}

#[test]
fn conforming_package_is_clean() {
    let report = check_path(testdata("pkg"));
    assert!(report.is_clean(), "unexpected errors: {:?}", report.errors);
    assert_eq!(names(&report), vec!["New", "*Store.Get", "helper", "*list.Len"]);

    let (declarations, errors) = report.into_result();
    assert_eq!(declarations.len(), 4);
    assert!(errors.is_none());
}

#[test]
fn excluded_files_are_checked_when_named_explicitly() {
    let report = check_path(testdata("pkg/a_test.go"));
    let diagnostics: Vec<_> = report.diagnostics().collect();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].expected, "TestBroken");
}

#[test]
fn paths_are_processed_in_order_and_errors_do_not_stop_the_run() {
    let temp = TempDir::new().unwrap();
    let good = write(temp.path(), "good.go", "package p\n\nfunc ok() {\n\tconst op = \"ok\"\n}\n");
    let missing = temp.path().join("missing.go");

    let report = check(
        &[missing.clone(), testdata("pkg"), good],
        &CheckOptions::default(),
    );
    assert_eq!(
        names(&report),
        vec!["New", "*Store.Get", "helper", "*list.Len", "ok"]
    );
    assert_eq!(report.errors.len(), 1);
    match &report.errors[0] {
        CheckError::Io { path, .. } => assert_eq!(path, &missing),
        other => panic!("expected io error, got {other}"),
    }
}

#[test]
fn parse_error_in_one_file_does_not_hide_others() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "a.go", "package p\n\nfunc a() {\n\tconst op = \"a\"\n}\n");
    write(temp.path(), "b.go", "package p\n\nfunc b() {\n\tif {\n}\n");
    write(temp.path(), "c.go", "package p\n\nfunc c() {\n}\n");

    let report = check_path(temp.path());
    assert_eq!(names(&report), vec!["a"]);
    assert_eq!(report.errors.len(), 2);
    assert_eq!(report.errors[0].kind(), "parse");
    assert!(report.errors[0].to_string().contains("b.go:"));
    assert_eq!(report.errors[1].kind(), "convention");
    assert!(report.errors[1].to_string().contains("c.go:3:"));
}

#[cfg(unix)]
#[test]
fn non_utf8_file_is_checked_not_skipped() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp = TempDir::new().unwrap();
    let path = temp.path().join(OsStr::from_bytes(b"bad\xff.go"));
    fs::write(&path, "package p\n\nfunc f() {}\n").unwrap();

    let report = check_path(temp.path());
    assert!(report.declarations.is_empty());
    let diagnostics: Vec<_> = report.diagnostics().collect();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, ErrorCode::NotFound);
    assert_eq!(diagnostics[0].expected, "f");
    assert_eq!(diagnostics[0].position.line, 3);
}

#[test]
fn parallel_and_sequential_runs_are_identical() {
    let temp = TempDir::new().unwrap();
    for i in 0..24 {
        let body = if i % 3 == 0 {
            format!("\tconst op = \"wrong{i}\"\n")
        } else if i % 5 == 0 {
            String::new()
        } else {
            format!("\tconst op = \"f{i}\"\n")
        };
        write(
            temp.path(),
            &format!("dir{}/file{i:02}.go", i % 4),
            &format!("package p\n\nfunc f{i}() {{\n{body}}}\n"),
        );
    }
    write(temp.path(), "dir1/broken.go", "package\n");

    let sequential = check(&[temp.path()], &CheckOptions::default());
    let parallel = check(
        &[temp.path()],
        &CheckOptions {
            parallel: true,
            ..CheckOptions::default()
        },
    );

    assert_eq!(sequential.declarations, parallel.declarations);
    let text = |report: &CheckReport| -> Vec<String> {
        report.errors.iter().map(ToString::to_string).collect()
    };
    assert_eq!(text(&sequential), text(&parallel));
    assert!(!sequential.declarations.is_empty());
    assert!(!sequential.errors.is_empty());
}

#[test]
fn repeated_runs_are_idempotent() {
    let first = check_path(testdata("funcs.go"));
    let second = check_path(testdata("funcs.go"));
    assert_eq!(first.declarations, second.declarations);
    let (_, a) = first.into_result();
    let (_, b) = second.into_result();
    assert_eq!(a.unwrap().to_string(), b.unwrap().to_string());
}

#[test]
fn custom_resolver_options_change_the_file_set() {
    let options = CheckOptions {
        resolver: ResolverOptions {
            suffixes: vec![".go".to_string()],
            excludes: Vec::new(),
        },
        parallel: false,
    };
    let report = check(&[testdata("pkg")], &options);
    assert_eq!(report.diagnostics().count(), 1, "a_test.go is now included");
    assert_eq!(report.declarations.len(), 4);
}

#[test]
fn report_serializes_to_json() {
    let report = check_path(testdata("pkg/b.go"));
    let json = serde_json::to_value(&report.declarations).unwrap();
    assert_eq!(json[0]["name"], "helper");
    assert_eq!(json[0]["position"]["line"], 4);
}
