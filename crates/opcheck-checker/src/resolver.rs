//! Path resolution: turns user-supplied paths into the ordered list of Go
//! files to check.
//!
//! - A regular file is always checked, whatever its name.
//! - A directory is walked recursively in file-name order; a file inside it
//!   is checked when its name ends with one of the suffixes and contains
//!   none of the exclusion substrings.
//!
//! Failures are returned in place, next to the files that did resolve, so a
//! bad path never hides the good ones.

use crate::error::CheckError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

pub const DEFAULT_SUFFIXES: &[&str] = &[".go"];
pub const DEFAULT_EXCLUDES: &[&str] = &["_test.go"];

/// File selection rules for directory walks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResolverOptions {
    pub suffixes: Vec<String>,
    pub excludes: Vec<String>,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        ResolverOptions {
            suffixes: DEFAULT_SUFFIXES.iter().map(|s| (*s).to_string()).collect(),
            excludes: DEFAULT_EXCLUDES.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

impl ResolverOptions {
    /// Whether a file found during a directory walk should be checked.
    pub fn is_eligible(&self, file_name: &str) -> bool {
        self.suffixes.iter().any(|suffix| file_name.ends_with(suffix.as_str()))
            && !self
                .excludes
                .iter()
                .any(|exclude| file_name.contains(exclude.as_str()))
    }
}

/// Resolve `paths` in order. Each entry is either a file to check or the
/// failure that prevented resolving part of a path.
pub fn resolve<P: AsRef<Path>>(
    paths: &[P],
    options: &ResolverOptions,
) -> Vec<Result<PathBuf, CheckError>> {
    let mut entries = Vec::new();
    for path in paths {
        resolve_one(path.as_ref(), options, &mut entries);
    }
    entries
}

fn resolve_one(path: &Path, options: &ResolverOptions, out: &mut Vec<Result<PathBuf, CheckError>>) {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(source) => {
            warn!(path = %path.display(), error = %source, "cannot stat path");
            out.push(Err(CheckError::Io {
                path: path.to_path_buf(),
                source,
            }));
            return;
        }
    };

    if !metadata.is_dir() {
        debug!(file = %path.display(), "resolved file");
        out.push(Ok(path.to_path_buf()));
        return;
    }

    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) => {
                let failed = source.path().unwrap_or(path).to_path_buf();
                warn!(path = %failed.display(), error = %source, "directory walk failed");
                out.push(Err(CheckError::Walk {
                    path: failed,
                    source,
                }));
                continue;
            }
        };
        if entry.file_type().is_dir() {
            continue;
        }
        // Names that are not valid UTF-8 are matched lossily, never dropped.
        if options.is_eligible(&entry.file_name().to_string_lossy()) {
            debug!(file = %entry.path().display(), "resolved file");
            out.push(Ok(entry.into_path()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, rel: &str) {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "package p\n").unwrap();
    }

    fn names(entries: &[Result<PathBuf, CheckError>], root: &Path) -> Vec<String> {
        entries
            .iter()
            .map(|e| {
                let path = e.as_ref().expect("resolved file");
                path.strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn default_options_select_go_sources() {
        let options = ResolverOptions::default();
        assert!(options.is_eligible("op.go"));
        assert!(!options.is_eligible("op_test.go"));
        assert!(!options.is_eligible("README.md"));
        assert!(!options.is_eligible("go.mod"));
    }

    #[test]
    fn walk_is_recursive_sorted_and_filtered() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        touch(root, "b.go");
        touch(root, "a.go");
        touch(root, "a_test.go");
        touch(root, "notes.txt");
        touch(root, "sub/c.go");
        touch(root, "sub/deeper/d.go");

        let entries = resolve(&[root], &ResolverOptions::default());
        assert_eq!(
            names(&entries, root),
            vec!["a.go", "b.go", "sub/c.go", "sub/deeper/d.go"]
        );
    }

    #[test]
    fn explicit_file_is_included_unconditionally() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "x_test.go");
        touch(temp.path(), "script.txt");

        let files = [temp.path().join("x_test.go"), temp.path().join("script.txt")];
        let entries = resolve(&files, &ResolverOptions::default());
        assert_eq!(names(&entries, temp.path()), vec!["x_test.go", "script.txt"]);
    }

    #[test]
    fn missing_path_is_reported_without_stopping() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "ok.go");

        let paths = [temp.path().join("missing"), temp.path().join("ok.go")];
        let entries = resolve(&paths, &ResolverOptions::default());
        assert_eq!(entries.len(), 2);
        match &entries[0] {
            Err(CheckError::Io { path, .. }) => assert!(path.ends_with("missing")),
            other => panic!("expected io error, got {other:?}"),
        }
        assert!(entries[1].is_ok());
    }

    #[test]
    fn custom_suffixes_and_excludes() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "a.go");
        touch(temp.path(), "b.go.tmpl");
        touch(temp.path(), "gen_mock.go");

        let options = ResolverOptions {
            suffixes: vec![".go".to_string(), ".tmpl".to_string()],
            excludes: vec!["mock".to_string()],
        };
        let entries = resolve(&[temp.path()], &options);
        assert_eq!(names(&entries, temp.path()), vec!["a.go", "b.go.tmpl"]);
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_file_names_are_still_selected() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp = TempDir::new().unwrap();
        let bad_go = temp.path().join(OsStr::from_bytes(b"bad\xff.go"));
        let bad_test = temp.path().join(OsStr::from_bytes(b"bad\xff_test.go"));
        fs::write(&bad_go, "package p\n").unwrap();
        fs::write(&bad_test, "package p\n").unwrap();

        let entries = resolve(&[temp.path()], &ResolverOptions::default());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].as_ref().unwrap(), &bad_go);
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: ResolverOptions = serde_json::from_str(r#"{"excludes": []}"#).unwrap();
        assert_eq!(options.suffixes, vec![".go".to_string()]);
        assert!(options.excludes.is_empty());
    }
}
