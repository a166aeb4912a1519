//! Source positions and byte-offset to line/column lookup.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A reported location: file name plus 1-based line.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub filename: String,
    pub line: u32,
}

impl Position {
    pub fn new(filename: impl Into<String>, line: u32) -> Self {
        Position {
            filename: filename.into(),
            line,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.filename, self.line)
    }
}

/// 1-based line and column (column counted in bytes, like the Go toolchain).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

/// Maps byte offsets to line/column pairs.
///
/// Built once per source text; lookups are a binary search over the
/// recorded line starts.
#[derive(Clone, Debug, Default)]
pub struct LineMap {
    line_starts: Vec<u32>,
}

impl LineMap {
    pub fn build(text: &str) -> Self {
        let mut line_starts = Vec::with_capacity(text.len() / 32 + 1);
        line_starts.push(0);
        line_starts.extend(memchr::memchr_iter(b'\n', text.as_bytes()).map(|i| i as u32 + 1));
        LineMap { line_starts }
    }

    /// Number of lines in the mapped text.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// 1-based line containing `offset`.
    pub fn line_of(&self, offset: u32) -> u32 {
        match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx as u32 + 1,
            Err(idx) => idx as u32,
        }
    }

    pub fn location_of(&self, offset: u32) -> Location {
        let line = self.line_of(offset);
        let start = self.line_starts[(line - 1) as usize];
        Location {
            line,
            column: offset - start + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_display_is_file_colon_line() {
        assert_eq!(Position::new("a/b.go", 12).to_string(), "a/b.go:12");
    }

    #[test]
    fn line_map_resolves_offsets() {
        let map = LineMap::build("ab\ncd\n\nx");
        assert_eq!(map.line_count(), 4);
        assert_eq!(map.line_of(0), 1);
        assert_eq!(map.line_of(2), 1);
        assert_eq!(map.line_of(3), 2);
        assert_eq!(map.line_of(6), 3);
        assert_eq!(map.location_of(7), Location { line: 4, column: 1 });
        assert_eq!(map.location_of(4), Location { line: 2, column: 2 });
    }
}
