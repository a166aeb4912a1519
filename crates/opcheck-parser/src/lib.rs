//! Go parser and syntax tree for the opcheck convention checker.
//!
//! The parser reads a whole Go source file and builds a declaration-level
//! tree: package clause, imports, `const`/`var`/`type` declarations and
//! function declarations with their receivers and bodies. Function bodies
//! are split into statements; declaration statements are parsed in full,
//! every other statement is kept as an opaque node with its line.

pub mod error;
pub mod parser;

pub use error::ParseError;
pub use parser::ast;
pub use parser::{ParserState, parse_file};
