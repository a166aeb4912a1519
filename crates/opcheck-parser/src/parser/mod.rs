//! Parser module.
//!
//! - `ast` - Syntax tree types
//! - `state` - `ParserState`: token cursor, error construction, balanced skipping
//! - `state_declarations` - Source file, imports, top-level and function declarations
//! - `state_statements` - Blocks, statements, value specs and expressions
//! - `state_types` - Type expressions and parameter lists

pub mod ast;
mod state;
mod state_declarations;
mod state_statements;
mod state_types;

pub use state::ParserState;

use crate::error::ParseError;

/// Parse a whole Go source file.
pub fn parse_file(file_name: impl Into<String>, source: &str) -> Result<ast::SourceFile, ParseError> {
    let mut parser = ParserState::new(file_name, source)?;
    parser.parse_source_file()
}
