//! Go scanner/tokenizer for the opcheck convention checker.
//!
//! This crate provides the lexical analysis phase:
//! - `SyntaxKind` - Token types
//! - `ScannerState` - Tokenizer state machine with automatic semicolon insertion
//! - `ScanError` - Lexical errors (unterminated literals, invalid characters)

mod error;
mod scanner;
mod syntax_kind;

pub use error::{ScanError, ScanErrorKind};
pub use scanner::{ScannerState, Token, tokenize};
pub use syntax_kind::{SyntaxKind, text_to_keyword};
