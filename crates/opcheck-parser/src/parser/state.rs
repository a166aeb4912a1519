//! Parser state - token cursor, error construction and balanced skipping.

use crate::error::ParseError;
use crate::parser::ast::Ident;
use opcheck_common::LineMap;
use opcheck_common::limits::MAX_NESTING_DEPTH;
use opcheck_scanner::{SyntaxKind, Token, tokenize};

pub(super) type ParseResult<T> = Result<T, ParseError>;

/// Recursive-descent parser over a fully scanned token buffer.
///
/// The buffer always ends with `EndOfFileToken`; the cursor never moves
/// past it.
pub struct ParserState<'a> {
    pub(super) file_name: String,
    pub(super) source: &'a str,
    pub(super) tokens: Vec<Token>,
    pub(super) line_map: LineMap,
    pub(super) cursor: usize,
    pub(super) depth: u32,
}

impl<'a> ParserState<'a> {
    /// Scan `source`. Lexical errors are reported as parse errors.
    pub fn new(file_name: impl Into<String>, source: &'a str) -> Result<Self, ParseError> {
        let file_name = file_name.into();
        match tokenize(source) {
            Ok((tokens, line_map)) => Ok(ParserState {
                file_name,
                source,
                tokens,
                line_map,
                cursor: 0,
                depth: 0,
            }),
            Err(err) => {
                let location = LineMap::build(source).location_of(err.pos);
                Err(ParseError {
                    filename: file_name,
                    line: location.line,
                    column: location.column,
                    message: err.to_string(),
                })
            }
        }
    }

    // =========================================================================
    // Token access
    // =========================================================================

    #[inline]
    pub(super) fn current(&self) -> Token {
        self.tokens[self.cursor]
    }

    #[inline]
    pub(super) fn token(&self) -> SyntaxKind {
        self.tokens[self.cursor].kind
    }

    #[inline]
    pub(super) fn is_token(&self, kind: SyntaxKind) -> bool {
        self.token() == kind
    }

    pub(super) fn peek_kind(&self, ahead: usize) -> SyntaxKind {
        self.tokens
            .get(self.cursor + ahead)
            .map_or(SyntaxKind::EndOfFileToken, |t| t.kind)
    }

    #[inline]
    pub(super) fn next_token(&mut self) {
        if self.cursor + 1 < self.tokens.len() {
            self.cursor += 1;
        }
    }

    pub(super) fn token_text(&self) -> &'a str {
        self.current().text(self.source)
    }

    pub(super) fn parse_optional(&mut self, kind: SyntaxKind) -> bool {
        if self.is_token(kind) {
            self.next_token();
            true
        } else {
            false
        }
    }

    pub(super) fn parse_expected(&mut self, kind: SyntaxKind) -> ParseResult<Token> {
        let token = self.current();
        if token.kind != kind {
            return Err(self.error_expected(&format!("'{}'", kind.describe())));
        }
        self.next_token();
        Ok(token)
    }

    pub(super) fn parse_identifier(&mut self) -> ParseResult<Ident> {
        let token = self.current();
        if token.kind != SyntaxKind::Identifier {
            return Err(self.error_expected("name"));
        }
        self.next_token();
        Ok(Ident {
            name: token.text(self.source).to_string(),
            line: token.line,
        })
    }

    /// Statement terminator: a `;` is required unless the next token closes
    /// the enclosing list.
    pub(super) fn parse_semicolon(&mut self) -> ParseResult<()> {
        match self.token() {
            SyntaxKind::SemicolonToken => {
                self.next_token();
                Ok(())
            }
            SyntaxKind::CloseParenToken | SyntaxKind::CloseBraceToken => Ok(()),
            _ => Err(self.error_expected("';'")),
        }
    }

    // =========================================================================
    // Nesting
    // =========================================================================

    pub(super) fn enter(&mut self) -> ParseResult<()> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(self.error_at(self.current(), "nesting too deep"));
        }
        Ok(())
    }

    pub(super) fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Skip from an opening bracket to just past its matching close.
    pub(super) fn skip_balanced(&mut self) -> ParseResult<()> {
        let Some(close) = self.token().closing_bracket() else {
            return Err(self.error_expected("'(', '[' or '{'"));
        };
        self.enter()?;
        self.next_token();
        loop {
            let kind = self.token();
            if kind == close {
                self.next_token();
                break;
            }
            if kind == SyntaxKind::EndOfFileToken || kind.is_close_bracket() {
                return Err(self.error_expected(&format!("'{}'", close.describe())));
            }
            if kind.is_open_bracket() {
                self.skip_balanced()?;
            } else {
                self.next_token();
            }
        }
        self.leave();
        Ok(())
    }

    /// Advance over tokens up to the first one at nesting depth zero that
    /// satisfies `stop`, closes an enclosing bracket, or ends the file.
    /// Returns the covered token index range.
    pub(super) fn skip_run(
        &mut self,
        stop: impl Fn(SyntaxKind) -> bool,
    ) -> ParseResult<(usize, usize)> {
        let start = self.cursor;
        loop {
            let kind = self.token();
            if kind == SyntaxKind::EndOfFileToken || kind.is_close_bracket() || stop(kind) {
                break;
            }
            if kind.is_open_bracket() {
                self.skip_balanced()?;
            } else {
                self.next_token();
            }
        }
        Ok((start, self.cursor))
    }

    /// Index of the bracket closing the one at `open`, within a range that
    /// was already verified to be balanced.
    pub(super) fn matching_close(&self, open: usize, end: usize) -> Option<usize> {
        let mut depth = 0usize;
        for idx in open..end {
            let kind = self.tokens[idx].kind;
            if kind.is_open_bracket() {
                depth += 1;
            } else if kind.is_close_bracket() {
                depth -= 1;
                if depth == 0 {
                    return Some(idx);
                }
            }
        }
        None
    }

    // =========================================================================
    // Errors
    // =========================================================================

    pub(super) fn error_at(&self, token: Token, message: impl Into<String>) -> ParseError {
        let location = self.line_map.location_of(token.pos);
        ParseError {
            filename: self.file_name.clone(),
            line: location.line,
            column: location.column,
            message: message.into(),
        }
    }

    pub(super) fn error_expected(&self, expected: &str) -> ParseError {
        let found = self.describe_current();
        self.error_at(self.current(), format!("expected {expected}, found {found}"))
    }

    fn describe_current(&self) -> String {
        let token = self.current();
        match token.kind {
            SyntaxKind::Identifier => token.text(self.source).to_string(),
            kind if kind.is_literal() => token.text(self.source).to_string(),
            SyntaxKind::SemicolonToken if token.implicit => "newline".to_string(),
            SyntaxKind::EndOfFileToken => "EOF".to_string(),
            SyntaxKind::OperatorToken => format!("'{}'", token.text(self.source)),
            kind => format!("'{}'", kind.describe()),
        }
    }
}
