//! Scanner state machine.
//!
//! Produces Go tokens one at a time. Whitespace and comments are skipped;
//! semicolons are inserted at line ends following Go's insertion rules
//! (identifiers, literals, `break`, `continue`,
//! `fallthrough`, `return`, `++`, `--`, `)`, `]` and `}` end a statement
//! when a newline follows them).

use crate::error::{ScanError, ScanErrorKind};
use crate::syntax_kind::{SyntaxKind, text_to_keyword};
use opcheck_common::LineMap;
use opcheck_common::limits::SOURCE_BYTES_PER_TOKEN_HINT;

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// A scanned token. Text is recovered by slicing the source with
/// `pos..end`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub pos: u32,
    pub end: u32,
    /// 1-based line of `pos`.
    pub line: u32,
    /// Semicolon inserted at a newline or at EOF rather than written.
    pub implicit: bool,
}

impl Token {
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.pos as usize..self.end as usize]
    }
}

pub struct ScannerState<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
    line_map: LineMap,
    insert_semicolon: bool,
}

impl<'a> ScannerState<'a> {
    pub fn new(text: &'a str) -> Self {
        let pos = if text.starts_with(BYTE_ORDER_MARK) {
            BYTE_ORDER_MARK.len_utf8()
        } else {
            0
        };
        ScannerState {
            text,
            bytes: text.as_bytes(),
            pos,
            line_map: LineMap::build(text),
            insert_semicolon: false,
        }
    }

    pub fn into_line_map(self) -> LineMap {
        self.line_map
    }

    /// Scan the next token. Once the end of input is reached every call
    /// returns `EndOfFileToken`.
    pub fn scan(&mut self) -> Result<Token, ScanError> {
        loop {
            let Some(&ch) = self.bytes.get(self.pos) else {
                if self.insert_semicolon {
                    self.insert_semicolon = false;
                    return Ok(self.implicit_semicolon(self.pos));
                }
                return Ok(self.token(SyntaxKind::EndOfFileToken, self.pos, self.pos));
            };

            match ch {
                b' ' | b'\t' | b'\r' => self.pos += 1,
                b'\n' => {
                    let newline = self.pos;
                    self.pos += 1;
                    if self.insert_semicolon {
                        self.insert_semicolon = false;
                        return Ok(self.implicit_semicolon(newline));
                    }
                }
                b'/' if self.peek(1) == Some(b'/') => {
                    // Stop before the newline so semicolon insertion sees it.
                    self.pos = match memchr::memchr(b'\n', &self.bytes[self.pos..]) {
                        Some(offset) => self.pos + offset,
                        None => self.bytes.len(),
                    };
                }
                b'/' if self.peek(1) == Some(b'*') => {
                    let start = self.pos;
                    let Some(offset) = memchr::memmem::find(&self.bytes[start + 2..], b"*/") else {
                        return Err(self.error(ScanErrorKind::UnterminatedComment, start));
                    };
                    let end = start + 2 + offset + 2;
                    self.pos = end;
                    // A general comment spanning lines acts like a newline.
                    let spans_lines = memchr::memchr(b'\n', &self.bytes[start..end]).is_some();
                    if spans_lines && self.insert_semicolon {
                        self.insert_semicolon = false;
                        return Ok(self.implicit_semicolon(start));
                    }
                }
                _ => {
                    let token = self.scan_token()?;
                    self.insert_semicolon = token.kind.triggers_semicolon();
                    return Ok(token);
                }
            }
        }
    }

    fn scan_token(&mut self) -> Result<Token, ScanError> {
        let start = self.pos;
        let ch = self.text[start..].chars().next().unwrap_or('\0');

        if is_letter(ch) {
            return Ok(self.scan_identifier(start));
        }
        if ch.is_ascii_digit() || (ch == '.' && self.peek(1).is_some_and(|b| b.is_ascii_digit()))
        {
            return Ok(self.scan_number(start));
        }
        match ch {
            '"' => self.scan_string(start),
            '`' => self.scan_raw_string(start),
            '\'' => self.scan_rune(start),
            _ => self.scan_punctuation(start, ch),
        }
    }

    fn scan_identifier(&mut self, start: usize) -> Token {
        let end = self.text[start..]
            .char_indices()
            .find(|&(_, c)| !(is_letter(c) || c.is_numeric()))
            .map_or(self.bytes.len(), |(offset, _)| start + offset);
        self.pos = end;
        let kind = text_to_keyword(&self.text[start..end]).unwrap_or(SyntaxKind::Identifier);
        self.token(kind, start, end)
    }

    fn scan_number(&mut self, start: usize) -> Token {
        let bytes = self.bytes;
        let mut pos = start;
        let mut kind = SyntaxKind::IntLiteral;

        let hex = bytes[pos] == b'0' && matches!(bytes.get(pos + 1), Some(b'x' | b'X'));
        let prefixed = bytes[pos] == b'0' && matches!(bytes.get(pos + 1), Some(b'b' | b'B' | b'o' | b'O'));
        if hex || prefixed {
            pos += 2;
        }

        while let Some(&b) = bytes.get(pos) {
            match b {
                b'0'..=b'9' | b'_' => pos += 1,
                b'a'..=b'f' | b'A'..=b'F' if hex => pos += 1,
                b'.' => {
                    kind = SyntaxKind::FloatLiteral;
                    pos += 1;
                }
                b'e' | b'E' | b'p' | b'P' => {
                    kind = SyntaxKind::FloatLiteral;
                    pos += 1;
                    if matches!(bytes.get(pos), Some(b'+' | b'-')) {
                        pos += 1;
                    }
                }
                b'i' => {
                    kind = SyntaxKind::ImaginaryLiteral;
                    pos += 1;
                    break;
                }
                _ => break,
            }
        }

        self.pos = pos;
        self.token(kind, start, pos)
    }

    fn scan_string(&mut self, start: usize) -> Result<Token, ScanError> {
        let mut pos = start + 1;
        loop {
            match self.bytes.get(pos) {
                None => return Err(self.error(ScanErrorKind::UnterminatedString, start)),
                Some(b'\n') => return Err(self.error(ScanErrorKind::NewlineInString, start)),
                // An escaped newline still ends the line.
                Some(b'\\') => match self.bytes.get(pos + 1) {
                    None => return Err(self.error(ScanErrorKind::UnterminatedString, start)),
                    Some(b'\n') => {
                        return Err(self.error(ScanErrorKind::NewlineInString, start));
                    }
                    Some(_) => pos += 2,
                },
                Some(b'"') => break,
                Some(_) => pos += 1,
            }
        }
        self.pos = pos + 1;
        Ok(self.token(SyntaxKind::StringLiteral, start, self.pos))
    }

    fn scan_raw_string(&mut self, start: usize) -> Result<Token, ScanError> {
        let Some(offset) = memchr::memchr(b'`', &self.bytes[start + 1..]) else {
            return Err(self.error(ScanErrorKind::UnterminatedRawString, start));
        };
        self.pos = start + 1 + offset + 1;
        Ok(self.token(SyntaxKind::StringLiteral, start, self.pos))
    }

    fn scan_rune(&mut self, start: usize) -> Result<Token, ScanError> {
        let mut pos = start + 1;
        loop {
            match self.bytes.get(pos) {
                None | Some(b'\n') => {
                    return Err(self.error(ScanErrorKind::UnterminatedRune, start));
                }
                Some(b'\\') => match self.bytes.get(pos + 1) {
                    None | Some(b'\n') => {
                        return Err(self.error(ScanErrorKind::UnterminatedRune, start));
                    }
                    Some(_) => pos += 2,
                },
                Some(b'\'') => break,
                Some(_) => pos += 1,
            }
        }
        self.pos = pos + 1;
        Ok(self.token(SyntaxKind::RuneLiteral, start, self.pos))
    }

    fn scan_punctuation(&mut self, start: usize, ch: char) -> Result<Token, ScanError> {
        use SyntaxKind::*;

        let (kind, len) = match &self.bytes[start..] {
            [b'.', b'.', b'.', ..] => (DotDotDotToken, 3),
            [b'.', ..] => (DotToken, 1),
            [b'(', ..] => (OpenParenToken, 1),
            [b')', ..] => (CloseParenToken, 1),
            [b'[', ..] => (OpenBracketToken, 1),
            [b']', ..] => (CloseBracketToken, 1),
            [b'{', ..] => (OpenBraceToken, 1),
            [b'}', ..] => (CloseBraceToken, 1),
            [b',', ..] => (CommaToken, 1),
            [b';', ..] => (SemicolonToken, 1),
            [b'<', b'<', b'=', ..] | [b'>', b'>', b'=', ..] | [b'&', b'^', b'=', ..] => {
                (OperatorToken, 3)
            }
            [b'<', b'-', ..] => (LessThanMinusToken, 2),
            [b'+', b'+', ..] => (PlusPlusToken, 2),
            [b'-', b'-', ..] => (MinusMinusToken, 2),
            [b'&', b'&', ..]
            | [b'|', b'|', ..]
            | [b'=', b'=', ..]
            | [b'!', b'=', ..]
            | [b'<', b'=', ..]
            | [b'>', b'=', ..]
            | [b':', b'=', ..]
            | [b'<', b'<', ..]
            | [b'>', b'>', ..]
            | [b'&', b'^', ..]
            | [b'+' | b'-' | b'*' | b'/' | b'%' | b'&' | b'|' | b'^', b'=', ..] => {
                (OperatorToken, 2)
            }
            [b'*', ..] => (AsteriskToken, 1),
            [b'=', ..] => (EqualsToken, 1),
            [b':', ..] => (ColonToken, 1),
            [
                b'+' | b'-' | b'/' | b'%' | b'&' | b'|' | b'^' | b'<' | b'>' | b'!' | b'~',
                ..,
            ] => (OperatorToken, 1),
            _ => return Err(self.error(ScanErrorKind::InvalidCharacter(ch), start)),
        };

        self.pos = start + len;
        Ok(self.token(kind, start, self.pos))
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    #[inline]
    fn peek(&self, ahead: usize) -> Option<u8> {
        self.bytes.get(self.pos + ahead).copied()
    }

    fn token(&self, kind: SyntaxKind, pos: usize, end: usize) -> Token {
        Token {
            kind,
            pos: pos as u32,
            end: end as u32,
            line: self.line_map.line_of(pos as u32),
            implicit: false,
        }
    }

    fn implicit_semicolon(&self, pos: usize) -> Token {
        Token {
            implicit: true,
            ..self.token(SyntaxKind::SemicolonToken, pos, pos)
        }
    }

    fn error(&self, kind: ScanErrorKind, pos: usize) -> ScanError {
        ScanError {
            kind,
            pos: pos as u32,
        }
    }
}

fn is_letter(ch: char) -> bool {
    ch == '_' || ch.is_alphabetic()
}

/// Scan the whole text. The returned buffer always ends with
/// `EndOfFileToken`.
pub fn tokenize(text: &str) -> Result<(Vec<Token>, LineMap), ScanError> {
    let mut scanner = ScannerState::new(text);
    let mut tokens = Vec::with_capacity(text.len() / SOURCE_BYTES_PER_TOKEN_HINT + 1);
    loop {
        let token = scanner.scan()?;
        tokens.push(token);
        if token.kind == SyntaxKind::EndOfFileToken {
            break;
        }
    }
    Ok((tokens, scanner.into_line_map()))
}
