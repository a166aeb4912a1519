use thiserror::Error;

/// Classification of lexical errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ScanErrorKind {
    #[error("invalid character {0:?} in source")]
    InvalidCharacter(char),
    #[error("newline in string")]
    NewlineInString,
    #[error("string literal not terminated")]
    UnterminatedString,
    #[error("raw string literal not terminated")]
    UnterminatedRawString,
    #[error("rune literal not terminated")]
    UnterminatedRune,
    #[error("comment not terminated")]
    UnterminatedComment,
}

/// A lexical error at a byte offset of the scanned text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ScanError {
    pub kind: ScanErrorKind,
    pub pos: u32,
}
