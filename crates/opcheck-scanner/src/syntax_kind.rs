use serde::Serialize;

/// Go token kinds.
///
/// Operators the parser never distinguishes are folded into
/// `OperatorToken`; the token text still carries the exact spelling.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum SyntaxKind {
    EndOfFileToken,

    // Names and literals
    Identifier,
    IntLiteral,
    FloatLiteral,
    ImaginaryLiteral,
    RuneLiteral,
    /// Interpreted (`"..."`) or raw (`` `...` ``) string literal.
    StringLiteral,

    // Keywords
    BreakKeyword,
    CaseKeyword,
    ChanKeyword,
    ConstKeyword,
    ContinueKeyword,
    DefaultKeyword,
    DeferKeyword,
    ElseKeyword,
    FallthroughKeyword,
    ForKeyword,
    FuncKeyword,
    GoKeyword,
    GotoKeyword,
    IfKeyword,
    ImportKeyword,
    InterfaceKeyword,
    MapKeyword,
    PackageKeyword,
    RangeKeyword,
    ReturnKeyword,
    SelectKeyword,
    StructKeyword,
    SwitchKeyword,
    TypeKeyword,
    VarKeyword,

    // Punctuation
    OpenParenToken,
    CloseParenToken,
    OpenBracketToken,
    CloseBracketToken,
    OpenBraceToken,
    CloseBraceToken,
    CommaToken,
    SemicolonToken,
    ColonToken,
    DotToken,
    DotDotDotToken,

    // Operators the parser looks at
    AsteriskToken,
    EqualsToken,
    LessThanMinusToken,
    PlusPlusToken,
    MinusMinusToken,
    /// Any other operator (`+`, `:=`, `&&`, `<<=`, ...).
    OperatorToken,
}

impl SyntaxKind {
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            SyntaxKind::IntLiteral
                | SyntaxKind::FloatLiteral
                | SyntaxKind::ImaginaryLiteral
                | SyntaxKind::RuneLiteral
                | SyntaxKind::StringLiteral
        )
    }

    /// Whether a newline directly after this token ends the statement.
    pub fn triggers_semicolon(self) -> bool {
        self.is_literal()
            || matches!(
                self,
                SyntaxKind::Identifier
                    | SyntaxKind::BreakKeyword
                    | SyntaxKind::ContinueKeyword
                    | SyntaxKind::FallthroughKeyword
                    | SyntaxKind::ReturnKeyword
                    | SyntaxKind::PlusPlusToken
                    | SyntaxKind::MinusMinusToken
                    | SyntaxKind::CloseParenToken
                    | SyntaxKind::CloseBracketToken
                    | SyntaxKind::CloseBraceToken
            )
    }

    pub fn is_open_bracket(self) -> bool {
        matches!(
            self,
            SyntaxKind::OpenParenToken | SyntaxKind::OpenBracketToken | SyntaxKind::OpenBraceToken
        )
    }

    pub fn is_close_bracket(self) -> bool {
        matches!(
            self,
            SyntaxKind::CloseParenToken
                | SyntaxKind::CloseBracketToken
                | SyntaxKind::CloseBraceToken
        )
    }

    /// The closing bracket matching an opening one.
    pub fn closing_bracket(self) -> Option<SyntaxKind> {
        match self {
            SyntaxKind::OpenParenToken => Some(SyntaxKind::CloseParenToken),
            SyntaxKind::OpenBracketToken => Some(SyntaxKind::CloseBracketToken),
            SyntaxKind::OpenBraceToken => Some(SyntaxKind::CloseBraceToken),
            _ => None,
        }
    }

    /// Human-readable spelling used in parse error messages.
    pub fn describe(self) -> &'static str {
        match self {
            SyntaxKind::EndOfFileToken => "EOF",
            SyntaxKind::Identifier => "name",
            SyntaxKind::IntLiteral
            | SyntaxKind::FloatLiteral
            | SyntaxKind::ImaginaryLiteral
            | SyntaxKind::RuneLiteral
            | SyntaxKind::StringLiteral => "literal",
            SyntaxKind::BreakKeyword => "break",
            SyntaxKind::CaseKeyword => "case",
            SyntaxKind::ChanKeyword => "chan",
            SyntaxKind::ConstKeyword => "const",
            SyntaxKind::ContinueKeyword => "continue",
            SyntaxKind::DefaultKeyword => "default",
            SyntaxKind::DeferKeyword => "defer",
            SyntaxKind::ElseKeyword => "else",
            SyntaxKind::FallthroughKeyword => "fallthrough",
            SyntaxKind::ForKeyword => "for",
            SyntaxKind::FuncKeyword => "func",
            SyntaxKind::GoKeyword => "go",
            SyntaxKind::GotoKeyword => "goto",
            SyntaxKind::IfKeyword => "if",
            SyntaxKind::ImportKeyword => "import",
            SyntaxKind::InterfaceKeyword => "interface",
            SyntaxKind::MapKeyword => "map",
            SyntaxKind::PackageKeyword => "package",
            SyntaxKind::RangeKeyword => "range",
            SyntaxKind::ReturnKeyword => "return",
            SyntaxKind::SelectKeyword => "select",
            SyntaxKind::StructKeyword => "struct",
            SyntaxKind::SwitchKeyword => "switch",
            SyntaxKind::TypeKeyword => "type",
            SyntaxKind::VarKeyword => "var",
            SyntaxKind::OpenParenToken => "(",
            SyntaxKind::CloseParenToken => ")",
            SyntaxKind::OpenBracketToken => "[",
            SyntaxKind::CloseBracketToken => "]",
            SyntaxKind::OpenBraceToken => "{",
            SyntaxKind::CloseBraceToken => "}",
            SyntaxKind::CommaToken => ",",
            SyntaxKind::SemicolonToken => ";",
            SyntaxKind::ColonToken => ":",
            SyntaxKind::DotToken => ".",
            SyntaxKind::DotDotDotToken => "...",
            SyntaxKind::AsteriskToken => "*",
            SyntaxKind::EqualsToken => "=",
            SyntaxKind::LessThanMinusToken => "<-",
            SyntaxKind::PlusPlusToken => "++",
            SyntaxKind::MinusMinusToken => "--",
            SyntaxKind::OperatorToken => "operator",
        }
    }
}

/// Keyword kind for an identifier spelling, if it is one of Go's 25 keywords.
pub fn text_to_keyword(text: &str) -> Option<SyntaxKind> {
    let kind = match text {
        "break" => SyntaxKind::BreakKeyword,
        "case" => SyntaxKind::CaseKeyword,
        "chan" => SyntaxKind::ChanKeyword,
        "const" => SyntaxKind::ConstKeyword,
        "continue" => SyntaxKind::ContinueKeyword,
        "default" => SyntaxKind::DefaultKeyword,
        "defer" => SyntaxKind::DeferKeyword,
        "else" => SyntaxKind::ElseKeyword,
        "fallthrough" => SyntaxKind::FallthroughKeyword,
        "for" => SyntaxKind::ForKeyword,
        "func" => SyntaxKind::FuncKeyword,
        "go" => SyntaxKind::GoKeyword,
        "goto" => SyntaxKind::GotoKeyword,
        "if" => SyntaxKind::IfKeyword,
        "import" => SyntaxKind::ImportKeyword,
        "interface" => SyntaxKind::InterfaceKeyword,
        "map" => SyntaxKind::MapKeyword,
        "package" => SyntaxKind::PackageKeyword,
        "range" => SyntaxKind::RangeKeyword,
        "return" => SyntaxKind::ReturnKeyword,
        "select" => SyntaxKind::SelectKeyword,
        "struct" => SyntaxKind::StructKeyword,
        "switch" => SyntaxKind::SwitchKeyword,
        "type" => SyntaxKind::TypeKeyword,
        "var" => SyntaxKind::VarKeyword,
        _ => return None,
    };
    Some(kind)
}
