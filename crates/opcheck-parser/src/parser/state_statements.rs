//! Parser state - blocks, statements and declaration specs
use super::ast::{
    BasicLit, Block, DeclKeyword, Expr, GenDecl, Ident, LitKind, Spec, Stmt, TypeSpec, ValueSpec,
};
use super::state::{ParseResult, ParserState};
use opcheck_scanner::SyntaxKind;

fn literal_kind(kind: SyntaxKind) -> Option<LitKind> {
    match kind {
        SyntaxKind::IntLiteral => Some(LitKind::Int),
        SyntaxKind::FloatLiteral => Some(LitKind::Float),
        SyntaxKind::ImaginaryLiteral => Some(LitKind::Imaginary),
        SyntaxKind::RuneLiteral => Some(LitKind::Char),
        SyntaxKind::StringLiteral => Some(LitKind::String),
        _ => None,
    }
}

impl ParserState<'_> {
    /// Parse `{ statements }`.
    pub(super) fn parse_block(&mut self) -> ParseResult<Block> {
        let open = self.parse_expected(SyntaxKind::OpenBraceToken)?;
        self.enter()?;

        let mut statements = Vec::new();
        loop {
            match self.token() {
                SyntaxKind::CloseBraceToken => break,
                SyntaxKind::EndOfFileToken => return Err(self.error_expected("'}'")),
                SyntaxKind::SemicolonToken => {
                    statements.push(Stmt::Empty {
                        line: self.current().line,
                    });
                    self.next_token();
                }
                _ => {
                    statements.push(self.parse_statement()?);
                    self.parse_semicolon()?;
                }
            }
        }

        let close = self.parse_expected(SyntaxKind::CloseBraceToken)?;
        self.leave();
        Ok(Block {
            lbrace_line: open.line,
            rbrace_line: close.line,
            statements,
        })
    }

    fn parse_statement(&mut self) -> ParseResult<Stmt> {
        match self.token() {
            SyntaxKind::ConstKeyword | SyntaxKind::VarKeyword | SyntaxKind::TypeKeyword => {
                Ok(Stmt::Decl(self.parse_gen_declaration()?))
            }
            _ => {
                let line = self.current().line;
                let (start, end) = self.skip_run(|kind| kind == SyntaxKind::SemicolonToken)?;
                if start == end {
                    return Err(self.error_expected("statement"));
                }
                Ok(Stmt::Other { line })
            }
        }
    }

    /// `const`, `var` or `type`, either a single spec or a parenthesized group.
    pub(super) fn parse_gen_declaration(&mut self) -> ParseResult<GenDecl> {
        let token = self.current();
        let keyword = match token.kind {
            SyntaxKind::ConstKeyword => DeclKeyword::Const,
            SyntaxKind::VarKeyword => DeclKeyword::Var,
            SyntaxKind::TypeKeyword => DeclKeyword::Type,
            _ => return Err(self.error_expected("declaration")),
        };
        self.next_token();

        let mut specs = Vec::new();
        let grouped = self.parse_optional(SyntaxKind::OpenParenToken);
        if grouped {
            self.enter()?;
            while !self.is_token(SyntaxKind::CloseParenToken)
                && !self.is_token(SyntaxKind::EndOfFileToken)
            {
                let spec = self.parse_spec(keyword, specs.len())?;
                specs.push(spec);
                self.parse_semicolon()?;
            }
            self.parse_expected(SyntaxKind::CloseParenToken)?;
            self.leave();
        } else {
            specs.push(self.parse_spec(keyword, 0)?);
        }

        Ok(GenDecl {
            keyword,
            line: token.line,
            grouped,
            specs,
        })
    }

    fn parse_spec(&mut self, keyword: DeclKeyword, index: usize) -> ParseResult<Spec> {
        if keyword == DeclKeyword::Type {
            let name = self.parse_identifier()?;
            let alias = self.parse_optional(SyntaxKind::EqualsToken);
            let (start, end) = self.skip_run(|kind| kind == SyntaxKind::SemicolonToken)?;
            if start == end {
                return Err(self.error_expected("type"));
            }
            return Ok(Spec::Type(TypeSpec { name, alias }));
        }

        let first = self.current();
        let mut names: Vec<Ident> = vec![self.parse_identifier()?];
        while self.parse_optional(SyntaxKind::CommaToken) {
            names.push(self.parse_identifier()?);
        }

        let ty = match self.token() {
            SyntaxKind::EqualsToken
            | SyntaxKind::SemicolonToken
            | SyntaxKind::CloseParenToken
            | SyntaxKind::CloseBraceToken
            | SyntaxKind::EndOfFileToken => None,
            _ => Some(self.parse_type()?),
        };
        let values = if self.parse_optional(SyntaxKind::EqualsToken) {
            self.parse_expression_list()?
        } else {
            Vec::new()
        };

        match keyword {
            DeclKeyword::Var if ty.is_none() && values.is_empty() => {
                Err(self.error_at(first, "missing variable type or initialization"))
            }
            DeclKeyword::Const if values.is_empty() && (index == 0 || ty.is_some()) => {
                Err(self.error_at(first, "missing init expr for const declaration"))
            }
            _ => Ok(Spec::Value(ValueSpec { names, ty, values })),
        }
    }

    fn parse_expression_list(&mut self) -> ParseResult<Vec<Expr>> {
        let mut exprs = vec![self.parse_expression()?];
        while self.parse_optional(SyntaxKind::CommaToken) {
            exprs.push(self.parse_expression()?);
        }
        Ok(exprs)
    }

    fn parse_expression(&mut self) -> ParseResult<Expr> {
        let (start, end) = self.skip_run(|kind| {
            matches!(kind, SyntaxKind::CommaToken | SyntaxKind::SemicolonToken)
        })?;
        if start == end {
            return Err(self.error_expected("expression"));
        }
        Ok(self.classify_expression(start, end))
    }

    /// Reduce the token range `start..end` to the expression shapes the
    /// checker distinguishes.
    fn classify_expression(&self, start: usize, end: usize) -> Expr {
        let first = self.tokens[start];
        if end - start == 1 {
            if let Some(kind) = literal_kind(first.kind) {
                return Expr::BasicLit(BasicLit {
                    kind,
                    raw: first.text(self.source).to_string(),
                    line: first.line,
                });
            }
            if first.kind == SyntaxKind::Identifier {
                return Expr::Ident(Ident {
                    name: first.text(self.source).to_string(),
                    line: first.line,
                });
            }
        }
        if first.kind == SyntaxKind::OpenParenToken
            && end - start > 2
            && self.matching_close(start, end) == Some(end - 1)
        {
            return Expr::Paren(Box::new(self.classify_expression(start + 1, end - 1)));
        }
        Expr::Other { line: first.line }
    }
}
