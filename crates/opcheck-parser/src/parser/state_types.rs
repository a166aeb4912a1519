//! Parser state - type expressions and parameter lists
use super::ast::{Field, FieldList, Ident, TypeExpr};
use super::state::{ParseResult, ParserState};
use opcheck_scanner::{SyntaxKind, Token};

/// One comma-separated entry of a parameter list, before grouping.
enum ParameterItem {
    /// A lone identifier: a parameter name or a type name, decided by the
    /// rest of the list.
    Bare(Ident),
    Named(Ident, TypeExpr),
    Unnamed(TypeExpr),
}

pub(super) fn can_start_type(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::Identifier
            | SyntaxKind::AsteriskToken
            | SyntaxKind::OpenParenToken
            | SyntaxKind::OpenBracketToken
            | SyntaxKind::MapKeyword
            | SyntaxKind::ChanKeyword
            | SyntaxKind::FuncKeyword
            | SyntaxKind::StructKeyword
            | SyntaxKind::InterfaceKeyword
            | SyntaxKind::LessThanMinusToken
    )
}

impl ParserState<'_> {
    pub(super) fn parse_type(&mut self) -> ParseResult<TypeExpr> {
        self.enter()?;
        let ty = self.parse_type_worker()?;
        self.leave();
        Ok(ty)
    }

    fn parse_type_worker(&mut self) -> ParseResult<TypeExpr> {
        match self.token() {
            SyntaxKind::Identifier => {
                let name = self.parse_identifier()?.name;
                let mut ty = if self.parse_optional(SyntaxKind::DotToken) {
                    TypeExpr::Qualified {
                        package: name,
                        name: self.parse_identifier()?.name,
                    }
                } else {
                    TypeExpr::Ident(name)
                };
                if self.is_token(SyntaxKind::OpenBracketToken) {
                    // Type arguments
                    self.skip_balanced()?;
                    ty = TypeExpr::Generic(Box::new(ty));
                }
                Ok(ty)
            }
            SyntaxKind::AsteriskToken => {
                self.next_token();
                Ok(TypeExpr::Star(Box::new(self.parse_type()?)))
            }
            SyntaxKind::OpenParenToken => {
                self.next_token();
                let inner = self.parse_type()?;
                self.parse_expected(SyntaxKind::CloseParenToken)?;
                Ok(TypeExpr::Paren(Box::new(inner)))
            }
            SyntaxKind::OpenBracketToken => {
                // Array or slice: `[N]T`, `[...]T`, `[]T`
                self.skip_balanced()?;
                self.parse_type()?;
                Ok(TypeExpr::Other)
            }
            SyntaxKind::MapKeyword => {
                self.next_token();
                if !self.is_token(SyntaxKind::OpenBracketToken) {
                    return Err(self.error_expected("'['"));
                }
                self.skip_balanced()?;
                self.parse_type()?;
                Ok(TypeExpr::Other)
            }
            SyntaxKind::ChanKeyword => {
                self.next_token();
                self.parse_optional(SyntaxKind::LessThanMinusToken);
                self.parse_type()?;
                Ok(TypeExpr::Other)
            }
            SyntaxKind::LessThanMinusToken => {
                self.next_token();
                self.parse_expected(SyntaxKind::ChanKeyword)?;
                self.parse_type()?;
                Ok(TypeExpr::Other)
            }
            SyntaxKind::FuncKeyword => {
                self.next_token();
                if !self.is_token(SyntaxKind::OpenParenToken) {
                    return Err(self.error_expected("'('"));
                }
                self.skip_balanced()?;
                self.parse_result()?;
                Ok(TypeExpr::Other)
            }
            SyntaxKind::StructKeyword | SyntaxKind::InterfaceKeyword => {
                self.next_token();
                if !self.is_token(SyntaxKind::OpenBraceToken) {
                    return Err(self.error_expected("'{'"));
                }
                self.skip_balanced()?;
                Ok(TypeExpr::Other)
            }
            _ => Err(self.error_expected("type")),
        }
    }

    /// Optional function result: a parenthesized list or a single type.
    pub(super) fn parse_result(&mut self) -> ParseResult<()> {
        if self.is_token(SyntaxKind::OpenParenToken) {
            self.skip_balanced()?;
        } else if can_start_type(self.token()) {
            self.parse_type()?;
        }
        Ok(())
    }

    /// Parse a parenthesized parameter list into fields, grouping
    /// `a, b T` the way Go does.
    pub(super) fn parse_parameters(&mut self) -> ParseResult<FieldList> {
        let open = self.parse_expected(SyntaxKind::OpenParenToken)?;
        self.enter()?;
        let mut items = Vec::new();
        while !self.is_token(SyntaxKind::CloseParenToken) {
            items.push(self.parse_parameter_item()?);
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }
        self.parse_expected(SyntaxKind::CloseParenToken)?;
        self.leave();
        self.group_parameters(items, open)
    }

    fn parse_parameter_item(&mut self) -> ParseResult<ParameterItem> {
        if self.parse_optional(SyntaxKind::DotDotDotToken) {
            self.parse_type()?;
            return Ok(ParameterItem::Unnamed(TypeExpr::Other));
        }
        if !self.is_token(SyntaxKind::Identifier) {
            return Ok(ParameterItem::Unnamed(self.parse_type()?));
        }

        let token = self.current();
        let ident = Ident {
            name: token.text(self.source).to_string(),
            line: token.line,
        };
        match self.peek_kind(1) {
            SyntaxKind::CommaToken | SyntaxKind::CloseParenToken => {
                self.next_token();
                Ok(ParameterItem::Bare(ident))
            }
            SyntaxKind::DotToken => Ok(ParameterItem::Unnamed(self.parse_type()?)),
            SyntaxKind::OpenBracketToken => {
                // `a [N]T` names a parameter; `T[A]` is an instantiated type.
                let saved = self.cursor;
                self.next_token();
                self.skip_balanced()?;
                let named = can_start_type(self.token());
                self.cursor = saved;
                if named {
                    self.next_token();
                    Ok(ParameterItem::Named(ident, self.parse_type()?))
                } else {
                    Ok(ParameterItem::Unnamed(self.parse_type()?))
                }
            }
            SyntaxKind::DotDotDotToken => {
                self.next_token();
                self.next_token();
                self.parse_type()?;
                Ok(ParameterItem::Named(ident, TypeExpr::Other))
            }
            _ => {
                self.next_token();
                Ok(ParameterItem::Named(ident, self.parse_type()?))
            }
        }
    }

    fn group_parameters(&self, items: Vec<ParameterItem>, open: Token) -> ParseResult<FieldList> {
        let named = items
            .iter()
            .any(|item| matches!(item, ParameterItem::Named(..)));

        let mut fields = Vec::with_capacity(items.len());
        if !named {
            for item in items {
                let ty = match item {
                    ParameterItem::Bare(ident) => TypeExpr::Ident(ident.name),
                    ParameterItem::Unnamed(ty) | ParameterItem::Named(_, ty) => ty,
                };
                fields.push(Field {
                    names: Vec::new(),
                    ty,
                });
            }
            return Ok(FieldList { fields });
        }

        let mut pending = Vec::new();
        for item in items {
            match item {
                ParameterItem::Bare(ident) => pending.push(ident),
                ParameterItem::Named(ident, ty) => {
                    pending.push(ident);
                    fields.push(Field {
                        names: std::mem::take(&mut pending),
                        ty,
                    });
                }
                ParameterItem::Unnamed(_) => {
                    return Err(self.error_at(open, "mixed named and unnamed parameters"));
                }
            }
        }
        if !pending.is_empty() {
            return Err(self.error_at(open, "mixed named and unnamed parameters"));
        }
        Ok(FieldList { fields })
    }
}
