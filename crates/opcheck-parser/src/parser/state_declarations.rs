//! Parser state - source file, import and declaration parsing methods
use super::ast::{Decl, FuncDecl, Ident, ImportSpec, SourceFile};
use super::state::{ParseResult, ParserState};
use opcheck_scanner::SyntaxKind;
use tracing::trace;

impl ParserState<'_> {
    /// Parse a source file: package clause, imports, then declarations.
    pub fn parse_source_file(&mut self) -> ParseResult<SourceFile> {
        self.parse_expected(SyntaxKind::PackageKeyword)?;
        let package_name = self.parse_identifier()?;
        if package_name.name == "_" {
            return Err(self.error_at(self.tokens[self.cursor - 1], "invalid package name _"));
        }
        self.parse_semicolon()?;

        let mut imports = Vec::new();
        while self.is_token(SyntaxKind::ImportKeyword) {
            self.parse_import_declaration(&mut imports)?;
            self.parse_semicolon()?;
        }

        let mut decls = Vec::new();
        while !self.is_token(SyntaxKind::EndOfFileToken) {
            let decl = match self.token() {
                SyntaxKind::ConstKeyword | SyntaxKind::VarKeyword | SyntaxKind::TypeKeyword => {
                    Decl::Gen(self.parse_gen_declaration()?)
                }
                SyntaxKind::FuncKeyword => Decl::Func(self.parse_function_declaration()?),
                SyntaxKind::ImportKeyword => {
                    return Err(self.error_at(
                        self.current(),
                        "imports must appear before other declarations",
                    ));
                }
                _ => return Err(self.error_expected("declaration")),
            };
            decls.push(decl);
            self.parse_semicolon()?;
        }

        trace!(
            file = %self.file_name,
            package = %package_name.name,
            imports = imports.len(),
            decls = decls.len(),
            "parsed source file"
        );

        Ok(SourceFile {
            file_name: self.file_name.clone(),
            package_name,
            imports,
            decls,
        })
    }

    fn parse_import_declaration(&mut self, imports: &mut Vec<ImportSpec>) -> ParseResult<()> {
        self.parse_expected(SyntaxKind::ImportKeyword)?;
        if !self.parse_optional(SyntaxKind::OpenParenToken) {
            imports.push(self.parse_import_spec()?);
            return Ok(());
        }
        while !self.is_token(SyntaxKind::CloseParenToken)
            && !self.is_token(SyntaxKind::EndOfFileToken)
        {
            imports.push(self.parse_import_spec()?);
            self.parse_semicolon()?;
        }
        self.parse_expected(SyntaxKind::CloseParenToken)?;
        Ok(())
    }

    fn parse_import_spec(&mut self) -> ParseResult<ImportSpec> {
        let line = self.current().line;
        let name = match self.token() {
            SyntaxKind::DotToken => {
                self.next_token();
                Some(Ident {
                    name: ".".to_string(),
                    line,
                })
            }
            SyntaxKind::Identifier => Some(self.parse_identifier()?),
            _ => None,
        };
        if !self.is_token(SyntaxKind::StringLiteral) {
            return Err(self.error_expected("import path"));
        }
        let path = self.token_text().to_string();
        self.next_token();
        Ok(ImportSpec { name, path, line })
    }

    /// `func [receiver] name [type params] (params) [result] [body]`
    pub(super) fn parse_function_declaration(&mut self) -> ParseResult<FuncDecl> {
        let func_token = self.parse_expected(SyntaxKind::FuncKeyword)?;

        let receiver = if self.is_token(SyntaxKind::OpenParenToken) {
            let open = self.current();
            let receiver = self.parse_parameters()?;
            if receiver.fields.is_empty() {
                return Err(self.error_at(open, "method has no receiver"));
            }
            Some(receiver)
        } else {
            None
        };

        let name = self.parse_identifier()?;

        if self.is_token(SyntaxKind::OpenBracketToken) {
            // Type parameters
            self.skip_balanced()?;
        }
        if !self.is_token(SyntaxKind::OpenParenToken) {
            return Err(self.error_expected("'('"));
        }
        self.skip_balanced()?;
        self.parse_result()?;

        let body = if self.is_token(SyntaxKind::OpenBraceToken) {
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(FuncDecl {
            line: func_token.line,
            name,
            receiver,
            body,
        })
    }
}
