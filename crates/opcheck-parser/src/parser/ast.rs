//! Declaration-level Go syntax tree.
//!
//! Only the shapes the convention checker inspects are modelled in
//! detail; everything else is reduced to an `Other` variant carrying the
//! line it starts on.

use serde::Serialize;

/// A parsed Go source file.
#[derive(Clone, Debug, Serialize)]
pub struct SourceFile {
    pub file_name: String,
    pub package_name: Ident,
    pub imports: Vec<ImportSpec>,
    pub decls: Vec<Decl>,
}

impl SourceFile {
    /// Function and method declarations in source order.
    pub fn functions(&self) -> impl Iterator<Item = &FuncDecl> {
        self.decls.iter().filter_map(|decl| match decl {
            Decl::Func(func) => Some(func),
            Decl::Gen(_) => None,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Ident {
    pub name: String,
    pub line: u32,
}

#[derive(Clone, Debug, Serialize)]
pub struct ImportSpec {
    /// Local name, `.` or `_` when given.
    pub name: Option<Ident>,
    /// Raw path literal including quotes.
    pub path: String,
    pub line: u32,
}

// =============================================================================
// Declarations
// =============================================================================

#[derive(Clone, Debug, Serialize)]
pub enum Decl {
    Gen(GenDecl),
    Func(FuncDecl),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum DeclKeyword {
    Const,
    Var,
    Type,
}

/// A `const`, `var` or `type` declaration, grouped or not.
#[derive(Clone, Debug, Serialize)]
pub struct GenDecl {
    pub keyword: DeclKeyword,
    /// Line of the keyword.
    pub line: u32,
    /// Whether the specs were written inside parentheses.
    pub grouped: bool,
    pub specs: Vec<Spec>,
}

#[derive(Clone, Debug, Serialize)]
pub enum Spec {
    Value(ValueSpec),
    Type(TypeSpec),
}

/// `names [type] [= values]` inside a `const` or `var` declaration.
#[derive(Clone, Debug, Serialize)]
pub struct ValueSpec {
    pub names: Vec<Ident>,
    pub ty: Option<TypeExpr>,
    pub values: Vec<Expr>,
}

#[derive(Clone, Debug, Serialize)]
pub struct TypeSpec {
    pub name: Ident,
    pub alias: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct FuncDecl {
    /// Line of the `func` keyword.
    pub line: u32,
    pub name: Ident,
    pub receiver: Option<FieldList>,
    /// Absent for declarations implemented outside Go.
    pub body: Option<Block>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct FieldList {
    pub fields: Vec<Field>,
}

/// One parameter group: `a, b T` or an unnamed `T`.
#[derive(Clone, Debug, Serialize)]
pub struct Field {
    pub names: Vec<Ident>,
    pub ty: TypeExpr,
}

// =============================================================================
// Types
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum TypeExpr {
    /// `T`
    Ident(String),
    /// `pkg.T`
    Qualified { package: String, name: String },
    /// `*T`
    Star(Box<TypeExpr>),
    /// `(T)`
    Paren(Box<TypeExpr>),
    /// `T[A, B]`; type arguments are not retained.
    Generic(Box<TypeExpr>),
    /// Slices, arrays, maps, channels, functions, structs, interfaces.
    Other,
}

// =============================================================================
// Statements and expressions
// =============================================================================

#[derive(Clone, Debug, Serialize)]
pub struct Block {
    pub lbrace_line: u32,
    pub rbrace_line: u32,
    pub statements: Vec<Stmt>,
}

#[derive(Clone, Debug, Serialize)]
pub enum Stmt {
    /// Local `const`, `var` or `type` declaration.
    Decl(GenDecl),
    /// A lone `;`.
    Empty { line: u32 },
    /// Any other statement, not interpreted further.
    Other { line: u32 },
}

impl Stmt {
    pub fn line(&self) -> u32 {
        match self {
            Stmt::Decl(decl) => decl.line,
            Stmt::Empty { line } | Stmt::Other { line } => *line,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum LitKind {
    Int,
    Float,
    Imaginary,
    Char,
    String,
}

/// A single literal token, kept verbatim (quotes and escapes included).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BasicLit {
    pub kind: LitKind,
    pub raw: String,
    pub line: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Expr {
    BasicLit(BasicLit),
    Ident(Ident),
    Paren(Box<Expr>),
    /// Operators, calls, composite literals, function literals, ...
    Other { line: u32 },
}
