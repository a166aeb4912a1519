//! Function declarations and their qualified names.

use opcheck_parser::ast::{FuncDecl, SourceFile, TypeExpr};

/// A function or method declaration paired with its qualified name.
#[derive(Clone, Debug)]
pub struct FunctionRecord<'a> {
    pub decl: &'a FuncDecl,
    pub qualified_name: String,
}

/// Every function and method of `file`, in source order.
pub fn extract(file: &SourceFile) -> impl Iterator<Item = FunctionRecord<'_>> {
    file.functions().map(|decl| FunctionRecord {
        decl,
        qualified_name: qualified_name(decl),
    })
}

/// `Name` for plain functions, `Recv.Name` or `*Recv.Name` for methods.
pub fn qualified_name(decl: &FuncDecl) -> String {
    let mut name = decl.name.name.clone();
    if let Some(receiver) = &decl.receiver {
        for field in &receiver.fields {
            name = format!("{}.{}", type_name(&field.ty), name);
        }
    }
    name
}

/// Printable receiver type: identifiers and pointers to them. Type arguments
/// and parentheses are dropped; any other shape yields an empty name.
pub fn type_name(ty: &TypeExpr) -> String {
    match ty {
        TypeExpr::Ident(name) => name.clone(),
        TypeExpr::Star(inner) => format!("*{}", type_name(inner)),
        TypeExpr::Paren(inner) | TypeExpr::Generic(inner) => type_name(inner),
        TypeExpr::Qualified { .. } | TypeExpr::Other => String::new(),
    }
}
