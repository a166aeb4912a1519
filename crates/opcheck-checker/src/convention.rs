//! The `const op` convention.
//!
//! Every function body must open with
//!
//! ```go
//! const op = "<qualified name>"
//! ```
//!
//! A single declaration with one name and one string literal value. The
//! entry function `main` is exempt.

use opcheck_common::{Declaration, Diagnostic, ENTRY_FUNCTION, OP_CONSTANT, Position};
use opcheck_parser::ast::{DeclKeyword, Expr, FuncDecl, GenDecl, Spec, Stmt};

/// Outcome of checking one function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Accepted(Declaration),
    Rejected(Diagnostic),
    /// Exempt from the convention.
    Skipped,
}

/// Check the first statement of `decl` against its qualified name.
pub fn check_function(file_name: &str, decl: &FuncDecl, qualified_name: &str) -> Verdict {
    if qualified_name == ENTRY_FUNCTION {
        return Verdict::Skipped;
    }

    let not_found = |line: u32| {
        Verdict::Rejected(Diagnostic::not_found(
            Position::new(file_name, line),
            qualified_name,
        ))
    };

    let Some(body) = &decl.body else {
        return not_found(decl.line);
    };
    let Some(first) = body.statements.first() else {
        return not_found(body.lbrace_line);
    };
    let Stmt::Decl(gen_decl) = first else {
        return not_found(body.lbrace_line);
    };

    let line = gen_decl.line;
    let Some(opname) = op_value(gen_decl) else {
        return not_found(line);
    };

    let position = Position::new(file_name, line);
    if opname != qualified_name {
        return Verdict::Rejected(Diagnostic::not_same(position, qualified_name));
    }
    Verdict::Accepted(Declaration {
        name: qualified_name.to_string(),
        position,
    })
}

/// The unquoted value of `const op = "..."`, or `None` when the declaration
/// has any other shape.
fn op_value(decl: &GenDecl) -> Option<&str> {
    if decl.keyword != DeclKeyword::Const {
        return None;
    }
    let [Spec::Value(spec)] = decl.specs.as_slice() else {
        return None;
    };
    let ([name], [value]) = (spec.names.as_slice(), spec.values.as_slice()) else {
        return None;
    };
    if name.name != OP_CONSTANT {
        return None;
    }
    let Expr::BasicLit(lit) = value else {
        return None;
    };
    let raw = lit.raw.as_str();
    if raw.len() < 3 || !raw.starts_with('"') || !raw.ends_with('"') {
        return None;
    }
    Some(&raw[1..raw.len() - 1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declarations::extract;
    use opcheck_common::ErrorCode;
    use opcheck_parser::parse_file;

    /// Check every function of a one-file package and return the verdicts.
    fn verdicts(body_source: &str) -> Vec<Verdict> {
        let source = format!("package p\n\n{body_source}");
        let file = parse_file("f.go", &source).unwrap();
        extract(&file)
            .map(|record| check_function("f.go", record.decl, &record.qualified_name))
            .collect()
    }

    fn single(body_source: &str) -> Verdict {
        let mut all = verdicts(body_source);
        assert_eq!(all.len(), 1, "expected exactly one function");
        all.remove(0)
    }

    fn rejected(verdict: Verdict) -> Diagnostic {
        match verdict {
            Verdict::Rejected(diag) => diag,
            other => panic!("expected a diagnostic, got {other:?}"),
        }
    }

    #[test]
    fn matching_op_is_accepted() {
        let verdict = single("func func1() (err error) {\n\tconst op = \"func1\"\n\treturn\n}\n");
        assert_eq!(
            verdict,
            Verdict::Accepted(Declaration {
                name: "func1".to_string(),
                position: Position::new("f.go", 4),
            })
        );
    }

    #[test]
    fn pointer_method_needs_the_star() {
        let verdicts = verdicts(
            "type st struct{}\nfunc (s *st) Func4() {\n\tconst op = \"*st.Func4\"\n}\nfunc (s *st) func3() {\n\tconst op = \"st.func3\"\n}\n",
        );
        assert!(matches!(&verdicts[0], Verdict::Accepted(d) if d.name == "*st.Func4"));
        let diag = rejected(verdicts[1].clone());
        assert_eq!(diag.code, ErrorCode::NotSame);
        assert_eq!(diag.expected, "*st.func3");
        assert_eq!(diag.position.line, 8);
    }

    #[test]
    fn mismatched_value_is_not_same() {
        let diag = rejected(single("func Func2() {\n\tconst op = \"wrong\"\n}\n"));
        assert_eq!(diag.code, ErrorCode::NotSame);
        assert_eq!(diag.expected, "Func2");
        assert_eq!(diag.to_string(), "f.go:4: not same values. Expect: \"Func2\"");
    }

    #[test]
    fn missing_op_is_reported_at_the_opening_brace() {
        let diag = rejected(single("func f(\n\tx int,\n) {\n\tprintln(x)\n}\n"));
        assert_eq!(diag.code, ErrorCode::NotFound);
        assert_eq!(diag.position.line, 5);
        assert_eq!(diag.expected, "f");
    }

    #[test]
    fn empty_body_is_not_found() {
        let diag = rejected(single("func f() {\n}\n"));
        assert_eq!(diag.code, ErrorCode::NotFound);
        assert_eq!(diag.position.line, 3);
    }

    #[test]
    fn body_less_declaration_is_reported_at_func_keyword() {
        let diag = rejected(single("func external(x int) int\n"));
        assert_eq!(diag.code, ErrorCode::NotFound);
        assert_eq!(diag.position.line, 3);
    }

    #[test]
    fn op_must_be_the_first_statement() {
        let diag = rejected(single("func f() {\n\tx := 1\n\tconst op = \"f\"\n\t_ = x\n}\n"));
        assert_eq!(diag.code, ErrorCode::NotFound);
        assert_eq!(diag.position.line, 3);

        let diag = rejected(single("func f() {\n\t;\n\tconst op = \"f\"\n}\n"));
        assert_eq!(diag.code, ErrorCode::NotFound);
    }

    #[test]
    fn wrong_declaration_shape_is_reported_at_the_keyword() {
        let cases = [
            "func f() {\n\tvar op = \"f\"\n}\n",
            "func f() {\n\tconst name = \"f\"\n}\n",
            "func f() {\n\tconst op, other = \"f\", 1\n}\n",
            "func f() {\n\tconst (\n\t\top = \"f\"\n\t\tx = 1\n\t)\n}\n",
            "func f() {\n\tconst op = `f`\n}\n",
            "func f() {\n\tconst op = \"\"\n}\n",
            "func f() {\n\tconst op = (\"f\")\n}\n",
            "func f() {\n\tconst op = \"f\" + \"\"\n}\n",
            "func f() {\n\tconst op = name\n}\n",
            "func f() {\n\ttype op string\n}\n",
        ];
        for case in cases {
            let diag = rejected(single(case));
            assert_eq!(diag.code, ErrorCode::NotFound, "{case}");
            assert_eq!(diag.position.line, 4, "{case}");
        }
    }

    #[test]
    fn grouped_single_spec_and_typed_const_are_accepted() {
        let verdict = single("func f() {\n\tconst (\n\t\top = \"f\"\n\t)\n}\n");
        assert!(matches!(verdict, Verdict::Accepted(_)), "{verdict:?}");

        let verdict = single("func f() {\n\tconst op string = \"f\"\n}\n");
        assert!(matches!(verdict, Verdict::Accepted(_)), "{verdict:?}");
    }

    #[test]
    fn escapes_are_compared_verbatim() {
        let diag = rejected(single("func f() {\n\tconst op = \"\\x66\"\n}\n"));
        assert_eq!(diag.code, ErrorCode::NotSame);
    }

    #[test]
    fn main_is_always_skipped() {
        assert_eq!(single("func main() {\n}\n"), Verdict::Skipped);
        assert_eq!(single("func main() {\n\tconst op = \"x\"\n}\n"), Verdict::Skipped);
    }

    #[test]
    fn main_method_is_checked() {
        let diag = rejected(single("type T int\nfunc (T) main() {}\n"));
        assert_eq!(diag.expected, "T.main");
    }
}
