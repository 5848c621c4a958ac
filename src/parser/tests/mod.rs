//! Unit tests for the parser module.

use super::*;
use crate::ast::{Expr, ExprKind, LiteralValue, Program, Stmt, StmtKind};
use crate::lexer::Lexer;

mod expr;

/// Lexes and parses `source`, panicking on parse failure.
pub(super) fn parse_program(source: &str) -> Program {
    let tokens = Lexer::new(source).tokenize();
    Parser::new(tokens)
        .parse()
        .unwrap_or_else(|e| panic!("Parse failed for {:?}: {}", source, e))
}

/// Lexes and parses `source`, panicking unless parsing fails.
pub(super) fn parse_error(source: &str) -> ParseError {
    let tokens = Lexer::new(source).tokenize();
    match Parser::new(tokens).parse() {
        Ok(program) => panic!(
            "Expected parse to fail for {:?}, got {} statements",
            source,
            program.statements.len()
        ),
        Err(e) => e,
    }
}

/// Parses a single statement from `source`.
pub(super) fn parse_stmt(source: &str) -> Stmt {
    let mut program = parse_program(source);
    assert_eq!(
        program.statements.len(),
        1,
        "expected exactly one statement in {:?}",
        source
    );
    program.statements.remove(0)
}

/// Parses `source` as a lone expression statement and returns the expression.
pub(super) fn parse_expr(source: &str) -> Expr {
    let stmt = parse_stmt(&format!("{};", source));
    match stmt.kind {
        StmtKind::Expr(expr) => expr,
        other => panic!("expected expression statement, got {:?}", other),
    }
}

/// Asserts that `expr` is an integer literal with the given value.
pub(super) fn assert_int(expr: &Expr, expected: i64) {
    assert!(
        matches!(expr.kind, ExprKind::Literal(LiteralValue::Int(v)) if v == expected),
        "expected Int({}), got {:?}",
        expected,
        expr.kind
    );
}
