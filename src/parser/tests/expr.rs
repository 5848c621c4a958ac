//! Tests for expression parsing and operator precedence.

use super::*;
use crate::ast::{BinaryOp, LogicalOp, UnaryOp};

#[test]
fn test_int_literal() {
    let expr = parse_expr("42");
    assert_int(&expr, 42);
}

#[test]
fn test_float_literal() {
    let expr = parse_expr("3.14");
    assert!(matches!(
        expr.kind,
        ExprKind::Literal(LiteralValue::Float(v)) if v == 3.14
    ));
}

#[test]
fn test_string_literal() {
    let expr = parse_expr(r#""hi""#);
    assert!(matches!(
        expr.kind,
        ExprKind::Literal(LiteralValue::Str(ref s)) if s == "hi"
    ));
}

#[test]
fn test_char_literal() {
    let expr = parse_expr("'A'");
    assert!(matches!(
        expr.kind,
        ExprKind::Literal(LiteralValue::Char('A'))
    ));
}

#[test]
fn test_variable() {
    let expr = parse_expr("x");
    assert!(matches!(expr.kind, ExprKind::Variable { ref name, .. } if name == "x"));
}

#[test]
fn test_variable_ids_are_unique() {
    let expr = parse_expr("x + x");
    let ExprKind::Binary { left, right, .. } = expr.kind else {
        panic!("expected binary expression");
    };
    let (ExprKind::Variable { id: left_id, .. }, ExprKind::Variable { id: right_id, .. }) =
        (left.kind, right.kind)
    else {
        panic!("expected two variable operands");
    };
    assert_ne!(left_id, right_id);
}

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    // 1 + 2 * 3 parses as 1 + (2 * 3)
    let expr = parse_expr("1 + 2 * 3");
    let ExprKind::Binary { left, op, right } = expr.kind else {
        panic!("expected binary expression");
    };
    assert_eq!(op, BinaryOp::Add);
    assert_int(&left, 1);
    let ExprKind::Binary { left, op, right } = right.kind else {
        panic!("expected nested binary expression");
    };
    assert_eq!(op, BinaryOp::Mul);
    assert_int(&left, 2);
    assert_int(&right, 3);
}

#[test]
fn test_left_associativity() {
    // 10 - 4 - 3 parses as (10 - 4) - 3
    let expr = parse_expr("10 - 4 - 3");
    let ExprKind::Binary { left, op, right } = expr.kind else {
        panic!("expected binary expression");
    };
    assert_eq!(op, BinaryOp::Sub);
    assert_int(&right, 3);
    assert!(matches!(
        left.kind,
        ExprKind::Binary {
            op: BinaryOp::Sub,
            ..
        }
    ));
}

#[test]
fn test_grouping_overrides_precedence() {
    // (1 + 2) * 3
    let expr = parse_expr("(1 + 2) * 3");
    let ExprKind::Binary { left, op, .. } = expr.kind else {
        panic!("expected binary expression");
    };
    assert_eq!(op, BinaryOp::Mul);
    assert!(matches!(left.kind, ExprKind::Grouping(_)));
}

#[test]
fn test_comparison_binds_tighter_than_equality() {
    // a == b < c parses as a == (b < c)
    let expr = parse_expr("a == b < c");
    let ExprKind::Binary { op, right, .. } = expr.kind else {
        panic!("expected binary expression");
    };
    assert_eq!(op, BinaryOp::Equal);
    assert!(matches!(
        right.kind,
        ExprKind::Binary {
            op: BinaryOp::LessThan,
            ..
        }
    ));
}

#[test]
fn test_modulo() {
    let expr = parse_expr("7 % 2");
    assert!(matches!(
        expr.kind,
        ExprKind::Binary {
            op: BinaryOp::Mod,
            ..
        }
    ));
}

#[test]
fn test_unary_minus() {
    let expr = parse_expr("-5");
    let ExprKind::Unary { op, operand } = expr.kind else {
        panic!("expected unary expression");
    };
    assert_eq!(op, UnaryOp::Neg);
    assert_int(&operand, 5);
}

#[test]
fn test_unary_is_right_associative() {
    let expr = parse_expr("--5");
    let ExprKind::Unary { op, operand } = expr.kind else {
        panic!("expected unary expression");
    };
    assert_eq!(op, UnaryOp::Neg);
    assert!(matches!(
        operand.kind,
        ExprKind::Unary {
            op: UnaryOp::Neg,
            ..
        }
    ));
}

#[test]
fn test_nahi_unary() {
    let expr = parse_expr("nahi (x < 3)");
    let ExprKind::Unary { op, operand } = expr.kind else {
        panic!("expected unary expression");
    };
    assert_eq!(op, UnaryOp::Not);
    assert!(matches!(operand.kind, ExprKind::Grouping(_)));
}

#[test]
fn test_logical_operators() {
    // a aur b ya c parses as (a aur b) ya c
    let expr = parse_expr("a aur b ya c");
    let ExprKind::Logical { left, op, .. } = expr.kind else {
        panic!("expected logical expression");
    };
    assert_eq!(op, LogicalOp::Or);
    assert!(matches!(
        left.kind,
        ExprKind::Logical {
            op: LogicalOp::And,
            ..
        }
    ));
}

#[test]
fn test_logical_looser_than_equality() {
    // x == 5 ya y != 3 parses as (x == 5) ya (y != 3)
    let expr = parse_expr("x == 5 ya y != 3");
    let ExprKind::Logical { left, op, right } = expr.kind else {
        panic!("expected logical expression");
    };
    assert_eq!(op, LogicalOp::Or);
    assert!(matches!(
        left.kind,
        ExprKind::Binary {
            op: BinaryOp::Equal,
            ..
        }
    ));
    assert!(matches!(
        right.kind,
        ExprKind::Binary {
            op: BinaryOp::NotEqual,
            ..
        }
    ));
}

#[test]
fn test_assignment() {
    let expr = parse_expr("x = 5");
    let ExprKind::Assignment { name, value } = expr.kind else {
        panic!("expected assignment");
    };
    assert_eq!(name, "x");
    assert_int(&value, 5);
}

#[test]
fn test_assignment_is_right_associative() {
    // x = y = 1 parses as x = (y = 1)
    let expr = parse_expr("x = y = 1");
    let ExprKind::Assignment { name, value } = expr.kind else {
        panic!("expected assignment");
    };
    assert_eq!(name, "x");
    assert!(matches!(value.kind, ExprKind::Assignment { .. }));
}

#[test]
fn test_call_no_args() {
    let expr = parse_expr("f()");
    let ExprKind::Call { callee, args } = expr.kind else {
        panic!("expected call");
    };
    assert!(matches!(callee.kind, ExprKind::Variable { ref name, .. } if name == "f"));
    assert!(args.is_empty());
}

#[test]
fn test_call_with_args() {
    let expr = parse_expr("add(1, 2)");
    let ExprKind::Call { args, .. } = expr.kind else {
        panic!("expected call");
    };
    assert_eq!(args.len(), 2);
    assert_int(&args[0], 1);
    assert_int(&args[1], 2);
}

#[test]
fn test_call_chain() {
    // f(1)(2) parses as a call whose callee is a call
    let expr = parse_expr("f(1)(2)");
    let ExprKind::Call { callee, args } = expr.kind else {
        panic!("expected call");
    };
    assert_eq!(args.len(), 1);
    assert!(matches!(callee.kind, ExprKind::Call { .. }));
}

#[test]
fn test_recursive_call_argument() {
    let expr = parse_expr("factorial(n - 1)");
    let ExprKind::Call { args, .. } = expr.kind else {
        panic!("expected call");
    };
    assert!(matches!(
        args[0].kind,
        ExprKind::Binary {
            op: BinaryOp::Sub,
            ..
        }
    ));
}
