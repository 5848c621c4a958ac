//! Unit tests for the semantic analyzer.

use super::*;
use crate::lexer::Lexer;
use crate::parser::Parser;


/// Lexes, parses, and analyzes `source`, panicking on parse failure.
pub(super) fn analyze_source(source: &str) -> Analysis {
    let tokens = Lexer::new(source).tokenize();
    let program = Parser::new(tokens)
        .parse()
        .unwrap_or_else(|e| panic!("Parse failed for {:?}: {}", source, e));
    SemanticAnalyzer::new().analyze(&program)
}

/// Asserts that analysis succeeds with no diagnostics.
pub(super) fn assert_analysis_ok(source: &str) {
    let analysis = analyze_source(source);
    assert!(
        analysis.success,
        "expected success for {:?}, got errors: {:?}",
        source,
        analysis
            .errors
            .iter()
            .map(|e| e.message().to_string())
            .collect::<Vec<_>>()
    );
}

/// Asserts that analysis fails and that some diagnostic has the expected
/// kind and contains the expected message fragment.
pub(super) fn assert_analysis_error(source: &str, kind: SemanticErrorKind, fragment: &str) {
    let analysis = analyze_source(source);
    assert!(!analysis.success, "expected failure for {:?}", source);
    let found = analysis
        .errors
        .iter()
        .any(|e| e.kind() == kind && e.message().contains(fragment));
    assert!(
        found,
        "no {:?} error containing {:?} for {:?}; got: {:?}",
        kind,
        fragment,
        source,
        analysis
            .errors
            .iter()
            .map(|e| format!("{:?}: {}", e.kind(), e.message()))
            .collect::<Vec<_>>()
    );
}

/// Wraps statements in a `main` body.
pub(super) fn in_main(body: &str) -> String {
    format!("vidhi main() {{ {} wapas 0; }}", body)
}

#[test]
fn test_assignable_same_types() {
    assert!(assignable(Type::Ank, Type::Ank));
    assert!(assignable(Type::Sankhya, Type::Sankhya));
    assert!(assignable(Type::Vakya, Type::Vakya));
    assert!(assignable(Type::Akshar, Type::Akshar));
    assert!(assignable(Type::Boolean, Type::Boolean));
}

#[test]
fn test_assignable_int_widens_to_float() {
    assert!(assignable(Type::Sankhya, Type::Ank));
    assert!(!assignable(Type::Ank, Type::Sankhya));
}

#[test]
fn test_assignable_rejects_other_conversions() {
    assert!(!assignable(Type::Vakya, Type::Akshar));
    assert!(!assignable(Type::Akshar, Type::Vakya));
    assert!(!assignable(Type::Ank, Type::Vakya));
    assert!(!assignable(Type::Boolean, Type::Ank));
    assert!(!assignable(Type::Ank, Type::Unknown));
    assert!(!assignable(Type::Unknown, Type::Ank));
}

#[test]
fn test_semantic_error_display_with_span() {
    let err = SemanticError::new(
        SemanticErrorKind::UndefinedVariable,
        "Variable 'x' is not defined",
        crate::token::Span::new(0, 1, 5, 10),
    );
    assert_eq!(err.to_string(), "5:10: Variable 'x' is not defined");
}

#[test]
fn test_semantic_error_display_without_span() {
    let err = SemanticError::without_span(
        SemanticErrorKind::InvalidReturn,
        "Return statement outside of function",
    );
    assert_eq!(err.to_string(), "Return statement outside of function");
}

#[test]
fn test_analysis_reports_multiple_errors() {
    // Errors accumulate instead of stopping at the first one
    let analysis = analyze_source(&in_main("likho(a); likho(b);"));
    assert!(!analysis.success);
    assert_eq!(analysis.errors.len(), 2);
}

#[test]
fn test_reanalysis_is_deterministic() {
    let source = in_main("ank x = 1; likho(x);");
    let first = analyze_source(&source);
    let second = analyze_source(&source);
    assert_eq!(first.success, second.success);
    assert_eq!(first.errors.len(), second.errors.len());
    assert_eq!(first.types.len(), second.types.len());
}
