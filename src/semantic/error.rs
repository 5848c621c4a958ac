//! Semantic analysis error types.
//!
//! This module defines [`SemanticError`], which represents diagnostics
//! produced during semantic analysis (name resolution, type checking).

use crate::token::Span;

/// The kind of semantic analysis error.
///
/// This enum allows error handling code and tests to match on error types
/// structurally rather than relying on string matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticErrorKind {
    /// A variable was defined multiple times in the same scope.
    DuplicateVariable,
    /// A function was defined multiple times.
    DuplicateFunction,
    /// A variable was referenced but not defined.
    UndefinedVariable,
    /// A function was called but not defined.
    UndefinedFunction,
    /// Type mismatch between expected and actual types.
    TypeMismatch,
    /// A condition or logical operand is not a boolean.
    NotBoolean,
    /// An operator was applied to operands of an unsupported type.
    InvalidOperand,
    /// A call has the wrong argument count or argument types, or the
    /// callee is not a function name.
    InvalidCall,
    /// A return statement violates its function's signature, or appears
    /// outside any function.
    InvalidReturn,
    /// Internal analyzer invariant violation (a compiler bug).
    InternalError,
}

/// A diagnostic produced during semantic analysis.
///
/// Unlike parse errors, semantic errors accumulate: the analyzer records
/// every violation it finds and reports them together. Each error carries
/// a human-readable message, a structured [`SemanticErrorKind`], and the
/// source location where it occurred when one is known.
#[derive(Debug, Clone)]
pub struct SemanticError {
    /// A human-readable description of the error.
    message: String,
    /// The source location where the error occurred, if available.
    span: Option<Span>,
    /// The kind of error, for structured error handling.
    kind: SemanticErrorKind,
}

impl SemanticError {
    /// Creates a new error with a source location.
    pub fn new(kind: SemanticErrorKind, message: impl Into<String>, span: Span) -> Self {
        SemanticError {
            message: message.into(),
            span: Some(span),
            kind,
        }
    }

    /// Creates a new error without a source location.
    pub fn without_span(kind: SemanticErrorKind, message: impl Into<String>) -> Self {
        SemanticError {
            message: message.into(),
            span: None,
            kind,
        }
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the source location where the error occurred, if available.
    pub fn span(&self) -> Option<Span> {
        self.span
    }

    /// Returns the kind of error.
    pub fn kind(&self) -> SemanticErrorKind {
        self.kind
    }

    /// Returns a short category label for report titles.
    pub fn short_message(&self) -> &'static str {
        match self.kind {
            SemanticErrorKind::DuplicateVariable => "Duplicate variable",
            SemanticErrorKind::DuplicateFunction => "Duplicate function",
            SemanticErrorKind::UndefinedVariable => "Undefined variable",
            SemanticErrorKind::UndefinedFunction => "Undefined function",
            SemanticErrorKind::TypeMismatch => "Type mismatch",
            SemanticErrorKind::NotBoolean => "Boolean expected",
            SemanticErrorKind::InvalidOperand => "Invalid operand",
            SemanticErrorKind::InvalidCall => "Invalid call",
            SemanticErrorKind::InvalidReturn => "Invalid return",
            SemanticErrorKind::InternalError => "Internal error",
        }
    }
}

impl std::fmt::Display for SemanticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(span) = &self.span {
            write!(f, "{}:{}: {}", span.line, span.column, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for SemanticError {}
