//! Code generation error types.

use crate::token::Span;

/// An error that occurred during C code generation.
///
/// Emission assumes a well-formed, successfully analyzed tree, so these
/// errors indicate violated invariants (a compiler bug), not user errors.
/// The main one is a `Variable` print argument with no type annotation,
/// which the analyzer is required to have produced.
#[derive(Debug)]
pub struct EmitError {
    /// A human-readable description of the error.
    pub message: String,
    /// The source location where the error occurred, if available.
    pub span: Option<Span>,
}

impl EmitError {
    /// Creates a new error with a message and source location.
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        EmitError {
            message: message.into(),
            span: Some(span),
        }
    }

    /// Creates a new error with only a message (no source location).
    pub fn without_span(message: impl Into<String>) -> Self {
        EmitError {
            message: message.into(),
            span: None,
        }
    }
}

impl std::fmt::Display for EmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(span) = &self.span {
            write!(f, "{}:{}: {}", span.line, span.column, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for EmitError {}
