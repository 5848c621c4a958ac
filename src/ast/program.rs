//! Top-level program structure for the Hinglish AST.

use crate::token::Span;

use super::stmt::Stmt;
use super::types::Type;

/// A function parameter.
///
/// Parameters are visible exactly within their function's body.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    /// The parameter's declared type.
    pub ty: Type,
    /// The parameter's name.
    pub name: String,
    /// The source location of the parameter.
    pub span: Span,
}

/// A `vidhi` function declaration.
///
/// # Invariants
///
/// - `body` is always a [`StmtKind::Block`](super::StmtKind::Block); the
///   grammar requires a braced body.
/// - `return_type` is `None` for functions declared without a return
///   type. The analyzer treats `main` as returning `ank` in that case
///   and every other such function as `void`.
///
/// These invariants are established by the parser.
#[derive(Debug, Clone, PartialEq)]
pub struct FnDecl {
    /// The function's name.
    pub name: String,
    /// The declared parameters, in order.
    pub params: Vec<Param>,
    /// The declared return type, if any.
    pub return_type: Option<Type>,
    /// The function body (always a block).
    pub body: Box<Stmt>,
    /// The source location of the declaration header.
    pub span: Span,
}

/// The root node of a Hinglish program's AST.
///
/// A `Program` is a sequence of top-level statements, typically function
/// declarations and the occasional global variable declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The top-level statements in source order.
    pub statements: Vec<Stmt>,
}
