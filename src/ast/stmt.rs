//! Statement and declaration nodes for the Hinglish AST.

use crate::token::Span;

use super::expr::Expr;
use super::program::FnDecl;
use super::types::Type;

/// The kind of a statement.
///
/// Declarations (`VarDecl`, `FnDecl`) are statements too: the grammar
/// allows them wherever statements appear, so a single enum covers both.
/// Use [`Stmt`] for the full AST node with span information.
#[derive(Debug, Clone, PartialEq)]
pub enum StmtKind {
    /// An expression statement.
    ///
    /// Evaluates the expression for its side effects. The result value
    /// (if any) is discarded.
    Expr(Expr),

    /// A `likho(expr);` print statement.
    ///
    /// `likho` is a dedicated statement form, not a general call.
    Print(Expr),

    /// A braced block of statements.
    Block(Vec<Stmt>),

    /// An `agar` conditional with optional `nahi_to` branch.
    ///
    /// Branches are single statements, most commonly blocks. A dangling
    /// `nahi_to` binds to the nearest `agar`.
    If {
        /// The condition expression. Must analyze to `boolean`.
        condition: Expr,
        /// The statement executed when the condition is true.
        then_branch: Box<Stmt>,
        /// The statement executed when the condition is false.
        else_branch: Option<Box<Stmt>>,
    },

    /// A `jabtak` loop.
    While {
        /// The loop condition. Must analyze to `boolean`.
        condition: Expr,
        /// The loop body.
        body: Box<Stmt>,
    },

    /// A `karo` loop.
    ///
    /// The initializer is a statement (a variable declaration or an
    /// expression statement); condition and increment are bare
    /// expressions. All three clauses and the body share one scope.
    For {
        /// The initializer clause.
        init: Option<Box<Stmt>>,
        /// The loop condition. Must analyze to `boolean` when present.
        condition: Option<Expr>,
        /// The increment clause.
        increment: Option<Expr>,
        /// The loop body.
        body: Box<Stmt>,
    },

    /// A `wapas` statement.
    ///
    /// `wapas;` without a value is represented as `None`.
    Return(Option<Expr>),

    /// A variable declaration with optional initializer.
    VarDecl {
        /// The declared type.
        ty: Type,
        /// The declared name.
        name: String,
        /// The initializer expression, if present.
        init: Option<Expr>,
    },

    /// A `vidhi` function declaration.
    FnDecl(FnDecl),
}

/// A statement with source location.
#[derive(Debug, Clone, PartialEq)]
pub struct Stmt {
    /// The kind of statement.
    pub kind: StmtKind,
    /// The source location of this statement.
    pub span: Span,
}

impl Stmt {
    /// Creates a new statement with the given kind and span.
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}
