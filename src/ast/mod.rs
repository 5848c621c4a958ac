//! Abstract Syntax Tree definitions for the Hinglish language.
//!
//! This module defines the data structures that represent parsed programs.
//! The AST is produced by the [`crate::parser`], validated by the
//! [`crate::semantic`] analyzer, and consumed by the [`crate::codegen`]
//! emitter.
//!
//! # Structure
//!
//! The AST has a hierarchical structure:
//! - [`Program`] - The root node containing the top-level statements
//! - [`Stmt`] - Statements and declarations, including [`FnDecl`]
//! - [`Expr`] - Expressions, from literals up to calls and assignments
//! - [`Type`] - The language's type lattice
//!
//! Each node includes source location information ([`Span`](crate::token::Span))
//! for error reporting. The tree is never mutated after parsing: the
//! analyzer records variable types in a side map keyed by [`VarId`].
//!
//! # Module Structure
//!
//! - [`types`](self) - The type lattice
//! - [`expr`](self) - Expression nodes, operators, literal values
//! - [`stmt`](self) - Statement nodes
//! - [`program`](self) - Top-level structure (Program, FnDecl, Param)
//!
//! # See Also
//!
//! * [`crate::parser`] - Produces the AST from tokens
//! * [`crate::semantic`] - Validates the AST and annotates variable types
//! * [`crate::codegen`] - Generates C source text from the AST

mod expr;
mod program;
mod stmt;
mod types;


pub use expr::{BinaryOp, Expr, ExprKind, LiteralValue, LogicalOp, UnaryOp, VarId};
pub use program::{FnDecl, Param, Program};
pub use stmt::{Stmt, StmtKind};
pub use types::Type;
