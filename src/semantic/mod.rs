//! Semantic analysis for the Hinglish programming language.
//!
//! This module provides the [`SemanticAnalyzer`] which validates a parsed
//! [`Program`] before code generation.
//!
//! # Responsibilities
//!
//! - **Name resolution**: undefined/duplicate variables and functions,
//!   lexical scoping with shadowing
//! - **Type checking**: assignments, initializers, operators, conditions,
//!   returns, and call signatures (arity and argument types)
//! - **Type annotation**: each resolved `Variable` node's type is recorded
//!   in a [`TypeAnnotations`] map keyed by [`VarId`] for the emitter
//!
//! # Pipeline Position
//!
//! ```text
//! Source → Lexer → Parser → Semantic Analyzer → Emitter → C compiler
//! ```
//!
//! Unlike the parser, the analyzer does not stop at the first problem: it
//! accumulates every [`SemanticError`] it finds and returns them all in an
//! [`Analysis`], whose `success` flag gates code generation. The symbol
//! table and annotations are returned even on failure.

mod error;
mod expr;
mod stmt;
mod symbol;

#[cfg(test)]
mod tests;

pub use error::{SemanticError, SemanticErrorKind};
pub use symbol::{FunctionInfo, SymbolTable, VariableInfo};

use std::collections::HashMap;

use crate::ast::{Program, Type, VarId};

/// Variable types resolved by the analyzer, keyed by [`VarId`].
///
/// The AST is never mutated; this side map carries the annotation the
/// emitter needs to pick `printf` formats for variable arguments.
#[derive(Debug, Clone, Default)]
pub struct TypeAnnotations {
    types: HashMap<VarId, Type>,
}

impl TypeAnnotations {
    /// Creates an empty annotation map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the resolved type for a variable node.
    pub fn record(&mut self, id: VarId, ty: Type) {
        self.types.insert(id, ty);
    }

    /// Returns the resolved type for a variable node, if the analyzer
    /// resolved it.
    pub fn get(&self, id: VarId) -> Option<Type> {
        self.types.get(&id).copied()
    }

    /// Returns the number of annotated variable nodes.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` when no variable node has been annotated.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// The outcome of analyzing a program.
#[derive(Debug)]
pub struct Analysis {
    /// `true` when no semantic errors were found.
    pub success: bool,
    /// Every diagnostic found, in source order.
    pub errors: Vec<SemanticError>,
    /// The symbol table, populated as far as analysis got.
    pub symbols: SymbolTable,
    /// The resolved types of `Variable` nodes.
    pub types: TypeAnnotations,
}

/// Returns whether a value of type `actual` may be used where `expected`
/// is required.
///
/// Types are assignable iff they are equal, or an integer widens to a
/// float (`ank` → `sankhya`). No other implicit conversion exists.
pub fn assignable(expected: Type, actual: Type) -> bool {
    expected == actual || (expected == Type::Sankhya && actual == Type::Ank)
}

/// Semantic analyzer for Hinglish programs.
///
/// Statements are checked in source order, so functions must be declared
/// before they are called. Scopes are entered and exited in strict LIFO
/// order around function bodies, blocks, and `karo` constructs.
pub struct SemanticAnalyzer {
    symbols: SymbolTable,
    types: TypeAnnotations,
    errors: Vec<SemanticError>,
    /// Return types of the enclosing functions, innermost last.
    return_types: Vec<Type>,
}

impl SemanticAnalyzer {
    /// Creates a new semantic analyzer.
    pub fn new() -> Self {
        SemanticAnalyzer {
            symbols: SymbolTable::new(),
            types: TypeAnnotations::new(),
            errors: Vec::new(),
            return_types: Vec::new(),
        }
    }

    /// Analyzes a program, consuming the analyzer.
    ///
    /// Never fails: all diagnostics are collected into the returned
    /// [`Analysis`] and `success` reports whether any were found.
    pub fn analyze(mut self, program: &Program) -> Analysis {
        for stmt in &program.statements {
            self.check_stmt(stmt);
        }

        Analysis {
            success: self.errors.is_empty(),
            errors: self.errors,
            symbols: self.symbols,
            types: self.types,
        }
    }

    fn report(&mut self, error: SemanticError) {
        self.errors.push(error);
    }
}

impl Default for SemanticAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
