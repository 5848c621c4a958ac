//! Symbol table for semantic analysis.
//!
//! This module provides [`SymbolTable`] for tracking function and variable
//! definitions during semantic analysis, with lexically nested variable
//! scopes.

use crate::ast::Type;
use crate::token::Span;
use std::collections::HashMap;

/// Information about a defined function.
///
/// Functions store their full signature so calls can be checked for
/// arity and per-argument assignability, not just their return type.
#[derive(Debug, Clone)]
pub struct FunctionInfo {
    /// The function name.
    pub name: String,
    /// The declared parameter types, in order.
    pub params: Vec<(String, Type)>,
    /// The return type (`Void` when none was declared; `Ank` for `main`).
    pub return_type: Type,
    /// The span of the function header (for "previously defined here").
    pub definition_span: Span,
}

/// Information about a defined variable.
#[derive(Debug, Clone)]
pub struct VariableInfo {
    /// The variable name.
    pub name: String,
    /// The declared type.
    pub ty: Type,
    /// The span of the variable definition.
    pub definition_span: Span,
}

/// A scope containing variable definitions.
#[derive(Debug, Clone, Default)]
struct Scope {
    variables: HashMap<String, VariableInfo>,
}

/// Symbol table for semantic analysis.
///
/// Functions live in a flat namespace; variables live in a stack of
/// scopes with strict LIFO lifetimes around function bodies, blocks, and
/// `karo` constructs. The global scope is created on construction and is
/// never popped, so top-level variable declarations have somewhere to
/// live.
#[derive(Debug)]
pub struct SymbolTable {
    /// All function definitions.
    functions: HashMap<String, FunctionInfo>,
    /// Stack of variable scopes (last = innermost).
    scopes: Vec<Scope>,
}

impl SymbolTable {
    /// Creates a symbol table containing only the empty global scope.
    pub fn new() -> Self {
        SymbolTable {
            functions: HashMap::new(),
            scopes: vec![Scope::default()],
        }
    }

    // Function management

    /// Defines a new function.
    ///
    /// Returns the previously defined function's info if the name is
    /// already taken, leaving the existing definition in place.
    pub fn define_function(&mut self, info: FunctionInfo) -> Result<(), FunctionInfo> {
        if let Some(existing) = self.functions.get(&info.name) {
            return Err(existing.clone());
        }
        self.functions.insert(info.name.clone(), info);
        Ok(())
    }

    /// Looks up a function by name.
    pub fn lookup_function(&self, name: &str) -> Option<&FunctionInfo> {
        self.functions.get(name)
    }

    // Scope management

    /// Enters a new innermost scope.
    pub fn enter_scope(&mut self) {
        self.scopes.push(Scope::default());
    }

    /// Exits the innermost scope, discarding its variables.
    ///
    /// The global scope is never popped.
    pub fn exit_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    // Variable management

    /// Defines a variable in the innermost scope.
    ///
    /// Returns the previous definition's info if the name is already
    /// defined in the innermost scope. Redefinition replaces the old
    /// entry either way, so later references see the newest declaration.
    /// Shadowing a name from an outer scope is not an error.
    pub fn define_variable(&mut self, info: VariableInfo) -> Result<(), VariableInfo> {
        // new() creates the global scope and exit_scope() never pops it
        let scope = self.scopes.last_mut().expect("scope stack is never empty");
        let previous = scope.variables.insert(info.name.clone(), info);
        match previous {
            Some(existing) => Err(existing),
            None => Ok(()),
        }
    }

    /// Looks up a variable, searching from the innermost scope outward.
    pub fn lookup_variable(&self, name: &str) -> Option<&VariableInfo> {
        for scope in self.scopes.iter().rev() {
            if let Some(info) = scope.variables.get(name) {
                return Some(info);
            }
        }
        None
    }

    /// Returns the current scope nesting depth (1 = global only).
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
