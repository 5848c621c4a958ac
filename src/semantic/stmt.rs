//! Statement and declaration checking.

use super::{
    FunctionInfo, SemanticAnalyzer, SemanticError, SemanticErrorKind, VariableInfo, assignable,
};
use crate::ast::{Expr, FnDecl, Stmt, StmtKind, Type};
use crate::token::Span;

impl SemanticAnalyzer {
    /// Checks a single statement.
    pub(super) fn check_stmt(&mut self, stmt: &Stmt) {
        match &stmt.kind {
            StmtKind::Expr(expr) | StmtKind::Print(expr) => {
                self.infer_expr(expr);
            }
            StmtKind::Block(statements) => {
                self.symbols.enter_scope();
                for statement in statements {
                    self.check_stmt(statement);
                }
                self.symbols.exit_scope();
            }
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.check_condition(condition, "if");
                self.check_stmt(then_branch);
                if let Some(else_branch) = else_branch {
                    self.check_stmt(else_branch);
                }
            }
            StmtKind::While { condition, body } => {
                self.check_condition(condition, "while");
                self.check_stmt(body);
            }
            StmtKind::For {
                init,
                condition,
                increment,
                body,
            } => {
                // One scope covers initializer, condition, increment, and body
                self.symbols.enter_scope();
                if let Some(init) = init {
                    self.check_stmt(init);
                }
                if let Some(condition) = condition {
                    self.check_condition(condition, "for");
                }
                if let Some(increment) = increment {
                    self.infer_expr(increment);
                }
                self.check_stmt(body);
                self.symbols.exit_scope();
            }
            StmtKind::Return(value) => self.check_return(value.as_ref(), stmt.span),
            StmtKind::VarDecl { ty, name, init } => {
                self.check_var_decl(*ty, name, init.as_ref(), stmt.span);
            }
            StmtKind::FnDecl(decl) => self.check_fn_decl(decl),
        }
    }

    /// Conditions of `agar`/`jabtak`/`karo` must be boolean.
    fn check_condition(&mut self, condition: &Expr, construct: &str) {
        let ty = self.infer_expr(condition);
        if ty != Type::Boolean {
            self.report(SemanticError::new(
                SemanticErrorKind::NotBoolean,
                format!(
                    "Condition in {} statement must be a boolean expression",
                    construct
                ),
                condition.span,
            ));
        }
    }

    /// The initializer is checked against the declared type before the
    /// name is defined, so `ank x = x;` does not resolve to itself.
    /// Redefinition in the innermost scope is an error; shadowing an
    /// outer scope is fine.
    fn check_var_decl(&mut self, ty: Type, name: &str, init: Option<&Expr>, span: Span) {
        if let Some(init) = init {
            let init_ty = self.infer_expr(init);
            if !assignable(ty, init_ty) {
                self.report(SemanticError::new(
                    SemanticErrorKind::TypeMismatch,
                    format!(
                        "Cannot assign {} to variable '{}' of type {}",
                        init_ty, name, ty
                    ),
                    init.span,
                ));
            }
        }

        let info = VariableInfo {
            name: name.to_string(),
            ty,
            definition_span: span,
        };
        if self.symbols.define_variable(info).is_err() {
            self.report(SemanticError::new(
                SemanticErrorKind::DuplicateVariable,
                format!("Variable '{}' is already defined in this scope", name),
                span,
            ));
        }
    }

    /// Defines the function's signature, then checks the body in a fresh
    /// scope holding the parameters. `main` with no declared return type
    /// is treated as returning `ank`; any other function without one is
    /// `void`.
    fn check_fn_decl(&mut self, decl: &FnDecl) {
        let return_type = decl.return_type.unwrap_or(if decl.name == "main" {
            Type::Ank
        } else {
            Type::Void
        });

        let info = FunctionInfo {
            name: decl.name.clone(),
            params: decl
                .params
                .iter()
                .map(|param| (param.name.clone(), param.ty))
                .collect(),
            return_type,
            definition_span: decl.span,
        };
        if self.symbols.define_function(info).is_err() {
            self.report(SemanticError::new(
                SemanticErrorKind::DuplicateFunction,
                format!("Function '{}' is already defined", decl.name),
                decl.span,
            ));
        }

        self.symbols.enter_scope();
        for param in &decl.params {
            let info = VariableInfo {
                name: param.name.clone(),
                ty: param.ty,
                definition_span: param.span,
            };
            if self.symbols.define_variable(info).is_err() {
                self.report(SemanticError::new(
                    SemanticErrorKind::DuplicateVariable,
                    format!(
                        "Variable '{}' is already defined in this scope",
                        param.name
                    ),
                    param.span,
                ));
            }
        }

        self.return_types.push(return_type);
        // The body is a block; checking it opens its own nested scope
        // inside the parameter scope, so locals may shadow parameters.
        self.check_stmt(&decl.body);
        self.return_types.pop();

        self.symbols.exit_scope();
    }

    /// `wapas` is only valid inside a function. Void functions must not
    /// return a value; non-void functions must return a value assignable
    /// to the declared return type.
    fn check_return(&mut self, value: Option<&Expr>, span: Span) {
        let Some(&expected) = self.return_types.last() else {
            self.report(SemanticError::new(
                SemanticErrorKind::InvalidReturn,
                "Return statement outside of function",
                span,
            ));
            return;
        };

        if expected == Type::Void {
            if value.is_some() {
                self.report(SemanticError::new(
                    SemanticErrorKind::InvalidReturn,
                    "Cannot return a value from a void function",
                    span,
                ));
            }
            return;
        }

        match value {
            None => {
                self.report(SemanticError::new(
                    SemanticErrorKind::InvalidReturn,
                    format!("Function must return a value of type {}", expected),
                    span,
                ));
            }
            Some(value) => {
                let value_ty = self.infer_expr(value);
                if !assignable(expected, value_ty) {
                    self.report(SemanticError::new(
                        SemanticErrorKind::InvalidReturn,
                        format!(
                            "Return type mismatch: expected {}, got {}",
                            expected, value_ty
                        ),
                        value.span,
                    ));
                }
            }
        }
    }
}
