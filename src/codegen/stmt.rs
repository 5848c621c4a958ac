//! Statement and declaration emission.

use super::{EmitError, Emitter};
use crate::ast::{Expr, ExprKind, FnDecl, LiteralValue, Stmt, StmtKind, Type};

impl<'a> Emitter<'a> {
    /// Emits a single statement.
    pub(super) fn emit_stmt(&mut self, stmt: &Stmt) -> Result<(), EmitError> {
        match &stmt.kind {
            StmtKind::Expr(expr) => {
                let code = self.emit_expr(expr)?;
                self.push_line(&format!("{};", code));
                Ok(())
            }
            StmtKind::Print(expr) => self.emit_print(expr),
            StmtKind::Block(statements) => {
                self.push_line("{");
                self.indent += 1;
                for statement in statements {
                    self.emit_stmt(statement)?;
                }
                self.indent -= 1;
                self.push_line("}");
                Ok(())
            }
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            } => self.emit_if(condition, then_branch, else_branch.as_deref()),
            StmtKind::While { condition, body } => self.emit_while(condition, body),
            StmtKind::For {
                init,
                condition,
                increment,
                body,
            } => self.emit_for(init.as_deref(), condition.as_ref(), increment.as_ref(), body),
            StmtKind::Return(value) => {
                match value {
                    Some(value) => {
                        let code = self.emit_expr(value)?;
                        self.push_line(&format!("return {};", code));
                    }
                    None => self.push_line("return;"),
                }
                Ok(())
            }
            StmtKind::VarDecl { ty, name, init } => self.emit_var_decl(*ty, name, init.as_ref()),
            StmtKind::FnDecl(decl) => self.emit_fn_decl(decl),
        }
    }

    /// Emits the statements of a control-flow body between braces the
    /// caller already opened. A block body contributes its statements
    /// directly so braces are not doubled; any other statement is
    /// emitted on its own.
    fn emit_body(&mut self, body: &Stmt) -> Result<(), EmitError> {
        match &body.kind {
            StmtKind::Block(statements) => {
                for statement in statements {
                    self.emit_stmt(statement)?;
                }
                Ok(())
            }
            _ => self.emit_stmt(body),
        }
    }

    /// Emits a function definition.
    ///
    /// `main` is always emitted as `int main` and gets a trailing
    /// `return 0;` when its top-level statement list has no return.
    fn emit_fn_decl(&mut self, decl: &FnDecl) -> Result<(), EmitError> {
        let return_type = if decl.name == "main" {
            "int"
        } else {
            match decl.return_type {
                Some(ty) => Self::c_type(ty)?,
                None => "void",
            }
        };

        let params = if decl.params.is_empty() {
            "void".to_string()
        } else {
            let mut parts = Vec::with_capacity(decl.params.len());
            for param in &decl.params {
                parts.push(format!("{} {}", Self::c_type(param.ty)?, param.name));
            }
            parts.join(", ")
        };

        self.push_line(&format!("{} {}({}) {{", return_type, decl.name, params));
        self.indent += 1;

        let StmtKind::Block(statements) = &decl.body.kind else {
            return Err(EmitError::new(
                format!("Function '{}' body is not a block", decl.name),
                decl.span,
            ));
        };
        for statement in statements {
            self.emit_stmt(statement)?;
        }

        if decl.name == "main"
            && !statements
                .iter()
                .any(|stmt| matches!(stmt.kind, StmtKind::Return(_)))
        {
            self.push_line("return 0;");
        }

        self.indent -= 1;
        self.push_line("}");
        self.blank_line();
        Ok(())
    }

    /// Emits a variable declaration.
    ///
    /// Without an initializer the variable is zero-initialized per its
    /// C type (`0`, `""`, `'\0'`).
    fn emit_var_decl(
        &mut self,
        ty: Type,
        name: &str,
        init: Option<&Expr>,
    ) -> Result<(), EmitError> {
        let c_type = Self::c_type(ty)?;
        let value = match init {
            Some(init) => self.emit_expr(init)?,
            None => match ty {
                Type::Vakya => "\"\"".to_string(),
                Type::Akshar => "'\\0'".to_string(),
                _ => "0".to_string(),
            },
        };
        self.push_line(&format!("{} {} = {};", c_type, name, value));
        Ok(())
    }

    fn emit_if(
        &mut self,
        condition: &Expr,
        then_branch: &Stmt,
        else_branch: Option<&Stmt>,
    ) -> Result<(), EmitError> {
        let condition = self.emit_expr(condition)?;
        self.push_line(&format!("if ({}) {{", condition));
        self.indent += 1;
        self.emit_body(then_branch)?;
        self.indent -= 1;

        if let Some(else_branch) = else_branch {
            self.push_line("} else {");
            self.indent += 1;
            self.emit_body(else_branch)?;
            self.indent -= 1;
        }

        self.push_line("}");
        Ok(())
    }

    fn emit_while(&mut self, condition: &Expr, body: &Stmt) -> Result<(), EmitError> {
        let condition = self.emit_expr(condition)?;
        self.push_line(&format!("while ({}) {{", condition));
        self.indent += 1;
        self.emit_body(body)?;
        self.indent -= 1;
        self.push_line("}");
        Ok(())
    }

    /// Emits a `for` loop. A declaration initializer is inlined into the
    /// header (`for (int i = 0; ...)`); missing clauses emit as empty.
    fn emit_for(
        &mut self,
        init: Option<&Stmt>,
        condition: Option<&Expr>,
        increment: Option<&Expr>,
        body: &Stmt,
    ) -> Result<(), EmitError> {
        let init = match init {
            Some(stmt) => match &stmt.kind {
                StmtKind::VarDecl { ty, name, init } => {
                    let value = match init {
                        Some(init) => self.emit_expr(init)?,
                        None => "0".to_string(),
                    };
                    format!("{} {} = {}", Self::c_type(*ty)?, name, value)
                }
                StmtKind::Expr(expr) => self.emit_expr(expr)?,
                _ => {
                    return Err(EmitError::new(
                        "For-loop initializer is not a declaration or expression",
                        stmt.span,
                    ));
                }
            },
            None => String::new(),
        };

        let condition = match condition {
            Some(condition) => self.emit_expr(condition)?,
            None => String::new(),
        };
        let increment = match increment {
            Some(increment) => self.emit_expr(increment)?,
            None => String::new(),
        };

        self.push_line(&format!("for ({}; {}; {}) {{", init, condition, increment));
        self.indent += 1;
        self.emit_body(body)?;
        self.indent -= 1;
        self.push_line("}");
        Ok(())
    }

    /// Emits a `likho` statement as a `printf` call.
    ///
    /// The format specifier comes from the argument's static type:
    /// a literal's own tag, a variable's annotated type, `%d` for any
    /// other expression.
    fn emit_print(&mut self, expr: &Expr) -> Result<(), EmitError> {
        let format = self.print_format(expr)?;
        let code = self.emit_expr(expr)?;
        self.push_line(&format!("printf(\"{}\\n\", {});", format, code));
        Ok(())
    }

    fn print_format(&self, expr: &Expr) -> Result<&'static str, EmitError> {
        match &expr.kind {
            ExprKind::Literal(value) => Ok(match value {
                LiteralValue::Int(_) => "%d",
                LiteralValue::Float(_) => "%f",
                LiteralValue::Str(_) => "%s",
                LiteralValue::Char(_) => "%c",
            }),
            ExprKind::Variable { name, id } => {
                let ty = self.types.get(*id).ok_or_else(|| {
                    EmitError::new(
                        format!("Missing type annotation for variable '{}'", name),
                        expr.span,
                    )
                })?;
                Ok(match ty {
                    Type::Vakya => "%s",
                    Type::Akshar => "%c",
                    Type::Sankhya => "%f",
                    _ => "%d",
                })
            }
            _ => Ok("%d"),
        }
    }
}
