//! Expression type inference.
//!
//! Each method returns the inferred [`Type`] of an expression, reporting
//! diagnostics along the way. [`Type::Unknown`] is returned after a
//! diagnostic so analysis can continue.

use super::{SemanticAnalyzer, SemanticError, SemanticErrorKind, assignable};
use crate::ast::{BinaryOp, Expr, ExprKind, LiteralValue, LogicalOp, Type, UnaryOp};
use crate::token::Span;

impl SemanticAnalyzer {
    /// Infers the type of an expression.
    ///
    /// `Variable` nodes that resolve successfully get their type recorded
    /// in the annotation map as a side effect.
    pub(super) fn infer_expr(&mut self, expr: &Expr) -> Type {
        match &expr.kind {
            ExprKind::Literal(value) => Self::literal_type(value),
            ExprKind::Variable { name, id } => match self.symbols.lookup_variable(name) {
                Some(info) => {
                    let ty = info.ty;
                    self.types.record(*id, ty);
                    ty
                }
                None => {
                    self.report(SemanticError::new(
                        SemanticErrorKind::UndefinedVariable,
                        format!("Variable '{}' is not defined", name),
                        expr.span,
                    ));
                    Type::Unknown
                }
            },
            ExprKind::Grouping(inner) => self.infer_expr(inner),
            ExprKind::Unary { op, operand } => self.infer_unary(*op, operand, expr.span),
            ExprKind::Binary { left, op, right } => self.infer_binary(left, *op, right, expr.span),
            ExprKind::Logical { left, op, right } => {
                self.infer_logical(left, *op, right, expr.span)
            }
            ExprKind::Assignment { name, value } => {
                self.infer_assignment(name, value, expr.span)
            }
            ExprKind::Call { callee, args } => self.infer_call(callee, args, expr.span),
        }
    }

    /// Literal types follow the decoded payload tag.
    fn literal_type(value: &LiteralValue) -> Type {
        match value {
            LiteralValue::Int(_) => Type::Ank,
            LiteralValue::Float(_) => Type::Sankhya,
            LiteralValue::Str(_) => Type::Vakya,
            LiteralValue::Char(_) => Type::Akshar,
        }
    }

    /// `-` requires a numeric operand and preserves its type; `nahi`
    /// requires a boolean operand and yields boolean.
    fn infer_unary(&mut self, op: UnaryOp, operand: &Expr, span: Span) -> Type {
        let operand_ty = self.infer_expr(operand);
        match op {
            UnaryOp::Neg => {
                if !operand_ty.is_numeric() {
                    self.report(SemanticError::new(
                        SemanticErrorKind::InvalidOperand,
                        "Unary '-' requires numeric operand",
                        span,
                    ));
                }
                operand_ty
            }
            UnaryOp::Not => {
                if operand_ty != Type::Boolean {
                    self.report(SemanticError::new(
                        SemanticErrorKind::NotBoolean,
                        "Unary 'nahi' requires boolean operand",
                        span,
                    ));
                }
                Type::Boolean
            }
        }
    }

    /// Comparisons require mutually assignable operands and yield boolean.
    /// Arithmetic requires numeric operands; the result widens to
    /// `sankhya` when either side is one. `+` on strings is rejected
    /// outright (the emitter has no concatenation story, and C's `+` on
    /// `char*` is pointer arithmetic).
    fn infer_binary(&mut self, left: &Expr, op: BinaryOp, right: &Expr, span: Span) -> Type {
        let left_ty = self.infer_expr(left);
        let right_ty = self.infer_expr(right);

        if op.is_comparison() {
            if !(assignable(left_ty, right_ty) || assignable(right_ty, left_ty)) {
                self.report(SemanticError::new(
                    SemanticErrorKind::TypeMismatch,
                    format!("Cannot compare {} with {}", left_ty, right_ty),
                    span,
                ));
            }
            return Type::Boolean;
        }

        if op == BinaryOp::Add && (left_ty == Type::Vakya || right_ty == Type::Vakya) {
            self.report(SemanticError::new(
                SemanticErrorKind::InvalidOperand,
                "Operator '+' cannot be applied to vakya operands; \
                 string concatenation is not supported",
                span,
            ));
            return Type::Vakya;
        }

        if !(left_ty.is_numeric() && right_ty.is_numeric()) {
            self.report(SemanticError::new(
                SemanticErrorKind::InvalidOperand,
                format!("Operator '{}' requires numeric operands", op.symbol()),
                span,
            ));
        }

        if left_ty == Type::Sankhya || right_ty == Type::Sankhya {
            Type::Sankhya
        } else {
            Type::Ank
        }
    }

    fn infer_logical(&mut self, left: &Expr, _op: LogicalOp, right: &Expr, span: Span) -> Type {
        let left_ty = self.infer_expr(left);
        let right_ty = self.infer_expr(right);

        if left_ty != Type::Boolean || right_ty != Type::Boolean {
            self.report(SemanticError::new(
                SemanticErrorKind::NotBoolean,
                "Logical operators require boolean operands",
                span,
            ));
        }

        Type::Boolean
    }

    /// The target must resolve in some enclosing scope and the value must
    /// be assignable to its type. The expression's type is the target's.
    fn infer_assignment(&mut self, name: &str, value: &Expr, span: Span) -> Type {
        let Some(info) = self.symbols.lookup_variable(name) else {
            self.report(SemanticError::new(
                SemanticErrorKind::UndefinedVariable,
                format!("Variable '{}' is not defined", name),
                span,
            ));
            return Type::Unknown;
        };
        let target_ty = info.ty;

        let value_ty = self.infer_expr(value);
        if !assignable(target_ty, value_ty) {
            self.report(SemanticError::new(
                SemanticErrorKind::TypeMismatch,
                format!(
                    "Cannot assign {} to variable '{}' of type {}",
                    value_ty, name, target_ty
                ),
                span,
            ));
        }

        target_ty
    }

    /// Calls require the callee to be a plain function name. `likho` is
    /// the built-in print: any argument types, result `void`. All other
    /// names must resolve to a declared function whose signature the
    /// arguments satisfy; the call's type is the declared return type.
    fn infer_call(&mut self, callee: &Expr, args: &[Expr], span: Span) -> Type {
        let ExprKind::Variable { name, .. } = &callee.kind else {
            self.report(SemanticError::new(
                SemanticErrorKind::InvalidCall,
                "Cannot call a non-function value",
                callee.span,
            ));
            return Type::Unknown;
        };

        if name == "likho" {
            for arg in args {
                self.infer_expr(arg);
            }
            return Type::Void;
        }

        let Some(info) = self.symbols.lookup_function(name).cloned() else {
            self.report(SemanticError::new(
                SemanticErrorKind::UndefinedFunction,
                format!("Function '{}' is not defined", name),
                span,
            ));
            return Type::Unknown;
        };

        if args.len() != info.params.len() {
            self.report(SemanticError::new(
                SemanticErrorKind::InvalidCall,
                format!(
                    "Function '{}' expects {} argument(s), got {}",
                    name,
                    info.params.len(),
                    args.len()
                ),
                span,
            ));
        }

        for ((param_name, param_ty), arg) in info.params.iter().zip(args) {
            let arg_ty = self.infer_expr(arg);
            if !assignable(*param_ty, arg_ty) {
                self.report(SemanticError::new(
                    SemanticErrorKind::InvalidCall,
                    format!(
                        "Cannot pass {} as parameter '{}' of type {}",
                        arg_ty, param_name, param_ty
                    ),
                    arg.span,
                ));
            }
        }

        // Extra arguments past the declared parameters still get checked
        for arg in args.iter().skip(info.params.len()) {
            self.infer_expr(arg);
        }

        info.return_type
    }
}
