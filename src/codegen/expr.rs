//! Expression emission and C literal escaping.

use super::{EmitError, Emitter};
use crate::ast::{Expr, ExprKind, LiteralValue, LogicalOp, UnaryOp};

impl<'a> Emitter<'a> {
    /// Emits an expression as C source text.
    pub(super) fn emit_expr(&mut self, expr: &Expr) -> Result<String, EmitError> {
        match &expr.kind {
            ExprKind::Literal(value) => Ok(literal_c(value)),
            ExprKind::Variable { name, .. } => Ok(name.clone()),
            ExprKind::Grouping(inner) => {
                let inner = self.emit_expr(inner)?;
                Ok(format!("({})", inner))
            }
            ExprKind::Unary { op, operand } => {
                let operand = self.emit_expr(operand)?;
                Ok(match op {
                    UnaryOp::Neg => format!("(-{})", operand),
                    UnaryOp::Not => format!("(!{})", operand),
                })
            }
            ExprKind::Binary { left, op, right } => {
                let left = self.emit_expr(left)?;
                let right = self.emit_expr(right)?;
                Ok(format!("({} {} {})", left, op.symbol(), right))
            }
            ExprKind::Logical { left, op, right } => {
                let left = self.emit_expr(left)?;
                let right = self.emit_expr(right)?;
                let symbol = match op {
                    LogicalOp::And => "&&",
                    LogicalOp::Or => "||",
                };
                Ok(format!("({} {} {})", left, symbol, right))
            }
            ExprKind::Assignment { name, value } => {
                let value = self.emit_expr(value)?;
                Ok(format!("{} = {}", name, value))
            }
            ExprKind::Call { callee, args } => {
                let callee = self.emit_expr(callee)?;
                let mut parts = Vec::with_capacity(args.len());
                for arg in args {
                    parts.push(self.emit_expr(arg)?);
                }
                Ok(format!("{}({})", callee, parts.join(", ")))
            }
        }
    }
}

/// Renders a decoded literal back into C literal syntax.
///
/// Strings and characters are re-escaped (the lexer decoded their escape
/// sequences), and floats always carry a decimal point or exponent so
/// they stay `double`-typed in C varargs.
fn literal_c(value: &LiteralValue) -> String {
    match value {
        LiteralValue::Int(value) => value.to_string(),
        LiteralValue::Float(value) => format!("{:?}", value),
        LiteralValue::Str(value) => format!("\"{}\"", escape_c_string(value)),
        LiteralValue::Char(value) => format!("'{}'", escape_c_char(*value)),
    }
}

/// Escapes a decoded string for inclusion in a C string literal.
pub(super) fn escape_c_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\0' => out.push_str("\\0"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes a decoded character for inclusion in a C character literal.
pub(super) fn escape_c_char(value: char) -> String {
    match value {
        '\\' => "\\\\".to_string(),
        '\'' => "\\'".to_string(),
        '\n' => "\\n".to_string(),
        '\t' => "\\t".to_string(),
        '\r' => "\\r".to_string(),
        '\0' => "\\0".to_string(),
        _ => value.to_string(),
    }
}
