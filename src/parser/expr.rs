//! Expression parsing.
//!
//! Expressions are parsed with a recursive-descent precedence ladder, one
//! method per level, ascending from assignment (loosest) through logical,
//! equality, comparison, additive, and multiplicative operators down to
//! unary operators, calls, and primaries (tightest).

use super::Parser;
use super::decl::MAX_PARAMS;
use super::error::ParseError;
use crate::ast::{BinaryOp, Expr, ExprKind, LiteralValue, LogicalOp, UnaryOp};
use crate::token::{Span, TokenKind};

impl Parser {
    /// Parses an expression.
    ///
    /// # Grammar
    ///
    /// ```text
    /// expression → assignment
    /// ```
    pub(super) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_assignment()
    }

    /// Parses an assignment expression.
    ///
    /// Assignment is right-associative: the left side is parsed as a
    /// logic-or expression first, and only if an `=` follows must it be
    /// a plain variable. Any other target is rejected at the `=` token.
    ///
    /// # Grammar
    ///
    /// ```text
    /// assignment → logic_or ("=" assignment)?
    /// ```
    fn parse_assignment(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_logic_or()?;

        if self.check(&TokenKind::Equals) {
            let equals = self.current().clone();
            self.advance();
            let value = self.parse_assignment()?;

            if let ExprKind::Variable { name, .. } = expr.kind {
                let span = Span::new(
                    expr.span.start,
                    value.span.end,
                    expr.span.line,
                    expr.span.column,
                );
                return Ok(Expr::new(
                    ExprKind::Assignment {
                        name,
                        value: Box::new(value),
                    },
                    span,
                ));
            }

            return Err(ParseError {
                message: "Invalid assignment target.".to_string(),
                lexeme: equals.kind.lexeme(),
                span: equals.span,
            });
        }

        Ok(expr)
    }

    /// Parses a logical-or chain.
    ///
    /// # Grammar
    ///
    /// ```text
    /// logic_or → logic_and ("ya" logic_and)*
    /// ```
    fn parse_logic_or(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_logic_and()?;

        while self.matches(&TokenKind::Ya) {
            let right = self.parse_logic_and()?;
            expr = Self::logical_expr(expr, LogicalOp::Or, right);
        }

        Ok(expr)
    }

    /// Parses a logical-and chain.
    ///
    /// # Grammar
    ///
    /// ```text
    /// logic_and → equality ("aur" equality)*
    /// ```
    fn parse_logic_and(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_equality()?;

        while self.matches(&TokenKind::Aur) {
            let right = self.parse_equality()?;
            expr = Self::logical_expr(expr, LogicalOp::And, right);
        }

        Ok(expr)
    }

    /// Parses an equality chain.
    ///
    /// # Grammar
    ///
    /// ```text
    /// equality → comparison (("==" | "!=") comparison)*
    /// ```
    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_comparison()?;

        loop {
            let op = match self.current_kind() {
                TokenKind::EqualEqual => BinaryOp::Equal,
                TokenKind::BangEqual => BinaryOp::NotEqual,
                _ => break,
            };
            self.advance();
            let right = self.parse_comparison()?;
            expr = Self::binary_expr(expr, op, right);
        }

        Ok(expr)
    }

    /// Parses a comparison chain.
    ///
    /// # Grammar
    ///
    /// ```text
    /// comparison → term (("<" | ">" | "<=" | ">=") term)*
    /// ```
    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_term()?;

        loop {
            let op = match self.current_kind() {
                TokenKind::LessThan => BinaryOp::LessThan,
                TokenKind::GreaterThan => BinaryOp::GreaterThan,
                TokenKind::LessEqual => BinaryOp::LessEqual,
                TokenKind::GreaterEqual => BinaryOp::GreaterEqual,
                _ => break,
            };
            self.advance();
            let right = self.parse_term()?;
            expr = Self::binary_expr(expr, op, right);
        }

        Ok(expr)
    }

    /// Parses an additive chain.
    ///
    /// # Grammar
    ///
    /// ```text
    /// term → factor (("+" | "-") factor)*
    /// ```
    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_factor()?;

        loop {
            let op = match self.current_kind() {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => break,
            };
            self.advance();
            let right = self.parse_factor()?;
            expr = Self::binary_expr(expr, op, right);
        }

        Ok(expr)
    }

    /// Parses a multiplicative chain.
    ///
    /// # Grammar
    ///
    /// ```text
    /// factor → unary (("*" | "/" | "%") unary)*
    /// ```
    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_unary()?;

        loop {
            let op = match self.current_kind() {
                TokenKind::Star => BinaryOp::Mul,
                TokenKind::Slash => BinaryOp::Div,
                TokenKind::Percent => BinaryOp::Mod,
                _ => break,
            };
            self.advance();
            let right = self.parse_unary()?;
            expr = Self::binary_expr(expr, op, right);
        }

        Ok(expr)
    }

    /// Parses a unary expression.
    ///
    /// Unary operators are right-associative: `--x` parses as `-(-x)`.
    ///
    /// # Grammar
    ///
    /// ```text
    /// unary → ("-" | "nahi") unary | call
    /// ```
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let op = match self.current_kind() {
            TokenKind::Minus => UnaryOp::Neg,
            TokenKind::Nahi => UnaryOp::Not,
            _ => return self.parse_call(),
        };

        let start_span = self.current_span();
        self.advance();
        let operand = self.parse_unary()?;

        let span = Span::new(
            start_span.start,
            operand.span.end,
            start_span.line,
            start_span.column,
        );
        Ok(Expr::new(
            ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            span,
        ))
    }

    /// Parses a call chain.
    ///
    /// Any primary expression may be followed by argument lists, so
    /// curried-style chains like `f(1)(2)` parse (and are later rejected
    /// by the analyzer unless the callee is a function name).
    ///
    /// # Grammar
    ///
    /// ```text
    /// call → primary ("(" args? ")")*
    /// ```
    fn parse_call(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_primary()?;

        while self.matches(&TokenKind::LeftParen) {
            expr = self.finish_call(expr)?;
        }

        Ok(expr)
    }

    /// Parses the argument list of a call after its `(` was consumed.
    ///
    /// # Grammar
    ///
    /// ```text
    /// args → expression ("," expression)*   ; at most 255
    /// ```
    fn finish_call(&mut self, callee: Expr) -> Result<Expr, ParseError> {
        let mut args = Vec::new();

        if !self.check(&TokenKind::RightParen) {
            loop {
                if args.len() >= MAX_PARAMS {
                    return Err(self.error_at_current("Can't have more than 255 arguments."));
                }
                args.push(self.parse_expression()?);

                if !self.matches(&TokenKind::Comma) {
                    break;
                }
            }
        }

        self.expect(&TokenKind::RightParen, "Expect ')' after arguments.")?;

        let span = Span::new(
            callee.span.start,
            self.previous_span().end,
            callee.span.line,
            callee.span.column,
        );
        Ok(Expr::new(
            ExprKind::Call {
                callee: Box::new(callee),
                args,
            },
            span,
        ))
    }

    /// Parses a primary expression.
    ///
    /// # Grammar
    ///
    /// ```text
    /// primary → INT | FLOAT | STRING | CHAR | IDENT | "(" expression ")"
    /// ```
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let start_span = self.current_span();

        let literal = match self.current_kind() {
            TokenKind::IntLiteral(value) => Some(LiteralValue::Int(*value)),
            TokenKind::FloatLiteral(value) => Some(LiteralValue::Float(*value)),
            TokenKind::StringLiteral(value) => Some(LiteralValue::Str(value.clone())),
            TokenKind::CharLiteral(value) => Some(LiteralValue::Char(*value)),
            _ => None,
        };
        if let Some(value) = literal {
            self.advance();
            return Ok(Expr::new(ExprKind::Literal(value), start_span));
        }

        match self.current_kind() {
            TokenKind::Identifier(name) => {
                let name = name.clone();
                self.advance();
                let id = self.next_var_id();
                Ok(Expr::new(ExprKind::Variable { name, id }, start_span))
            }
            TokenKind::LeftParen => {
                self.advance();
                let inner = self.parse_expression()?;
                self.expect(&TokenKind::RightParen, "Expect ')' after expression.")?;

                let span = Span::new(
                    start_span.start,
                    self.previous_span().end,
                    start_span.line,
                    start_span.column,
                );
                Ok(Expr::new(ExprKind::Grouping(Box::new(inner)), span))
            }
            TokenKind::Likho => Err(self.error_at_current(
                "Unexpected 'likho'. Did you mean to use it as a statement?",
            )),
            _ => Err(self.error_at_current("Expect expression.")),
        }
    }

    fn binary_expr(left: Expr, op: BinaryOp, right: Expr) -> Expr {
        let span = Span::new(
            left.span.start,
            right.span.end,
            left.span.line,
            left.span.column,
        );
        Expr::new(
            ExprKind::Binary {
                left: Box::new(left),
                op,
                right: Box::new(right),
            },
            span,
        )
    }

    fn logical_expr(left: Expr, op: LogicalOp, right: Expr) -> Expr {
        let span = Span::new(
            left.span.start,
            right.span.end,
            left.span.line,
            left.span.column,
        );
        Expr::new(
            ExprKind::Logical {
                left: Box::new(left),
                op,
                right: Box::new(right),
            },
            span,
        )
    }
}
