//! Statement parsing.

use super::Parser;
use super::error::ParseError;
use crate::ast::{Stmt, StmtKind};
use crate::token::{Span, TokenKind};

impl Parser {
    /// Parses a single statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// statement → ifStmt | whileStmt | forStmt | printStmt
    ///           | returnStmt | block | exprStmt
    /// ```
    pub(super) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        match self.current_kind() {
            TokenKind::Agar => self.parse_if_stmt(),
            TokenKind::Jabtak => self.parse_while_stmt(),
            TokenKind::Karo => self.parse_for_stmt(),
            TokenKind::Likho => self.parse_print_stmt(),
            TokenKind::Wapas => self.parse_return_stmt(),
            TokenKind::LeftBrace => {
                let start_span = self.current_span();
                self.advance();
                self.parse_block(start_span)
            }
            _ => self.parse_expr_stmt(),
        }
    }

    /// Parses the statements of a block after its `{` was consumed.
    ///
    /// # Grammar
    ///
    /// ```text
    /// block → "{" declaration* "}"
    /// ```
    pub(super) fn parse_block(&mut self, start_span: Span) -> Result<Stmt, ParseError> {
        let mut statements = Vec::new();
        while !self.check(&TokenKind::RightBrace) && !self.is_eof() {
            statements.push(self.parse_declaration()?);
        }
        self.expect(&TokenKind::RightBrace, "Expect '}' after block.")?;

        let span = Span::new(
            start_span.start,
            self.previous_span().end,
            start_span.line,
            start_span.column,
        );
        Ok(Stmt::new(StmtKind::Block(statements), span))
    }

    /// Parses an `agar` statement.
    ///
    /// A dangling `nahi_to` binds to the nearest `agar`: the recursive
    /// `parse_statement` call for the then-branch consumes it first.
    ///
    /// # Grammar
    ///
    /// ```text
    /// ifStmt → "agar" "(" expression ")" statement ("nahi_to" statement)?
    /// ```
    fn parse_if_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.advance(); // consume 'agar'

        self.expect(&TokenKind::LeftParen, "Expect '(' after 'agar'.")?;
        let condition = self.parse_expression()?;
        self.expect(&TokenKind::RightParen, "Expect ')' after if condition.")?;

        let then_branch = self.parse_statement()?;
        let else_branch = if self.matches(&TokenKind::NahiTo) {
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };

        let end = else_branch
            .as_ref()
            .map(|stmt| stmt.span.end)
            .unwrap_or(then_branch.span.end);
        let span = Span::new(start_span.start, end, start_span.line, start_span.column);

        Ok(Stmt::new(
            StmtKind::If {
                condition,
                then_branch: Box::new(then_branch),
                else_branch,
            },
            span,
        ))
    }

    /// Parses a `jabtak` statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// whileStmt → "jabtak" "(" expression ")" statement
    /// ```
    fn parse_while_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.advance(); // consume 'jabtak'

        self.expect(&TokenKind::LeftParen, "Expect '(' after 'jabtak'.")?;
        let condition = self.parse_expression()?;
        self.expect(&TokenKind::RightParen, "Expect ')' after while condition.")?;

        let body = self.parse_statement()?;

        let span = Span::new(
            start_span.start,
            body.span.end,
            start_span.line,
            start_span.column,
        );
        Ok(Stmt::new(
            StmtKind::While {
                condition,
                body: Box::new(body),
            },
            span,
        ))
    }

    /// Parses a `karo` statement.
    ///
    /// The initializer is either a variable declaration or an expression
    /// statement (both consume their own `;`); condition and increment
    /// are optional bare expressions.
    ///
    /// # Grammar
    ///
    /// ```text
    /// forStmt → "karo" "(" (varDecl | exprStmt) expression? ";"
    ///                      expression? ")" statement
    /// ```
    fn parse_for_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.advance(); // consume 'karo'

        self.expect(&TokenKind::LeftParen, "Expect '(' after 'karo'.")?;

        let init_span = self.current_span();
        let init = if let Some(ty) = self.match_type_keyword() {
            self.parse_var_decl(ty, init_span)?
        } else {
            self.parse_expr_stmt()?
        };

        let condition = if !self.check(&TokenKind::Semicolon) {
            Some(self.parse_expression()?)
        } else {
            None
        };
        self.expect(&TokenKind::Semicolon, "Expect ';' after loop condition.")?;

        let increment = if !self.check(&TokenKind::RightParen) {
            Some(self.parse_expression()?)
        } else {
            None
        };
        self.expect(&TokenKind::RightParen, "Expect ')' after for clauses.")?;

        let body = self.parse_statement()?;

        let span = Span::new(
            start_span.start,
            body.span.end,
            start_span.line,
            start_span.column,
        );
        Ok(Stmt::new(
            StmtKind::For {
                init: Some(Box::new(init)),
                condition,
                increment,
                body: Box::new(body),
            },
            span,
        ))
    }

    /// Parses a `likho` statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// printStmt → "likho" "(" expression ")" ";"
    /// ```
    fn parse_print_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.advance(); // consume 'likho'

        self.expect(&TokenKind::LeftParen, "Expect '(' after 'likho'.")?;
        let expr = self.parse_expression()?;
        self.expect(&TokenKind::RightParen, "Expect ')' after expression.")?;
        self.expect(&TokenKind::Semicolon, "Expect ';' after print statement.")?;

        let span = Span::new(
            start_span.start,
            self.previous_span().end,
            start_span.line,
            start_span.column,
        );
        Ok(Stmt::new(StmtKind::Print(expr), span))
    }

    /// Parses a `wapas` statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// returnStmt → "wapas" expression? ";"
    /// ```
    fn parse_return_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.advance(); // consume 'wapas'

        let value = if !self.check(&TokenKind::Semicolon) {
            Some(self.parse_expression()?)
        } else {
            None
        };
        self.expect(&TokenKind::Semicolon, "Expect ';' after return value.")?;

        let span = Span::new(
            start_span.start,
            self.previous_span().end,
            start_span.line,
            start_span.column,
        );
        Ok(Stmt::new(StmtKind::Return(value), span))
    }

    /// Parses an expression statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// exprStmt → expression ";"
    /// ```
    pub(super) fn parse_expr_stmt(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.parse_expression()?;
        self.expect(&TokenKind::Semicolon, "Expect ';' after expression.")?;

        let span = Span::new(
            expr.span.start,
            self.previous_span().end,
            expr.span.line,
            expr.span.column,
        );
        Ok(Stmt::new(StmtKind::Expr(expr), span))
    }
}
