//! Variable and function declaration parsing.

use super::Parser;
use super::error::ParseError;
use crate::ast::{FnDecl, Param, Stmt, StmtKind, Type};
use crate::token::{Span, TokenKind};

/// The grammar caps parameter and argument lists at 255 entries.
pub(super) const MAX_PARAMS: usize = 255;

impl Parser {
    /// Parses a declaration: a variable declaration, a function
    /// declaration, or any statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// declaration → varDecl | funcDecl | statement
    /// ```
    pub(super) fn parse_declaration(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();

        if let Some(ty) = self.match_type_keyword() {
            return self.parse_var_decl(ty, start_span);
        }

        if self.matches(&TokenKind::Vidhi) {
            return self.parse_fn_decl(start_span);
        }

        self.parse_statement()
    }

    /// Parses a variable declaration after its type keyword was consumed.
    ///
    /// # Grammar
    ///
    /// ```text
    /// varDecl → type IDENT ("=" expression)? ";"
    /// ```
    pub(super) fn parse_var_decl(
        &mut self,
        ty: Type,
        start_span: Span,
    ) -> Result<Stmt, ParseError> {
        let name = self.expect_identifier("Expect variable name.")?;

        let init = if self.matches(&TokenKind::Equals) {
            Some(self.parse_expression()?)
        } else {
            None
        };

        self.expect(
            &TokenKind::Semicolon,
            "Expect ';' after variable declaration.",
        )?;

        let span = Span::new(
            start_span.start,
            self.previous_span().end,
            start_span.line,
            start_span.column,
        );
        Ok(Stmt::new(StmtKind::VarDecl { ty, name, init }, span))
    }

    /// Parses a function declaration after the `vidhi` keyword was consumed.
    ///
    /// # Grammar
    ///
    /// ```text
    /// funcDecl → "vidhi" IDENT "(" params? ")" type? block
    /// params   → param ("," param)*
    /// param    → type IDENT
    /// ```
    ///
    /// The return type is optional; a function without one is `void`
    /// (except `main`, which the analyzer treats as returning `ank`).
    fn parse_fn_decl(&mut self, start_span: Span) -> Result<Stmt, ParseError> {
        let name = self.expect_identifier("Expect function name.")?;
        self.expect(&TokenKind::LeftParen, "Expect '(' after function name.")?;

        let mut params = Vec::new();
        if !self.check(&TokenKind::RightParen) {
            loop {
                if params.len() >= MAX_PARAMS {
                    return Err(self.error_at_current("Can't have more than 255 parameters."));
                }

                let param_span = self.current_span();
                let ty = self
                    .match_type_keyword()
                    .ok_or_else(|| self.error_at_current("Expect parameter type."))?;
                let param_name = self.expect_identifier("Expect parameter name.")?;
                params.push(Param {
                    ty,
                    name: param_name,
                    span: Span::new(
                        param_span.start,
                        self.previous_span().end,
                        param_span.line,
                        param_span.column,
                    ),
                });

                if !self.matches(&TokenKind::Comma) {
                    break;
                }
            }
        }

        self.expect(&TokenKind::RightParen, "Expect ')' after parameters.")?;

        let return_type = self.match_type_keyword();

        let header_span = Span::new(
            start_span.start,
            self.previous_span().end,
            start_span.line,
            start_span.column,
        );

        self.expect(&TokenKind::LeftBrace, "Expect '{' before function body.")?;
        let body = self.parse_block(self.previous_span())?;

        let span = Span::new(
            start_span.start,
            body.span.end,
            start_span.line,
            start_span.column,
        );
        Ok(Stmt::new(
            StmtKind::FnDecl(FnDecl {
                name,
                params,
                return_type,
                body: Box::new(body),
                span: header_span,
            }),
            span,
        ))
    }
}
