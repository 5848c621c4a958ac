//! Parser helper methods for token navigation and basic operations.

use super::Parser;
use super::error::ParseError;
use crate::ast::Type;
use crate::token::{Span, Token, TokenKind};

impl Parser {
    /// Returns a reference to the current token.
    ///
    /// This method is safe to call at any time - if the position is past
    /// the end, it returns the last token (which is `Eof`).
    pub(super) fn current(&self) -> &Token {
        // new() ensures tokens is non-empty and advance() stops at Eof,
        // so the index is always valid.
        let idx = self.pos.min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    /// Returns the kind of the current token.
    pub(super) fn current_kind(&self) -> &TokenKind {
        &self.current().kind
    }

    /// Returns the span of the current token.
    pub(super) fn current_span(&self) -> Span {
        self.current().span
    }

    /// Returns the span of the most recently consumed token.
    pub(super) fn previous_span(&self) -> Span {
        let idx = self.pos.saturating_sub(1).min(self.tokens.len() - 1);
        self.tokens[idx].span
    }

    /// Returns `true` if the current token is `Eof`.
    pub(super) fn is_eof(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Advances to the next token.
    ///
    /// Does nothing if already at `Eof`.
    pub(super) fn advance(&mut self) {
        if !self.is_eof() {
            self.pos += 1;
        }
    }

    /// Returns `true` if the current token matches `kind`.
    pub(super) fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Consumes the current token if it matches `kind`.
    ///
    /// Returns `true` if a token was consumed.
    pub(super) fn matches(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expects the current token to match `kind` and advances.
    ///
    /// On mismatch, returns a [`ParseError`] carrying `message` and the
    /// offending token's lexeme and location.
    pub(super) fn expect(&mut self, kind: &TokenKind, message: &str) -> Result<(), ParseError> {
        if self.check(kind) {
            self.advance();
            Ok(())
        } else {
            Err(self.error_at_current(message))
        }
    }

    /// Expects an identifier token and returns its name.
    pub(super) fn expect_identifier(&mut self, message: &str) -> Result<String, ParseError> {
        if let TokenKind::Identifier(name) = self.current_kind() {
            let name = name.clone();
            self.advance();
            Ok(name)
        } else {
            Err(self.error_at_current(message))
        }
    }

    /// Consumes a type keyword and returns the corresponding [`Type`].
    ///
    /// Returns `None` without consuming anything if the current token is
    /// not one of the four declarable type keywords.
    pub(super) fn match_type_keyword(&mut self) -> Option<Type> {
        let ty = Self::type_keyword(self.current_kind())?;
        self.advance();
        Some(ty)
    }

    /// Returns `true` if the current token is a declarable type keyword.
    pub(super) fn check_type_keyword(&self) -> bool {
        Self::type_keyword(self.current_kind()).is_some()
    }

    fn type_keyword(kind: &TokenKind) -> Option<Type> {
        match kind {
            TokenKind::Ank => Some(Type::Ank),
            TokenKind::Sankhya => Some(Type::Sankhya),
            TokenKind::Vakya => Some(Type::Vakya),
            TokenKind::Akshar => Some(Type::Akshar),
            _ => None,
        }
    }

    /// Creates a [`ParseError`] at the current token.
    pub(super) fn error_at_current(&self, message: &str) -> ParseError {
        let token = self.current();
        ParseError {
            message: message.to_string(),
            lexeme: token.kind.lexeme(),
            span: token.span,
        }
    }
}
