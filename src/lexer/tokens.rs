//! Token reading and recognition for the lexer.
//!
//! This module provides methods for reading various token types from the
//! input, including identifiers, keywords, number/string/character literals,
//! and punctuation.

use super::Lexer;
use crate::token::{Span, Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Creates a single-character token and advances the lexer.
    fn single_char_token(
        &mut self,
        kind: TokenKind,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        self.advance();
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Token::new(kind, span)
    }

    /// Reads and returns the next token from the input.
    ///
    /// This method is called repeatedly by [`tokenize`](super::Lexer::tokenize)
    /// to produce the token stream. It assumes that whitespace and comments
    /// have already been skipped and that the input is not exhausted.
    pub(super) fn next_token(&mut self) -> Token {
        let start_pos = self.pos;
        let start_line = self.line;
        let start_column = self.column;

        // is_eof() was checked by the caller
        let Some(c) = self.current_char() else {
            return Token::new(
                TokenKind::Eof,
                Span::new(start_pos, start_pos, start_line, start_column),
            );
        };

        if c.is_ascii_alphabetic() || c == '_' {
            return self.read_identifier(start_pos, start_line, start_column);
        }

        if c.is_ascii_digit() {
            return self.read_number(start_pos, start_line, start_column);
        }

        match c {
            '"' => self.read_string(start_pos, start_line, start_column),
            '\'' => self.read_char(start_pos, start_line, start_column),
            _ => self.read_operator_or_delimiter(c, start_pos, start_line, start_column),
        }
    }

    /// Reads an identifier or keyword from the input.
    ///
    /// Identifiers consist of an ASCII alphabetic character or underscore
    /// followed by any number of ASCII alphanumeric characters or
    /// underscores. If the run matches the keyword table (`agar`, `jabtak`,
    /// `vidhi`, ...), the corresponding keyword token is returned instead.
    fn read_identifier(
        &mut self,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        while self
            .current_char()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }

        let value = &self.input[start_pos..self.pos];
        let span = Span::new(start_pos, self.pos, start_line, start_column);

        let kind = TokenKind::keyword(value)
            .unwrap_or_else(|| TokenKind::Identifier(value.to_string()));
        Token::new(kind, span)
    }

    /// Reads a numeric literal from the input.
    ///
    /// A digit run is an integer literal. A single `.` inside the run
    /// promotes it to a float literal; a second `.` terminates the number
    /// (whatever follows is lexed separately). The decoded value is stored
    /// in the token; a digit run overflowing `i64` yields an `Unknown`
    /// token carrying the digits.
    fn read_number(&mut self, start_pos: usize, start_line: usize, start_column: usize) -> Token {
        while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        let mut is_float = false;
        if self.current_char() == Some('.') {
            is_float = true;
            self.advance();
            while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let text = &self.input[start_pos..self.pos];
        let span = Span::new(start_pos, self.pos, start_line, start_column);

        if is_float {
            match text.parse::<f64>() {
                Ok(value) => Token::new(TokenKind::FloatLiteral(value), span),
                Err(_) => Token::new(TokenKind::Unknown(text.to_string()), span),
            }
        } else {
            match text.parse::<i64>() {
                Ok(value) => Token::new(TokenKind::IntLiteral(value), span),
                Err(_) => Token::new(TokenKind::Unknown(text.to_string()), span),
            }
        }
    }

    /// Reads a string literal from the input.
    ///
    /// The opening double quote is at the current position. Escape
    /// sequences `\n`, `\t`, `\\`, and `\"` decode to their characters;
    /// any other `\x` yields the literal `x`. An unterminated string
    /// produces an `Unknown` token carrying the consumed text.
    fn read_string(&mut self, start_pos: usize, start_line: usize, start_column: usize) -> Token {
        self.advance(); // skip opening "
        let mut value = String::new();

        loop {
            match self.current_char() {
                Some('"') => {
                    self.advance(); // skip closing "
                    let span = Span::new(start_pos, self.pos, start_line, start_column);
                    return Token::new(TokenKind::StringLiteral(value), span);
                }
                Some('\\') => {
                    self.advance(); // skip backslash
                    match self.current_char() {
                        Some(escaped) => {
                            value.push(Self::decode_escape(escaped, '"'));
                            self.advance();
                        }
                        None => {
                            let span =
                                Span::new(start_pos, self.pos, start_line, start_column);
                            return Token::new(TokenKind::Unknown(value), span);
                        }
                    }
                }
                Some(c) => {
                    value.push(c);
                    self.advance();
                }
                None => {
                    let span = Span::new(start_pos, self.pos, start_line, start_column);
                    return Token::new(TokenKind::Unknown(value), span);
                }
            }
        }
    }

    /// Reads a character literal from the input.
    ///
    /// The opening single quote is at the current position. The literal
    /// must contain exactly one decoded character followed by a closing
    /// quote; an empty literal or a missing closing quote produces an
    /// `Unknown` token.
    fn read_char(&mut self, start_pos: usize, start_line: usize, start_column: usize) -> Token {
        self.advance(); // skip opening '

        let value = match self.current_char() {
            Some('\\') => {
                self.advance(); // skip backslash
                match self.current_char() {
                    Some(escaped) => {
                        self.advance();
                        Some(Self::decode_escape(escaped, '\''))
                    }
                    None => None,
                }
            }
            Some('\'') => None, // empty literal, quote handled below
            Some(c) => {
                self.advance();
                Some(c)
            }
            None => None,
        };

        if self.current_char() == Some('\'') {
            self.advance(); // skip closing '
            let span = Span::new(start_pos, self.pos, start_line, start_column);
            return match value {
                Some(c) => Token::new(TokenKind::CharLiteral(c), span),
                None => Token::new(
                    TokenKind::Unknown("Invalid character literal".to_string()),
                    span,
                ),
            };
        }

        let span = Span::new(start_pos, self.pos, start_line, start_column);
        let consumed = value.map(String::from).unwrap_or_default();
        Token::new(TokenKind::Unknown(consumed), span)
    }

    /// Decodes an escape sequence character.
    ///
    /// `quote` is the delimiter of the enclosing literal (`"` or `'`).
    /// Unrecognized escapes yield the escaped character itself.
    fn decode_escape(escaped: char, quote: char) -> char {
        match escaped {
            'n' => '\n',
            't' => '\t',
            '\\' => '\\',
            c if c == quote => quote,
            c => c,
        }
    }

    /// Reads an operator or delimiter token.
    ///
    /// Two-character operators (`==`, `!=`, `<=`, `>=`) are matched
    /// greedily before the single-character table. Anything that matches
    /// neither becomes an `Unknown` token.
    /// Consumes an operator that may be followed by `=`.
    ///
    /// Emits `double` when the next character is `=`, otherwise `single`.
    /// An operator with no single-character form (`!`) falls back to an
    /// `Unknown` token carrying the lone character.
    fn equals_suffix_token(
        &mut self,
        c: char,
        single: Option<TokenKind>,
        double: TokenKind,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        self.advance();
        if self.current_char() == Some('=') {
            self.advance();
            let span = Span::new(start_pos, self.pos, start_line, start_column);
            return Token::new(double, span);
        }

        let span = Span::new(start_pos, self.pos, start_line, start_column);
        match single {
            Some(kind) => Token::new(kind, span),
            None => Token::new(TokenKind::Unknown(c.to_string()), span),
        }
    }

    fn read_operator_or_delimiter(
        &mut self,
        c: char,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        match c {
            '=' => self.equals_suffix_token(
                c,
                Some(TokenKind::Equals),
                TokenKind::EqualEqual,
                start_pos,
                start_line,
                start_column,
            ),
            '!' => self.equals_suffix_token(
                c,
                None,
                TokenKind::BangEqual,
                start_pos,
                start_line,
                start_column,
            ),
            '<' => self.equals_suffix_token(
                c,
                Some(TokenKind::LessThan),
                TokenKind::LessEqual,
                start_pos,
                start_line,
                start_column,
            ),
            '>' => self.equals_suffix_token(
                c,
                Some(TokenKind::GreaterThan),
                TokenKind::GreaterEqual,
                start_pos,
                start_line,
                start_column,
            ),
            '+' => self.single_char_token(TokenKind::Plus, start_pos, start_line, start_column),
            '-' => self.single_char_token(TokenKind::Minus, start_pos, start_line, start_column),
            '*' => self.single_char_token(TokenKind::Star, start_pos, start_line, start_column),
            '/' => self.single_char_token(TokenKind::Slash, start_pos, start_line, start_column),
            '%' => self.single_char_token(TokenKind::Percent, start_pos, start_line, start_column),
            '(' => {
                self.single_char_token(TokenKind::LeftParen, start_pos, start_line, start_column)
            }
            ')' => {
                self.single_char_token(TokenKind::RightParen, start_pos, start_line, start_column)
            }
            '{' => {
                self.single_char_token(TokenKind::LeftBrace, start_pos, start_line, start_column)
            }
            '}' => {
                self.single_char_token(TokenKind::RightBrace, start_pos, start_line, start_column)
            }
            ';' => {
                self.single_char_token(TokenKind::Semicolon, start_pos, start_line, start_column)
            }
            ',' => self.single_char_token(TokenKind::Comma, start_pos, start_line, start_column),
            _ => self.single_char_token(
                TokenKind::Unknown(c.to_string()),
                start_pos,
                start_line,
                start_column,
            ),
        }
    }
}
