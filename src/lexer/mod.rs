//! Lexical analyzer for the Hinglish programming language.
//!
//! This module provides the [`Lexer`] struct which converts source code text
//! into a stream of [`Token`]s for parsing.
//!
//! # Overview
//!
//! The lexer performs the following tasks:
//! - Scans the input character by character
//! - Recognizes keywords, identifiers, literals, and punctuation
//! - Tracks source positions for error reporting
//! - Skips whitespace and `#` line comments
//!
//! Tokenization never fails: input the lexer cannot recognize (a stray
//! character, an unterminated string, an invalid character literal, an
//! integer literal overflowing `i64`) becomes a [`TokenKind::Unknown`]
//! token carrying the offending lexeme. The parser reports these as
//! syntax errors when it consumes them.
//!
//! # Supported Tokens
//!
//! - **Keywords**: `agar`, `nahi_to`, `jabtak`, `karo`, `vidhi`, `wapas`,
//!   `likho`, `aur`, `ya`, `nahi`, `ank`, `sankhya`, `vakya`, `akshar`
//! - **Identifiers**: `[A-Za-z_][A-Za-z0-9_]*`
//! - **Number literals**: digit runs; a single `.` promotes to a float,
//!   a second `.` terminates the number
//! - **String literals**: double-quoted, escapes `\n`, `\t`, `\\`, `\"`;
//!   any other `\x` yields the literal `x`
//! - **Character literals**: single-quoted, exactly one decoded character
//! - **Operators**: `+ - * / % = == != < > <= >=`
//! - **Delimiters**: `( ) { } ; ,`
//! - **Comments**: `#` to end of line
//!
//! # Module Structure
//!
//! - [`cursor`](self) - Position tracking and character navigation
//! - [`skip`](self) - Whitespace and comment handling
//! - [`tokens`](self) - Token recognition and reading
//!
//! # See Also
//!
//! * [`crate::token`] - Token type definitions
//! * [`crate::parser`] - Parser that consumes the token stream

mod cursor;
mod skip;
mod tokens;

#[cfg(test)]
mod tests;

use crate::token::{Span, Token, TokenKind};

/// A lexical analyzer that tokenizes Hinglish source code.
///
/// The `Lexer` maintains its position within the input and tracks line/column
/// numbers for error reporting. It is designed to be used once per source file.
///
/// # Lifetime
///
/// The `'a` lifetime parameter ties the lexer to the input string slice,
/// ensuring the input remains valid while the lexer is in use.
pub struct Lexer<'a> {
    /// The input source code being tokenized.
    pub(super) input: &'a str,
    /// Current byte position in the input.
    pub(super) pos: usize,
    /// Current line number (1-indexed).
    pub(super) line: usize,
    /// Current column number (1-indexed).
    pub(super) column: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new `Lexer` for the given input string.
    ///
    /// The lexer starts at the beginning of the input with line and column
    /// numbers initialized to 1.
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenizes the entire input and returns a vector of tokens.
    ///
    /// This method consumes the input from start to end, producing tokens
    /// until the end of input is reached. The returned vector always ends
    /// with exactly one [`TokenKind::Eof`] token, so it is never empty.
    ///
    /// Tokenization is infallible; see the module docs for how
    /// unrecognized input is represented.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace_and_comments();

            if self.is_eof() {
                let span = Span::new(self.pos, self.pos, self.line, self.column);
                tokens.push(Token::new(TokenKind::Eof, span));
                break;
            }

            tokens.push(self.next_token());
        }

        tokens
    }
}
