//! Token kinds for the hpc lexer.
//!
//! This module defines the [`TokenKind`] enum representing all possible
//! token types in the Hinglish language.

/// The kind of token recognized by the lexer.
///
/// This enum represents all possible token types in the Hinglish language.
/// Keyword variants are named after their surface spelling (`agar`, `jabtak`,
/// ...). Literal variants carry their decoded payload: escape sequences in
/// strings and characters are already processed, and numbers are parsed into
/// their numeric representation.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// The `agar` keyword (if).
    Agar,

    /// The `nahi_to` keyword (else).
    NahiTo,

    /// The `jabtak` keyword (while).
    Jabtak,

    /// The `karo` keyword (for).
    Karo,

    /// The `vidhi` keyword (function declaration).
    Vidhi,

    /// The `wapas` keyword (return).
    Wapas,

    /// The `likho` keyword (built-in print).
    Likho,

    /// The `aur` keyword (logical and).
    Aur,

    /// The `ya` keyword (logical or).
    Ya,

    /// The `nahi` keyword (logical not).
    Nahi,

    /// The `ank` type keyword (integer).
    Ank,

    /// The `sankhya` type keyword (float).
    Sankhya,

    /// The `vakya` type keyword (string).
    Vakya,

    /// The `akshar` type keyword (character).
    Akshar,

    /// An integer literal (e.g. `42`).
    ///
    /// Decoded during lexing. Digit runs that overflow `i64` never produce
    /// this variant; they become [`TokenKind::Unknown`].
    IntLiteral(i64),

    /// A float literal (e.g. `3.14`). A single `.` inside a digit run
    /// promotes the number to a float.
    FloatLiteral(f64),

    /// A string literal enclosed in double quotes.
    ///
    /// The contained `String` is the unescaped value (escape sequences
    /// like `\n` are already converted to their actual characters).
    StringLiteral(String),

    /// A character literal enclosed in single quotes, unescaped.
    CharLiteral(char),

    /// An identifier (variable or function name).
    ///
    /// Identifiers start with an ASCII alphabetic character or underscore,
    /// followed by any number of alphanumerics or underscores.
    Identifier(String),

    /// A plus sign `+`.
    Plus,

    /// A minus sign `-`.
    Minus,

    /// An asterisk `*`.
    Star,

    /// A forward slash `/`.
    Slash,

    /// A percent sign `%`.
    Percent,

    /// A single equals sign `=` (assignment).
    Equals,

    /// Double equals `==` (equality comparison).
    EqualEqual,

    /// Not equals `!=`.
    BangEqual,

    /// Less than `<`.
    LessThan,

    /// Greater than `>`.
    GreaterThan,

    /// Less than or equal `<=`.
    LessEqual,

    /// Greater than or equal `>=`.
    GreaterEqual,

    /// A left parenthesis `(`.
    LeftParen,

    /// A right parenthesis `)`.
    RightParen,

    /// A left brace `{`.
    LeftBrace,

    /// A right brace `}`.
    RightBrace,

    /// A semicolon `;`.
    Semicolon,

    /// A comma `,`.
    Comma,

    /// End of input marker.
    ///
    /// The lexer always appends this as the final token, ensuring
    /// the token vector is never empty.
    Eof,

    /// Input the lexer could not recognize.
    ///
    /// The payload is the offending lexeme (or the consumed prefix of an
    /// unterminated literal). The lexer itself never fails; the parser
    /// surfaces these tokens as parse errors when it consumes them.
    Unknown(String),
}

impl TokenKind {
    /// Returns the keyword kind for an identifier spelling, if it is one.
    pub(crate) fn keyword(word: &str) -> Option<TokenKind> {
        let kind = match word {
            "agar" => TokenKind::Agar,
            "nahi_to" => TokenKind::NahiTo,
            "jabtak" => TokenKind::Jabtak,
            "karo" => TokenKind::Karo,
            "vidhi" => TokenKind::Vidhi,
            "wapas" => TokenKind::Wapas,
            "likho" => TokenKind::Likho,
            "aur" => TokenKind::Aur,
            "ya" => TokenKind::Ya,
            "nahi" => TokenKind::Nahi,
            "ank" => TokenKind::Ank,
            "sankhya" => TokenKind::Sankhya,
            "vakya" => TokenKind::Vakya,
            "akshar" => TokenKind::Akshar,
            _ => return None,
        };
        Some(kind)
    }

    /// Returns the surface text of this token, as it would appear in source.
    ///
    /// Used for the `[line L] Error at '<lexeme>'` parse error format.
    /// `Eof` renders as the empty string, matching the empty lexeme the
    /// end of input carries.
    pub fn lexeme(&self) -> String {
        match self {
            TokenKind::Agar => "agar".to_string(),
            TokenKind::NahiTo => "nahi_to".to_string(),
            TokenKind::Jabtak => "jabtak".to_string(),
            TokenKind::Karo => "karo".to_string(),
            TokenKind::Vidhi => "vidhi".to_string(),
            TokenKind::Wapas => "wapas".to_string(),
            TokenKind::Likho => "likho".to_string(),
            TokenKind::Aur => "aur".to_string(),
            TokenKind::Ya => "ya".to_string(),
            TokenKind::Nahi => "nahi".to_string(),
            TokenKind::Ank => "ank".to_string(),
            TokenKind::Sankhya => "sankhya".to_string(),
            TokenKind::Vakya => "vakya".to_string(),
            TokenKind::Akshar => "akshar".to_string(),
            TokenKind::IntLiteral(value) => value.to_string(),
            TokenKind::FloatLiteral(value) => format!("{:?}", value),
            TokenKind::StringLiteral(value) => value.clone(),
            TokenKind::CharLiteral(value) => value.to_string(),
            TokenKind::Identifier(name) => name.clone(),
            TokenKind::Plus => "+".to_string(),
            TokenKind::Minus => "-".to_string(),
            TokenKind::Star => "*".to_string(),
            TokenKind::Slash => "/".to_string(),
            TokenKind::Percent => "%".to_string(),
            TokenKind::Equals => "=".to_string(),
            TokenKind::EqualEqual => "==".to_string(),
            TokenKind::BangEqual => "!=".to_string(),
            TokenKind::LessThan => "<".to_string(),
            TokenKind::GreaterThan => ">".to_string(),
            TokenKind::LessEqual => "<=".to_string(),
            TokenKind::GreaterEqual => ">=".to_string(),
            TokenKind::LeftParen => "(".to_string(),
            TokenKind::RightParen => ")".to_string(),
            TokenKind::LeftBrace => "{".to_string(),
            TokenKind::RightBrace => "}".to_string(),
            TokenKind::Semicolon => ";".to_string(),
            TokenKind::Comma => ",".to_string(),
            TokenKind::Eof => String::new(),
            TokenKind::Unknown(text) => text.clone(),
        }
    }
}
