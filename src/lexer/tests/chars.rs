//! Tests for character literal lexing.

use super::*;

#[test]
fn test_simple_char() {
    let kinds = tokenize_kinds("'A'");
    assert_eq!(kinds, vec![TokenKind::CharLiteral('A'), TokenKind::Eof]);
}

#[test]
fn test_digit_char() {
    let kinds = tokenize_kinds("'7'");
    assert_eq!(kinds, vec![TokenKind::CharLiteral('7'), TokenKind::Eof]);
}

#[test]
fn test_escaped_newline_char() {
    let kinds = tokenize_kinds(r"'\n'");
    assert_eq!(kinds, vec![TokenKind::CharLiteral('\n'), TokenKind::Eof]);
}

#[test]
fn test_escaped_tab_char() {
    let kinds = tokenize_kinds(r"'\t'");
    assert_eq!(kinds, vec![TokenKind::CharLiteral('\t'), TokenKind::Eof]);
}

#[test]
fn test_escaped_backslash_char() {
    let kinds = tokenize_kinds(r"'\\'");
    assert_eq!(kinds, vec![TokenKind::CharLiteral('\\'), TokenKind::Eof]);
}

#[test]
fn test_escaped_quote_char() {
    let kinds = tokenize_kinds(r"'\''");
    assert_eq!(kinds, vec![TokenKind::CharLiteral('\''), TokenKind::Eof]);
}

#[test]
fn test_unknown_escape_yields_literal_char() {
    let kinds = tokenize_kinds(r"'\q'");
    assert_eq!(kinds, vec![TokenKind::CharLiteral('q'), TokenKind::Eof]);
}

#[test]
fn test_empty_char_literal_is_unknown() {
    let kinds = tokenize_kinds("''");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Unknown("Invalid character literal".to_string()),
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_unterminated_char_literal_is_unknown() {
    // 'ab' reads one character and then fails to find the closing quote
    let kinds = tokenize_kinds("'ab'");
    assert_eq!(kinds[0], TokenKind::Unknown("a".to_string()));
}

#[test]
fn test_char_in_declaration() {
    let kinds = tokenize_kinds("akshar ch = 'A';");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Akshar,
            TokenKind::Identifier("ch".to_string()),
            TokenKind::Equals,
            TokenKind::CharLiteral('A'),
            TokenKind::Semicolon,
            TokenKind::Eof
        ]
    );
}
