//! Tests for keyword recognition and disambiguation from identifiers.

use super::*;

#[test]
fn test_keyword_agar() {
    let kinds = tokenize_kinds("agar");
    assert_eq!(kinds, vec![TokenKind::Agar, TokenKind::Eof]);
}

#[test]
fn test_keyword_nahi_to() {
    let kinds = tokenize_kinds("nahi_to");
    assert_eq!(kinds, vec![TokenKind::NahiTo, TokenKind::Eof]);
}

#[test]
fn test_nahi_to_not_split_into_nahi() {
    // "nahi_to" must lex as the else keyword, not `nahi` + something
    let kinds = tokenize_kinds("nahi_to");
    assert_ne!(kinds[0], TokenKind::Nahi);
}

#[test]
fn test_keyword_jabtak() {
    let kinds = tokenize_kinds("jabtak");
    assert_eq!(kinds, vec![TokenKind::Jabtak, TokenKind::Eof]);
}

#[test]
fn test_keyword_karo() {
    let kinds = tokenize_kinds("karo");
    assert_eq!(kinds, vec![TokenKind::Karo, TokenKind::Eof]);
}

#[test]
fn test_keyword_vidhi() {
    let kinds = tokenize_kinds("vidhi");
    assert_eq!(kinds, vec![TokenKind::Vidhi, TokenKind::Eof]);
}

#[test]
fn test_keyword_wapas() {
    let kinds = tokenize_kinds("wapas");
    assert_eq!(kinds, vec![TokenKind::Wapas, TokenKind::Eof]);
}

#[test]
fn test_keyword_likho() {
    let kinds = tokenize_kinds("likho");
    assert_eq!(kinds, vec![TokenKind::Likho, TokenKind::Eof]);
}

#[test]
fn test_logical_keywords() {
    let kinds = tokenize_kinds("aur ya nahi");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Aur,
            TokenKind::Ya,
            TokenKind::Nahi,
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_type_keywords() {
    let kinds = tokenize_kinds("ank sankhya vakya akshar");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Ank,
            TokenKind::Sankhya,
            TokenKind::Vakya,
            TokenKind::Akshar,
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_keyword_not_prefix() {
    // "agarwal" should be an identifier, not agar + identifier
    let kinds = tokenize_kinds("agarwal");
    assert_eq!(
        kinds,
        vec![TokenKind::Identifier("agarwal".to_string()), TokenKind::Eof]
    );
}

#[test]
fn test_ank_not_prefix() {
    let kinds = tokenize_kinds("ankit");
    assert_eq!(
        kinds,
        vec![TokenKind::Identifier("ankit".to_string()), TokenKind::Eof]
    );
}

#[test]
fn test_identifier_with_underscore() {
    let kinds = tokenize_kinds("_count my_var x2");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier("_count".to_string()),
            TokenKind::Identifier("my_var".to_string()),
            TokenKind::Identifier("x2".to_string()),
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_function_header_tokens() {
    let kinds = tokenize_kinds("vidhi factorial(ank n) ank {");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Vidhi,
            TokenKind::Identifier("factorial".to_string()),
            TokenKind::LeftParen,
            TokenKind::Ank,
            TokenKind::Identifier("n".to_string()),
            TokenKind::RightParen,
            TokenKind::Ank,
            TokenKind::LeftBrace,
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_round_trip_keywords_stay_keywords() {
    // Re-lexing each keyword's own lexeme yields the same kind again.
    let keywords = [
        "agar", "nahi_to", "jabtak", "karo", "vidhi", "wapas", "likho", "aur", "ya", "nahi",
        "ank", "sankhya", "vakya", "akshar",
    ];
    for word in keywords {
        let first = tokenize_kinds(word);
        let relexed = tokenize_kinds(&first[0].lexeme());
        assert_eq!(first, relexed, "keyword {:?} did not round-trip", word);
        assert!(
            !matches!(first[0], TokenKind::Identifier(_)),
            "keyword {:?} lexed as identifier",
            word
        );
    }
}
