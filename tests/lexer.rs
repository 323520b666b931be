use pretty_assertions::assert_eq;
use reckon::{
    error::LexError,
    interpreter::lexer::{Token, tokenize},
};

fn kinds(source: &str) -> Vec<Token> {
    tokenize(source).unwrap_or_else(|e| panic!("Failed to tokenize {source:?}: {e}"))
                    .into_iter()
                    .map(|(token, _)| token)
                    .collect()
}

#[test]
fn symbols_and_numbers_in_order() {
    assert_eq!(kinds("(1+2)*3/4-5"),
               vec![Token::LParen,
                    Token::Number(1.0),
                    Token::Plus,
                    Token::Number(2.0),
                    Token::RParen,
                    Token::Star,
                    Token::Number(3.0),
                    Token::Slash,
                    Token::Number(4.0),
                    Token::Minus,
                    Token::Number(5.0)]);
}

#[test]
fn positions_are_byte_offsets() {
    assert_eq!(tokenize(" 12 +  3").unwrap(),
               vec![(Token::Number(12.0), 1), (Token::Plus, 4), (Token::Number(3.0), 7)]);
}

#[test]
fn whitespace_is_skipped() {
    assert_eq!(kinds("\t1 +\n 2\r\n"),
               vec![Token::Number(1.0), Token::Plus, Token::Number(2.0)]);
    assert_eq!(kinds("1\u{a0}+\u{2003}2"),
               vec![Token::Number(1.0), Token::Plus, Token::Number(2.0)]);
}

#[test]
fn whitespace_only_yields_no_tokens() {
    assert!(tokenize("").unwrap().is_empty());
    assert!(tokenize("   \t\n").unwrap().is_empty());
}

#[test]
fn decimal_literals() {
    assert_eq!(kinds("3.25"), vec![Token::Number(3.25)]);
    assert_eq!(kinds(".5"), vec![Token::Number(0.5)]);
    assert_eq!(kinds("5."), vec![Token::Number(5.0)]);
    assert_eq!(kinds("007"), vec![Token::Number(7.0)]);
}

#[test]
fn second_decimal_point_ends_the_number() {
    assert_eq!(tokenize("1.2.3").unwrap(),
               vec![(Token::Number(1.2), 0), (Token::Number(0.3), 3)]);
}

#[test]
fn lone_decimal_point_is_illegal() {
    assert_eq!(tokenize("5.."),
               Err(LexError::IllegalCharacter { ch: '.', position: 2 }));
    assert_eq!(tokenize("1 + ."),
               Err(LexError::IllegalCharacter { ch: '.', position: 4 }));
}

#[test]
fn illegal_characters_stop_lexing() {
    assert_eq!(tokenize("2+@"),
               Err(LexError::IllegalCharacter { ch: '@', position: 2 }));
    assert_eq!(tokenize("x + 1"),
               Err(LexError::IllegalCharacter { ch: 'x', position: 0 }));
    assert_eq!(tokenize("2^3"),
               Err(LexError::IllegalCharacter { ch: '^', position: 1 }));
    assert_eq!(tokenize("1 + é"),
               Err(LexError::IllegalCharacter { ch: 'é', position: 4 }));
}

#[test]
fn tokens_display_with_debug_names() {
    let rendered: Vec<String> = kinds("(2.5+1)*-3/4").iter().map(ToString::to_string).collect();
    assert_eq!(rendered,
               vec!["LPAREN",
                    "NUMBER:2.5",
                    "PLUS",
                    "NUMBER:1",
                    "RPAREN",
                    "MULTIPLY",
                    "MINUS",
                    "NUMBER:3",
                    "DIVIDE",
                    "NUMBER:4"]);
}

#[test]
fn lex_errors_have_readable_messages() {
    let error = tokenize("2+@").unwrap_err();
    assert_eq!(error.to_string(), "Error at position 2: Illegal character '@'.");
}
