use std::fmt;

use logos::Logos;
use tracing::{debug, trace};

use crate::{error::LexError, util::num::parse_real};

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// A token paired with the byte offset where it starts in the source.
pub type Spanned = (Token, usize);

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Whitespace of any kind separates tokens and is discarded.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"\s+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5` or `5.`.
    ///
    /// A literal holds at most one decimal point. A second point ends the
    /// literal and is left for the next token, so `1.2.3` lexes as `1.2`
    /// followed by `.3`.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "NUMBER:{value}"),
            Self::Plus => write!(f, "PLUS"),
            Self::Minus => write!(f, "MINUS"),
            Self::Star => write!(f, "MULTIPLY"),
            Self::Slash => write!(f, "DIVIDE"),
            Self::LParen => write!(f, "LPAREN"),
            Self::RParen => write!(f, "RPAREN"),
        }
    }
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed floating-point value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    parse_real(lex.slice())
}

/// Splits source text into tokens.
///
/// Tokens are returned in source order together with their byte offsets. No
/// end-of-input token is produced; the parser treats running out of tokens as
/// the end. Lexing stops at the first error and no partial token list is
/// returned.
///
/// # Parameters
/// - `source`: The raw expression text.
///
/// # Returns
/// The tokens of `source`, each paired with its starting byte offset.
///
/// # Errors
/// - `IllegalCharacter` if a character starts no token. A lone `.` is not a
///   number, so `5..` fails on its second point.
/// - `InvalidNumber` if a numeric literal cannot be read as an `f64`.
///
/// # Example
/// ```
/// use reckon::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2 * (.5 + 1)").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number(2.0), 0),
///                 (Token::Star, 2),
///                 (Token::LParen, 4),
///                 (Token::Number(0.5), 5),
///                 (Token::Plus, 8),
///                 (Token::Number(1.0), 10),
///                 (Token::RParen, 11)]);
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<Spanned>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        if let Ok(tok) = token {
            trace!(%tok, position, "token");
            tokens.push((tok, position));
        } else {
            return Err(lex_error(source, position));
        }
    }

    debug!(count = tokens.len(), "tokenized source");
    Ok(tokens)
}

/// Builds the error for a failed match starting at `position`.
///
/// Only literals reach the number callback, so a failure that starts on a
/// digit is a literal that could not be read. Anything else is a character
/// no token accepts.
fn lex_error(source: &str, position: usize) -> LexError {
    let rest = &source[position..];
    let ch = rest.chars().next().unwrap_or_default();

    if ch.is_ascii_digit() {
        let literal = rest.chars()
                          .take_while(|c| c.is_ascii_digit() || *c == '.')
                          .collect();
        LexError::InvalidNumber { literal, position }
    } else {
        LexError::IllegalCharacter { ch, position }
    }
}
