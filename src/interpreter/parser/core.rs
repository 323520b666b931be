use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Spanned, Token},
        parser::binary::parse_additive,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting of parentheses and prefix signs the parser accepts.
///
/// Every level costs a few stack frames in the parser and the evaluator, so
/// input nested deeper than this fails with `InvalidSyntax` instead.
pub const MAX_NESTING: usize = 256;

/// Parses a complete token stream into a single expression tree.
///
/// An empty stream yields `Ok(None)`: there is nothing to evaluate. Otherwise
/// the whole stream must form exactly one expression.
///
/// Grammar, lowest precedence first:
/// ```text
///     expr   := term (("+" | "-") term)*
///     term   := factor (("*" | "/") factor)*
///     factor := NUMBER | "(" expr ")" | ("+" | "-") factor
/// ```
///
/// # Parameters
/// - `tokens`: Tokens paired with their byte offsets, as produced by
///   [`crate::interpreter::lexer::tokenize`].
///
/// # Returns
/// The root of the parsed tree, or `None` for an empty stream.
///
/// # Errors
/// - `InvalidSyntax` on the first grammar violation, including tokens left
///   over after a complete expression, or when parentheses and prefix signs
///   nest deeper than [`MAX_NESTING`].
///
/// # Example
/// ```
/// use reckon::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let tokens = tokenize("10 - 2 - 3").unwrap();
/// let tree = parse(&tokens).unwrap().unwrap();
/// assert_eq!(tree.to_string(), "((10-2)-3)");
///
/// assert_eq!(parse(&[]).unwrap(), None);
/// ```
pub fn parse(tokens: &[Spanned]) -> ParseResult<Option<Expr>> {
    let mut iter = tokens.iter().peekable();

    if iter.peek().is_none() {
        return Ok(None);
    }

    let expr = parse_expression(&mut iter, 0)?;

    if iter.peek().is_some() {
        return Err(unexpected(&mut iter));
    }

    debug!(tree = %expr, depth = expr.depth(), "parsed expression");
    Ok(Some(expr))
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, addition, and recursively
/// descends through the precedence hierarchy. Unlike [`parse`], it stops at
/// the first token that cannot continue the expression and leaves it
/// unconsumed.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
/// - `depth`: Nesting level of the enclosing parentheses and prefix signs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_additive(tokens, depth)
}

/// Enters one more level of nesting at the token at `position`.
///
/// # Returns
/// The new depth, or `InvalidSyntax` at `position` past [`MAX_NESTING`].
pub(crate) const fn nest(depth: usize, position: usize) -> ParseResult<usize> {
    if depth >= MAX_NESTING {
        return Err(ParseError::InvalidSyntax { position: Some(position) });
    }
    Ok(depth + 1)
}

/// Builds the error for the token at the head of `tokens`.
///
/// The error carries the token's offset, or no offset when the stream is
/// exhausted.
pub(crate) fn unexpected<'a, I>(tokens: &mut Peekable<I>) -> ParseError
    where I: Iterator<Item = &'a (Token, usize)>
{
    ParseError::InvalidSyntax { position: tokens.peek().map(|(_, position)| *position) }
}
