use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, nest, parse_expression, unexpected},
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `+`  (identity)
/// - `-`  (numeric negation)
///
/// Prefix operators recurse on themselves, so they chain (`--5` is
/// `-(-5)`) and bind tighter than every binary operator (`-2 * 3` is
/// `(-2) * 3`). Without a prefix operator the function delegates to
/// [`parse_primary`]. Each prefix operator counts as one level of nesting.
///
/// Grammar:
/// ```text
///     unary := ("+" | "-") unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Current nesting level.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (op, position) = match tokens.peek() {
        Some((Token::Plus, position)) => (UnaryOperator::Plus, *position),
        Some((Token::Minus, position)) => (UnaryOperator::Negate, *position),
        _ => return parse_primary(tokens, depth),
    };
    tokens.next();

    let expr = parse_unary(tokens, nest(depth, position)?)?;
    Ok(Expr::unary(op, expr, position))
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions are numeric literals and parenthesised
/// sub-expressions. A parenthesised expression is parsed in full and must be
/// closed by `)`.
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Current nesting level.
///
/// # Returns
/// An [`Expr::Number`] or the inner expression of a parenthesised group.
///
/// # Errors
/// - `InvalidSyntax` if the stream is exhausted, the next token cannot start
///   an expression, a `(` is never closed, or the group nests too deep.
fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        Some((Token::Number(value), position)) => {
            let expr = Expr::number(*value, *position);
            tokens.next();
            Ok(expr)
        },
        Some((Token::LParen, position)) => {
            let depth = nest(depth, *position)?;
            tokens.next();
            let expr = parse_expression(tokens, depth)?;
            match tokens.peek() {
                Some((Token::RParen, _)) => {
                    tokens.next();
                    Ok(expr)
                },
                _ => Err(unexpected(tokens)),
            }
        },
        _ => Err(unexpected(tokens)),
    }
}
