/// Core parser entry points.
///
/// Contains the top-level `parse` function, which handles the empty stream
/// and rejects trailing tokens, and the expression entry point shared by
/// parenthesised sub-expressions.
pub mod core;

/// Binary operator parsing.
///
/// Implements the two left-associative precedence levels: additive
/// (`+`, `-`) and multiplicative (`*`, `/`).
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix `+`/`-`, numeric literals and parenthesised
/// sub-expressions.
pub mod unary;
