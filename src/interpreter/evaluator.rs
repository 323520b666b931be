/// Core evaluation logic.
///
/// Contains the tree walk that dispatches on each node variant.
pub mod core;

/// Binary operator evaluation logic.
///
/// Applies `+`, `-`, `*` and `/` to two evaluated operands, rejecting a zero
/// divisor.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Applies prefix `+` and `-` to an evaluated operand.
pub mod unary;
