use crate::ast::UnaryOperator;

/// Evaluates a prefix operation on a number.
///
/// `Plus` returns the operand unchanged and `Negate` flips its sign. Neither
/// can fail.
///
/// # Example
/// ```
/// use reckon::{ast::UnaryOperator, interpreter::evaluator::unary::eval_unary};
///
/// assert_eq!(eval_unary(UnaryOperator::Negate, 5.0), -5.0);
/// assert_eq!(eval_unary(UnaryOperator::Plus, -5.0), -5.0);
/// ```
#[must_use]
pub fn eval_unary(op: UnaryOperator, value: f64) -> f64 {
    match op {
        UnaryOperator::Plus => value,
        UnaryOperator::Negate => -value,
    }
}
