use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::evaluator::{binary::eval_binary, unary::eval_unary},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates an expression tree and returns the resulting number.
///
/// The tree is walked post-order: both operands of a binary operation are
/// evaluated, left before right, before the operator is applied. Evaluation
/// is pure and keeps no state between calls. Recursion depth equals the tree
/// depth.
///
/// # Parameters
/// - `expr`: Expression to evaluate.
///
/// # Returns
/// The value of the expression.
///
/// # Errors
/// - `DivisionByZero` if any divisor evaluates to zero. The leftmost failing
///   division is reported.
///
/// # Example
/// ```
/// use reckon::{
///     ast::{BinaryOperator, Expr, UnaryOperator},
///     interpreter::evaluator::core::evaluate,
/// };
///
/// // -(2 * 3)
/// let product = Expr::binary(Expr::number(2.0, 2), BinaryOperator::Mul, Expr::number(3.0, 4), 3);
/// let expr = Expr::unary(UnaryOperator::Negate, product, 0);
/// assert_eq!(evaluate(&expr).unwrap(), -6.0);
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<f64> {
    match expr {
        Expr::Number { value, .. } => Ok(*value),
        Expr::BinaryOp { left,
                         op,
                         right,
                         position, } => {
            let left = evaluate(left)?;
            let right = evaluate(right)?;
            eval_binary(*op, left, right, *position)
        },
        Expr::UnaryOp { op, expr, .. } => Ok(eval_unary(*op, evaluate(expr)?)),
    }
}
