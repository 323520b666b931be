use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::evaluator::core::EvalResult,
};

/// Evaluates a binary operation between two numbers.
///
/// Arithmetic follows IEEE 754 double precision, so results that overflow
/// become infinite rather than failing. Only a zero divisor is an error;
/// `-0.0` counts as zero.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `position`: Byte offset of the operator, for error reporting.
///
/// # Returns
/// An `EvalResult<f64>` containing the evaluated result.
///
/// # Example
/// ```
/// use reckon::{
///     ast::BinaryOperator,
///     error::EvalError,
///     interpreter::evaluator::binary::eval_binary,
/// };
///
/// assert_eq!(eval_binary(BinaryOperator::Div, 5.0, 2.0, 1).unwrap(), 2.5);
/// assert_eq!(eval_binary(BinaryOperator::Div, 1.0, 0.0, 1),
///            Err(EvalError::DivisionByZero { position: 1 }));
/// ```
pub fn eval_binary(op: BinaryOperator, left: f64, right: f64, position: usize) -> EvalResult<f64> {
    match op {
        BinaryOperator::Add => Ok(left + right),
        BinaryOperator::Sub => Ok(left - right),
        BinaryOperator::Mul => Ok(left * right),
        BinaryOperator::Div => {
            if right == 0.0 {
                return Err(EvalError::DivisionByZero { position });
            }
            Ok(left / right)
        },
    }
}
