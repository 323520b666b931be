use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a syntax tree.
pub enum EvalError {
    /// Attempted division by zero.
    #[error("Error at position {position}: Division by zero.")]
    DivisionByZero {
        /// Byte offset of the `/` operator.
        position: usize,
    },
}
