use thiserror::Error;

use crate::error::{EvalError, LexError, ParseError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Represents every way [`crate::run`] can fail.
///
/// Stage errors are wrapped unchanged, so callers can match on the exact
/// cause while still displaying a single human-readable message.
pub enum PipelineError {
    /// The source text was the empty string.
    #[error("Error: Empty input.")]
    EmptyInput,
    /// The source text contained only whitespace.
    #[error("Error: Nothing to evaluate.")]
    NothingToEvaluate,
    /// Tokenizing failed.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// Parsing failed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation failed.
    #[error(transparent)]
    Eval(#[from] EvalError),
}
