/// Lexing errors.
///
/// Raised while the raw source text is turned into tokens: characters that
/// belong to no token, or numeric literals that cannot be read as a float.
pub mod lex_error;
/// Parsing errors.
///
/// Raised when the token stream does not form a valid expression: missing
/// operands, unbalanced parentheses or trailing tokens.
pub mod parse_error;
/// Evaluation errors.
///
/// Raised while walking a well-formed tree, such as division by zero.
pub mod eval_error;
/// Pipeline errors.
///
/// The single error type returned by [`crate::run`], wrapping the error of
/// whichever stage failed first.
pub mod pipeline_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use pipeline_error::PipelineError;
