use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token stream.
pub enum ParseError {
    /// The tokens do not form a valid expression.
    ///
    /// Covers missing operands, unexpected tokens, a missing closing
    /// parenthesis and tokens left over after a complete expression.
    #[error("{}", describe_invalid_syntax(*position))]
    InvalidSyntax {
        /// Byte offset of the offending token, or `None` if the input ended
        /// where more tokens were required.
        position: Option<usize>,
    },
}

fn describe_invalid_syntax(position: Option<usize>) -> String {
    match position {
        Some(position) => format!("Error at position {position}: Invalid syntax."),
        None => "Error at end of input: Invalid syntax.".to_string(),
    }
}
