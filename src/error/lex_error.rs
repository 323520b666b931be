use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing source text.
pub enum LexError {
    /// Found a character that does not start any token.
    #[error("Error at position {position}: Illegal character '{ch}'.")]
    IllegalCharacter {
        /// The offending character.
        ch:       char,
        /// Byte offset of the character in the source.
        position: usize,
    },
    /// A numeric literal could not be read as a floating-point value.
    #[error("Error at position {position}: Invalid number literal '{literal}'.")]
    InvalidNumber {
        /// The literal as it appeared in the source.
        literal:  String,
        /// Byte offset of the literal in the source.
        position: usize,
    },
}
