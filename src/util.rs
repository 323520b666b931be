/// Numeric literal and result helpers.
///
/// This module converts between the textual and floating-point forms of a
/// number: reading the literals the lexer accepts, and rendering evaluation
/// results the way they are shown to the user.
pub mod num;
