/// The evaluator module computes the value of a syntax tree.
///
/// The evaluator walks the AST post-order, applies arithmetic operators and
/// reports runtime errors such as division by zero. It holds no state, so a
/// tree can be evaluated from any thread.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Reports runtime errors with the position of the failing operator.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a list of tokens, each
/// a number literal or an operator/punctuation symbol, paired with its byte
/// offset. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source positions.
/// - Reads decimal literals, including `.5` and `5.` forms.
/// - Reports lexical errors for characters that start no token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive-descent parser over the token list produced by
/// the lexer. Precedence is encoded by the nesting of its rule functions.
///
/// # Responsibilities
/// - Converts tokens into an AST honoring precedence and associativity.
/// - Validates grammar, reporting the position of the first violation.
pub mod parser;
