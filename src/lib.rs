//! # reckon
//!
//! reckon is an arithmetic expression evaluator written in Rust.
//! It tokenizes, parses and evaluates expressions built from decimal numbers,
//! `+ - * /`, parentheses and prefix `+`/`-`, producing a floating-point
//! result or a descriptive error.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    error::PipelineError,
    interpreter::{
        evaluator::core::evaluate,
        lexer::{Spanned, tokenize},
        parser::core::parse,
    },
    util::num::format_real,
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types that represent
/// an expression as a tree. The AST is built by the parser and traversed by
/// the evaluator.
///
/// # Responsibilities
/// - Defines the literal, binary and unary node variants.
/// - Attaches source positions to nodes for error reporting.
/// - Renders trees in a fully parenthesised form for inspection.
pub mod ast;
/// Provides unified error types for every pipeline stage.
///
/// This module defines all errors that can be raised during lexing, parsing
/// or evaluating an expression, and the pipeline error that wraps them.
///
/// # Responsibilities
/// - Defines one error enum per stage (lexer, parser, evaluator).
/// - Attaches source positions and readable messages for user feedback.
/// - Converts stage errors into [`error::PipelineError`] for `?` propagation.
pub mod error;
/// Orchestrates the three evaluation stages.
///
/// This module holds the lexer, the recursive-descent parser and the
/// tree-walking evaluator. Each stage consumes the previous one's output.
pub mod interpreter;
/// Numeric literal parsing and result rendering.
pub mod util;

/// Evaluates source text and returns the numeric result.
///
/// Runs the full pipeline: the text is tokenized, parsed into a tree and the
/// tree evaluated. The first error of any stage aborts the call.
///
/// # Errors
/// - `EmptyInput` if `source` is the empty string.
/// - `NothingToEvaluate` if `source` holds only whitespace.
/// - `Lex`, `Parse` or `Eval` wrapping the error of the failing stage.
///
/// # Examples
/// ```
/// use reckon::evaluate_expression;
///
/// assert_eq!(evaluate_expression("2 + 3 * 4").unwrap(), 14.0);
/// assert!(evaluate_expression("1 / 0").is_err());
/// ```
pub fn evaluate_expression(source: &str) -> Result<f64, PipelineError> {
    if source.is_empty() {
        return Err(PipelineError::EmptyInput);
    }

    let tokens = tokenize(source)?;
    evaluate_tokens(&tokens)
}

/// Parses and evaluates an already tokenized expression.
///
/// Lets callers that inspect the token stream, such as the command line
/// front end, evaluate it without lexing the source a second time.
///
/// # Errors
/// - `NothingToEvaluate` if `tokens` is empty.
/// - `Parse` or `Eval` wrapping the error of the failing stage.
///
/// # Examples
/// ```
/// use reckon::{evaluate_tokens, interpreter::lexer::tokenize};
///
/// let tokens = tokenize("-5 + 3").unwrap();
/// assert_eq!(evaluate_tokens(&tokens).unwrap(), -2.0);
/// ```
pub fn evaluate_tokens(tokens: &[Spanned]) -> Result<f64, PipelineError> {
    let Some(tree) = parse(tokens)? else {
        return Err(PipelineError::NothingToEvaluate);
    };
    let value = evaluate(&tree)?;

    debug!(value, "evaluated expression");
    Ok(value)
}

/// Evaluates source text and renders the result as a string.
///
/// This is the entry point for callers that display results, such as the
/// command line front end. Integral results are rendered without a
/// fractional part, so `4 / 2` gives `"2"` and `5 / 2` gives `"2.5"`.
///
/// Calls share no state: running the same text twice gives the same
/// outcome, and concurrent calls need no synchronization.
///
/// # Errors
/// Returns the same errors as [`evaluate_expression`].
///
/// # Examples
/// ```
/// use reckon::{error::PipelineError, run};
///
/// assert_eq!(run("(2 + 3) * 4").unwrap(), "20");
/// assert_eq!(run(".5 + .5").unwrap(), "1");
///
/// // Empty input is rejected before lexing.
/// assert_eq!(run(""), Err(PipelineError::EmptyInput));
/// ```
#[tracing::instrument(level = "debug", err(level = "debug"))]
pub fn run(source: &str) -> Result<String, PipelineError> {
    evaluate_expression(source).map(format_real)
}
