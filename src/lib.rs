//! # infixa
//!
//! infixa is an infix arithmetic evaluator written in Rust.
//! It supports `+`, `-`, `*`, `/`, `^` and parentheses over non-negative
//! decimal literals, and computes the result in a single pass with an operand
//! stack and an operator stack instead of building a syntax tree.

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

use crate::interpreter::evaluator::core::{EvalResult, Evaluator};

/// Provides the error type for evaluation.
///
/// This module defines every error a call to `evaluate` can return. Each
/// error is a local validation failure over malformed input and carries
/// enough detail for a user-facing message.
///
/// # Responsibilities
/// - Defines the error enum for all failure modes (lexer and evaluator).
/// - Keeps the console messages in one place.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Turns expression text into a number.
///
/// This module ties together the lexer, the operator table and the
/// two-stack evaluator.
///
/// # Responsibilities
/// - Tokenizes input text.
/// - Defines operators, their precedence and their arithmetic.
/// - Reduces the token stream to a single value.
pub mod interpreter;
/// The interactive console calculator.
///
/// A line-oriented loop that strips whitespace, recognizes `exit`, and
/// prints either a result or an error for every other line.
pub mod shell;

/// Evaluates an expression with the default evaluator.
///
/// `^` is left-associative here; use
/// [`Evaluator::with_power_associativity`] for the conventional grouping.
///
/// # Errors
/// Returns an error describing the first problem found in the expression.
///
/// # Examples
/// ```
/// use infixa::{error::EvalError, evaluate};
///
/// assert_eq!(evaluate("8 - 3 - 2"), Ok(3.0));
/// assert_eq!(evaluate("2^3^2"), Ok(64.0));
///
/// // Unary minus is not supported.
/// assert!(matches!(evaluate("-5"), Err(EvalError::InvalidExpression(_))));
/// ```
pub fn evaluate(expression: &str) -> EvalResult<f64> {
    Evaluator::new().evaluate(expression)
}
