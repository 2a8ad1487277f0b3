/// The evaluator module computes the value of an expression.
///
/// The evaluator consumes the token stream in a single left-to-right pass,
/// keeping an operand stack and an operator stack, and reduces them as
/// precedence dictates. No syntax tree is built.
///
/// # Responsibilities
/// - Owns the configuration that stays fixed across calls.
/// - Creates fresh stacks for every call so no state leaks between calls.
/// - Reports every failure as an [`EvalError`](crate::error::EvalError).
pub mod evaluator;
/// The lexer module tokenizes expression text.
///
/// The lexer reads the raw input and produces numbers, operators and
/// parentheses, skipping whitespace.
///
/// # Responsibilities
/// - Groups the maximal run of digits and decimal points into one literal.
/// - Reports characters that start no token.
/// - Reports literals that do not parse as a number.
pub mod lexer;
/// The operator module defines the supported arithmetic operators.
///
/// Holds the fixed precedence table, the associativity rule for `^` and the
/// arithmetic each operator performs.
pub mod operator;
