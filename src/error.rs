/// Evaluation errors.
///
/// Defines every way a single `evaluate` call can fail: unknown characters,
/// unreadable number literals, unbalanced parentheses, structurally malformed
/// input and division by zero. None of these are retried; the first one
/// encountered ends the call.
pub mod eval_error;

pub use eval_error::{EvalError, ExpressionFault};
