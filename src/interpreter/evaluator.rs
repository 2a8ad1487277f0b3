/// The evaluator type and its single entry point.
///
/// Drives the lexer over the input and feeds every token into a fresh pair
/// of stacks, translating lexer failures into evaluation errors.
pub mod core;

/// The operand and operator stacks used by one evaluation.
///
/// Implements pushing, precedence-driven reduction, parenthesis handling and
/// the final drain that produces the result.
pub mod stack;
