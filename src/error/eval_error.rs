use crate::interpreter::operator::Operator;

/// Describes why an expression is structurally malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpressionFault {
    /// An operator was applied while fewer than two operands were available.
    MissingOperand {
        /// The operator that could not be applied.
        operator: Operator,
    },
    /// Evaluation finished with a number of operands other than one.
    OperandCount(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression.
pub enum EvalError {
    /// Found a character that is not a digit, a decimal point, an operator or
    /// a parenthesis.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the input.
        position:  usize,
    },
    /// A run of digits and decimal points could not be read as a number.
    InvalidNumber {
        /// The literal text, e.g. `1.2.3`.
        literal:  String,
        /// Byte offset of the literal in the input.
        position: usize,
    },
    /// A closing parenthesis had no opening partner, or an opening one was
    /// never closed.
    MismatchedParentheses,
    /// The expression is structurally malformed.
    InvalidExpression(ExpressionFault),
    /// Attempted division by zero.
    DivisionByZero,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character, .. } => {
                write!(f, "Invalid character in expression: {character}")
            },
            Self::InvalidNumber { literal, .. } => write!(f, "Invalid number: {literal}"),
            Self::MismatchedParentheses => write!(f, "Mismatched parentheses"),
            Self::InvalidExpression(ExpressionFault::MissingOperand { .. }) => {
                write!(f, "Invalid expression")
            },
            Self::InvalidExpression(ExpressionFault::OperandCount(_)) => {
                write!(f, "Invalid expression format")
            },
            Self::DivisionByZero => write!(f, "Cannot divide by zero"),
        }
    }
}

impl std::error::Error for EvalError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_the_console_wording() {
        let invalid = EvalError::InvalidCharacter { character: '$',
                                                    position:  1, };
        assert_eq!(invalid.to_string(), "Invalid character in expression: $");
        assert_eq!(EvalError::MismatchedParentheses.to_string(), "Mismatched parentheses");
        assert_eq!(EvalError::DivisionByZero.to_string(), "Cannot divide by zero");

        let missing = ExpressionFault::MissingOperand { operator: Operator::Sub };
        assert_eq!(EvalError::InvalidExpression(missing).to_string(), "Invalid expression");
        assert_eq!(EvalError::InvalidExpression(ExpressionFault::OperandCount(0)).to_string(),
                   "Invalid expression format");
    }
}
