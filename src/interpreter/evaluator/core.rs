use logos::Logos;

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::stack::Stacks,
        lexer::{LexError, Token},
        operator::Associativity,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates infix arithmetic expressions.
///
/// ## Usage
///
/// An `Evaluator` is created once and reused. It carries only configuration
/// that never changes after construction, so it is `Copy` and may be shared
/// freely between threads. Every call to [`Evaluator::evaluate`] builds its
/// own stacks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evaluator {
    power_associativity: Associativity,
}

impl Evaluator {
    /// Creates an evaluator with left-associative `^`.
    #[must_use]
    pub const fn new() -> Self {
        Self { power_associativity: Associativity::Left }
    }

    /// Creates an evaluator that groups chains of `^` as requested.
    ///
    /// # Example
    /// ```
    /// use infixa::interpreter::{evaluator::core::Evaluator, operator::Associativity};
    ///
    /// let conventional = Evaluator::with_power_associativity(Associativity::Right);
    /// assert_eq!(conventional.evaluate("2^3^2"), Ok(512.0));
    /// assert_eq!(Evaluator::new().evaluate("2^3^2"), Ok(64.0));
    /// ```
    #[must_use]
    pub const fn with_power_associativity(power_associativity: Associativity) -> Self {
        Self { power_associativity }
    }

    /// Returns how chains of `^` are grouped.
    #[must_use]
    pub const fn power_associativity(&self) -> Associativity {
        self.power_associativity
    }

    /// Evaluates an expression and returns its value.
    ///
    /// The input is scanned once from left to right. Numbers go onto the
    /// operand stack; operators first reduce every stacked operator that
    /// binds at least as tightly, then go onto the operator stack. A closing
    /// parenthesis reduces back to its opening partner. Whitespace is ignored.
    ///
    /// Unary signs are not supported: `-5` fails because the `-` has no left
    /// operand.
    ///
    /// # Errors
    /// - `InvalidCharacter` for any character that is not a digit, `.`, an
    ///   operator or a parenthesis.
    /// - `InvalidNumber` for a literal such as `1.2.3`.
    /// - `MismatchedParentheses` for an unmatched `(` or `)`.
    /// - `InvalidExpression` when an operator lacks operands or the input does
    ///   not reduce to exactly one value.
    /// - `DivisionByZero` when a division meets a zero divisor.
    ///
    /// # Example
    /// ```
    /// use infixa::{error::EvalError, interpreter::evaluator::core::Evaluator};
    ///
    /// let evaluator = Evaluator::new();
    /// assert_eq!(evaluator.evaluate("3 + 4 * 2"), Ok(11.0));
    /// assert_eq!(evaluator.evaluate("(3 + 4) * 2"), Ok(14.0));
    /// assert_eq!(evaluator.evaluate("10 / 0"), Err(EvalError::DivisionByZero));
    /// ```
    pub fn evaluate(&self, expression: &str) -> EvalResult<f64> {
        let mut stacks = Stacks::default();
        let mut lexer = Token::lexer(expression);

        while let Some(token) = lexer.next() {
            let position = lexer.span().start;
            match token {
                Ok(Token::Number(value)) => stacks.push_operand(value),
                Ok(Token::LParen) => stacks.open_group(),
                Ok(Token::RParen) => stacks.close_group()?,
                Ok(token) => {
                    if let Some(operator) = token.operator() {
                        stacks.push_operator(operator, self.power_associativity)?;
                    }
                },
                Err(LexError::MalformedNumber) => {
                    return Err(EvalError::InvalidNumber { literal: lexer.slice().to_owned(),
                                                          position });
                },
                Err(LexError::UnexpectedCharacter) => {
                    let character = expression[position..].chars()
                                                          .next()
                                                          .unwrap_or(char::REPLACEMENT_CHARACTER);
                    return Err(EvalError::InvalidCharacter { character, position });
                },
            }
        }

        stacks.finish()
    }
}
