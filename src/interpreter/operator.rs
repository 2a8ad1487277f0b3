use crate::{error::EvalError, interpreter::evaluator::core::EvalResult};

/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

/// How a chain of equal-precedence `^` operators is grouped.
///
/// `Left` groups `2^3^2` as `(2^3)^2 = 64`, which is what the console
/// calculator has always done. `Right` gives the conventional mathematical
/// reading `2^(3^2) = 512`. The other operators are always left-associative.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Associativity {
    /// Apply the earlier operator first.
    #[default]
    Left,
    /// Apply the later operator first.
    Right,
}

impl Operator {
    /// Returns the binding strength of the operator.
    ///
    /// `+` and `-` bind loosest (1), `*` and `/` tighter (2), `^` tightest
    /// (3). The table is fixed for the lifetime of the program.
    ///
    /// # Example
    /// ```
    /// use infixa::interpreter::operator::Operator;
    ///
    /// assert!(Operator::Mul.precedence() > Operator::Add.precedence());
    /// assert_eq!(Operator::Pow.precedence(), 3);
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::Pow => 3,
        }
    }

    /// Returns the character the operator is written with.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }

    /// Decides whether `self`, sitting on the operator stack, must be applied
    /// before `incoming` is pushed.
    ///
    /// Equal precedence resolves to the stacked operator, except for two `^`
    /// in a row under [`Associativity::Right`].
    #[must_use]
    pub fn applies_before(self, incoming: Self, power: Associativity) -> bool {
        if self == Self::Pow && incoming == Self::Pow && power == Associativity::Right {
            return false;
        }
        self.precedence() >= incoming.precedence()
    }

    /// Applies the operator to `left` and `right`.
    ///
    /// Division checks for a zero divisor explicitly; every other case
    /// follows IEEE-754, so `^` may yield `NaN` or an infinity without
    /// failing.
    ///
    /// # Errors
    /// Returns [`EvalError::DivisionByZero`] when dividing by zero.
    ///
    /// # Example
    /// ```
    /// use infixa::{error::EvalError, interpreter::operator::Operator};
    ///
    /// assert_eq!(Operator::Pow.apply(2.0, 10.0), Ok(1024.0));
    /// assert_eq!(Operator::Div.apply(1.0, 0.0), Err(EvalError::DivisionByZero));
    /// ```
    pub fn apply(self, left: f64, right: f64) -> EvalResult<f64> {
        match self {
            Self::Add => Ok(left + right),
            Self::Sub => Ok(left - right),
            Self::Mul => Ok(left * right),
            Self::Div => {
                if right == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(left / right)
            },
            Self::Pow => Ok(left.powf(right)),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
