use crate::{
    error::{EvalError, ExpressionFault},
    interpreter::{
        evaluator::core::EvalResult,
        operator::{Associativity, Operator},
    },
};

/// An entry on the operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    /// An operator waiting for its right operand to be complete.
    Operator(Operator),
    /// An opening parenthesis. Reduction never crosses it.
    OpenParen,
}

/// The operand and operator stacks of a single evaluation.
///
/// Operators on the stack, read bottom to top, never decrease in precedence
/// between two parentheses.
#[derive(Debug, Default)]
pub struct Stacks {
    operands:  Vec<f64>,
    operators: Vec<Pending>,
}

impl Stacks {
    /// Pushes a number onto the operand stack.
    pub fn push_operand(&mut self, value: f64) {
        self.operands.push(value);
    }

    /// Pushes an opening parenthesis onto the operator stack.
    pub fn open_group(&mut self) {
        self.operators.push(Pending::OpenParen);
    }

    /// Reduces back to the most recent opening parenthesis and discards it.
    ///
    /// # Errors
    /// `MismatchedParentheses` if the operator stack runs out first, or any
    /// error from applying the reduced operators.
    pub fn close_group(&mut self) -> EvalResult<()> {
        loop {
            match self.operators.pop() {
                Some(Pending::Operator(operator)) => self.apply(operator)?,
                Some(Pending::OpenParen) => return Ok(()),
                None => return Err(EvalError::MismatchedParentheses),
            }
        }
    }

    /// Applies every stacked operator that binds at least as tightly as
    /// `incoming`, then pushes `incoming`.
    ///
    /// # Errors
    /// Any error from applying the reduced operators.
    pub fn push_operator(&mut self,
                         incoming: Operator,
                         power: Associativity)
                         -> EvalResult<()> {
        while let Some(&Pending::Operator(top)) = self.operators.last()
              && top.applies_before(incoming, power)
        {
            self.operators.pop();
            self.apply(top)?;
        }
        self.operators.push(Pending::Operator(incoming));
        Ok(())
    }

    /// Drains the operator stack and returns the single remaining operand.
    ///
    /// # Errors
    /// - `MismatchedParentheses` if an opening parenthesis was never closed.
    /// - `InvalidExpression` if the operands do not reduce to exactly one
    ///   value.
    pub fn finish(mut self) -> EvalResult<f64> {
        while let Some(pending) = self.operators.pop() {
            match pending {
                Pending::Operator(operator) => self.apply(operator)?,
                Pending::OpenParen => return Err(EvalError::MismatchedParentheses),
            }
        }

        match self.operands.as_slice() {
            [value] => Ok(*value),
            rest => Err(EvalError::InvalidExpression(ExpressionFault::OperandCount(rest.len()))),
        }
    }

    /// Pops the right then the left operand, applies `operator` and pushes the
    /// result.
    fn apply(&mut self, operator: Operator) -> EvalResult<()> {
        let (Some(right), Some(left)) = (self.operands.pop(), self.operands.pop()) else {
            return Err(EvalError::InvalidExpression(ExpressionFault::MissingOperand { operator }));
        };
        self.operands.push(operator.apply(left, right)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn higher_precedence_is_reduced_before_pushing() {
        let mut stacks = Stacks::default();
        stacks.push_operand(2.0);
        stacks.push_operator(Operator::Mul, Associativity::Left).unwrap();
        stacks.push_operand(3.0);
        stacks.push_operator(Operator::Add, Associativity::Left).unwrap();

        assert_eq!(stacks.operands, vec![6.0]);
        assert_eq!(stacks.operators, vec![Pending::Operator(Operator::Add)]);
    }

    #[test]
    fn reduction_stops_at_an_open_parenthesis() {
        let mut stacks = Stacks::default();
        stacks.push_operand(2.0);
        stacks.push_operator(Operator::Pow, Associativity::Left).unwrap();
        stacks.open_group();
        stacks.push_operand(1.0);
        stacks.push_operator(Operator::Sub, Associativity::Left).unwrap();

        assert_eq!(stacks.operands, vec![2.0, 1.0]);
        assert_eq!(stacks.operators.len(), 3);
    }

    #[test]
    fn closing_without_opening_is_mismatched() {
        let mut stacks = Stacks::default();
        stacks.push_operand(1.0);
        assert_eq!(stacks.close_group(), Err(EvalError::MismatchedParentheses));
    }

    #[test]
    fn a_lone_operand_cannot_be_applied() {
        let mut stacks = Stacks::default();
        stacks.push_operand(5.0);
        stacks.push_operator(Operator::Sub, Associativity::Left).unwrap();

        let expected = ExpressionFault::MissingOperand { operator: Operator::Sub };
        assert_eq!(stacks.finish(), Err(EvalError::InvalidExpression(expected)));
    }

    #[test]
    fn leftover_operands_are_counted() {
        let mut stacks = Stacks::default();
        stacks.push_operand(1.0);
        stacks.push_operand(2.0);
        assert_eq!(stacks.finish(),
                   Err(EvalError::InvalidExpression(ExpressionFault::OperandCount(2))));
        assert_eq!(Stacks::default().finish(),
                   Err(EvalError::InvalidExpression(ExpressionFault::OperandCount(0))));
    }
}
