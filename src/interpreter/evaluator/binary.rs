use num_bigint::BigInt;

use crate::{ast::BinaryOperator, interpreter::evaluator::core::Context};

impl Context {
    /// Evaluates a binary operation between two values.
    ///
    /// Integers are unbounded, so none of the operators can overflow.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Example
    /// ```
    /// use num_bigint::BigInt;
    /// use varcalc::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// let left = BigInt::from(3);
    /// let right = BigInt::from(4);
    ///
    /// assert_eq!(Context::eval_binary(BinaryOperator::Sub, &left, &right), BigInt::from(-1));
    /// assert_eq!(Context::eval_binary(BinaryOperator::Mul, &left, &right), BigInt::from(12));
    /// ```
    #[must_use]
    pub fn eval_binary(op: BinaryOperator, left: &BigInt, right: &BigInt) -> BigInt {
        match op {
            BinaryOperator::Add => left + right,
            BinaryOperator::Sub => left - right,
            BinaryOperator::Mul => left * right,
        }
    }
}
