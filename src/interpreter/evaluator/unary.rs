use num_bigint::BigInt;

use crate::{ast::UnaryOperator, interpreter::evaluator::core::Context};

impl Context {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Plus`: returns the value unchanged.
    /// - `Negate`: arithmetic negation.
    ///
    /// # Example
    /// ```
    /// use num_bigint::BigInt;
    /// use varcalc::{ast::UnaryOperator, interpreter::evaluator::core::Context};
    ///
    /// let v = Context::eval_unary(UnaryOperator::Negate, BigInt::from(5));
    /// assert_eq!(v, BigInt::from(-5));
    ///
    /// let v = Context::eval_unary(UnaryOperator::Plus, BigInt::from(-5));
    /// assert_eq!(v, BigInt::from(-5));
    /// ```
    #[must_use]
    pub fn eval_unary(op: UnaryOperator, value: BigInt) -> BigInt {
        match op {
            UnaryOperator::Plus => value,
            UnaryOperator::Negate => -value,
        }
    }
}
