use num_bigint::BigInt;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

/// Normalizes a variable name for use as an environment key.
///
/// Both binding and lookup go through this function, so `X` and `x` always
/// refer to the same variable.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
}

impl Context {
    /// Looks up a variable by name.
    ///
    /// The lookup is case-insensitive. If the variable is not found, an
    /// `UnknownVariable` error naming the identifier as written is returned.
    ///
    /// # Parameters
    /// - `name`: Variable name.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use num_bigint::BigInt;
    /// use varcalc::interpreter::evaluator::core::Context;
    ///
    /// let mut ctx = Context::new();
    /// ctx.bind("Total", BigInt::from(10));
    ///
    /// assert_eq!(ctx.eval_variable("TOTAL", 1).unwrap(), BigInt::from(10));
    /// assert!(ctx.eval_variable("missing", 1).is_err());
    /// ```
    pub fn eval_variable(&self, name: &str, line: usize) -> EvalResult<BigInt> {
        if let Some(value) = self.get_variable(name) {
            return Ok(value.clone());
        }
        Err(RuntimeError::UnknownVariable { name: name.to_owned(),
                                            line })
    }

    /// Evaluates the operand of a unary node and applies the operator.
    pub fn eval_unary_op(&self, op: UnaryOperator, expr: &Expr) -> EvalResult<BigInt> {
        let value = self.eval(expr)?;
        Ok(Self::eval_unary(op, value))
    }

    /// Evaluates both operands of a binary node, left first, and applies the
    /// operator.
    pub fn eval_binary_op(&self,
                          left: &Expr,
                          op: BinaryOperator,
                          right: &Expr)
                          -> EvalResult<BigInt> {
        let left = self.eval(left)?;
        let right = self.eval(right)?;
        Ok(Self::eval_binary(op, &left, &right))
    }

    /// Gets the current value of a variable, if it has been assigned.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&BigInt> {
        self.variables.get(&normalize_name(name))
    }

    /// Binds `value` to `name`, overwriting any previous value.
    ///
    /// The first binding of a name also appends it to the assignment order;
    /// later bindings keep its original position.
    pub fn bind(&mut self, name: &str, value: BigInt) {
        let key = normalize_name(name);
        if self.variables.insert(key.clone(), value).is_none() {
            self.order.push(key);
        }
    }
}
