use std::collections::HashMap;

use num_bigint::BigInt;
use tracing::{debug, trace};

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::report::Report,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the variable environment and the
/// order in which names were first assigned. Both are keyed by lower-cased
/// names.
///
/// ## Usage
///
/// A `Context` is created for a single interpretation. Nothing is shared
/// between contexts, so interpretations are independent of each other.
#[derive(Debug, Default, Clone)]
pub struct Context {
    /// Current value of every assigned variable.
    pub(crate) variables: HashMap<String, BigInt>,
    /// Names in order of their first assignment, each listed once.
    pub(crate) order:     Vec<String>,
}

impl Context {
    /// Creates a new evaluation context with no variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// The evaluator dispatches based on expression variant: literals,
    /// variables, unary and binary operations. Operands of a binary operation
    /// are evaluated left first.
    ///
    /// # Errors
    /// Returns `UnknownVariable` if the expression reads a name that has not
    /// been assigned.
    ///
    /// # Example
    /// ```
    /// use num_bigint::BigInt;
    /// use varcalc::{ast::Expr, interpreter::evaluator::core::Context};
    ///
    /// let ctx = Context::new();
    /// let expr = Expr::Number { value: BigInt::from(7),
    ///                           line:  1, };
    ///
    /// assert_eq!(ctx.eval(&expr).unwrap(), BigInt::from(7));
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<BigInt> {
        match expr {
            Expr::Number { value, .. } => Ok(value.clone()),
            Expr::Variable { name, line } => self.eval_variable(name, *line),
            Expr::UnaryOp { op, expr, .. } => self.eval_unary_op(*op, expr),
            Expr::BinaryOp { left, op, right, .. } => self.eval_binary_op(left, *op, right),
        }
    }

    /// Evaluates a single assignment statement.
    ///
    /// The right-hand side sees every binding made by earlier statements, but
    /// not the one being made, so `x = x + 1;` fails unless `x` is already
    /// assigned.
    ///
    /// # Returns
    /// The value that was bound.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<BigInt> {
        let value = self.eval(&statement.value)?;
        trace!(name = %statement.name, %value, line = statement.line, "assigned variable");
        self.bind(&statement.name, value.clone());
        Ok(value)
    }

    /// Runs every statement of a program in order.
    ///
    /// Execution stops at the first failing statement; bindings made before it
    /// remain in the context.
    ///
    /// # Example
    /// ```
    /// use varcalc::interpreter::{
    ///     evaluator::core::Context, lexer::tokenize, parser::statement::parse_program,
    /// };
    ///
    /// let tokens = tokenize("x = 1; y = 2; x = 3;").unwrap();
    /// let program = parse_program(&tokens).unwrap();
    ///
    /// let mut ctx = Context::new();
    /// ctx.run(&program).unwrap();
    /// assert_eq!(ctx.report().to_string(), "x = 3 y = 2");
    /// ```
    pub fn run(&mut self, statements: &[Statement]) -> EvalResult<()> {
        for statement in statements {
            self.eval_statement(statement)?;
        }
        debug!(statements = statements.len(),
               variables = self.order.len(),
               "evaluated program");
        Ok(())
    }

    /// Returns the final bindings in order of first assignment.
    #[must_use]
    pub fn report(&self) -> Report {
        let entries: Vec<_> = self.order
                                  .iter()
                                  .filter_map(|name| {
                                      self.variables
                                          .get(name)
                                          .map(|value| (name.clone(), value.clone()))
                                  })
                                  .collect();
        entries.into()
    }

    /// Names in order of their first assignment.
    #[must_use]
    pub fn order(&self) -> &[String] {
        &self.order
    }
}
