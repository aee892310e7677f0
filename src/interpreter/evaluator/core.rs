use std::{
    collections::HashMap,
    io::{self, Write},
};

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::evaluator::binary::eval_binary,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The flat variable namespace of one program run.
pub type Environment = HashMap<String, f64>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the single variable namespace and
/// the sink that printed lines are written to.
///
/// ## Usage
///
/// Create one `Context` per program run. Contexts share nothing, so
/// independent programs can run side by side, each with its own context.
pub struct Context<W> {
    /// Every variable assigned so far. Blocks do not open new scopes.
    variables: Environment,
    /// Receives one line per executed print statement.
    output:    W,
}

#[allow(clippy::new_without_default)]
impl Context<io::Stdout> {
    /// Creates a context with an empty environment that prints to standard
    /// output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }
}

impl<W: Write> Context<W> {
    /// Creates a context with an empty environment that prints to `output`.
    ///
    /// # Example
    /// ```
    /// use emojilang::{
    ///     ast::{Expr, Statement},
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let mut output = Vec::new();
    /// let mut context = Context::with_output(&mut output);
    /// let program = [Statement::Print { value: Expr::Number { value: 2.5, line: 1 },
    ///                                   line:  1, }];
    ///
    /// context.execute(&program).unwrap();
    /// drop(context);
    ///
    /// assert_eq!(String::from_utf8(output).unwrap(), "2.5\n");
    /// ```
    pub fn with_output(output: W) -> Self {
        Self { variables: HashMap::new(),
               output }
    }

    /// Executes a program's statements in order.
    ///
    /// Execution stops at the first failing statement; statements after it
    /// are not run, but output already written stays written.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised by any statement.
    pub fn execute(&mut self, statements: &[Statement]) -> EvalResult<()> {
        for statement in statements {
            self.execute_statement(statement)?;
        }
        Ok(())
    }

    /// Evaluates an expression and returns its value.
    ///
    /// Operands of a binary operation are evaluated left first, then right.
    /// The left spine of an operator chain is walked with a loop, so only
    /// right operands recurse and a long chain costs no stack.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnknownVariable` when a referenced variable has
    /// not been assigned.
    ///
    /// # Example
    /// ```
    /// use emojilang::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let context = Context::with_output(Vec::new());
    /// let expr = Expr::BinaryOp { left:  Box::new(Expr::Number { value: 5.0, line: 1 }),
    ///                             op:    BinaryOperator::Greater,
    ///                             right: Box::new(Expr::Number { value: 3.0, line: 1 }),
    ///                             line:  1, };
    ///
    /// assert_eq!(context.eval(&expr).unwrap(), 1.0);
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<f64> {
        let mut pending = Vec::new();
        let mut leftmost = expr;

        while let Expr::BinaryOp { left, op, right, .. } = leftmost {
            pending.push((*op, right.as_ref()));
            leftmost = left.as_ref();
        }

        let mut value = self.eval_operand(leftmost)?;

        // Innermost operation first.
        while let Some((op, right)) = pending.pop() {
            let right = self.eval(right)?;
            value = eval_binary(op, value, right);
        }

        Ok(value)
    }

    /// Reads a literal or a variable. Operations go back through `eval`.
    fn eval_operand(&self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Number { value, .. } => Ok(*value),
            Expr::Variable { name, line } => {
                self.variable(name)
                    .ok_or_else(|| RuntimeError::UnknownVariable { name: name.clone(),
                                                                   line: *line, })
            },
            Expr::BinaryOp { .. } => self.eval(expr),
        }
    }

    /// Returns the current value of a variable, if it has been assigned.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Consumes the context and returns its final environment.
    #[must_use]
    pub fn into_variables(self) -> Environment {
        self.variables
    }

    /// Stores `value` under `name`, replacing any previous value.
    pub(in crate::interpreter::evaluator) fn assign(&mut self, name: &str, value: f64) {
        self.variables.insert(name.to_string(), value);
    }

    /// Gives the statement executor access to the output sink.
    pub(in crate::interpreter::evaluator) fn output(&mut self) -> &mut W {
        &mut self.output
    }
}
