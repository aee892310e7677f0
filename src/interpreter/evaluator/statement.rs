use std::io::Write;

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
    util::num::{format_number, is_truthy},
};

impl<W: Write> Context<W> {
    /// Executes a single statement.
    ///
    /// Assignments write the environment, print statements write one output
    /// line, and blocks, conditionals and loops execute their children in
    /// the same environment.
    ///
    /// # Errors
    /// Propagates the first `RuntimeError` raised while evaluating any
    /// expression, or `RuntimeError::Output` if a line cannot be written.
    pub fn execute_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        match statement {
            Statement::VariableAssignment { name, value, .. } => {
                let value = self.eval(value)?;
                self.assign(name, value);
                Ok(())
            },
            Statement::Print { value, line } => self.execute_print(value, *line),
            Statement::Block { statements, .. } => self.execute(statements),
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => {
                if is_truthy(self.eval(condition)?) {
                    self.execute_statement(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute_statement(else_branch)
                } else {
                    Ok(())
                }
            },
            Statement::While { condition, body, .. } => {
                while is_truthy(self.eval(condition)?) {
                    self.execute_statement(body)?;
                }
                Ok(())
            },
        }
    }

    /// Evaluates `value` and writes it as one line of output.
    fn execute_print(&mut self, value: &Expr, line: usize) -> EvalResult<()> {
        let value = self.eval(value)?;

        writeln!(self.output(), "{}", format_number(value)).map_err(|e| RuntimeError::Output {
            details: e.to_string(),
            line,
        })
    }
}
