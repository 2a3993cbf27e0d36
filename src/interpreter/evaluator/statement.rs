use std::io::Write;

use tracing::trace;

use crate::{
    ast::Statement,
    interpreter::{
        evaluator::core::{EvalResult, Flow, Interpreter},
        scope::Scope,
    },
};

impl<W: Write> Interpreter<W> {
    /// Executes a single statement.
    ///
    /// Handles definitions, assignments, printing, blocks, conditionals,
    /// loops, call statements and returns. A `return` is reported as
    /// [`Flow::Return`] and passed up unchanged by every enclosing block,
    /// conditional and loop.
    ///
    /// # Parameters
    /// - `statement`: Statement to execute.
    /// - `scope`: The active scope.
    ///
    /// # Returns
    /// How the statement finished.
    pub fn execute(&mut self, statement: &Statement, scope: &Scope<'_>) -> EvalResult<Flow> {
        match statement {
            Statement::Def { name, value, line } => {
                let value = self.eval(value, scope)?;
                scope.define(name, value, *line)?;
                Ok(Flow::Normal)
            },
            Statement::Let { name, value, line } => {
                let value = self.eval(value, scope)?;
                scope.set(name, value, *line)?;
                Ok(Flow::Normal)
            },
            Statement::Print { expr, line } => {
                let value = self.eval(expr, scope)?;
                trace!(line, %value, "print");
                writeln!(self.out, "{value}")?;
                Ok(Flow::Normal)
            },
            Statement::Block { statements, .. } => self.execute_block(statements, scope),
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => {
                if self.eval(condition, scope)?.is_truthy() {
                    self.execute(then_branch, scope)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch, scope)
                } else {
                    Ok(Flow::Normal)
                }
            },
            Statement::While { condition, body, .. } => {
                while self.eval(condition, scope)?.is_truthy() {
                    if let flow @ Flow::Return { .. } = self.execute(body, scope)? {
                        return Ok(flow);
                    }
                }
                Ok(Flow::Normal)
            },
            Statement::Call { expr, .. } => {
                self.eval(expr, scope)?;
                Ok(Flow::Normal)
            },
            Statement::Return { value, line } => {
                Ok(Flow::Return { value: self.eval(value, scope)?,
                                  line:  *line, })
            },
        }
    }

    /// Executes a sequence of statements as a block.
    ///
    /// A child of `scope` is created for the block and dropped when it ends,
    /// so `def` bindings made inside do not leak out. Execution stops at the
    /// first statement that returns.
    ///
    /// # Parameters
    /// - `statements`: Statements inside the block.
    /// - `scope`: The scope enclosing the block.
    ///
    /// # Returns
    /// [`Flow::Return`] if a statement returned, otherwise [`Flow::Normal`].
    pub fn execute_block(&mut self,
                         statements: &[Statement],
                         scope: &Scope<'_>)
                         -> EvalResult<Flow> {
        let local = scope.create();

        for statement in statements {
            let flow = self.execute(statement, &local)?;
            if let Flow::Return { .. } = flow {
                return Ok(flow);
            }
        }

        Ok(Flow::Normal)
    }
}
