use std::io::Write;

use tracing::trace;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Flow, Interpreter},
        scope::Scope,
        value::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Evaluates a function call.
    ///
    /// The callee is evaluated first and must produce a function value. The
    /// arguments are then evaluated left to right in the caller's scope.
    ///
    /// The call scope is a child of the scope active at the call site, not of
    /// the scope the function literal was written in, so free names in the
    /// body resolve against the caller's bindings. Parameters are bound in
    /// order; parameters without an argument are bound to
    /// [`Value::NoValue`], and surplus arguments are dropped.
    ///
    /// # Parameters
    /// - `callee`: Expression producing the function.
    /// - `arguments`: Argument expressions.
    /// - `line`: Line number for error reporting.
    /// - `scope`: The caller's active scope.
    ///
    /// # Returns
    /// The value carried by the `return` that ended the body, or
    /// [`Value::NoValue`] if the body completed without returning.
    ///
    /// # Errors
    /// - `NotCallable` if the callee is not a function.
    /// - `DuplicateDefinition` if the function repeats a parameter name.
    /// - Any error raised while evaluating arguments or the body.
    pub(crate) fn eval_function_call(&mut self,
                                     callee: &Expr,
                                     arguments: &[Expr],
                                     line: usize,
                                     scope: &Scope<'_>)
                                     -> EvalResult<Value> {
        let function = match self.eval(callee, scope)? {
            Value::Function(function) => function,
            other => {
                return Err(RuntimeError::NotCallable { found: other.to_string(),
                                                       line });
            },
        };

        let arg_vals = arguments.iter()
                                .map(|argument| self.eval(argument, scope))
                                .collect::<EvalResult<Vec<_>>>()?;

        trace!(line,
               params = function.params.len(),
               arguments = arg_vals.len(),
               "calling function");

        let call_scope = scope.create();
        let mut arg_vals = arg_vals.into_iter();
        for param in &function.params {
            call_scope.define(param, arg_vals.next().unwrap_or(Value::NoValue), line)?;
        }

        match self.execute(&function.body, &call_scope)? {
            Flow::Return { value, .. } => Ok(value),
            Flow::Normal => Ok(Value::NoValue),
        }
    }
}
