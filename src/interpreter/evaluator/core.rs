use std::{io::Write, rc::Rc};

use tracing::debug;

use crate::{
    ast::{Expr, Program},
    error::RuntimeError,
    interpreter::{evaluator::binary::eval_binary, scope::Scope, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How a statement finished executing.
///
/// A `return` does not travel through the error channel: it is an ordinary
/// outcome that blocks, conditionals and loops pass upward until a function
/// call consumes it.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// The statement completed; execution continues with the next one.
    Normal,
    /// A `return` statement executed.
    Return {
        /// The returned value.
        value: Value,
        /// Line of the `return` statement.
        line:  usize,
    },
}

/// Stores the runtime evaluation state.
///
/// The interpreter owns the sink that `print` statements write to. Variable
/// state is not stored here: it lives in [`Scope`]s that are passed down
/// through every evaluation call, with the root scope created per
/// [`run`](Interpreter::run).
///
/// ## Usage
///
/// ```
/// use quill::interpreter::{
///     evaluator::core::Interpreter, lexer::tokenize, parser::core::parse,
/// };
///
/// let tokens = tokenize("print 6 * 7;").unwrap();
/// let program = parse(&tokens).unwrap();
///
/// let mut output = Vec::new();
/// Interpreter::new(&mut output).run(&program).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(), "42\n");
/// ```
pub struct Interpreter<W> {
    pub(crate) out: W,
}

impl<W: Write> Interpreter<W> {
    /// Creates an interpreter that writes printed values to `out`.
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Runs a whole program in a fresh root scope.
    ///
    /// Statements execute in order. Values printed before a failing statement
    /// have already been written to the sink.
    ///
    /// # Errors
    /// Any runtime error raised by a statement, or `ReturnOutsideFunction`
    /// when a `return` executes outside of every function call.
    pub fn run(&mut self, program: &Program) -> EvalResult<()> {
        debug!(statements = program.statements.len(), "running program");
        let global = Scope::new();

        for statement in &program.statements {
            if let Flow::Return { line, .. } = self.execute(statement, &global)? {
                return Err(RuntimeError::ReturnOutsideFunction { line });
            }
        }

        self.out.flush()?;
        Ok(())
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation.
    /// The evaluator dispatches based on expression variant:
    /// binary operations, function calls, names and literals.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `scope`: The scope names are resolved in.
    ///
    /// # Returns
    /// The value of the expression. Calls of functions that do not `return`
    /// produce [`Value::NoValue`].
    pub fn eval(&mut self, expr: &Expr, scope: &Scope<'_>) -> EvalResult<Value> {
        match expr {
            Expr::Binary { left,
                           op,
                           right,
                           line, } => {
                let left = self.eval(left, scope)?;
                let right = self.eval(right, scope)?;
                eval_binary(*op, &left, &right, *line)
            },
            Expr::FuncCall { callee,
                             arguments,
                             line, } => self.eval_function_call(callee, arguments, *line, scope),
            Expr::Name { name, line } => scope.get(name, *line),
            Expr::IntLiteral { value, .. } => Ok(Value::Integer(*value)),
            Expr::FnLiteral(function) => Ok(Value::Function(Rc::clone(function))),
        }
    }
}
