use thiserror::Error;

#[derive(Debug, Error)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// `def` of a name already bound in the same scope.
    #[error("Error on line {line}: '{name}' is already defined in this scope.")]
    DuplicateDefinition {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Lookup or assignment of a name bound nowhere in the visible chain.
    #[error("Error on line {line}: Undefined name '{name}'.")]
    UndefinedName {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a value that is not a function.
    #[error("Error on line {line}: Value {found} is not callable.")]
    NotCallable {
        /// The printed form of the callee value.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An operator was applied to operands it is not defined for.
    #[error("Error on line {line}: Type error: {details}.")]
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Integer arithmetic overflowed.
    #[error("Error on line {line}: Integer overflow while trying to compute result.")]
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `return` executed outside of any function call.
    #[error("Error on line {line}: 'return' outside of a function.")]
    ReturnOutsideFunction {
        /// The source line of the `return` statement.
        line: usize,
    },
    /// Writing a printed value to the output sink failed.
    #[error("Failed to write program output: {source}")]
    Output {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
