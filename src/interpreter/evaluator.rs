/// Core evaluation logic and the interpreter state.
///
/// Contains the `Interpreter` type, the statement outcome type used to carry
/// `return` values, and expression dispatch.
pub mod core;

/// Statement execution.
///
/// Executes bindings, printing, blocks, conditionals and loops, and threads
/// `return` outcomes up to the enclosing call.
pub mod statement;

/// Binary operator evaluation.
///
/// Implements arithmetic, real-valued division and comparisons.
pub mod binary;

/// Function call evaluation.
///
/// Binds arguments in a fresh scope and runs the function body.
pub mod function;
