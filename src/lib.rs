//! # quill
//!
//! quill is a small interpreted language written in Rust.
//! Programs are lexed, parsed into a syntax tree and executed by a
//! tree-walking evaluator. The language has integer arithmetic with
//! real-valued division, comparisons, `def`/`let` bindings, blocks, `if`,
//! `while`, `print`, and first-class function literals called with dynamic
//! scoping.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::{
    error::Error,
    interpreter::{evaluator::core::Interpreter, lexer::tokenize, parser::core::parse},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expr` types that
/// represent source code as a tree. The syntax tree is built by the parser
/// and traversed by the evaluator. Every node carries the line it starts on.
pub mod ast;
/// Provides error types for every phase of the pipeline.
///
/// Lexing, parsing and evaluation each have their own error enum, and
/// [`Error`] wraps all three for callers that run the whole pipeline.
/// Every message names the source line it refers to.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, scopes, values and evaluation.
/// Hosts that want to stage the pipeline themselves use its submodules
/// directly.
pub mod interpreter;

/// Runs a program and returns everything it printed.
///
/// This function lexes, parses and executes `source`, collecting each
/// printed value as one line of the returned string.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails. Output printed
/// before a runtime error is discarded; use [`run_with_output`] to keep it.
///
/// # Examples
/// ```
/// use quill::run;
///
/// let output = run("def x = 2; print x * 21;").unwrap();
/// assert_eq!(output, "42\n");
///
/// // 'y' is not defined.
/// assert!(run("let y = 1;").is_err());
/// ```
pub fn run(source: &str) -> Result<String, Error> {
    let mut output = Vec::new();
    run_with_output(source, &mut output)?;
    Ok(String::from_utf8_lossy(&output).into_owned())
}

/// Runs a program, writing printed values to `out`.
///
/// Each `print` writes the value followed by a newline. If a runtime error
/// stops the program, values printed before it have already been written.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use quill::run_with_output;
///
/// let mut output = Vec::new();
/// let result = run_with_output("print 1; print 7 / 2; print nothing;", &mut output);
///
/// assert!(result.is_err());
/// assert_eq!(String::from_utf8(output).unwrap(), "1\n3.5\n");
/// ```
pub fn run_with_output<W: Write>(source: &str, out: W) -> Result<(), Error> {
    let tokens = tokenize(source)?;
    let program = parse(&tokens)?;
    Interpreter::new(out).run(&program)?;
    Ok(())
}
