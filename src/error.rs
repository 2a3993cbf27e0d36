use thiserror::Error;

/// Lexing errors.
///
/// Raised when the source text contains a character that does not start any
/// token. Lexing stops at the first such character.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning the token stream into
/// a syntax tree: mismatched tokens, premature end of input, reserved
/// keywords and oversized integer literals.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: duplicate
/// definitions, unknown names, calls on non-function values, operand type
/// mismatches and integer overflow.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure of the full lex, parse and evaluate pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// The source text could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The token stream did not form a valid program.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation of the program failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
