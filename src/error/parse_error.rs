use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// The next token did not match the one the grammar requires.
    #[error("Error on line {line}: Expected {expected}, found {found}.")]
    UnexpectedToken {
        /// Description of the expected token.
        expected: String,
        /// The token actually encountered.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Reached the end of input in the middle of a construct.
    #[error("Error on line {line}: Expected {expected}, but the input ended.")]
    UnexpectedEndOfInput {
        /// Description of the expected token.
        expected: String,
        /// The line of the last token read.
        line:     usize,
    },
    /// No statement can begin with the current token.
    #[error("Error on line {line}: Expected a statement, found {found}.")]
    ExpectedStatement {
        /// The token actually encountered.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// No expression can begin with the current token.
    #[error("Error on line {line}: Expected an expression, found {found}.")]
    ExpectedExpression {
        /// The token actually encountered.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// One of the reserved keywords `and`, `or`, `not` was used.
    #[error("Error on line {line}: Keyword '{keyword}' is reserved.")]
    ReservedKeyword {
        /// The reserved keyword.
        keyword: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An integer literal does not fit in a 64 bit signed integer.
    #[error("Error on line {line}: Literal {literal} is too large.")]
    LiteralTooLarge {
        /// The literal text.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}
