use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_relational, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete token stream into a [`Program`].
///
/// Statements are parsed one after another until the tokens are exhausted.
/// Parsing stops at the first error; errors caused by the input ending early
/// report the line of the last token.
///
/// Grammar: `program := statement*`
///
/// # Parameters
/// - `tokens`: `(Token, line)` pairs as produced by the lexer.
///
/// # Returns
/// The root [`Program`] node.
///
/// # Example
/// ```
/// use quill::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let tokens = tokenize("def x = 1; print x;").unwrap();
/// let program = parse(&tokens).unwrap();
///
/// assert_eq!(program.statements.len(), 2);
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Program> {
    let last_line = tokens.last().map_or(1, |(_, line)| *line);
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    while iter.peek().is_some() {
        let statement =
            parse_statement(&mut iter).map_err(|error| at_line_if_ended(error, last_line))?;
        statements.push(statement);
    }

    debug!(count = statements.len(), "parsed program");
    Ok(Program { statements })
}

/// Fills in the line of an end-of-input error, which inner parsing
/// functions cannot know.
fn at_line_if_ended(error: ParseError, last_line: usize) -> ParseError {
    match error {
        ParseError::UnexpectedEndOfInput { expected, .. } => {
            ParseError::UnexpectedEndOfInput { expected,
                                               line: last_line }
        },
        other => other,
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, relational comparison, and
/// recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := relational`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_relational(tokens)
}
