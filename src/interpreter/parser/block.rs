use std::iter::Peekable;

use crate::{
    ast::Statement,
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::{end_of_input, expect_token},
        },
    },
};

/// Parses a block delimited by braces.
///
/// A block consists of zero or more statements. Parsing continues until the
/// matching closing `}` token is encountered.
///
/// Grammar: `block := "{" statement* "}"`
///
/// The result is returned as `Statement::Block { statements, line }`, where
/// `line` is the line of the opening brace.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening brace.
///
/// # Returns
/// A block statement containing all parsed statements.
///
/// # Errors
/// Returns a `ParseError` if the opening brace is missing, a nested
/// statement fails to parse, or the input ends before the closing brace.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::LBrace)?;
    let mut statements = Vec::new();

    loop {
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some(_) => statements.push(parse_statement(tokens)?),
            None => return Err(end_of_input(Token::RBrace.to_string())),
        }
    }

    Ok(Statement::Block { statements, line })
}
