use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{Expr, FunctionLiteral},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{
                end_of_input, expect_token, parse_comma_separated, parse_identifier,
                reserved_keyword,
            },
        },
    },
};

/// Parses a primary expression followed by an optional call suffix.
///
/// At most one argument list may follow a primary, so `f(1)` is a call but
/// `f(1)(2)` is rejected by the caller when it meets the second `(`.
///
/// Grammar:
/// ```text
///     postfix := primary ( "(" arguments ")" )?
///     arguments := ( expression ( "," expression )* )?
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
///
/// # Returns
/// The primary expression, or an [`Expr::FuncCall`] wrapping it.
pub(crate) fn parse_postfix<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let callee = parse_primary(tokens)?;

    if let Some((Token::LParen, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
        return Ok(Expr::FuncCall { callee: Box::new(callee),
                                   arguments,
                                   line });
    }

    Ok(callee)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - integer literals
/// - function literals
/// - identifiers
/// - parenthesized expressions
///
/// Grammar:
/// ```text
///     primary := integer
///              | fn_literal
///              | identifier
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek().ok_or_else(|| end_of_input("an expression"))?;

    match peeked {
        (Token::Integer(_), _) => parse_integer_literal(tokens),
        (Token::Fn, _) => parse_fn_literal(tokens),
        (Token::Identifier(_), _) => {
            let line = peeked.1;
            let name = parse_identifier(tokens)?;
            Ok(Expr::Name { name, line })
        },
        (Token::LParen, _) => parse_grouping(tokens),
        (tok, line) => match reserved_keyword(tok) {
            Some(keyword) => Err(ParseError::ReservedKeyword { keyword: keyword.to_string(),
                                                               line:    *line, }),
            None => Err(ParseError::ExpectedExpression { found: tok.to_string(),
                                                         line:  *line, }),
        },
    }
}

/// Parses an integer literal, converting its text to `i64`.
///
/// # Errors
/// Returns `LiteralTooLarge` if the digits do not fit in an `i64`.
fn parse_integer_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Integer(text), line)) => {
            let value = text.parse::<i64>()
                            .map_err(|_| ParseError::LiteralTooLarge { literal: text.clone(),
                                                                        line:    *line, })?;
            Ok(Expr::IntLiteral { value,
                                  line: *line })
        },
        Some((tok, line)) => Err(ParseError::UnexpectedToken { expected: "integer".to_string(),
                                                               found:    tok.to_string(),
                                                               line:     *line, }),
        None => Err(end_of_input("integer")),
    }
}

/// Parses a parenthesized expression: `( <expression> )`.
///
/// Grouping only affects precedence; no node is created for the parentheses.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect_token(tokens, &Token::LParen)?;
    let expr = parse_expression(tokens)?;
    expect_token(tokens, &Token::RParen)?;

    Ok(expr)
}

/// Parses a function literal.
///
/// Syntax:
/// ```text
///     fn ( <identifier> ( "," <identifier> )* ) => { <statement>* }
/// ```
/// The parameter list may be empty. The body must be a block.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the `fn` keyword.
///
/// # Returns
/// An [`Expr::FnLiteral`] sharing its node through an `Rc`.
///
/// # Errors
/// Returns a `ParseError` if the parameter list is malformed, `=>` is
/// missing or the body is not a block.
fn parse_fn_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::Fn)?;
    expect_token(tokens, &Token::LParen)?;
    let params = parse_comma_separated(tokens, parse_identifier, &Token::RParen)?;
    expect_token(tokens, &Token::Arrow)?;
    let body = parse_block(tokens)?;

    Ok(Expr::FnLiteral(Rc::new(FunctionLiteral { params, body, line })))
}
