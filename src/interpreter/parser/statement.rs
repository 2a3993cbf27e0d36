use std::iter::Peekable;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{end_of_input, expect_token, parse_identifier, reserved_keyword},
        },
    },
};

/// Parses a single statement.
///
/// The statement form is chosen by its leading token:
/// - `def` and `let` bindings,
/// - `print`, `call` and `return`,
/// - `{` blocks,
/// - `if` and `while`.
///
/// No other token can start a statement; in particular a bare expression is
/// not a statement (use `call`).
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
///
/// # Errors
/// Returns `ExpectedStatement` when the leading token starts no statement,
/// `ReservedKeyword` for `and`, `or` and `not`, and propagates errors from
/// the specific statement parsers.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek().ok_or_else(|| end_of_input("a statement"))?;

    match peeked {
        (Token::Def, _) => {
            let (name, value, line) = parse_binding(tokens)?;
            Ok(Statement::Def { name, value, line })
        },
        (Token::Let, _) => {
            let (name, value, line) = parse_binding(tokens)?;
            Ok(Statement::Let { name, value, line })
        },
        (Token::Print, _) => {
            let (expr, line) = parse_keyword_expression(tokens)?;
            Ok(Statement::Print { expr, line })
        },
        (Token::Call, _) => {
            let (expr, line) = parse_keyword_expression(tokens)?;
            Ok(Statement::Call { expr, line })
        },
        (Token::Return, _) => {
            let (value, line) = parse_keyword_expression(tokens)?;
            Ok(Statement::Return { value, line })
        },
        (Token::LBrace, _) => parse_block(tokens),
        (Token::If, _) => parse_if(tokens),
        (Token::While, _) => parse_while(tokens),
        (tok, line) => match reserved_keyword(tok) {
            Some(keyword) => Err(ParseError::ReservedKeyword { keyword: keyword.to_string(),
                                                               line:    *line, }),
            None => Err(ParseError::ExpectedStatement { found: tok.to_string(),
                                                        line:  *line, }),
        },
    }
}

/// Parses a `def` or `let` binding.
///
/// Both have the form `<keyword> <identifier> = <expression> ;` and differ
/// only in how they are evaluated, so the caller chooses the node.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `def` or `let`.
///
/// # Returns
/// The bound name, the value expression and the line of the keyword.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the identifier is missing or reserved,
/// - `=` is missing,
/// - the expression is malformed,
/// - the closing `;` is missing.
fn parse_binding<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<(String, Expr, usize)>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = tokens.next().map_or(0, |(_, line)| *line);

    let name = parse_identifier(tokens)?;
    expect_token(tokens, &Token::Equals)?;
    let value = parse_expression(tokens)?;
    expect_token(tokens, &Token::Semicolon)?;

    Ok((name, value, line))
}

/// Parses `print`, `call` and `return`, which share the form
/// `<keyword> <expression> ;`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the keyword.
///
/// # Returns
/// The expression and the line of the keyword.
fn parse_keyword_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<(Expr, usize)>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = tokens.next().map_or(0, |(_, line)| *line);

    let expr = parse_expression(tokens)?;
    expect_token(tokens, &Token::Semicolon)?;

    Ok((expr, line))
}

/// Parses a parenthesized condition, `( <expression> )`, shared by `if` and
/// `while`.
fn parse_condition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect_token(tokens, &Token::LParen)?;
    let condition = parse_expression(tokens)?;
    expect_token(tokens, &Token::RParen)?;

    Ok(condition)
}

/// Parses an `if` statement with an optional `else` branch.
///
/// Syntax:
/// ```text
///     if ( <condition> ) <statement>
///     if ( <condition> ) <statement> else <statement>
/// ```
/// An `else` binds to the nearest `if`, so `else if` chains need no special
/// handling.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `if` keyword.
///
/// # Returns
/// A `Statement::If` node.
fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = tokens.next().map_or(0, |(_, line)| *line);

    let condition = parse_condition(tokens)?;
    let then_branch = parse_statement(tokens)?;

    let else_branch = match tokens.peek() {
        Some((Token::Else, _)) => {
            tokens.next();
            Some(Box::new(parse_statement(tokens)?))
        },
        _ => None,
    };

    Ok(Statement::If { condition,
                       then_branch: Box::new(then_branch),
                       else_branch,
                       line })
}

/// Parses a `while` loop: `while ( <condition> ) <statement>`.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `while` keyword.
///
/// # Returns
/// A `Statement::While` node.
fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = tokens.next().map_or(0, |(_, line)| *line);

    let condition = parse_condition(tokens)?;
    let body = parse_statement(tokens)?;

    Ok(Statement::While { condition,
                          body: Box::new(body),
                          line })
}
