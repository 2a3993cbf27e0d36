use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Builds the error for input that ends while `expected` is still required.
///
/// The line is filled in by [`parse`](crate::interpreter::parser::core::parse)
/// with the line of the last token.
pub(in crate::interpreter::parser) fn end_of_input(expected: impl Into<String>) -> ParseError {
    ParseError::UnexpectedEndOfInput { expected: expected.into(),
                                       line:     0, }
}

/// Returns the spelling of `token` if it is one of the reserved keywords
/// `and`, `or`, `not`, which have no place in the grammar.
pub(in crate::interpreter::parser) const fn reserved_keyword(token: &Token) -> Option<&'static str> {
    match token {
        Token::And => Some("and"),
        Token::Or => Some("or"),
        Token::Not => Some("not"),
        _ => None,
    }
}

/// Consumes the next token, which must equal `expected`.
///
/// # Returns
/// The line of the consumed token.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token differs from `expected`,
/// - the input ends.
pub(in crate::interpreter::parser) fn expect_token<'a, I>(tokens: &mut Peekable<I>,
                                                          expected: &Token)
                                                          -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, line)) if tok == expected => Ok(*line),
        Some((tok, line)) => Err(ParseError::UnexpectedToken { expected: expected.to_string(),
                                                               found:    tok.to_string(),
                                                               line:     *line, }),
        None => Err(end_of_input(expected.to_string())),
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by function parameter lists and call argument
/// lists. It repeatedly calls `parse_item` to parse one element, expecting
/// either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list. A
/// trailing comma is not accepted.
///
/// Grammar (simplified): `list := (item ("," item)*)?`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list (e.g. `)`).
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((tok, _)) if tok == closing => break,
            Some((tok, line)) => {
                return Err(ParseError::UnexpectedToken { expected: format!("',' or {closing}"),
                                                         found:    tok.to_string(),
                                                         line:     *line, });
            },
            None => return Err(end_of_input(format!("',' or {closing}"))),
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// The next token must be `Token::Identifier`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
///
/// # Returns
/// A `String` containing the identifier.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is a reserved keyword,
/// - the next token is not an identifier,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(name), _)) => Ok(name.clone()),
        Some((tok, line)) => match reserved_keyword(tok) {
            Some(keyword) => Err(ParseError::ReservedKeyword { keyword: keyword.to_string(),
                                                               line:    *line, }),
            None => Err(ParseError::UnexpectedToken { expected: "identifier".to_string(),
                                                      found:    tok.to_string(),
                                                      line:     *line, }),
        },
        None => Err(end_of_input("identifier")),
    }
}
