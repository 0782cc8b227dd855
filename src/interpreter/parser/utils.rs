use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Parses a comma-separated function argument list up to the closing `)`.
///
/// The opening parenthesis has already been consumed. The helper
/// repeatedly calls `parse_item` to parse one argument, expecting either:
///
/// - a comma, to continue the list, or
/// - a closing `)`, to end it.
///
/// An immediately encountered `)` produces an empty list.
///
/// Grammar (simplified): `arguments := (item ("," item)*)? ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first argument or `)`.
/// - `parse_item`: Function used to parse each argument.
/// - `open_offset`: Byte offset of the opening `(`, for error reporting.
///
/// # Returns
/// A vector of parsed arguments.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an argument fails to parse,
/// - an unexpected token is encountered between arguments,
/// - the stream ends before the closing `)`.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    open_offset: usize)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut items = Vec::new();
    if let Some((Token::RParen, _)) = tokens.peek() {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
            },
            Some((Token::RParen, _)) => {
                tokens.next();
                break;
            },
            Some((token, offset)) => {
                return Err(ParseError::UnexpectedToken { token:  format!("Expected ',' or ')', found {token:?}"),
                                                         offset: *offset, });
            },
            None => return Err(ParseError::ExpectedClosingParen { offset: open_offset }),
        }
    }
    Ok(items)
}
