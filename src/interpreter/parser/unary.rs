use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::parse_comma_separated,
        },
        value::Value,
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`          (numeric negation)
/// - `!` / `not`  (logical not)
///
/// Unary operators are right-associative, so an input like `!-x` is parsed
/// as `!( -x )`.
///
/// If no unary operator is present, the function delegates to
/// [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := ("-" | "!" | "not") unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if let Some((Token::Minus, _)) = tokens.peek() {
        tokens.next();
        let operand = parse_unary(tokens)?;
        Ok(Expr::UnaryOp { op:      UnaryOperator::Negate,
                           operand: Box::new(operand), })
    } else if let Some((Token::Not, _)) = tokens.peek() {
        tokens.next();
        let operand = parse_unary(tokens)?;
        Ok(Expr::UnaryOp { op:      UnaryOperator::Not,
                           operand: Box::new(operand), })
    } else {
        parse_primary(tokens)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and
/// include:
/// - numeric, boolean and string literals
/// - identifiers (variables and, when followed by `(`, function calls)
/// - parenthesized expressions
///
/// This function does not handle unary operators.
/// It dispatches to specialized parsing functions depending on the leading
/// token.
///
/// Grammar (simplified):
/// ```text
///     primary := literal
///              | identifier_or_function
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let peeked = tokens.peek().ok_or(ParseError::UnexpectedEndOfInput)?;

    match peeked {
        (Token::Number(..) | Token::Bool(..) | Token::Str(..), _) => parse_literal(tokens),
        (Token::LParen, _) => parse_grouping(tokens),
        (Token::Identifier(_), _) => parse_identifier_or_function(tokens),
        (token, offset) => Err(ParseError::UnexpectedToken { token:  format!("{token:?}"),
                                                             offset: *offset, }),
    }
}

/// Parses a numeric, boolean or string literal.
///
/// Literals are carried directly as [`Value`]s inside the
/// [`Expr::Literal`] node; evaluation returns them unchanged.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a literal.
///
/// # Returns
/// An [`Expr::Literal`] containing the parsed value.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Number(n), _)) => Ok(Expr::Literal { value: Value::Number(*n) }),
        Some((Token::Bool(b), _)) => Ok(Expr::Literal { value: Value::Boolean(*b) }),
        Some((Token::Str(s), _)) => Ok(Expr::Literal { value: Value::String(s.clone()) }),
        Some((token, offset)) => {
            Err(ParseError::UnexpectedToken { token:  format!("{token:?}"),
                                              offset: *offset, })
        },
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression, and then requires a closing `)`. Failure to find the
/// closing parenthesis yields `ParseError::ExpectedClosingParen`.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let offset = match tokens.next() {
        Some((_, offset)) => *offset,
        None => return Err(ParseError::UnexpectedEndOfInput),
    };
    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { offset }),
    }
}

/// Parses an identifier or function call.
///
/// Supported forms:
///
/// - identifier
/// - identifier(arg1, arg2, ...)
///
/// The function first consumes the identifier token.
/// If the next token is `(`, a function-call expression is parsed with a
/// comma-separated argument list (which may be empty).
/// Otherwise, it is parsed as a variable reference; dotted names such as
/// `pos.x` are a single identifier and reach the environment unsplit.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
///
/// # Returns
/// - [`Expr::FunctionCall`] if followed by parentheses,
/// - [`Expr::Variable`] otherwise.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the initial token is not an identifier,
/// - function-call arguments fail to parse,
/// - the closing `)` is missing.
fn parse_identifier_or_function<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let name = match tokens.next() {
        Some((Token::Identifier(n), _)) => n.clone(),
        Some((token, offset)) => {
            return Err(ParseError::UnexpectedToken { token:  format!("{token:?}"),
                                                     offset: *offset, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput),
    };

    match tokens.peek() {
        Some((Token::LParen, offset)) => {
            let offset = *offset;
            tokens.next();
            let arguments = parse_comma_separated(tokens, parse_expression, offset)?;
            Ok(Expr::FunctionCall { name, arguments })
        },
        _ => Ok(Expr::Variable { name }),
    }
}
