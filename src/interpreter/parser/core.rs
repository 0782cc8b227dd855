use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_logical_or},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, the ternary conditional, and
/// recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := ternary`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, offset)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_ternary(tokens)
}

/// Parses a ternary conditional expression.
///
/// The ternary operator is right-associative and both branches are parsed
/// at ternary level, so conditionals nest in either branch:
/// `a ? b : c ? d : e` parses as `a ? b : (c ? d : e)`.
///
/// Grammar: `ternary := logical_or ("?" ternary ":" ternary)?`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An `Expr::Ternary` node, or the condition unchanged when no `?`
/// follows.
///
/// # Errors
/// - `ExpectedColon` if the `:` separating the branches is missing.
/// - Propagates any errors from sub-expression parsing.
pub fn parse_ternary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let condition = parse_logical_or(tokens)?;

    if let Some((Token::Question, _)) = tokens.peek() {
        tokens.next();
        let then_branch = parse_ternary(tokens)?;

        match tokens.next() {
            Some((Token::Colon, _)) => {},
            Some((_, offset)) => {
                return Err(ParseError::ExpectedColon { offset: *offset });
            },
            None => return Err(ParseError::UnexpectedEndOfInput),
        }

        let else_branch = parse_ternary(tokens)?;

        Ok(Expr::Ternary { condition:   Box::new(condition),
                           then_branch: Box::new(then_branch),
                           else_branch: Box::new(else_branch), })
    } else {
        Ok(condition)
    }
}
