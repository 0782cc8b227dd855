use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses logical OR expressions.
///
/// Handles left-associative chains of `||` / `or`.
/// This is the lowest binary precedence level; only the ternary
/// conditional binds looser.
///
/// Grammar: `logical_or := logical_and ("or" logical_and)*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, offset)` pairs.
///
/// # Returns
/// A binary expression tree using `BinaryOperator::Or`.
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_logical_and(tokens)?;

    loop {
        if let Some((token, _)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Or)
        {
            tokens.next();

            let right = parse_logical_and(tokens)?;

            left = Expr::BinaryOp { left:  Box::new(left),
                                    op,
                                    right: Box::new(right), };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Parses logical AND expressions.
///
/// Handles left-associative chains of `&&` / `and`.
/// Precedence is between OR and XOR.
///
/// Grammar: `logical_and := logical_xor ("and" logical_xor)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// A binary expression tree using `BinaryOperator::And`.
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_logical_xor(tokens)?;

    loop {
        if let Some((token, _)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::And)
        {
            tokens.next();

            let right = parse_logical_xor(tokens)?;

            left = Expr::BinaryOp { left:  Box::new(left),
                                    op,
                                    right: Box::new(right), };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Parses logical XOR expressions.
///
/// Handles left-associative chains of `xor`.
/// Precedence is between AND and the equality operators.
///
/// Grammar: `logical_xor := equality ("xor" equality)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// A binary expression tree using `BinaryOperator::Xor`.
pub fn parse_logical_xor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_equality(tokens)?;

    loop {
        if let Some((token, _)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Xor)
        {
            tokens.next();

            let right = parse_equality(tokens)?;

            left = Expr::BinaryOp { left:  Box::new(left),
                                    op,
                                    right: Box::new(right), };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Parses equality expressions.
///
/// Handles left-associative chains of `==` and `!=`.
///
/// Grammar: `equality := relational (("==" | "!=") relational)*`
///
/// # Parameters
/// - `tokens`: Token stream with offset information.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_relational(tokens)?;

    loop {
        if let Some((token, _)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && is_equality_op(op)
        {
            tokens.next();

            let right = parse_relational(tokens)?;

            left = Expr::BinaryOp { left:  Box::new(left),
                                    op,
                                    right: Box::new(right), };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Parses relational expressions.
///
/// Handles left-associative chains of `<`, `>`, `<=`, `>=` and the
/// substring containment operator `in`.
///
/// Grammar: `relational := additive (("<" | ">" | "<=" | ">=" | "in") additive)*`
///
/// # Parameters
/// - `tokens`: Token stream with offset information.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_relational<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_additive(tokens)?;

    loop {
        if let Some((token, _)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && is_relational_op(op)
        {
            tokens.next();

            let right = parse_additive(tokens)?;

            left = Expr::BinaryOp { left:  Box::new(left),
                                    op,
                                    right: Box::new(right), };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with offset information.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_multiplicative(tokens)?;
    loop {
        if let Some((token, _)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            let right = parse_multiplicative(tokens)?;
            left = Expr::BinaryOp { left:  Box::new(left),
                                    op,
                                    right: Box::new(right), };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`, the highest binary
/// precedence level; operands are unary expressions.
///
/// Grammar: `multiplicative := unary (("*" | "/") unary)*`
///
/// # Parameters
/// - `tokens`: Token stream with offset information.
///
/// # Returns
/// A binary expression tree combining unary-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_unary(tokens)?;
    loop {
        if let Some((token, _)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            tokens.next();
            let right = parse_unary(tokens)?;
            left = Expr::BinaryOp { left:  Box::new(left),
                                    op,
                                    right: Box::new(right), };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary
/// operator (`+`, `-`, `*`, `/`, the comparison operators, `in` and the
/// logical operators). Returns `None` for all other tokens.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the token corresponds to a binary operator,
/// otherwise `None`.
///
/// # Example
/// ```
/// use exprkit::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Question), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::In => Some(BinaryOperator::In),
        Token::And => Some(BinaryOperator::And),
        Token::Or => Some(BinaryOperator::Or),
        Token::Xor => Some(BinaryOperator::Xor),
        _ => None,
    }
}

/// Determines whether a binary operator belongs to the equality class.
///
/// # Example
/// ```
/// use exprkit::{ast::BinaryOperator, interpreter::parser::binary::is_equality_op};
///
/// assert!(is_equality_op(BinaryOperator::Equal));
/// assert!(!is_equality_op(BinaryOperator::Less));
/// ```
#[must_use]
pub const fn is_equality_op(op: BinaryOperator) -> bool {
    matches!(op, BinaryOperator::Equal | BinaryOperator::NotEqual)
}

/// Determines whether a binary operator belongs to the relational class.
///
/// Supported categories:
/// - Strict relations: `<`, `>`
/// - Non-strict relations: `<=`, `>=`
/// - Substring containment: `in`
///
/// # Example
/// ```
/// use exprkit::{ast::BinaryOperator, interpreter::parser::binary::is_relational_op};
///
/// assert!(is_relational_op(BinaryOperator::Less));
/// assert!(is_relational_op(BinaryOperator::In));
/// assert!(!is_relational_op(BinaryOperator::Add));
/// ```
#[must_use]
pub const fn is_relational_op(op: BinaryOperator) -> bool {
    matches!(op,
             BinaryOperator::Less
             | BinaryOperator::Greater
             | BinaryOperator::LessEqual
             | BinaryOperator::GreaterEqual
             | BinaryOperator::In)
}
