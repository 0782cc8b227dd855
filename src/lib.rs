//! # exprkit
//!
//! exprkit is an embeddable expression parser and evaluator written in
//! Rust. It parses formulas with arithmetic, boolean, string, comparison,
//! ternary and function-call syntax into an immutable AST, then evaluates
//! that AST against a host-supplied variable/function resolver.
//!
//! Parsing and evaluation are separate on purpose: parse once, evaluate
//! many times. The AST carries no mutable state, so a compiled expression
//! may be cached and shared, and evaluated concurrently as long as the
//! host's [`Environment`](interpreter::environment::Environment)
//! implementation tolerates concurrent reads.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expr,
    error::{ExprError, ParseError},
    interpreter::{
        environment::Environment,
        lexer::tokenize,
        parser::core::parse_expression,
        token::SyntaxToken,
        value::Value,
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator enums that
/// represent the syntactic structure of a formula as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the closed set of expression node kinds.
/// - Defines the binary and unary operator enums.
/// - Keeps nodes immutable so compiled expressions can be cached and
///   shared.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing
/// or evaluating an expression. It standardizes error reporting and
/// carries detailed information about failures, including byte offsets for
/// syntax errors.
///
/// # Responsibilities
/// - Defines error enums for both phases (parser, evaluator).
/// - Provides the umbrella `ExprError` for single-call entry points.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of expression execution.
///
/// This module ties together lexing, parsing, evaluation, the value type,
/// the host environment contract and the standard function library to
/// provide a complete engine for expression evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, value and
///   environment types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Parses an expression string into an AST.
///
/// This is the zero-overhead path: no token collection is allocated. The
/// whole input must form one expression; trailing non-whitespace input is
/// an error.
///
/// # Errors
/// Returns a [`ParseError`] for malformed syntax, an unterminated string
/// literal, a missing closing parenthesis, trailing input or empty input.
///
/// # Examples
/// ```
/// use exprkit::parse;
///
/// let expr = parse("health > max_health * 0.5").unwrap();
///
/// assert!(parse("2 +").is_err());
/// assert!(parse("").is_err());
/// ```
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    parse_internal(source, None)
}

/// Parses an expression string while collecting tokens for highlighting.
///
/// Behaves exactly like [`parse`], but additionally records every lexical
/// unit of the source (whitespace included) into `tokens`, left to right.
/// On a lexical error the vector still receives the valid prefix plus an
/// `Unknown` entry for the offending fragment, so partially-typed input
/// can be highlighted.
///
/// # Errors
/// Same as [`parse`].
///
/// # Examples
/// ```
/// use exprkit::{interpreter::token::TokenKind, parse_with_tokens};
///
/// let mut tokens = Vec::new();
/// let _expr = parse_with_tokens("1 + x", &mut tokens).unwrap();
///
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            vec![TokenKind::Number,
///                 TokenKind::Whitespace,
///                 TokenKind::Operator,
///                 TokenKind::Whitespace,
///                 TokenKind::Identifier]);
/// ```
pub fn parse_with_tokens(source: &str,
                         tokens: &mut Vec<SyntaxToken>)
                         -> Result<Expr, ParseError> {
    parse_internal(source, Some(tokens))
}

/// Parses and evaluates an expression string in one call.
///
/// For expressions evaluated repeatedly, prefer [`parse`] once and
/// [`Expr::evaluate`] per evaluation; this convenience re-parses every
/// time.
///
/// # Errors
/// Returns [`ExprError::Parse`] if the source is malformed, or
/// [`ExprError::Eval`] if evaluation fails.
///
/// # Examples
/// ```
/// use exprkit::{eval, interpreter::value::Value};
///
/// assert_eq!(eval("1 + 2 * 3", None).unwrap(), Value::Number(7.0));
/// assert_eq!(eval("\"ell\" in \"hello\"", None).unwrap(),
///            Value::Boolean(true));
/// assert!(eval("1 / 0", None).is_err());
/// ```
pub fn eval(source: &str, environment: Option<&dyn Environment>) -> Result<Value, ExprError> {
    let expr = parse(source)?;
    Ok(expr.evaluate(environment)?)
}

/// Shared body of [`parse`] and [`parse_with_tokens`].
///
/// Tokenizes, checks for empty input, parses a single expression and
/// rejects anything left in the stream afterwards.
fn parse_internal(source: &str,
                  capture: Option<&mut Vec<SyntaxToken>>)
                  -> Result<Expr, ParseError> {
    let stream = tokenize(source, capture)?;
    if stream.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let mut tokens = stream.iter().peekable();
    let expr = parse_expression(&mut tokens)?;

    if let Some((token, offset)) = tokens.next() {
        return Err(ParseError::TrailingTokens { token:  format!("{token:?}"),
                                                offset: *offset, });
    }

    Ok(expr)
}
