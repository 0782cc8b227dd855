//! Standard functions without domain restrictions.
//!
//! Every handler here is total over its numeric arguments; results follow
//! IEEE 754, so e.g. `tan` near a pole returns a large finite value and
//! `pow` may return NaN for a negative base with a fractional exponent.
//! Arity and argument types are checked by the dispatch table before any
//! handler runs.

use crate::interpreter::{evaluator::core::EvalResult, value::Value};

/// Returns the smaller of two numbers.
pub fn min(args: &[f64]) -> EvalResult<Value> {
    Ok(Value::Number(args[0].min(args[1])))
}

/// Returns the larger of two numbers.
pub fn max(args: &[f64]) -> EvalResult<Value> {
    Ok(Value::Number(args[0].max(args[1])))
}

/// Raises the first argument to the power of the second.
pub fn pow(args: &[f64]) -> EvalResult<Value> {
    Ok(Value::Number(args[0].powf(args[1])))
}

/// Sine of the argument, in radians.
pub fn sin(args: &[f64]) -> EvalResult<Value> {
    Ok(Value::Number(args[0].sin()))
}

/// Cosine of the argument, in radians.
pub fn cos(args: &[f64]) -> EvalResult<Value> {
    Ok(Value::Number(args[0].cos()))
}

/// Tangent of the argument, in radians.
pub fn tan(args: &[f64]) -> EvalResult<Value> {
    Ok(Value::Number(args[0].tan()))
}

/// Absolute value of the argument.
pub fn abs(args: &[f64]) -> EvalResult<Value> {
    Ok(Value::Number(args[0].abs()))
}

/// `e` raised to the power of the argument.
pub fn exp(args: &[f64]) -> EvalResult<Value> {
    Ok(Value::Number(args[0].exp()))
}

/// Largest integer less than or equal to the argument.
pub fn floor(args: &[f64]) -> EvalResult<Value> {
    Ok(Value::Number(args[0].floor()))
}

/// Smallest integer greater than or equal to the argument.
pub fn ceil(args: &[f64]) -> EvalResult<Value> {
    Ok(Value::Number(args[0].ceil()))
}

/// The argument rounded to the nearest integer, halves away from zero.
pub fn round(args: &[f64]) -> EvalResult<Value> {
    Ok(Value::Number(args[0].round()))
}
