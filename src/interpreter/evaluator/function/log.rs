use crate::{
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Computes the natural logarithm of a positive number.
///
/// The domain is checked before the arithmetic: zero and negative
/// arguments are domain errors, never `-inf` or NaN.
///
/// # Parameters
/// - `args`: Slice containing exactly one numeric argument.
///
/// # Returns
/// The natural logarithm as a number value.
///
/// # Errors
/// `EvalError::Domain` if the argument is zero or negative.
///
/// # Example
/// ```
/// use exprkit::interpreter::{evaluator::function::log::log, value::Value};
///
/// assert_eq!(log(&[1.0]).unwrap(), Value::Number(0.0));
/// assert!(log(&[0.0]).is_err());
/// ```
pub fn log(args: &[f64]) -> EvalResult<Value> {
    let x = args[0];
    if x <= 0.0 {
        return Err(EvalError::Domain { details: format!("log of non-positive number {x}"), });
    }
    Ok(Value::Number(x.ln()))
}
