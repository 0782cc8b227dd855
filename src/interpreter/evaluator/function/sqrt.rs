use crate::{
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Computes the square root of a non-negative number.
///
/// The domain is checked before the arithmetic: a negative argument is a
/// domain error, never NaN.
///
/// # Parameters
/// - `args`: Slice containing exactly one numeric argument.
///
/// # Returns
/// The square root as a number value.
///
/// # Errors
/// `EvalError::Domain` if the argument is negative.
///
/// # Example
/// ```
/// use exprkit::interpreter::{evaluator::function::sqrt::sqrt, value::Value};
///
/// assert_eq!(sqrt(&[9.0]).unwrap(), Value::Number(3.0));
/// assert!(sqrt(&[-1.0]).is_err());
/// ```
pub fn sqrt(args: &[f64]) -> EvalResult<Value> {
    let x = args[0];
    if x < 0.0 {
        return Err(EvalError::Domain { details: format!("sqrt of negative number {x}"), });
    }
    Ok(Value::Number(x.sqrt()))
}
