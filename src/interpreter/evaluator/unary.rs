use crate::{
    ast::{Expr, UnaryOperator},
    error::EvalError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, evaluate},
        value::Value,
    },
};

/// Evaluates a unary operation.
///
/// - `Not` coerces its operand to boolean and negates it; this works on
///   any value type.
/// - `Negate` requires a number operand; anything else is a type error.
///
/// # Parameters
/// - `op`: The unary operator.
/// - `operand`: The operand expression.
/// - `environment`: Optional resolver passed through to the operand.
///
/// # Returns
/// The resulting [`Value`].
///
/// # Errors
/// `EvalError::Type` when negation is applied to a non-number.
pub fn eval_unary(op: UnaryOperator,
                  operand: &Expr,
                  environment: Option<&dyn Environment>)
                  -> EvalResult<Value> {
    let value = evaluate(operand, environment)?;

    match op {
        UnaryOperator::Not => Ok(Value::Boolean(!value.as_boolean())),
        UnaryOperator::Negate => match value {
            Value::Number(n) => Ok(Value::Number(-n)),
            other => {
                Err(EvalError::Type { details: format!("Negation requires a number, found {}",
                                                       other.type_name()), })
            },
        },
    }
}
