use crate::{
    ast::{BinaryOperator, Expr},
    error::EvalError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, evaluate},
        value::Value,
    },
};

/// Evaluates a binary operation.
///
/// The logical operators are handled first because they control whether
/// the right operand runs at all: AND and OR short-circuit (the right
/// side is evaluated only when the left side has not already decided the
/// result), while XOR always evaluates both sides. Every other operator
/// evaluates both operands and applies the typed semantics in
/// [`apply_operator`].
///
/// # Parameters
/// - `left`, `right`: Operand expressions.
/// - `op`: The operator.
/// - `environment`: Optional resolver passed through to the operands.
///
/// # Returns
/// The resulting [`Value`].
pub fn eval_binary(left: &Expr,
                   op: BinaryOperator,
                   right: &Expr,
                   environment: Option<&dyn Environment>)
                   -> EvalResult<Value> {
    match op {
        BinaryOperator::And => {
            if !evaluate(left, environment)?.as_boolean() {
                return Ok(Value::Boolean(false));
            }
            Ok(Value::Boolean(evaluate(right, environment)?.as_boolean()))
        },
        BinaryOperator::Or => {
            if evaluate(left, environment)?.as_boolean() {
                return Ok(Value::Boolean(true));
            }
            Ok(Value::Boolean(evaluate(right, environment)?.as_boolean()))
        },
        BinaryOperator::Xor => {
            let lhs = evaluate(left, environment)?.as_boolean();
            let rhs = evaluate(right, environment)?.as_boolean();
            Ok(Value::Boolean(lhs != rhs))
        },
        _ => {
            let lhs = evaluate(left, environment)?;
            let rhs = evaluate(right, environment)?;
            apply_operator(op, &lhs, &rhs)
        },
    }
}

/// Applies a non-logical binary operator to two evaluated values.
///
/// Operand typing rules, in order:
/// 1. If either side is a string, the string rules apply.
/// 2. If both sides are numbers, standard arithmetic and comparison apply.
/// 3. If both sides are booleans, only `==` and `!=` are defined.
/// 4. Every other combination is a type error.
fn apply_operator(op: BinaryOperator, lhs: &Value, rhs: &Value) -> EvalResult<Value> {
    if lhs.is_string() || rhs.is_string() {
        return apply_string_operator(op, lhs, rhs);
    }

    if let (Value::Number(a), Value::Number(b)) = (lhs, rhs) {
        return apply_numeric_operator(op, *a, *b);
    }

    if let (Value::Boolean(a), Value::Boolean(b)) = (lhs, rhs) {
        return match op {
            BinaryOperator::Equal => Ok(Value::Boolean(a == b)),
            BinaryOperator::NotEqual => Ok(Value::Boolean(a != b)),
            _ => Err(EvalError::Type { details: format!("Operator '{op}' is not defined for two booleans"), }),
        };
    }

    Err(EvalError::Type { details: format!("Unsupported operand types: {} and {}",
                                           lhs.type_name(),
                                           rhs.type_name()), })
}

/// Applies an operator when at least one operand is a string.
///
/// - `+` concatenates; both sides are coerced to string.
/// - `==` / `!=` compare lexically when both sides are strings; a string
///   never equals a non-string (no error, just `false` / `true`).
/// - `<`, `>`, `<=`, `>=` compare lexicographically and require two
///   strings.
/// - `in` tests substring containment of the left side in the right side
///   and requires two strings. An empty needle matches every haystack:
///   `"" in s` is `true` for any `s`.
fn apply_string_operator(op: BinaryOperator, lhs: &Value, rhs: &Value) -> EvalResult<Value> {
    match op {
        BinaryOperator::Add => {
            Ok(Value::String(format!("{}{}", lhs.as_string(), rhs.as_string())))
        },

        BinaryOperator::Equal => match (lhs, rhs) {
            (Value::String(a), Value::String(b)) => Ok(Value::Boolean(a == b)),
            _ => Ok(Value::Boolean(false)),
        },
        BinaryOperator::NotEqual => match (lhs, rhs) {
            (Value::String(a), Value::String(b)) => Ok(Value::Boolean(a != b)),
            _ => Ok(Value::Boolean(true)),
        },

        BinaryOperator::Less
        | BinaryOperator::Greater
        | BinaryOperator::LessEqual
        | BinaryOperator::GreaterEqual => match (lhs, rhs) {
            (Value::String(a), Value::String(b)) => {
                let result = match op {
                    BinaryOperator::Less => a < b,
                    BinaryOperator::Greater => a > b,
                    BinaryOperator::LessEqual => a <= b,
                    _ => a >= b,
                };
                Ok(Value::Boolean(result))
            },
            _ => Err(EvalError::Type { details:
                                           "String comparison operators require two string operands".to_string(), }),
        },

        BinaryOperator::In => match (lhs, rhs) {
            (Value::String(needle), Value::String(haystack)) => {
                Ok(Value::Boolean(haystack.contains(needle)))
            },
            _ => Err(EvalError::Type { details:
                                           "'in' operator requires two string operands".to_string(), }),
        },

        _ => Err(EvalError::Type { details: format!("Operator '{op}' is not defined for strings"), }),
    }
}

/// Applies an operator to two numbers.
///
/// Division traps a zero divisor; all other arithmetic follows IEEE 754,
/// so overflow and invalid operations propagate as infinities and NaN.
fn apply_numeric_operator(op: BinaryOperator, a: f64, b: f64) -> EvalResult<Value> {
    match op {
        BinaryOperator::Add => Ok(Value::Number(a + b)),
        BinaryOperator::Sub => Ok(Value::Number(a - b)),
        BinaryOperator::Mul => Ok(Value::Number(a * b)),
        BinaryOperator::Div => {
            if b == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            Ok(Value::Number(a / b))
        },
        BinaryOperator::Equal => Ok(Value::Boolean(a == b)),
        BinaryOperator::NotEqual => Ok(Value::Boolean(a != b)),
        BinaryOperator::Less => Ok(Value::Boolean(a < b)),
        BinaryOperator::Greater => Ok(Value::Boolean(a > b)),
        BinaryOperator::LessEqual => Ok(Value::Boolean(a <= b)),
        BinaryOperator::GreaterEqual => Ok(Value::Boolean(a >= b)),
        _ => Err(EvalError::Type { details: format!("Operator '{op}' is not defined for numbers"), }),
    }
}
