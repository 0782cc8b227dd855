use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{
        environment::Environment,
        evaluator::{binary, function, unary},
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

impl Expr {
    /// Evaluates the expression against an optional environment.
    ///
    /// The tree is immutable and this method takes `&self`, so a parsed
    /// expression can be evaluated any number of times, with any number of
    /// different environments ("parse once, evaluate many"). Without an
    /// environment, literals, operators and the standard function library
    /// still work; variable references and unknown function calls fail.
    ///
    /// # Errors
    /// Returns an `EvalError` for unresolved names, incompatible operand
    /// types, division by zero, or standard-function domain violations.
    ///
    /// # Example
    /// ```
    /// use exprkit::interpreter::value::Value;
    ///
    /// let expr = exprkit::parse("1 + 2 * 3").unwrap();
    /// assert_eq!(expr.evaluate(None).unwrap(), Value::Number(7.0));
    /// assert_eq!(expr.evaluate(None).unwrap(), Value::Number(7.0));
    /// ```
    pub fn evaluate(&self, environment: Option<&dyn Environment>) -> EvalResult<Value> {
        evaluate(self, environment)
    }
}

/// Evaluates an expression node and returns the resulting value.
///
/// This is the main entry point for expression evaluation.
/// The evaluator dispatches on the node variant: literals, variables,
/// unary and binary operations, ternary conditionals and function calls.
/// Evaluation is pure given its inputs except for calls into the
/// environment.
///
/// # Parameters
/// - `expr`: Expression to evaluate.
/// - `environment`: Optional resolver for variables and host functions.
///
/// # Returns
/// The computed [`Value`].
///
/// # Errors
/// Propagates every failure described in the crate's error taxonomy.
pub fn evaluate(expr: &Expr, environment: Option<&dyn Environment>) -> EvalResult<Value> {
    match expr {
        Expr::Literal { value } => Ok(value.clone()),
        Expr::Variable { name } => eval_variable(name, environment),
        Expr::UnaryOp { op, operand } => unary::eval_unary(*op, operand, environment),
        Expr::BinaryOp { left, op, right } => binary::eval_binary(left, *op, right, environment),
        Expr::Ternary { condition,
                        then_branch,
                        else_branch, } => {
            // Exactly one branch runs; the untaken branch must stay
            // unevaluated so host functions in it are never invoked.
            if evaluate(condition, environment)?.as_boolean() {
                evaluate(then_branch, environment)
            } else {
                evaluate(else_branch, environment)
            }
        },
        Expr::FunctionCall { name, arguments } => {
            eval_function_call(name, arguments, environment)
        },
    }
}

/// Resolves a variable read through the environment.
///
/// # Errors
/// `UnknownVariable` if no environment was supplied; otherwise whatever
/// the environment's `get` returns.
fn eval_variable(name: &str, environment: Option<&dyn Environment>) -> EvalResult<Value> {
    match environment {
        Some(env) => env.get(name),
        None => Err(EvalError::UnknownVariable { name: name.to_owned() }),
    }
}

/// Evaluates a function call.
///
/// Arguments are evaluated left to right, unconditionally, before
/// dispatch. The standard function library is consulted first, so it is
/// available even without an environment; a call the library does not
/// match falls through to the environment.
///
/// # Errors
/// - `UnknownFunction` if neither the library nor an environment resolves
///   the name.
/// - Any error raised by argument evaluation, the library (domain
///   violations) or the host function.
fn eval_function_call(name: &str,
                      arguments: &[Expr],
                      environment: Option<&dyn Environment>)
                      -> EvalResult<Value> {
    let mut args = Vec::with_capacity(arguments.len());
    for argument in arguments {
        args.push(evaluate(argument, environment)?);
    }

    if let Some(result) = function::core::dispatch(name, &args) {
        return result;
    }

    match environment {
        Some(env) => env.call(name, &args),
        None => Err(EvalError::UnknownFunction { name: name.to_owned() }),
    }
}
