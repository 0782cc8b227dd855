use crate::interpreter::{
    evaluator::{
        core::EvalResult,
        function::{builtin, log, sqrt},
    },
    value::Value,
};

/// Type alias for standard function handlers.
///
/// A handler receives the numeric arguments, already extracted and
/// arity-checked by [`dispatch`], and returns the computed value or a
/// domain error.
type StandardFn = fn(&[f64]) -> EvalResult<Value>;

/// Defines the standard function library as a lookup table and name list.
///
/// Each entry provides:
/// - a string name,
/// - the exact number of arguments,
/// - a function pointer implementing the operation.
///
/// The macro produces:
/// - `StandardDef` (internal metadata),
/// - `STANDARD_TABLE` (static table for lookup),
/// - `STANDARD_FUNCTIONS` (public list of standard function names).
macro_rules! standard_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct StandardDef {
            name:  &'static str,
            arity: usize,
            func:  StandardFn,
        }
        static STANDARD_TABLE: &[StandardDef] = &[
            $(
                StandardDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of every standard function, for host and highlighter
        /// introspection.
        pub const STANDARD_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

standard_functions! {
    "min"   => { arity: 2, func: builtin::min },
    "max"   => { arity: 2, func: builtin::max },
    "pow"   => { arity: 2, func: builtin::pow },
    "sqrt"  => { arity: 1, func: sqrt::sqrt },
    "log"   => { arity: 1, func: log::log },
    "sin"   => { arity: 1, func: builtin::sin },
    "cos"   => { arity: 1, func: builtin::cos },
    "tan"   => { arity: 1, func: builtin::tan },
    "abs"   => { arity: 1, func: builtin::abs },
    "exp"   => { arity: 1, func: builtin::exp },
    "floor" => { arity: 1, func: builtin::floor },
    "ceil"  => { arity: 1, func: builtin::ceil },
    "round" => { arity: 1, func: builtin::round },
}

/// Dispatches a call against the standard function library.
///
/// A call matches only when the name, the argument count and the argument
/// types (all numbers) line up with the table. A non-match returns `None`
/// and the caller forwards the call to the environment, so hosts may
/// define same-named functions with different signatures (e.g. a
/// three-argument `min`). Once a call matches, its result is final: domain
/// violations surface as `Some(Err(Domain…))`, never as a fall-through.
///
/// # Parameters
/// - `name`: Function name.
/// - `args`: Evaluated argument values.
///
/// # Returns
/// - `Some(result)`: The call matched the table.
/// - `None`: No standard function matches; try the environment.
///
/// # Example
/// ```
/// use exprkit::interpreter::{evaluator::function::core::dispatch, value::Value};
///
/// let hit = dispatch("max", &[Value::Number(1.0), Value::Number(2.0)]);
/// assert_eq!(hit.unwrap().unwrap(), Value::Number(2.0));
///
/// // Wrong arity: not a match, falls through to the environment.
/// assert!(dispatch("max", &[Value::Number(1.0)]).is_none());
///
/// // Non-numeric argument: not a match either.
/// assert!(dispatch("max", &[Value::from("a"), Value::Number(2.0)]).is_none());
/// ```
#[must_use]
pub fn dispatch(name: &str, args: &[Value]) -> Option<EvalResult<Value>> {
    let standard = STANDARD_TABLE.iter().find(|def| def.name == name)?;

    if args.len() != standard.arity {
        return None;
    }

    let mut numbers = Vec::with_capacity(args.len());
    for arg in args {
        match arg {
            Value::Number(n) => numbers.push(*n),
            _ => return None,
        }
    }

    Some((standard.func)(&numbers))
}
