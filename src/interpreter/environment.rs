use std::collections::HashMap;

use crate::{error::EvalError, interpreter::evaluator::core::EvalResult, interpreter::value::Value};

/// Host-supplied resolver for variable reads and function calls.
///
/// Implement this trait to connect expressions to application data: a
/// settings map, a struct, a database row, anything that can answer the two
/// questions below. The evaluator holds only a borrowed reference for the
/// duration of a single `evaluate` call and never stores or owns an
/// environment; lifetime and thread-safety of the backing data are entirely
/// the host's responsibility.
pub trait Environment {
    /// Looks up a variable value by name.
    ///
    /// Dotted paths such as `pos.x` arrive as a single opaque name.
    ///
    /// # Errors
    /// Returns `EvalError::UnknownVariable` if the name does not resolve.
    fn get(&self, name: &str) -> EvalResult<Value>;

    /// Invokes a host function with already-evaluated arguments.
    ///
    /// The standard function library is consulted before this method, so an
    /// environment never sees calls like `sqrt(4.0)` that the library
    /// already answers.
    ///
    /// # Errors
    /// Returns `EvalError::UnknownFunction` if the name does not resolve,
    /// or any other `EvalError` the function itself raises.
    fn call(&self, name: &str, args: &[Value]) -> EvalResult<Value>;
}

/// Host function stored by [`MapEnvironment`].
type NativeFunction = Box<dyn Fn(&[Value]) -> EvalResult<Value>>;

/// A map-backed [`Environment`] for tests, demos and simple hosts.
///
/// Stores variables in a `HashMap` and host functions as boxed closures.
///
/// # Example
/// ```
/// use exprkit::interpreter::environment::MapEnvironment;
/// use exprkit::interpreter::value::Value;
///
/// let mut env = MapEnvironment::new();
/// env.set("x", 10.0);
/// env.set("y", 20.0);
///
/// let result = exprkit::eval("x + y * 2", Some(&env)).unwrap();
/// assert_eq!(result, Value::Number(50.0));
/// ```
#[derive(Default)]
pub struct MapEnvironment {
    variables: HashMap<String, Value>,
    functions: HashMap<String, NativeFunction>,
}

impl MapEnvironment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a variable, overwriting any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.variables.insert(name.into(), value.into());
    }

    /// Removes a variable. Returns `true` if it existed.
    pub fn remove(&mut self, name: &str) -> bool {
        self.variables.remove(name).is_some()
    }

    /// Removes all variables and functions.
    pub fn clear(&mut self) {
        self.variables.clear();
        self.functions.clear();
    }

    /// Returns `true` if a variable with the given name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Registers a host function under the given name.
    ///
    /// The function receives its arguments already evaluated, left to
    /// right. Names shadowed by the standard function library are never
    /// dispatched here.
    pub fn register_function<F>(&mut self, name: impl Into<String>, function: F)
        where F: Fn(&[Value]) -> EvalResult<Value> + 'static
    {
        self.functions.insert(name.into(), Box::new(function));
    }
}

impl Environment for MapEnvironment {
    fn get(&self, name: &str) -> EvalResult<Value> {
        self.variables
            .get(name)
            .cloned()
            .ok_or_else(|| EvalError::UnknownVariable { name: name.to_owned() })
    }

    fn call(&self, name: &str, args: &[Value]) -> EvalResult<Value> {
        match self.functions.get(name) {
            Some(function) => function(args),
            None => Err(EvalError::UnknownFunction { name: name.to_owned() }),
        }
    }
}
