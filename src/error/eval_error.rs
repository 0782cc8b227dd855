#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can be raised while evaluating an expression.
///
/// Every failure is terminal for the evaluation that triggered it; the
/// evaluator never retries and never recovers internally.
pub enum EvalError {
    /// Tried to read a variable the environment does not resolve.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Called a function neither the standard library nor the environment
    /// resolves.
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// An operator or conversion was applied to an incompatible type
    /// combination.
    Type {
        /// Details about the type mismatch.
        details: String,
    },
    /// Attempted numeric division by zero.
    DivisionByZero,
    /// A standard function argument fell outside the function's domain.
    Domain {
        /// Details about the violated restriction.
        details: String,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name } => {
                write!(f, "Unknown variable: {name}.")
            },
            Self::UnknownFunction { name } => {
                write!(f, "Unknown function: {name}.")
            },
            Self::Type { details } => write!(f, "Type error: {details}."),
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::Domain { details } => write!(f, "Domain error: {details}."),
        }
    }
}

impl std::error::Error for EvalError {}
