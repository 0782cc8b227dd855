/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// expression string. Parse errors include syntax mistakes, unterminated
/// string literals, missing closing parentheses, trailing input and empty
/// input.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while evaluating a parsed
/// expression: unresolved variables and functions, incompatible operand
/// types, division by zero, and standard-function domain violations.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Umbrella error for entry points that parse and evaluate in one call.
///
/// Callers that use [`parse`](crate::parse) and
/// [`Expr::evaluate`](crate::ast::Expr::evaluate) separately deal with the
/// specific error type of each phase instead.
pub enum ExprError {
    /// The expression failed to parse.
    Parse(ParseError),
    /// The expression parsed but failed to evaluate.
    Eval(EvalError),
}

impl std::fmt::Display for ExprError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ExprError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}

impl From<ParseError> for ExprError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<EvalError> for ExprError {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}
