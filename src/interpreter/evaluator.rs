/// Core evaluation logic.
///
/// Contains the node dispatch, variable resolution and function-call
/// evaluation, and the `EvalResult` alias shared by all evaluation
/// routines.
pub mod core;

/// Unary operator evaluation.
///
/// Handles negation and logical NOT.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements the typed semantics for all binary operations, including
/// short-circuiting of the logical operators and the string/number/boolean
/// operand rules.
pub mod binary;

/// The standard function library.
///
/// A fixed catalog of pure math functions available to every expression,
/// with or without an environment.
pub mod function;
