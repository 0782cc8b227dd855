/// Dispatch table for the standard function library.
///
/// Defines the catalog of built-in functions and decides whether a call
/// matches it or falls through to the environment.
pub mod core;

/// Built-in functions without domain restrictions.
///
/// One-argument trigonometry and rounding, plus the two-argument `min`,
/// `max` and `pow`.
pub mod builtin;

/// Square root with its non-negative domain check.
pub mod sqrt;

/// Natural logarithm with its positive domain check.
pub mod log;
