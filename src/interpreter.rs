/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream
/// of tokens, each corresponding to meaningful language elements such as
/// numbers, strings, identifiers, operators and delimiters. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source offsets.
/// - Handles numeric, boolean and string literals, identifiers and
///   operators.
/// - Feeds the optional token-collection side channel for highlighting.
/// - Reports lexical errors for unterminated strings and unrecognized
///   characters.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of the
/// expression. One parse walks the whole string; anything left over is an
/// error.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Enforces the operator precedence and associativity of the grammar.
/// - Reports syntax errors with source offsets.
pub mod parser;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, applies the typed operator semantics,
/// dispatches function calls to the standard library or the environment,
/// and produces a single result value. It is the core execution engine.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Short-circuits logical AND/OR and skips untaken ternary branches.
/// - Reports runtime errors such as division by zero or type mismatches.
pub mod evaluator;
/// The value module defines the runtime data type for evaluation.
///
/// This module declares the three-way value type used during evaluation
/// (number, boolean, string) and its coercion and equality rules.
///
/// # Responsibilities
/// - Defines the `Value` enum and its variants.
/// - Implements the fixed conversion rules between the three types.
pub mod value;
/// The environment module defines the host integration contract.
///
/// Expressions reach application data exclusively through the two-method
/// `Environment` trait; the crate never depends on a concrete data source.
///
/// # Responsibilities
/// - Declares the `Environment` trait for variable reads and function
///   calls.
/// - Provides the map-backed `MapEnvironment` for simple hosts and tests.
pub mod environment;
/// The token module defines the syntax-highlighting side channel.
///
/// Token records describe the source as a left-to-right sequence of
/// classified fragments, whitespace included. They are produced only when
/// the caller opts into collection and play no role in evaluation.
pub mod token;
