/// Classifies a lexical token for syntax highlighting and analysis.
///
/// Every fragment of the source belongs to exactly one of these classes.
/// The classification is only produced when the caller opts into token
/// collection; parsing itself never needs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Numeric literals: `42`, `3.14`, `.5`.
    Number,
    /// Boolean literals: `true`, `false`.
    Boolean,
    /// String literals: `"hello"`.
    String,
    /// Variable and function names: `x`, `pos.x`, `sqrt`.
    Identifier,
    /// Operators: `+`, `==`, `&&`, `and`, `?`, `:`, ...
    Operator,
    /// Parentheses: `(`, `)`.
    Parenthesis,
    /// Function argument separator: `,`.
    Comma,
    /// Spaces, tabs and line breaks.
    Whitespace,
    /// A fragment no token could be produced from.
    Unknown,
}

/// One lexical unit of the source, as recorded for highlighting.
///
/// Invariant: `start + length <= source.len()`, and a collected sequence
/// covers the source left to right, whitespace included. The sequence is
/// never mutated after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxToken {
    /// The token's class.
    pub kind:   TokenKind,
    /// Byte offset of the token in the source.
    pub start:  usize,
    /// Length of the token in bytes.
    pub length: usize,
    /// The token's source text, verbatim (escape sequences undecoded).
    pub text:   String,
}

impl SyntaxToken {
    /// Builds a token from its source fragment; the length is the
    /// fragment's byte length.
    #[must_use]
    pub fn new(kind: TokenKind, start: usize, text: &str) -> Self {
        Self { kind,
               start,
               length: text.len(),
               text: text.to_owned() }
    }
}
