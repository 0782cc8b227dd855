#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Positions are byte offsets into the source string; expressions are a
/// single line, so offsets are more useful than line numbers.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token:  String,
        /// Byte offset of the token in the source.
        offset: usize,
    },
    /// Reached the end of input while an expression was still incomplete.
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Byte offset of the opening parenthesis.
        offset: usize,
    },
    /// A `:` was expected after the then-branch of a ternary expression.
    ExpectedColon {
        /// Byte offset where the colon was expected.
        offset: usize,
    },
    /// A string literal was opened but never closed.
    UnterminatedString {
        /// Byte offset of the opening quote.
        offset: usize,
    },
    /// The source contained a character no token can start with.
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character.
        offset:    usize,
    },
    /// Found extra tokens after a complete expression was parsed.
    TrailingTokens {
        /// The first extra token.
        token:  String,
        /// Byte offset of the first extra token.
        offset: usize,
    },
    /// The input was empty or contained only whitespace.
    EmptyExpression,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, offset } => {
                write!(f, "Parse error at byte {offset}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput => {
                write!(f, "Parse error: Unexpected end of expression.")
            },

            Self::ExpectedClosingParen { offset } => write!(f,
                                                            "Parse error at byte {offset}: Expected closing parenthesis ')' but none found."),

            Self::ExpectedColon { offset } => write!(f,
                                                     "Parse error at byte {offset}: Expected ':' in ternary expression."),

            Self::UnterminatedString { offset } => {
                write!(f, "Parse error at byte {offset}: Unterminated string literal.")
            },

            Self::UnrecognizedCharacter { character, offset } => write!(f,
                                                                        "Parse error at byte {offset}: Unrecognized character '{character}'."),

            Self::TrailingTokens { token, offset } => write!(f,
                                                             "Parse error at byte {offset}: Extra tokens after expression: {token}."),

            Self::EmptyExpression => write!(f, "Parse error: Expression is empty."),
        }
    }
}

impl std::error::Error for ParseError {}
