use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::token::{SyntaxToken, TokenKind},
};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `.5`.
    /// Literals are unsigned; a leading `-` is the unary negation operator.
    #[regex(r"[0-9]+\.?[0-9]*", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    Number(f64),
    /// Boolean literal tokens: `true` or `false`.
    #[token("true", |_| true)]
    #[token("false", |_| false)]
    Bool(bool),
    /// String literal tokens, double-quoted with backslash escapes.
    /// The payload is the decoded string; `\n \t \r \\ \"` are recognized
    /// and any other escape is preserved literally.
    #[regex(r#""([^"\\]|\\.)*""#, unescape_string)]
    Str(String),
    /// Identifier tokens; variable or function names such as `x`,
    /// `player_health` or the dotted path `pos.x` (kept as one name).
    #[regex(r"[A-Za-z][A-Za-z0-9_.]*", |lex| lex.slice().to_owned())]
    Identifier(String),
    /// `&&` or `and`
    #[token("&&")]
    #[token("and")]
    And,
    /// `||` or `or`
    #[token("||")]
    #[token("or")]
    Or,
    /// `xor`
    #[token("xor")]
    Xor,
    /// `in`
    #[token("in")]
    In,
    /// `!` or `not`
    #[token("!")]
    #[token("not")]
    Not,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `?`
    #[token("?")]
    Question,
    /// `:`
    #[token(":")]
    Colon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// Spaces, tabs and line breaks. Not skipped: whitespace is recorded
    /// when token collection is enabled, then filtered out of the parse
    /// stream.
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,
}

impl Token {
    /// Classifies the token for the syntax-highlighting side channel.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Number(_) => TokenKind::Number,
            Self::Bool(_) => TokenKind::Boolean,
            Self::Str(_) => TokenKind::String,
            Self::Identifier(_) => TokenKind::Identifier,
            Self::LParen | Self::RParen => TokenKind::Parenthesis,
            Self::Comma => TokenKind::Comma,
            Self::Whitespace => TokenKind::Whitespace,
            _ => TokenKind::Operator,
        }
    }
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the slice is not a valid float (never the case for the
///   literal grammar).
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Decodes the escape sequences of a string literal slice.
///
/// The slice includes both quotes. Recognized escapes are `\n`, `\t`,
/// `\r`, `\\` and `\"`; an unrecognized escape is preserved literally as
/// backslash plus character.
fn unescape_string(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    let inner = &slice[1..slice.len() - 1];

    let mut decoded = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            decoded.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => decoded.push('\n'),
            Some('t') => decoded.push('\t'),
            Some('r') => decoded.push('\r'),
            Some('\\') => decoded.push('\\'),
            Some('"') => decoded.push('"'),
            Some(other) => {
                decoded.push('\\');
                decoded.push(other);
            },
            // The literal regex requires every backslash to be paired.
            None => decoded.push('\\'),
        }
    }
    decoded
}

/// Tokenizes a source string into the parser's input stream.
///
/// Returns the non-whitespace tokens paired with their byte offsets. When
/// `capture` is provided, every token (whitespace included) is also
/// recorded as a [`SyntaxToken`] covering the source left to right; on a
/// lexical error the capture additionally receives an
/// [`TokenKind::Unknown`] entry for the offending fragment, so a
/// highlighting frontend still sees the valid prefix of partially-typed
/// input.
///
/// # Parameters
/// - `source`: The expression text.
/// - `capture`: Optional output sequence for the highlighting side channel.
///
/// # Returns
/// The parse stream of `(token, offset)` pairs.
///
/// # Errors
/// - `UnterminatedString` if a string literal is opened but never closed.
/// - `UnrecognizedCharacter` for any other fragment no token matches.
pub fn tokenize(source: &str,
                mut capture: Option<&mut Vec<SyntaxToken>>)
                -> Result<Vec<(Token, usize)>, ParseError> {
    let mut stream = Vec::new();

    let mut lexer = Token::lexer(source);
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(token) => {
                if let Some(tokens) = capture.as_deref_mut() {
                    tokens.push(SyntaxToken::new(token.kind(), span.start, lexer.slice()));
                }
                if token != Token::Whitespace {
                    stream.push((token, span.start));
                }
            },
            Err(()) => {
                if let Some(tokens) = capture.as_deref_mut() {
                    tokens.push(SyntaxToken::new(TokenKind::Unknown, span.start, lexer.slice()));
                }
                if source[span.start..].starts_with('"') {
                    return Err(ParseError::UnterminatedString { offset: span.start });
                }
                return Err(ParseError::UnrecognizedCharacter {
                    character: source[span.start..].chars().next().unwrap_or('\u{fffd}'),
                    offset: span.start,
                });
            },
        }
    }

    Ok(stream)
}
