//! Error types for tokenizing and parsing
//!
//! Both kinds of error are fatal to the current parse: there is no recovery and no
//! partial tree. Every error carries the byte offset it was raised at so callers can
//! point at the offending input, see [`format_source_context`].

use crate::lucene::lexer::TokenKind;
use std::fmt;

/// Raised when no lexical rule matches the remaining input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub offset: usize,
    pub found: char,
}

impl LexError {
    pub fn new(offset: usize, found: char) -> Self {
        Self { offset, found }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unexpected character {:?} at offset {}",
            self.found, self.offset
        )
    }
}

impl std::error::Error for LexError {}

/// What the grammar would have accepted at the point of failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Token(TokenKind),
    OneOf(&'static [TokenKind]),
    EndOfInput,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Token(kind) => write!(f, "{}", kind),
            Expected::OneOf(kinds) => {
                let names: Vec<&str> = kinds.iter().map(|k| k.name()).collect();
                write!(f, "one of {}", names.join(", "))
            }
            Expected::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// Raised when the token stream does not fit the grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// The lookahead token is not one the grammar accepts here
    UnexpectedToken {
        expected: Expected,
        found: TokenKind,
        value: String,
        offset: usize,
    },
    /// The input ended where the grammar needed another token
    UnexpectedEndOfInput { expected: Expected, offset: usize },
    /// `field:` with nothing after it
    MissingFieldValue { field: String, offset: usize },
    /// A field separator after a range bound (`[a:b TO c]`)
    FieldInRange { offset: usize },
    /// Groups, NOT operands or AND chains nested past the configured limit
    NestingTooDeep { limit: usize, offset: usize },
}

impl SyntaxError {
    pub fn offset(&self) -> usize {
        match self {
            SyntaxError::UnexpectedToken { offset, .. }
            | SyntaxError::UnexpectedEndOfInput { offset, .. }
            | SyntaxError::MissingFieldValue { offset, .. }
            | SyntaxError::FieldInRange { offset }
            | SyntaxError::NestingTooDeep { offset, .. } => *offset,
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxError::UnexpectedToken {
                expected,
                found,
                value,
                offset,
            } => write!(
                f,
                "Unexpected token at offset {}; expected: {}, actual: {} ({:?})",
                offset, expected, found, value
            ),
            SyntaxError::UnexpectedEndOfInput { expected, offset } => write!(
                f,
                "Unexpected end of input at offset {}; expected: {}",
                offset, expected
            ),
            SyntaxError::MissingFieldValue { field, offset } => write!(
                f,
                "Fielded term detected, but no term provided for field {:?} at offset {}",
                field, offset
            ),
            SyntaxError::FieldInRange { offset } => write!(
                f,
                "Fielded term detected inside of range at offset {}",
                offset
            ),
            SyntaxError::NestingTooDeep { limit, offset } => write!(
                f,
                "Query nests deeper than {} levels at offset {}",
                limit, offset
            ),
        }
    }
}

impl std::error::Error for SyntaxError {}

/// Any failure of [`parse`](crate::lucene::parser::parse)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Lex(LexError),
    Syntax(SyntaxError),
}

impl ParseError {
    /// Byte offset into the query string where parsing failed
    pub fn offset(&self) -> usize {
        match self {
            ParseError::Lex(err) => err.offset,
            ParseError::Syntax(err) => err.offset(),
        }
    }

    pub fn is_lexical(&self) -> bool {
        matches!(self, ParseError::Lex(_))
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Lex(err) => write!(f, "Lexical error: {}", err),
            ParseError::Syntax(err) => write!(f, "Syntax error: {}", err),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Lex(err) => Some(err),
            ParseError::Syntax(err) => Some(err),
        }
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::Lex(err)
    }
}

impl From<SyntaxError> for ParseError {
    fn from(err: SyntaxError) -> Self {
        ParseError::Syntax(err)
    }
}

/// Type alias for parser results
pub type ParseResult<T> = Result<T, ParseError>;

/// Format the query around an error offset
///
/// Shows the query on one line and a caret under the failing character. Offsets past the
/// end of the query (end-of-input errors) put the caret just after the last character.
pub fn format_source_context(source: &str, offset: usize) -> String {
    let offset = offset.min(source.len());
    let column = source
        .get(..offset)
        .map(|prefix| prefix.chars().count())
        .unwrap_or(offset);

    let mut context = String::new();
    context.push_str(&format!(">> {}\n", source));
    context.push_str(&format!("   {}^\n", " ".repeat(column)));
    context
}
