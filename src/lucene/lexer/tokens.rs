//! Token definitions for Lucene-style queries
//!
//! This module defines all the tokens that can be produced by the query tokenizer.
//! Tokens are a closed set of kinds plus the exact source text that produced them; the
//! parser dispatches on the kind and reads the value where the grammar needs it (field
//! names, bracket shape, relational operator spelling).

use std::fmt;

/// All possible token kinds in a query string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `AND` or `&&`
    LogicalAnd,
    /// `OR` or `||`
    LogicalOr,
    /// `NOT` or `!`
    LogicalNot,
    Identifier,
    /// Double- or single-quoted string, quotes included in the value
    QuotedString,
    /// Slash-delimited regex, slashes included in the value
    Regex,
    /// `:`
    FieldSeparator,
    /// `+` or `-`
    PrefixOperator,
    /// `~`
    Tilde,
    /// `(`
    GroupOpen,
    /// `)`
    GroupClose,
    /// `[` or `{`
    RangeOpen,
    /// `]` or `}`
    RangeClose,
    /// `TO`
    RangeTo,
    /// `>`, `>=`, `<` or `<=`
    RelationalOperator,
    /// Recognized by the tokenizer but never emitted
    Whitespace,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::LogicalAnd => "LogicalAnd",
            TokenKind::LogicalOr => "LogicalOr",
            TokenKind::LogicalNot => "LogicalNot",
            TokenKind::Identifier => "Identifier",
            TokenKind::QuotedString => "QuotedString",
            TokenKind::Regex => "Regex",
            TokenKind::FieldSeparator => "FieldSeparator",
            TokenKind::PrefixOperator => "PrefixOperator",
            TokenKind::Tilde => "Tilde",
            TokenKind::GroupOpen => "GroupOpen",
            TokenKind::GroupClose => "GroupClose",
            TokenKind::RangeOpen => "RangeOpen",
            TokenKind::RangeClose => "RangeClose",
            TokenKind::RangeTo => "RangeTo",
            TokenKind::RelationalOperator => "RelationalOperator",
            TokenKind::Whitespace => "Whitespace",
        }
    }

    /// Check if this kind can stand as the value of a range bound
    pub fn is_term_atom(&self) -> bool {
        matches!(self, TokenKind::Identifier | TokenKind::QuotedString)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token produced by the tokenizer: its kind and the exact text it matched
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.value)
    }
}
