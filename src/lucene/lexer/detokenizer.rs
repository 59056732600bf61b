//! Detokenizer for query strings
//!
//! This module provides functionality to convert a stream of tokens back into a string.
//! Re-tokenizing the output yields the same token stream.

use super::tokens::{Token, TokenKind};

/// Trait for converting a token to its string representation
pub trait ToQueryString {
    fn to_query_string(&self) -> String;
}

impl ToQueryString for Token {
    fn to_query_string(&self) -> String {
        self.value.clone()
    }
}

fn glues_to_previous(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::FieldSeparator | TokenKind::GroupClose | TokenKind::RangeClose | TokenKind::Tilde
    )
}

fn glues_to_next(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::FieldSeparator
            | TokenKind::GroupOpen
            | TokenKind::RangeOpen
            | TokenKind::PrefixOperator
    )
}

/// Detokenize a stream of tokens into a string
pub fn detokenize(tokens: &[Token]) -> String {
    let mut result = String::new();
    let mut previous: Option<TokenKind> = None;

    for token in tokens {
        if let Some(prev) = previous {
            if !glues_to_next(prev) && !glues_to_previous(token.kind) {
                result.push(' ');
            }
        }
        result.push_str(&token.to_query_string());
        previous = Some(token.kind);
    }

    result
}
