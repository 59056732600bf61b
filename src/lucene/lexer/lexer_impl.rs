//! Implementation of the query tokenizer
//!
//! The tokenizer is pull based: each call scans exactly one token from the cursor,
//! skipping whitespace transparently. It holds nothing but the input and the cursor.

use super::rules::match_rule;
use super::tokens::{Token, TokenKind};
use crate::lucene::error::LexError;
use std::ops::Range;

/// Byte range of a token in the query string
pub type Span = Range<usize>;

/// Pull-based token source over a query string
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    input: &'a str,
    cursor: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, cursor: 0 }
    }

    /// Current scan offset in bytes
    pub fn location(&self) -> usize {
        self.cursor
    }

    pub fn is_eof(&self) -> bool {
        self.cursor >= self.input.len()
    }

    /// Scan the next token along with its span.
    ///
    /// Returns `Ok(None)` at end of input. After a lexical error the tokenizer is
    /// exhausted and keeps returning `Ok(None)`.
    pub fn next_spanned(&mut self) -> Result<Option<(Token, Span)>, LexError> {
        loop {
            if self.is_eof() {
                return Ok(None);
            }

            let rest = &self.input[self.cursor..];
            let Some((kind, len)) = match_rule(rest) else {
                let offset = self.cursor;
                self.cursor = self.input.len();
                let found = rest.chars().next().unwrap_or_default();
                return Err(LexError::new(offset, found));
            };

            let start = self.cursor;
            self.cursor += len;

            if kind == TokenKind::Whitespace {
                continue;
            }

            return Ok(Some((Token::new(kind, &rest[..len]), start..self.cursor)));
        }
    }
}

/// Anything the parser can pull spanned tokens from
pub trait TokenSource {
    /// Next token and its span, `Ok(None)` at end of input
    fn next_spanned(&mut self) -> Result<Option<(Token, Span)>, LexError>;

    /// Current offset in the query string
    fn location(&self) -> usize;
}

impl TokenSource for Tokenizer<'_> {
    fn next_spanned(&mut self) -> Result<Option<(Token, Span)>, LexError> {
        Tokenizer::next_spanned(self)
    }

    fn location(&self) -> usize {
        Tokenizer::location(self)
    }
}

/// Token source over an already tokenized query
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: std::vec::IntoIter<(Token, Span)>,
    cursor: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<(Token, Span)>) -> Self {
        Self {
            tokens: tokens.into_iter(),
            cursor: 0,
        }
    }
}

impl TokenSource for TokenStream {
    fn next_spanned(&mut self) -> Result<Option<(Token, Span)>, LexError> {
        let next = self.tokens.next();
        if let Some((_, span)) = &next {
            self.cursor = span.end;
        }
        Ok(next)
    }

    fn location(&self) -> usize {
        self.cursor
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_spanned()
            .map(|next| next.map(|(token, _)| token))
            .transpose()
    }
}

/// Convenience function to tokenize a string and collect all tokens
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Tokenizer::new(source).collect()
}

/// Convenience function to tokenize a string and collect tokens with their spans
pub fn tokenize_with_spans(source: &str) -> Result<Vec<(Token, Span)>, LexError> {
    let mut tokenizer = Tokenizer::new(source);
    let mut tokens = Vec::new();

    while let Some(spanned) = tokenizer.next_spanned()? {
        tokens.push(spanned);
    }

    Ok(tokens)
}
