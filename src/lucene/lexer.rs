//! Lexer module for Lucene-style queries
//!
//! This module contains the tokenization logic: token definitions, the ordered rule
//! table, the pull-based [`Tokenizer`] the parser drives, and a detokenizer.
//!
//! Rule Ordering
//!
//! Tokenizing is not a global longest-match over all rules. Each rule is tried in turn
//! against the unscanned input and the first one that matches wins, so `!` is always a
//! logical NOT and never a prefix operator, and a quoted string is taken before anything
//! that could start with a quote. See [rules] for the table.

pub mod detokenizer;
pub mod lexer_impl;
pub mod rules;
pub mod tokens;

pub use detokenizer::{detokenize, ToQueryString};
pub use lexer_impl::{tokenize, tokenize_with_spans, Span, TokenSource, TokenStream, Tokenizer};
pub use rules::{is_identifier_char, RESERVED_CHARS};
pub use tokens::{Token, TokenKind};
