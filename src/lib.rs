//! # lucene-query
//!
//! A parser for Lucene-style query strings.
//!
//! The input string is scanned by an ordered-rule [tokenizer](lucene::lexer) and consumed by
//! a single-lookahead recursive-descent [parser](lucene::parser), which produces a strongly
//! typed [AST](lucene::ast) rooted at [`Query`]. Nothing is executed against an index; the
//! tree is meant to be translated into a search backend's native query.
//!
//! ```text
//! title:(rust AND parser) OR year:[2015 TO 2020}
//! ```
//!
//! For testing guidelines, see the [testing module](lucene::testing).

pub mod lucene;

pub use lucene::ast::{Expression, Query};
pub use lucene::config::ParserConfig;
pub use lucene::error::ParseError;
pub use lucene::lexer::tokenize;
pub use lucene::parser::{parse, parse_with_config};
