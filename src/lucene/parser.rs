//! Parser module for Lucene-style queries
//!
//! This module contains the recursive-descent parser that turns the token stream into a
//! [`Query`](crate::lucene::ast::Query).
//!
//! ## Testing
//!
//! Parser tests should assert on the whole tree shape. See the
//! [testing module](crate::lucene::testing) for the fluent assertion API.

pub mod api;
#[allow(clippy::module_inception)]
pub mod parser;
#[cfg(test)]
mod tests;

pub use api::{parse, parse_tokens, parse_with_config};
pub use parser::Parser;
