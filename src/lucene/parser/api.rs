//! Public API for the parser.

use crate::lucene::ast::Query;
use crate::lucene::config::ParserConfig;
use crate::lucene::error::ParseResult;
use crate::lucene::lexer::{Span, Token, TokenStream, Tokenizer};
use crate::lucene::parser::parser::Parser;

/// Parse a query string with the default configuration
pub fn parse(input: &str) -> ParseResult<Query> {
    parse_with_config(input, &ParserConfig::default())
}

/// Parse a query string, giving unscoped leaves the configured default field
pub fn parse_with_config(input: &str, config: &ParserConfig) -> ParseResult<Query> {
    Parser::new(Tokenizer::new(input), config)?.parse_query()
}

/// Parse an already tokenized query
pub fn parse_tokens(tokens: Vec<(Token, Span)>) -> ParseResult<Query> {
    Parser::new(TokenStream::new(tokens), &ParserConfig::default())?.parse_query()
}
