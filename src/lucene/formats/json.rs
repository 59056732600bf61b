//! JSON rendering of query ASTs
//!
//! Nodes are internally tagged with `"type"`, so the output reads like
//! `{"type": "Query", "body": {"type": "UnquotedTerm", "field": "*", "value": "foo"}}`.

use crate::lucene::ast::Query;

/// Pretty-printed JSON for a query
pub fn to_json(query: &Query) -> serde_json::Result<String> {
    serde_json::to_string_pretty(query)
}

/// JSON value for a query, for callers that post-process the tree
pub fn to_json_value(query: &Query) -> serde_json::Result<serde_json::Value> {
    serde_json::to_value(query)
}
