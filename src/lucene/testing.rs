//! Testing utilities for AST assertions
//!
//! # Parser Testing Guidelines
//!
//! What we want for every parser test is assurance on the whole tree: node kinds,
//! nesting, fields, values and operators. Asserting generalities ("it parsed", "the
//! root is binary") misses exactly the associativity and NOT-capture rules that matter.
//! Hand-written `match` ladders over the AST get that right but bury the intent.
//!
//! Use [`assert_query`] with its fluent API instead. The structure of the assertion
//! mirrors the structure of the tree:
//!
//! ```rust,ignore
//! use lucene_query::lucene::testing::assert_query;
//! use lucene_query::parse;
//!
//! let query = parse("foo AND bar OR baz")?;
//!
//! assert_query(&query).body(|body| {
//!     body.assert_binary()
//!         .operator("OR")
//!         .implicit(false)
//!         .left(|left| {
//!             left.assert_binary()
//!                 .operator("AND")
//!                 .left(|l| { l.assert_term().field("*").value("foo"); })
//!                 .right(|r| { r.assert_term().value("bar"); });
//!         })
//!         .right(|right| { right.assert_term().value("baz"); });
//! });
//! ```
//!
//! Failures name the path to the node that failed:
//!
//! ```text
//! body.left.right: Expected UnquotedTerm, found QuotedTerm (*:"bar")
//! ```
//!
//! For larger trees, prefer an `insta` snapshot of
//! [`to_treeviz_str`](crate::lucene::formats::to_treeviz_str).

mod testing_assertions;
mod testing_matchers;

pub use testing_assertions::{
    assert_query, BinaryAssertion, BinaryRangeAssertion, ExpressionAssertion,
    FieldGroupAssertion, QueryAssertion, RangeTermAssertion, TermAssertion, UnaryAssertion,
    UnaryRangeAssertion,
};
pub use testing_matchers::TextMatch;
