//! AST definitions for Lucene-style queries
//!
//! A closed set of immutable node variants: the [`Query`] root, boolean
//! [`BinaryExpression`] and [`UnaryExpression`] nodes, leaf terms ([`UnquotedTerm`],
//! [`Phrase`], [`RegexTerm`]), [`FieldGroup`]s, and ranges ([`BinaryRange`],
//! [`UnaryRange`], each built from [`RangeTerm`] bounds).
//!
//! ## Modules
//!
//! - `nodes` - node type definitions and constructors
//! - `operators` - boolean and range operators
//! - `traits` - uniform node access used by formatters and test assertions

pub mod nodes;
pub mod operators;
pub mod traits;

pub use nodes::{
    BinaryExpression, BinaryRange, Expression, FieldGroup, Phrase, Query, RangeOperand,
    RangeTerm, RegexTerm, UnaryExpression, UnaryRange, UnquotedTerm, IMPLICIT_FIELD,
};
pub use operators::{BinaryOperator, RangeOperator, Spelling, UnaryOperator};
pub use traits::{is_implicit_field, AstNode};
