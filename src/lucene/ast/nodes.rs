//! AST node definitions
//!
//! Every node is created once by the parser and never mutated afterwards. Nodes
//! serialize with a `"type"` discriminant, e.g.
//! `{"type":"UnquotedTerm","field":"*","value":"foo"}`.

use super::operators::{BinaryOperator, RangeOperator, Spelling, UnaryOperator};
use serde::Serialize;

/// Field carried by leaves that were not scoped to a field ("any field")
pub const IMPLICIT_FIELD: &str = "*";

/// Root of every parsed query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct Query {
    pub body: Expression,
}

impl Query {
    pub fn new(body: Expression) -> Self {
        Self { body }
    }

    pub fn body(&self) -> &Expression {
        &self.body
    }
}

/// Any node that can appear below the root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Expression {
    #[serde(rename = "BinaryExpression")]
    Binary(BinaryExpression),
    #[serde(rename = "UnaryExpression")]
    Unary(UnaryExpression),
    #[serde(rename = "UnquotedTerm")]
    Term(UnquotedTerm),
    #[serde(rename = "QuotedTerm")]
    Phrase(Phrase),
    #[serde(rename = "RegexTerm")]
    Regex(RegexTerm),
    FieldGroup(FieldGroup),
    BinaryRange(BinaryRange),
    UnaryRange(UnaryRange),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BinaryExpression {
    pub operator: BinaryOperator,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnaryExpression {
    pub operator: UnaryOperator,
    pub operand: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnquotedTerm {
    pub field: String,
    pub value: String,
}

/// Quoted term; the value has its quote characters stripped
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Phrase {
    pub field: String,
    pub value: String,
}

/// Regex term; the value keeps its delimiting slashes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegexTerm {
    pub field: String,
    pub value: String,
}

/// A field applied to a whole parenthesized sub-expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldGroup {
    pub field: String,
    pub body: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BinaryRange {
    pub field: String,
    pub left: RangeTerm,
    pub right: RangeTerm,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnaryRange {
    pub field: String,
    pub operand: RangeTerm,
}

/// One bound of a range. The field belongs to the enclosing range, never the operand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct RangeTerm {
    pub operand: RangeOperand,
    pub operator: RangeOperator,
}

/// Field-less term atom used as a range bound
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum RangeOperand {
    #[serde(rename = "UnquotedTerm")]
    Term { value: String },
    #[serde(rename = "QuotedTerm")]
    Phrase { value: String },
}

impl RangeOperand {
    pub fn value(&self) -> &str {
        match self {
            RangeOperand::Term { value } | RangeOperand::Phrase { value } => value,
        }
    }

    pub fn is_quoted(&self) -> bool {
        matches!(self, RangeOperand::Phrase { .. })
    }
}

impl RangeTerm {
    pub fn new(operand: RangeOperand, operator: RangeOperator) -> Self {
        Self { operand, operator }
    }
}

impl Expression {
    pub fn term(field: impl Into<String>, value: impl Into<String>) -> Self {
        Expression::Term(UnquotedTerm {
            field: field.into(),
            value: value.into(),
        })
    }

    pub fn phrase(field: impl Into<String>, value: impl Into<String>) -> Self {
        Expression::Phrase(Phrase {
            field: field.into(),
            value: value.into(),
        })
    }

    pub fn regex(field: impl Into<String>, value: impl Into<String>) -> Self {
        Expression::Regex(RegexTerm {
            field: field.into(),
            value: value.into(),
        })
    }

    pub fn field_group(field: impl Into<String>, body: Expression) -> Self {
        Expression::FieldGroup(FieldGroup {
            field: field.into(),
            body: Box::new(body),
        })
    }

    pub fn binary(left: Expression, operator: BinaryOperator, right: Expression) -> Self {
        Expression::Binary(BinaryExpression {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn and(left: Expression, right: Expression) -> Self {
        Self::binary(left, BinaryOperator::and(Spelling::Word), right)
    }

    pub fn or(left: Expression, right: Expression) -> Self {
        Self::binary(left, BinaryOperator::or(Spelling::Word), right)
    }

    pub fn unary(operator: UnaryOperator, operand: Expression) -> Self {
        Expression::Unary(UnaryExpression {
            operator,
            operand: Box::new(operand),
        })
    }

    pub fn unary_not(operand: Expression) -> Self {
        Self::unary(UnaryOperator::not(Spelling::Word), operand)
    }

    pub fn binary_range(field: impl Into<String>, left: RangeTerm, right: RangeTerm) -> Self {
        Expression::BinaryRange(BinaryRange {
            field: field.into(),
            left,
            right,
        })
    }

    pub fn unary_range(field: impl Into<String>, operand: RangeTerm) -> Self {
        Expression::UnaryRange(UnaryRange {
            field: field.into(),
            operand,
        })
    }

    /// The field this node is scoped to; `None` for boolean nodes
    pub fn field(&self) -> Option<&str> {
        match self {
            Expression::Term(UnquotedTerm { field, .. })
            | Expression::Phrase(Phrase { field, .. })
            | Expression::Regex(RegexTerm { field, .. })
            | Expression::FieldGroup(FieldGroup { field, .. })
            | Expression::BinaryRange(BinaryRange { field, .. })
            | Expression::UnaryRange(UnaryRange { field, .. }) => Some(field),
            Expression::Binary(_) | Expression::Unary(_) => None,
        }
    }

    /// Value of a leaf term; `None` for every other node
    pub fn value(&self) -> Option<&str> {
        match self {
            Expression::Term(UnquotedTerm { value, .. })
            | Expression::Phrase(Phrase { value, .. })
            | Expression::Regex(RegexTerm { value, .. }) => Some(value),
            _ => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            Expression::Term(_) | Expression::Phrase(_) | Expression::Regex(_)
        )
    }
}
