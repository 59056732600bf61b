//! AST traits - Common interfaces for uniform node access

use super::nodes::{Expression, Query, RangeOperand, RangeTerm, IMPLICIT_FIELD};

/// Common interface for all AST nodes
pub trait AstNode {
    /// The node's discriminant, as it appears in the serialized `"type"`
    fn node_type(&self) -> &'static str;
    fn display_label(&self) -> String;
}

impl AstNode for Query {
    fn node_type(&self) -> &'static str {
        "Query"
    }

    fn display_label(&self) -> String {
        self.body.node_type().to_string()
    }
}

impl AstNode for Expression {
    fn node_type(&self) -> &'static str {
        match self {
            Expression::Binary(_) => "BinaryExpression",
            Expression::Unary(_) => "UnaryExpression",
            Expression::Term(_) => "UnquotedTerm",
            Expression::Phrase(_) => "QuotedTerm",
            Expression::Regex(_) => "RegexTerm",
            Expression::FieldGroup(_) => "FieldGroup",
            Expression::BinaryRange(_) => "BinaryRange",
            Expression::UnaryRange(_) => "UnaryRange",
        }
    }

    fn display_label(&self) -> String {
        match self {
            Expression::Binary(b) if b.operator.is_implicit() => "OR (implicit)".to_string(),
            Expression::Binary(b) => b.operator.as_str().to_string(),
            Expression::Unary(u) => u.operator.as_str().to_string(),
            Expression::Term(t) => format!("{}:{}", t.field, t.value),
            Expression::Phrase(p) => format!("{}:\"{}\"", p.field, p.value),
            Expression::Regex(r) => format!("{}:{}", r.field, r.value),
            Expression::FieldGroup(g) => g.field.clone(),
            Expression::BinaryRange(r) => r.field.clone(),
            Expression::UnaryRange(r) => r.field.clone(),
        }
    }
}

impl AstNode for RangeTerm {
    fn node_type(&self) -> &'static str {
        "RangeTerm"
    }

    fn display_label(&self) -> String {
        match &self.operand {
            RangeOperand::Term { value } => format!("{} {}", self.operator, value),
            RangeOperand::Phrase { value } => format!("{} \"{}\"", self.operator, value),
        }
    }
}

/// Whether a field is the implicit "any field" sentinel
pub fn is_implicit_field(field: &str) -> bool {
    field == IMPLICIT_FIELD
}
