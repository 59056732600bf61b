//! Fluent assertion API for query ASTs

use super::testing_matchers::TextMatch;
use crate::lucene::ast::{
    AstNode, BinaryExpression, BinaryRange, Expression, FieldGroup, Query, RangeOperand,
    RangeOperator, RangeTerm, UnaryExpression, UnaryRange,
};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a parsed query
pub fn assert_query(query: &Query) -> QueryAssertion<'_> {
    QueryAssertion { query }
}

// ============================================================================
// Query Assertions
// ============================================================================

pub struct QueryAssertion<'a> {
    query: &'a Query,
}

impl<'a> QueryAssertion<'a> {
    /// Assert on the root expression
    pub fn body<F>(self, assertion: F) -> Self
    where
        F: FnOnce(ExpressionAssertion<'a>),
    {
        assertion(ExpressionAssertion {
            expr: &self.query.body,
            context: "body".to_string(),
        });
        self
    }

    /// Assert the canonical printed form of the query
    pub fn prints_as(self, expected: &str) -> Self {
        let actual = self.query.to_string();
        assert_eq!(
            actual, expected,
            "Expected query to print as '{}', but got '{}'",
            expected, actual
        );
        self
    }
}

// ============================================================================
// Expression Assertions
// ============================================================================

pub struct ExpressionAssertion<'a> {
    expr: &'a Expression,
    context: String,
}

impl<'a> ExpressionAssertion<'a> {
    fn mismatch(&self, expected: &str) -> ! {
        panic!(
            "{}: Expected {}, found {} ({})",
            self.context,
            expected,
            self.expr.node_type(),
            self.expr.display_label()
        )
    }

    /// Assert this node is an UnquotedTerm
    pub fn assert_term(self) -> TermAssertion<'a> {
        match self.expr {
            Expression::Term(t) => TermAssertion::new(&t.field, &t.value, self.context),
            _ => self.mismatch("UnquotedTerm"),
        }
    }

    /// Assert this node is a quoted Phrase
    pub fn assert_phrase(self) -> TermAssertion<'a> {
        match self.expr {
            Expression::Phrase(p) => TermAssertion::new(&p.field, &p.value, self.context),
            _ => self.mismatch("QuotedTerm"),
        }
    }

    /// Assert this node is a Regex term
    pub fn assert_regex(self) -> TermAssertion<'a> {
        match self.expr {
            Expression::Regex(r) => TermAssertion::new(&r.field, &r.value, self.context),
            _ => self.mismatch("RegexTerm"),
        }
    }

    /// Assert this node is a BinaryExpression
    pub fn assert_binary(self) -> BinaryAssertion<'a> {
        match self.expr {
            Expression::Binary(node) => BinaryAssertion {
                node,
                context: self.context,
            },
            _ => self.mismatch("BinaryExpression"),
        }
    }

    /// Assert this node is a UnaryExpression (NOT)
    pub fn assert_not(self) -> UnaryAssertion<'a> {
        match self.expr {
            Expression::Unary(node) => UnaryAssertion {
                node,
                context: self.context,
            },
            _ => self.mismatch("UnaryExpression"),
        }
    }

    /// Assert this node is a FieldGroup
    pub fn assert_field_group(self) -> FieldGroupAssertion<'a> {
        match self.expr {
            Expression::FieldGroup(node) => FieldGroupAssertion {
                node,
                context: self.context,
            },
            _ => self.mismatch("FieldGroup"),
        }
    }

    /// Assert this node is a two-sided range
    pub fn assert_binary_range(self) -> BinaryRangeAssertion<'a> {
        match self.expr {
            Expression::BinaryRange(node) => BinaryRangeAssertion {
                node,
                context: self.context,
            },
            _ => self.mismatch("BinaryRange"),
        }
    }

    /// Assert this node is a one-sided range
    pub fn assert_unary_range(self) -> UnaryRangeAssertion<'a> {
        match self.expr {
            Expression::UnaryRange(node) => UnaryRangeAssertion {
                node,
                context: self.context,
            },
            _ => self.mismatch("UnaryRange"),
        }
    }

    /// Check if this node is a leaf term (non-panicking)
    pub fn is_leaf(&self) -> bool {
        self.expr.is_leaf()
    }
}

// ============================================================================
// Leaf Assertions
// ============================================================================

pub struct TermAssertion<'a> {
    field: &'a str,
    value: &'a str,
    context: String,
}

impl<'a> TermAssertion<'a> {
    fn new(field: &'a str, value: &'a str, context: String) -> Self {
        Self {
            field,
            value,
            context,
        }
    }

    pub fn field(self, expected: &str) -> Self {
        assert_eq!(
            self.field, expected,
            "{}: Expected field '{}', but got '{}'",
            self.context, expected, self.field
        );
        self
    }

    pub fn value(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(self.value, &self.context);
        self
    }

    pub fn value_matches(self, matcher: TextMatch) -> Self {
        matcher.assert(self.value, &self.context);
        self
    }
}

// ============================================================================
// Boolean Assertions
// ============================================================================

pub struct BinaryAssertion<'a> {
    node: &'a BinaryExpression,
    context: String,
}

impl<'a> BinaryAssertion<'a> {
    /// Assert the operator as written (`AND`, `&&`, `OR`, `||`)
    pub fn operator(self, expected: &str) -> Self {
        let actual = self.node.operator.as_str();
        assert_eq!(
            actual, expected,
            "{}: Expected operator '{}', but got '{}'",
            self.context, expected, actual
        );
        self
    }

    pub fn implicit(self, expected: bool) -> Self {
        let actual = self.node.operator.is_implicit();
        assert_eq!(
            actual, expected,
            "{}: Expected implicit={}, but got implicit={}",
            self.context, expected, actual
        );
        self
    }

    pub fn left<F>(self, assertion: F) -> Self
    where
        F: FnOnce(ExpressionAssertion<'a>),
    {
        assertion(ExpressionAssertion {
            expr: &self.node.left,
            context: format!("{}.left", self.context),
        });
        self
    }

    pub fn right<F>(self, assertion: F) -> Self
    where
        F: FnOnce(ExpressionAssertion<'a>),
    {
        assertion(ExpressionAssertion {
            expr: &self.node.right,
            context: format!("{}.right", self.context),
        });
        self
    }
}

pub struct UnaryAssertion<'a> {
    node: &'a UnaryExpression,
    context: String,
}

impl<'a> UnaryAssertion<'a> {
    pub fn operator(self, expected: &str) -> Self {
        let actual = self.node.operator.as_str();
        assert_eq!(
            actual, expected,
            "{}: Expected operator '{}', but got '{}'",
            self.context, expected, actual
        );
        self
    }

    pub fn operand<F>(self, assertion: F) -> Self
    where
        F: FnOnce(ExpressionAssertion<'a>),
    {
        assertion(ExpressionAssertion {
            expr: &self.node.operand,
            context: format!("{}.operand", self.context),
        });
        self
    }
}

pub struct FieldGroupAssertion<'a> {
    node: &'a FieldGroup,
    context: String,
}

impl<'a> FieldGroupAssertion<'a> {
    pub fn field(self, expected: &str) -> Self {
        assert_eq!(
            self.node.field, expected,
            "{}: Expected field '{}', but got '{}'",
            self.context, expected, self.node.field
        );
        self
    }

    pub fn body<F>(self, assertion: F) -> Self
    where
        F: FnOnce(ExpressionAssertion<'a>),
    {
        assertion(ExpressionAssertion {
            expr: &self.node.body,
            context: format!("{}.body", self.context),
        });
        self
    }
}

// ============================================================================
// Range Assertions
// ============================================================================

pub struct BinaryRangeAssertion<'a> {
    node: &'a BinaryRange,
    context: String,
}

impl<'a> BinaryRangeAssertion<'a> {
    pub fn field(self, expected: &str) -> Self {
        assert_eq!(
            self.node.field, expected,
            "{}: Expected field '{}', but got '{}'",
            self.context, expected, self.node.field
        );
        self
    }

    pub fn left<F>(self, assertion: F) -> Self
    where
        F: FnOnce(RangeTermAssertion<'a>),
    {
        assertion(RangeTermAssertion {
            term: &self.node.left,
            context: format!("{}.left", self.context),
        });
        self
    }

    pub fn right<F>(self, assertion: F) -> Self
    where
        F: FnOnce(RangeTermAssertion<'a>),
    {
        assertion(RangeTermAssertion {
            term: &self.node.right,
            context: format!("{}.right", self.context),
        });
        self
    }
}

pub struct UnaryRangeAssertion<'a> {
    node: &'a UnaryRange,
    context: String,
}

impl<'a> UnaryRangeAssertion<'a> {
    pub fn field(self, expected: &str) -> Self {
        assert_eq!(
            self.node.field, expected,
            "{}: Expected field '{}', but got '{}'",
            self.context, expected, self.node.field
        );
        self
    }

    pub fn operand<F>(self, assertion: F) -> Self
    where
        F: FnOnce(RangeTermAssertion<'a>),
    {
        assertion(RangeTermAssertion {
            term: &self.node.operand,
            context: format!("{}.operand", self.context),
        });
        self
    }
}

pub struct RangeTermAssertion<'a> {
    term: &'a RangeTerm,
    context: String,
}

impl<'a> RangeTermAssertion<'a> {
    pub fn operator(self, expected: RangeOperator) -> Self {
        assert_eq!(
            self.term.operator, expected,
            "{}: Expected range operator '{}', but got '{}'",
            self.context, expected, self.term.operator
        );
        self
    }

    /// Assert an unquoted bound with the given value
    pub fn term(self, expected: &str) -> Self {
        match &self.term.operand {
            RangeOperand::Term { value } => {
                TextMatch::Exact(expected.to_string()).assert(value, &self.context)
            }
            RangeOperand::Phrase { value } => panic!(
                "{}: Expected UnquotedTerm bound, found QuotedTerm \"{}\"",
                self.context, value
            ),
        }
        self
    }

    /// Assert a quoted bound with the given (unquoted) value
    pub fn phrase(self, expected: &str) -> Self {
        match &self.term.operand {
            RangeOperand::Phrase { value } => {
                TextMatch::Exact(expected.to_string()).assert(value, &self.context)
            }
            RangeOperand::Term { value } => panic!(
                "{}: Expected QuotedTerm bound, found UnquotedTerm {}",
                self.context, value
            ),
        }
        self
    }
}
