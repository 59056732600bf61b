//! Canonical query-string printer
//!
//! Prints a tree back to query syntax such that re-parsing the output yields the same
//! tree. Parentheses are emitted only where the grammar needs them:
//!
//! - the operand of NOT, always (NOT would otherwise capture what follows it)
//! - a binary left child of AND (AND chains lean right)
//! - an OR right child of AND or OR (OR chains lean left, AND binds tighter)
//!
//! Operators keep their source spelling and implicit ORs print as a single space.

use crate::lucene::ast::{
    is_implicit_field, Expression, Query, RangeOperand, RangeOperator, RangeTerm, Spelling,
    UnaryOperator,
};
use std::fmt;

/// Render a query in canonical query syntax
pub fn to_query_string(query: &Query) -> String {
    query.to_string()
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.body)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Term(t) => {
                write_field_prefix(f, &t.field)?;
                f.write_str(&t.value)
            }
            Expression::Phrase(p) => {
                write_field_prefix(f, &p.field)?;
                write_quoted(f, &p.value)
            }
            Expression::Regex(r) => {
                write_field_prefix(f, &r.field)?;
                f.write_str(&r.value)
            }
            Expression::FieldGroup(g) => write!(f, "{}:({})", g.field, g.body),
            Expression::BinaryRange(r) => {
                let open = if r.left.operator == RangeOperator::Ge {
                    '['
                } else {
                    '{'
                };
                let close = if r.right.operator == RangeOperator::Le {
                    ']'
                } else {
                    '}'
                };
                write!(f, "{}:{}", r.field, open)?;
                write_bound(f, &r.left)?;
                f.write_str(" TO ")?;
                write_bound(f, &r.right)?;
                write!(f, "{}", close)
            }
            Expression::UnaryRange(r) => {
                write!(f, "{}:{}", r.field, r.operand.operator.symbol())?;
                write_bound(f, &r.operand)
            }
            Expression::Unary(u) => match u.operator {
                UnaryOperator::LogicalNot {
                    spelling: Spelling::Word,
                } => write!(f, "NOT ({})", u.operand),
                UnaryOperator::LogicalNot {
                    spelling: Spelling::Symbol,
                } => write!(f, "!({})", u.operand),
            },
            Expression::Binary(b) => {
                let left_needs_parens =
                    b.operator.is_and() && matches!(*b.left, Expression::Binary(_));
                let right_needs_parens =
                    matches!(&*b.right, Expression::Binary(r) if r.operator.is_or());

                write_child(f, &b.left, left_needs_parens)?;
                if b.operator.is_implicit() {
                    f.write_str(" ")?;
                } else {
                    write!(f, " {} ", b.operator)?;
                }
                write_child(f, &b.right, right_needs_parens)
            }
        }
    }
}

fn write_field_prefix(f: &mut fmt::Formatter<'_>, field: &str) -> fmt::Result {
    if is_implicit_field(field) {
        return Ok(());
    }
    write!(f, "{}:", field)
}

fn write_quoted(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    if value.contains('"') {
        write!(f, "'{}'", value)
    } else {
        write!(f, "\"{}\"", value)
    }
}

fn write_bound(f: &mut fmt::Formatter<'_>, bound: &RangeTerm) -> fmt::Result {
    match &bound.operand {
        RangeOperand::Term { value } => f.write_str(value),
        RangeOperand::Phrase { value } => write_quoted(f, value),
    }
}

fn write_child(f: &mut fmt::Formatter<'_>, child: &Expression, parens: bool) -> fmt::Result {
    if parens {
        write!(f, "({})", child)
    } else {
        write!(f, "{}", child)
    }
}
