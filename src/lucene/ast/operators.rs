//! Boolean and range operators
//!
//! Boolean operators remember how they were written (`AND` vs `&&`) so that a printed
//! query reads like its source. Range operators are the four inequalities a range bound
//! can carry.

use serde::Serialize;
use std::fmt;

/// Word (`AND`, `OR`, `NOT`) or symbol (`&&`, `||`, `!`) form of a logical operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Spelling {
    #[default]
    Word,
    Symbol,
}

impl Spelling {
    /// Spelling of an operator token's text
    pub fn of(text: &str) -> Self {
        if text.starts_with(|c: char| c.is_ascii_alphabetic()) {
            Spelling::Word
        } else {
            Spelling::Symbol
        }
    }
}

/// Operator of a [`BinaryExpression`](super::BinaryExpression)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type")]
pub enum BinaryOperator {
    LogicalAnd {
        #[serde(rename = "value", serialize_with = "serialize_and")]
        spelling: Spelling,
    },
    LogicalOr {
        #[serde(rename = "value", serialize_with = "serialize_or")]
        spelling: Spelling,
        /// Inferred from two juxtaposed clauses, no operator token consumed
        implicit: bool,
    },
}

impl BinaryOperator {
    pub fn and(spelling: Spelling) -> Self {
        BinaryOperator::LogicalAnd { spelling }
    }

    pub fn or(spelling: Spelling) -> Self {
        BinaryOperator::LogicalOr {
            spelling,
            implicit: false,
        }
    }

    pub fn implicit_or() -> Self {
        BinaryOperator::LogicalOr {
            spelling: Spelling::Word,
            implicit: true,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOperator::LogicalAnd { spelling } => and_text(*spelling),
            BinaryOperator::LogicalOr { spelling, .. } => or_text(*spelling),
        }
    }

    pub fn is_and(&self) -> bool {
        matches!(self, BinaryOperator::LogicalAnd { .. })
    }

    pub fn is_or(&self) -> bool {
        matches!(self, BinaryOperator::LogicalOr { .. })
    }

    pub fn is_implicit(&self) -> bool {
        matches!(self, BinaryOperator::LogicalOr { implicit: true, .. })
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operator of a [`UnaryExpression`](super::UnaryExpression)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type")]
pub enum UnaryOperator {
    LogicalNot {
        #[serde(rename = "value", serialize_with = "serialize_not")]
        spelling: Spelling,
    },
}

impl UnaryOperator {
    pub fn not(spelling: Spelling) -> Self {
        UnaryOperator::LogicalNot { spelling }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UnaryOperator::LogicalNot {
                spelling: Spelling::Word,
            } => "NOT",
            UnaryOperator::LogicalNot {
                spelling: Spelling::Symbol,
            } => "!",
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inequality carried by one bound of a range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeOperator {
    Ge,
    Gt,
    Le,
    Lt,
}

impl RangeOperator {
    /// Map the text of a `RelationalOperator` token
    pub fn from_relational(symbol: &str) -> Option<Self> {
        match symbol {
            ">" => Some(RangeOperator::Gt),
            ">=" => Some(RangeOperator::Ge),
            "<" => Some(RangeOperator::Lt),
            "<=" => Some(RangeOperator::Le),
            _ => None,
        }
    }

    /// Lower bound operator for an opening bracket: `[` is inclusive
    pub fn lower_bound(open: &str) -> Self {
        if open == "[" {
            RangeOperator::Ge
        } else {
            RangeOperator::Gt
        }
    }

    /// Upper bound operator for a closing bracket: `]` is inclusive
    pub fn upper_bound(close: &str) -> Self {
        if close == "]" {
            RangeOperator::Le
        } else {
            RangeOperator::Lt
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RangeOperator::Ge => "ge",
            RangeOperator::Gt => "gt",
            RangeOperator::Le => "le",
            RangeOperator::Lt => "lt",
        }
    }

    /// Relational symbol for a one-sided range
    pub fn symbol(&self) -> &'static str {
        match self {
            RangeOperator::Ge => ">=",
            RangeOperator::Gt => ">",
            RangeOperator::Le => "<=",
            RangeOperator::Lt => "<",
        }
    }

    pub fn is_inclusive(&self) -> bool {
        matches!(self, RangeOperator::Ge | RangeOperator::Le)
    }
}

impl fmt::Display for RangeOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn and_text(spelling: Spelling) -> &'static str {
    match spelling {
        Spelling::Word => "AND",
        Spelling::Symbol => "&&",
    }
}

fn or_text(spelling: Spelling) -> &'static str {
    match spelling {
        Spelling::Word => "OR",
        Spelling::Symbol => "||",
    }
}

fn serialize_and<S: serde::Serializer>(spelling: &Spelling, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(and_text(*spelling))
}

fn serialize_or<S: serde::Serializer>(spelling: &Spelling, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(or_text(*spelling))
}

fn serialize_not<S: serde::Serializer>(spelling: &Spelling, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(UnaryOperator::not(*spelling).as_str())
}
