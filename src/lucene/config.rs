//! Parser configuration
//!
//! Two knobs: the field given to unscoped leaves, and how deeply groups, NOTs and AND
//! chains may nest before the parser gives up. It deserializes with serde so
//! applications can embed it in their own configuration files; missing keys fall back
//! to the defaults.

use crate::lucene::ast::IMPLICIT_FIELD;
use serde::Deserialize;

/// Default nesting limit, well inside a 2 MiB thread stack
pub const DEFAULT_MAX_DEPTH: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Field carried by terms and phrases that have no `field:` prefix
    pub default_field: String,
    /// Deepest nesting of groups, NOT operands and AND chains accepted
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            default_field: IMPLICIT_FIELD.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParserConfig {
    pub fn with_default_field(mut self, field: impl Into<String>) -> Self {
        self.default_field = field.into();
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
