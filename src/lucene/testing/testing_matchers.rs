//! Text matching utilities for AST assertions

/// Text matching strategies for term values
#[derive(Debug, Clone)]
pub enum TextMatch {
    Exact(String),
    StartsWith(String),
    EndsWith(String),
    Contains(String),
}

impl TextMatch {
    pub fn matches(&self, actual: &str) -> bool {
        match self {
            TextMatch::Exact(expected) => actual == expected,
            TextMatch::StartsWith(prefix) => actual.starts_with(prefix.as_str()),
            TextMatch::EndsWith(suffix) => actual.ends_with(suffix.as_str()),
            TextMatch::Contains(substring) => actual.contains(substring.as_str()),
        }
    }

    fn describe(&self) -> String {
        match self {
            TextMatch::Exact(expected) => format!("be '{}'", expected),
            TextMatch::StartsWith(prefix) => format!("start with '{}'", prefix),
            TextMatch::EndsWith(suffix) => format!("end with '{}'", suffix),
            TextMatch::Contains(substring) => format!("contain '{}'", substring),
        }
    }

    /// Assert that the actual text matches this pattern
    pub fn assert(&self, actual: &str, context: &str) {
        assert!(
            self.matches(actual),
            "{}: Expected value to {}, but got '{}'",
            context,
            self.describe(),
            actual
        );
    }
}
