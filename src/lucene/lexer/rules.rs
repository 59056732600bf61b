//! Lexical Rule Definitions
//!
//! This module defines the ordered rule table used by the tokenizer. Every rule is an
//! anchored regex tried against the unscanned suffix of the input; rules are tried in
//! declaration order and the first match wins.
//!
//! # Rule Order
//!
//! 1. whitespace - matched and discarded
//! 2. quoted string - double or single quotes, no embedded matching quote
//! 3. regex - slash delimited, no embedded slash
//! 4. logical operators - `AND`/`&&`, `OR`/`||`, `NOT`/`!`
//! 5. prefix operator - `+`, `-`, `!`
//! 6. field separator, tilde, group and range delimiters
//! 7. `TO`
//! 8. relational operators - `>=`, `>`, `<=`, `<`
//! 9. identifier - catch-all for runs of unreserved characters
//!
//! More specific rules must precede the identifier rule, else keywords and punctuation
//! would be swallowed as identifiers. Word-form keywords only match on a word boundary:
//! `ORDER` is an identifier, not `OR` followed by `DER`. This deliberately departs from
//! plain anchored keyword patterns, which would split `ORDER` into `OR` and `DER`.

use super::tokens::TokenKind;
use once_cell::sync::Lazy;
use regex::Regex;

/// Characters that can never appear in an identifier.
pub const RESERVED_CHARS: &[char] = &[
    '.', '?', '+', '*', '|', '{', '}', '[', ']', '(', ')', '"', '\\', '#', '@', '&', '<', '>',
    '~', ':',
];

/// Rule table as (kind, pattern, word-form keyword) triples, in match order.
const RULE_PATTERNS: &[(TokenKind, &str, bool)] = &[
    (TokenKind::Whitespace, r"^\s+", false),
    (TokenKind::QuotedString, r#"^(?:"[^"]*"|'[^']*')"#, false),
    (TokenKind::Regex, r"^/[^/]*/", false),
    (TokenKind::LogicalAnd, r"^(?:AND|&&)", true),
    (TokenKind::LogicalOr, r"^(?:OR|\|\|)", true),
    (TokenKind::LogicalNot, r"^(?:NOT|!)", true),
    (TokenKind::PrefixOperator, r"^[+\-!]", false),
    (TokenKind::FieldSeparator, r"^:", false),
    (TokenKind::Tilde, r"^~", false),
    (TokenKind::GroupOpen, r"^\(", false),
    (TokenKind::GroupClose, r"^\)", false),
    (TokenKind::RangeOpen, r"^[\[{]", false),
    (TokenKind::RangeClose, r"^[\]}]", false),
    (TokenKind::RangeTo, r"^TO", true),
    (TokenKind::RelationalOperator, r"^[<>]=?", false),
    (
        TokenKind::Identifier,
        r#"^[^.?+*|{}\[\]()"\\#@&<>~:\s]+"#,
        false,
    ),
];

pub(super) struct Rule {
    pub kind: TokenKind,
    regex: Regex,
    keyword: bool,
}

static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    RULE_PATTERNS
        .iter()
        .map(|(kind, pattern, keyword)| Rule {
            kind: *kind,
            regex: Regex::new(pattern).unwrap(),
            keyword: *keyword,
        })
        .collect()
});

impl Rule {
    /// Length in bytes of the match at the start of `rest`, if this rule applies.
    fn match_len(&self, rest: &str) -> Option<usize> {
        let found = self.regex.find(rest)?;
        let text = found.as_str();
        if self.keyword
            && text.ends_with(|c: char| c.is_ascii_alphabetic())
            && rest[found.end()..].starts_with(is_identifier_char)
        {
            return None;
        }
        Some(found.end())
    }
}

/// Whether `c` may appear inside an identifier.
pub fn is_identifier_char(c: char) -> bool {
    !c.is_whitespace() && !RESERVED_CHARS.contains(&c)
}

/// Find the first rule matching the start of `rest`, returning its kind and match length.
pub(super) fn match_rule(rest: &str) -> Option<(TokenKind, usize)> {
    RULES
        .iter()
        .find_map(|rule| rule.match_len(rest).map(|len| (rule.kind, len)))
}
