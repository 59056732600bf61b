//! Recursive-descent query parser
//!
//! LL(1): the parser holds exactly one lookahead token and advances only through
//! [`consume`](Parser::consume), which fails if the lookahead is not of the expected kind.
//!
//! Grammar, lowest precedence first:
//!
//! ```text
//! query       := expression EOF
//! expression  := basic
//! basic       := group | or_clause
//! group       := "(" basic ")"
//! or_clause   := and_clause ( ("OR" | "||")? and_clause )*      left-leaning
//! and_clause  := not_clause ( ("AND" | "&&") and_clause )?      right-leaning
//! not_clause  := ("NOT" | "!") basic | group | phrase | expr
//! expr        := IDENT ( ":" field_value )?
//! field_value := range | ("<" | "<=" | ">" | ">=") bound | REGEX | PHRASE | IDENT | group
//! range       := ("[" | "{") bound "TO" bound ("]" | "}")
//! bound       := IDENT | PHRASE                                  never followed by ":"
//! ```
//!
//! The asymmetry between OR (a loop folding to the left) and AND (recursion to the
//! right) is intentional: `a OR b OR c` is `(a OR b) OR c` while `a AND b AND c` is
//! `a AND (b AND c)`. NOT takes a whole basic expression as its operand, so
//! `NOT a OR b` is `NOT (a OR b)`.
//!
//! Groups, NOT operands and AND chains are the only places the parser recurses. Each
//! one counts as a nesting level, and past [`ParserConfig::max_depth`] the parse fails
//! with [`SyntaxError::NestingTooDeep`] rather than exhausting the stack. OR chains are
//! folded in a loop and do not nest.

use crate::lucene::ast::{
    BinaryOperator, Expression, Query, RangeOperand, RangeOperator, RangeTerm, Spelling,
    UnaryOperator,
};
use crate::lucene::config::ParserConfig;
use crate::lucene::error::{Expected, ParseError, ParseResult, SyntaxError};
use crate::lucene::lexer::{Span, Token, TokenKind, TokenSource};

/// Token kinds that may follow `field:`
const FIELD_VALUE_KINDS: &[TokenKind] = &[
    TokenKind::RangeOpen,
    TokenKind::RelationalOperator,
    TokenKind::Regex,
    TokenKind::QuotedString,
    TokenKind::Identifier,
    TokenKind::GroupOpen,
];

/// Token kinds that may stand as a range bound, see [`TokenKind::is_term_atom`]
const RANGE_BOUND_KINDS: &[TokenKind] = &[TokenKind::Identifier, TokenKind::QuotedString];

pub struct Parser<S> {
    source: S,
    lookahead: Option<(Token, Span)>,
    default_field: String,
    depth: usize,
    max_depth: usize,
}

impl<S: TokenSource> Parser<S> {
    /// Create a parser, pulling the first lookahead token from `source`
    pub fn new(mut source: S, config: &ParserConfig) -> ParseResult<Self> {
        let lookahead = source.next_spanned()?;
        Ok(Self {
            source,
            lookahead,
            default_field: config.default_field.clone(),
            depth: 0,
            max_depth: config.max_depth,
        })
    }

    /// Parse the whole token stream into a query. Trailing tokens are an error.
    pub fn parse_query(mut self) -> ParseResult<Query> {
        let body = self.expression()?;

        if self.lookahead.is_some() {
            return Err(self.unexpected_lookahead(Expected::EndOfInput));
        }

        Ok(Query::new(body))
    }

    // ========================================================================
    // Lookahead
    // ========================================================================

    fn peek(&self) -> Option<TokenKind> {
        self.lookahead.as_ref().map(|(token, _)| token.kind)
    }

    fn consume_spanned(&mut self, expected: TokenKind) -> ParseResult<(Token, Span)> {
        let Some((token, span)) = self.lookahead.take() else {
            return Err(self.end_of_input(Expected::Token(expected)));
        };

        if token.kind != expected {
            return Err(unexpected(Expected::Token(expected), &token, &span));
        }

        self.lookahead = self.source.next_spanned()?;
        Ok((token, span))
    }

    fn consume(&mut self, expected: TokenKind) -> ParseResult<Token> {
        self.consume_spanned(expected).map(|(token, _)| token)
    }

    fn end_of_input(&self, expected: Expected) -> ParseError {
        SyntaxError::UnexpectedEndOfInput {
            expected,
            offset: self.source.location(),
        }
        .into()
    }

    fn unexpected_lookahead(&self, expected: Expected) -> ParseError {
        match &self.lookahead {
            Some((token, span)) => unexpected(expected, token, span),
            None => self.end_of_input(expected),
        }
    }

    // ========================================================================
    // Nesting
    // ========================================================================

    /// Enter one nesting level at the lookahead token
    fn descend(&mut self) -> ParseResult<()> {
        if self.depth >= self.max_depth {
            let offset = match &self.lookahead {
                Some((_, span)) => span.start,
                None => self.source.location(),
            };
            return Err(SyntaxError::NestingTooDeep {
                limit: self.max_depth,
                offset,
            }
            .into());
        }

        self.depth += 1;
        Ok(())
    }

    fn ascend(&mut self) {
        self.depth -= 1;
    }

    // ========================================================================
    // Boolean structure
    // ========================================================================

    fn expression(&mut self) -> ParseResult<Expression> {
        self.basic_expression()
    }

    fn basic_expression(&mut self) -> ParseResult<Expression> {
        if self.peek() == Some(TokenKind::GroupOpen) {
            return self.paren_expression();
        }

        self.or_clause()
    }

    fn paren_expression(&mut self) -> ParseResult<Expression> {
        self.descend()?;
        self.consume(TokenKind::GroupOpen)?;
        let inner = self.basic_expression()?;
        self.consume(TokenKind::GroupClose)?;
        self.ascend();

        Ok(inner)
    }

    fn or_clause(&mut self) -> ParseResult<Expression> {
        let mut left = self.and_clause()?;

        while let Some(kind) = self.peek() {
            if kind == TokenKind::GroupClose {
                break;
            }

            let operator = if kind == TokenKind::LogicalOr {
                let token = self.consume(TokenKind::LogicalOr)?;
                BinaryOperator::or(Spelling::of(&token.value))
            } else {
                BinaryOperator::implicit_or()
            };

            let right = self.and_clause()?;
            left = Expression::binary(left, operator, right);
        }

        Ok(left)
    }

    fn and_clause(&mut self) -> ParseResult<Expression> {
        let left = self.not_clause()?;

        if self.peek() != Some(TokenKind::LogicalAnd) {
            return Ok(left);
        }

        self.descend()?;
        let token = self.consume(TokenKind::LogicalAnd)?;
        let right = self.and_clause()?;
        self.ascend();

        Ok(Expression::binary(
            left,
            BinaryOperator::and(Spelling::of(&token.value)),
            right,
        ))
    }

    fn not_clause(&mut self) -> ParseResult<Expression> {
        match self.peek() {
            Some(TokenKind::LogicalNot) => {
                self.descend()?;
                let token = self.consume(TokenKind::LogicalNot)?;
                let operand = self.basic_expression()?;
                self.ascend();
                Ok(Expression::unary(
                    UnaryOperator::not(Spelling::of(&token.value)),
                    operand,
                ))
            }
            Some(TokenKind::GroupOpen) => self.paren_expression(),
            Some(TokenKind::QuotedString) => {
                let field = self.default_field.clone();
                self.quoted_term(field)
            }
            _ => self.expr(),
        }
    }

    // ========================================================================
    // Terms
    // ========================================================================

    fn expr(&mut self) -> ParseResult<Expression> {
        let token = self.consume(TokenKind::Identifier)?;

        if self.peek() != Some(TokenKind::FieldSeparator) {
            return Ok(Expression::term(self.default_field.clone(), token.value));
        }

        self.consume(TokenKind::FieldSeparator)?;
        let field = token.value;

        match self.peek() {
            None => Err(SyntaxError::MissingFieldValue {
                field,
                offset: self.source.location(),
            }
            .into()),
            Some(TokenKind::RangeOpen) => self.binary_range_term(field),
            Some(TokenKind::RelationalOperator) => self.unary_range_term(field),
            Some(TokenKind::Regex) => self.regex_term(field),
            Some(TokenKind::QuotedString) => self.quoted_term(field),
            Some(TokenKind::Identifier) => self.unquoted_term(field),
            Some(TokenKind::GroupOpen) => {
                let body = self.paren_expression()?;
                Ok(Expression::field_group(field, body))
            }
            Some(_) => Err(self.unexpected_lookahead(Expected::OneOf(FIELD_VALUE_KINDS))),
        }
    }

    fn regex_term(&mut self, field: String) -> ParseResult<Expression> {
        let token = self.consume(TokenKind::Regex)?;
        Ok(Expression::regex(field, token.value))
    }

    fn quoted_term(&mut self, field: String) -> ParseResult<Expression> {
        let token = self.consume(TokenKind::QuotedString)?;
        Ok(Expression::phrase(field, strip_quotes(&token.value)))
    }

    fn unquoted_term(&mut self, field: String) -> ParseResult<Expression> {
        let token = self.consume(TokenKind::Identifier)?;
        Ok(Expression::term(field, token.value))
    }

    // ========================================================================
    // Ranges
    // ========================================================================

    fn binary_range_term(&mut self, field: String) -> ParseResult<Expression> {
        let open = self.consume(TokenKind::RangeOpen)?;
        let lower = self.term_in_range()?;
        self.consume(TokenKind::RangeTo)?;
        let upper = self.term_in_range()?;
        let close = self.consume(TokenKind::RangeClose)?;

        Ok(Expression::binary_range(
            field,
            RangeTerm::new(lower, RangeOperator::lower_bound(&open.value)),
            RangeTerm::new(upper, RangeOperator::upper_bound(&close.value)),
        ))
    }

    fn unary_range_term(&mut self, field: String) -> ParseResult<Expression> {
        let (token, span) = self.consume_spanned(TokenKind::RelationalOperator)?;
        let operator = RangeOperator::from_relational(&token.value).ok_or_else(|| {
            unexpected(
                Expected::Token(TokenKind::RelationalOperator),
                &token,
                &span,
            )
        })?;
        let operand = self.term_in_range()?;

        Ok(Expression::unary_range(
            field,
            RangeTerm::new(operand, operator),
        ))
    }

    fn term_in_range(&mut self) -> ParseResult<RangeOperand> {
        let Some(kind) = self.peek().filter(TokenKind::is_term_atom) else {
            return Err(self.unexpected_lookahead(Expected::OneOf(RANGE_BOUND_KINDS)));
        };

        let token = self.consume(kind)?;
        let operand = if kind == TokenKind::QuotedString {
            RangeOperand::Phrase {
                value: strip_quotes(&token.value).to_string(),
            }
        } else {
            RangeOperand::Term { value: token.value }
        };

        if let Some((token, span)) = &self.lookahead {
            if token.is(TokenKind::FieldSeparator) {
                return Err(SyntaxError::FieldInRange { offset: span.start }.into());
            }
        }

        Ok(operand)
    }
}

fn unexpected(expected: Expected, token: &Token, span: &Span) -> ParseError {
    SyntaxError::UnexpectedToken {
        expected,
        found: token.kind,
        value: token.value.clone(),
        offset: span.start,
    }
    .into()
}

/// Drop the delimiting quote characters of a quoted string token
fn strip_quotes(value: &str) -> &str {
    value
        .get(1..value.len().saturating_sub(1))
        .unwrap_or_default()
}
