//! Parser tests
//!
//! Every test asserts the full tree shape with the fluent assertion API.

use super::{parse, parse_tokens, parse_with_config};
use crate::lucene::ast::{RangeOperator, IMPLICIT_FIELD};
use crate::lucene::config::{ParserConfig, DEFAULT_MAX_DEPTH};
use crate::lucene::error::{Expected, ParseError, SyntaxError};
use crate::lucene::lexer::{tokenize_with_spans, TokenKind};
use crate::lucene::testing::{assert_query, TextMatch};

fn syntax_error(input: &str) -> SyntaxError {
    match parse(input) {
        Err(ParseError::Syntax(err)) => err,
        other => panic!("Expected a syntax error for {:?}, got {:?}", input, other),
    }
}

// ============================================================================
// Leaves
// ============================================================================

#[test]
fn test_bare_tokens_are_unquoted_terms() {
    for input in ["42", "foo42", "f", "foo-bar", "ORDER"] {
        let query = parse(input).unwrap();
        assert_query(&query).body(|body| {
            body.assert_term().field(IMPLICIT_FIELD).value(input);
        });
    }
}

#[test]
fn test_fielded_term() {
    let query = parse("foo:bar").unwrap();
    assert_query(&query)
        .body(|body| {
            body.assert_term().field("foo").value("bar");
        })
        .prints_as("foo:bar");
}

#[test]
fn test_fielded_phrase() {
    let query = parse("title:\"hello world\"").unwrap();
    assert_query(&query).body(|body| {
        body.assert_phrase().field("title").value("hello world");
    });
}

#[test]
fn test_single_quoted_phrase() {
    let query = parse("title:'say \"hi\"'").unwrap();
    assert_query(&query)
        .body(|body| {
            body.assert_phrase().field("title").value("say \"hi\"");
        })
        .prints_as("title:'say \"hi\"'");
}

#[test]
fn test_fielded_regex_keeps_delimiters() {
    let query = parse("foo:/bar/").unwrap();
    assert_query(&query).body(|body| {
        body.assert_regex().field("foo").value("/bar/");
    });
}

#[test]
fn test_bare_phrase_uses_default_field() {
    let query = parse("\"foo bar\"").unwrap();
    assert_query(&query).body(|body| {
        body.assert_phrase()
            .field(IMPLICIT_FIELD)
            .value("foo bar");
    });
}

// ============================================================================
// Field groups and ranges
// ============================================================================

#[test]
fn test_field_group_single_term() {
    let query = parse("foo:(bar)").unwrap();
    assert_query(&query).body(|body| {
        body.assert_field_group().field("foo").body(|inner| {
            inner.assert_term().field(IMPLICIT_FIELD).value("bar");
        });
    });
}

#[test]
fn test_field_group_with_boolean_body() {
    let query = parse("foo:(bar AND baz)").unwrap();
    assert_query(&query)
        .body(|body| {
            body.assert_field_group().field("foo").body(|inner| {
                inner
                    .assert_binary()
                    .operator("AND")
                    .implicit(false)
                    .left(|l| {
                        l.assert_term().field(IMPLICIT_FIELD).value("bar");
                    })
                    .right(|r| {
                        r.assert_term().field(IMPLICIT_FIELD).value("baz");
                    });
            });
        })
        .prints_as("foo:(bar AND baz)");
}

#[test]
fn test_binary_range_mixed_bounds() {
    let query = parse("foo:[bar TO \"baz\"}").unwrap();
    assert_query(&query)
        .body(|body| {
            body.assert_binary_range()
                .field("foo")
                .left(|l| {
                    l.operator(RangeOperator::Ge).term("bar");
                })
                .right(|r| {
                    r.operator(RangeOperator::Lt).phrase("baz");
                });
        })
        .prints_as("foo:[bar TO \"baz\"}");
}

#[test]
fn test_binary_range_exclusive_lower_inclusive_upper() {
    let query = parse("year:{2015 TO 2020]").unwrap();
    assert_query(&query).body(|body| {
        body.assert_binary_range()
            .field("year")
            .left(|l| {
                l.operator(RangeOperator::Gt).term("2015");
            })
            .right(|r| {
                r.operator(RangeOperator::Le).term("2020");
            });
    });
}

#[test]
fn test_unary_ranges() {
    let cases = [
        ("foo:>=bar", RangeOperator::Ge),
        ("foo:>bar", RangeOperator::Gt),
        ("foo:<=bar", RangeOperator::Le),
        ("foo:<bar", RangeOperator::Lt),
    ];

    for (input, operator) in cases {
        let query = parse(input).unwrap();
        assert_query(&query)
            .body(|body| {
                body.assert_unary_range().field("foo").operand(|operand| {
                    operand.operator(operator).term("bar");
                });
            })
            .prints_as(input);
    }
}

#[test]
fn test_unary_range_quoted_bound() {
    let query = parse("date:<\"2020-01-01\"").unwrap();
    assert_query(&query).body(|body| {
        body.assert_unary_range().field("date").operand(|operand| {
            operand.operator(RangeOperator::Lt).phrase("2020-01-01");
        });
    });
}

// ============================================================================
// Boolean structure
// ============================================================================

#[test]
fn test_and_is_right_leaning() {
    let query = parse("foo AND bar AND baz").unwrap();
    assert_query(&query).body(|body| {
        body.assert_binary()
            .operator("AND")
            .left(|l| {
                l.assert_term().value("foo");
            })
            .right(|r| {
                r.assert_binary()
                    .operator("AND")
                    .left(|l| {
                        l.assert_term().value("bar");
                    })
                    .right(|r| {
                        r.assert_term().value("baz");
                    });
            });
    });
}

#[test]
fn test_or_is_left_leaning() {
    let query = parse("foo OR bar OR baz").unwrap();
    assert_query(&query).body(|body| {
        body.assert_binary()
            .operator("OR")
            .left(|l| {
                l.assert_binary()
                    .operator("OR")
                    .left(|l| {
                        l.assert_term().value("foo");
                    })
                    .right(|r| {
                        r.assert_term().value("bar");
                    });
            })
            .right(|r| {
                r.assert_term().value("baz");
            });
    });
}

#[test]
fn test_and_binds_tighter_than_or() {
    let query = parse("foo AND bar OR baz").unwrap();
    assert_query(&query).body(|body| {
        body.assert_binary()
            .operator("OR")
            .left(|l| {
                l.assert_binary()
                    .operator("AND")
                    .left(|l| {
                        l.assert_term().value("foo");
                    })
                    .right(|r| {
                        r.assert_term().value("bar");
                    });
            })
            .right(|r| {
                r.assert_term().value("baz");
            });
    });

    let query = parse("foo OR bar AND baz").unwrap();
    assert_query(&query).body(|body| {
        body.assert_binary()
            .operator("OR")
            .left(|l| {
                l.assert_term().value("foo");
            })
            .right(|r| {
                r.assert_binary().operator("AND");
            });
    });
}

#[test]
fn test_symbol_operators_keep_spelling() {
    let query = parse("foo && bar || baz").unwrap();
    assert_query(&query)
        .body(|body| {
            body.assert_binary()
                .operator("||")
                .implicit(false)
                .left(|l| {
                    l.assert_binary().operator("&&");
                });
        })
        .prints_as("foo && bar || baz");
}

#[test]
fn test_implicit_or() {
    let query = parse("foo bar baz").unwrap();
    assert_query(&query)
        .body(|body| {
            body.assert_binary()
                .operator("OR")
                .implicit(true)
                .left(|l| {
                    l.assert_binary()
                        .implicit(true)
                        .left(|l| {
                            l.assert_term().value("foo");
                        })
                        .right(|r| {
                            r.assert_term().value("bar");
                        });
                })
                .right(|r| {
                    r.assert_term().value("baz");
                });
        })
        .prints_as("foo bar baz");
}

#[test]
fn test_implicit_or_with_phrase() {
    let query = parse("'a b' c").unwrap();
    assert_query(&query).body(|body| {
        body.assert_binary()
            .implicit(true)
            .left(|l| {
                l.assert_phrase().value("a b");
            })
            .right(|r| {
                r.assert_term().value("c");
            });
    });
}

#[test]
fn test_keyword_needs_word_boundary() {
    let query = parse("ORDER AND ANDROID").unwrap();
    assert_query(&query).body(|body| {
        body.assert_binary()
            .operator("AND")
            .left(|l| {
                l.assert_term().value("ORDER");
            })
            .right(|r| {
                r.assert_term().value("ANDROID");
            });
    });
}

// ============================================================================
// NOT
// ============================================================================

#[test]
fn test_not_single_term() {
    let query = parse("NOT foo").unwrap();
    assert_query(&query)
        .body(|body| {
            body.assert_not().operator("NOT").operand(|operand| {
                operand.assert_term().field(IMPLICIT_FIELD).value("foo");
            });
        })
        .prints_as("NOT (foo)");
}

#[test]
fn test_bang_is_not() {
    let query = parse("!foo").unwrap();
    assert_query(&query).body(|body| {
        body.assert_not().operator("!").operand(|operand| {
            operand.assert_term().value("foo");
        });
    });
}

#[test]
fn test_not_captures_rest_of_clause() {
    let query = parse("NOT foo OR bar").unwrap();
    assert_query(&query).body(|body| {
        body.assert_not().operand(|operand| {
            operand
                .assert_binary()
                .operator("OR")
                .left(|l| {
                    l.assert_term().value("foo");
                })
                .right(|r| {
                    r.assert_term().value("bar");
                });
        });
    });
}

#[test]
fn test_not_of_group_stops_at_group() {
    let query = parse("foo AND NOT (bar OR baz) OR buz AND biz").unwrap();
    assert_query(&query)
        .body(|body| {
            body.assert_binary()
                .operator("OR")
                .left(|l| {
                    l.assert_binary()
                        .operator("AND")
                        .left(|l| {
                            l.assert_term().value("foo");
                        })
                        .right(|r| {
                            r.assert_not().operand(|operand| {
                                operand
                                    .assert_binary()
                                    .operator("OR")
                                    .left(|l| {
                                        l.assert_term().value("bar");
                                    })
                                    .right(|r| {
                                        r.assert_term().value("baz");
                                    });
                            });
                        });
                })
                .right(|r| {
                    r.assert_binary()
                        .operator("AND")
                        .left(|l| {
                            l.assert_term().value("buz");
                        })
                        .right(|r| {
                            r.assert_term().value("biz");
                        });
                });
        })
        .prints_as("foo AND NOT (bar OR baz) OR buz AND biz");
}

// ============================================================================
// Groups
// ============================================================================

#[test]
fn test_nested_groups() {
    let query = parse("foo AND (bar OR (baz AND biz)) AND buz byz").unwrap();
    assert_query(&query)
        .body(|body| {
            body.assert_binary()
                .implicit(true)
                .left(|l| {
                    l.assert_binary()
                        .operator("AND")
                        .left(|l| {
                            l.assert_term().value("foo");
                        })
                        .right(|r| {
                            r.assert_binary()
                                .operator("AND")
                                .left(|l| {
                                    l.assert_binary()
                                        .operator("OR")
                                        .left(|l| {
                                            l.assert_term().value("bar");
                                        })
                                        .right(|r| {
                                            r.assert_binary().operator("AND");
                                        });
                                })
                                .right(|r| {
                                    r.assert_term().value("buz");
                                });
                        });
                })
                .right(|r| {
                    r.assert_term().value("byz");
                });
        })
        .prints_as("foo AND (bar OR baz AND biz) AND buz byz");
}

#[test]
fn test_redundant_parens_vanish() {
    let query = parse("foo AND (bar)").unwrap();
    assert_query(&query)
        .body(|body| {
            body.assert_binary()
                .operator("AND")
                .right(|r| {
                    r.assert_term().value("bar");
                });
        })
        .prints_as("foo AND bar");
}

#[test]
fn test_leading_group_is_whole_expression() {
    let query = parse("(foo OR bar)").unwrap();
    assert_query(&query).body(|body| {
        body.assert_binary().operator("OR");
    });

    let err = syntax_error("(foo) bar");
    assert_eq!(
        err,
        SyntaxError::UnexpectedToken {
            expected: Expected::EndOfInput,
            found: TokenKind::Identifier,
            value: "bar".to_string(),
            offset: 6,
        }
    );
}

// ============================================================================
// Configuration and token input
// ============================================================================

#[test]
fn test_configured_default_field() {
    let config = ParserConfig::default().with_default_field("body");
    let query = parse_with_config("foo \"bar baz\" title:qux", &config).unwrap();
    assert_query(&query).body(|body| {
        body.assert_binary()
            .left(|l| {
                l.assert_binary()
                    .left(|l| {
                        l.assert_term().field("body").value("foo");
                    })
                    .right(|r| {
                        r.assert_phrase().field("body").value("bar baz");
                    });
            })
            .right(|r| {
                r.assert_term().field("title").value("qux");
            });
    });
}

#[test]
fn test_parse_pre_tokenized_input() {
    let tokens = tokenize_with_spans("foo:bar AND baz").unwrap();
    let query = parse_tokens(tokens).unwrap();
    assert_query(&query).body(|body| {
        body.assert_binary()
            .operator("AND")
            .left(|l| {
                l.assert_term().field("foo").value("bar");
            })
            .right(|r| {
                r.assert_term().value_matches(TextMatch::StartsWith("ba".to_string()));
            });
    });
}

#[test]
fn test_parse_tokens_reports_end_offset() {
    let tokens = tokenize_with_spans("foo:").unwrap();
    let err = parse_tokens(tokens).unwrap_err();
    assert_eq!(
        err,
        ParseError::Syntax(SyntaxError::MissingFieldValue {
            field: "foo".to_string(),
            offset: 4,
        })
    );
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_missing_field_value() {
    assert_eq!(
        syntax_error("foo:"),
        SyntaxError::MissingFieldValue {
            field: "foo".to_string(),
            offset: 4,
        }
    );
}

#[test]
fn test_unterminated_quote_is_lexical() {
    let err = parse("foo:\"bar").unwrap_err();
    assert!(err.is_lexical());
    assert_eq!(err.offset(), 4);
}

#[test]
fn test_stray_reserved_character() {
    let err = parse("foo AND *").unwrap_err();
    assert!(err.is_lexical());
    assert_eq!(err.offset(), 8);
}

#[test]
fn test_empty_input() {
    assert_eq!(
        syntax_error(""),
        SyntaxError::UnexpectedEndOfInput {
            expected: Expected::Token(TokenKind::Identifier),
            offset: 0,
        }
    );
}

#[test]
fn test_dangling_operator() {
    assert_eq!(
        syntax_error("foo AND"),
        SyntaxError::UnexpectedEndOfInput {
            expected: Expected::Token(TokenKind::Identifier),
            offset: 7,
        }
    );
}

#[test]
fn test_unclosed_group() {
    assert_eq!(
        syntax_error("(foo"),
        SyntaxError::UnexpectedEndOfInput {
            expected: Expected::Token(TokenKind::GroupClose),
            offset: 4,
        }
    );
}

#[test]
fn test_trailing_group_close() {
    let err = syntax_error("foo)");
    assert_eq!(err.offset(), 3);
    assert!(matches!(
        err,
        SyntaxError::UnexpectedToken {
            expected: Expected::EndOfInput,
            found: TokenKind::GroupClose,
            ..
        }
    ));
}

#[test]
fn test_field_in_range() {
    assert_eq!(
        syntax_error("foo:[a:b TO c]"),
        SyntaxError::FieldInRange { offset: 6 }
    );
}

#[test]
fn test_bad_range_bound() {
    let err = syntax_error("foo:[a TO ]");
    assert_eq!(err.offset(), 10);
    assert!(matches!(
        err,
        SyntaxError::UnexpectedToken {
            expected: Expected::OneOf(_),
            found: TokenKind::RangeClose,
            ..
        }
    ));
}

#[test]
fn test_bad_field_value() {
    let err = syntax_error("foo:)");
    assert_eq!(err.offset(), 4);
    match err {
        SyntaxError::UnexpectedToken {
            expected: Expected::OneOf(kinds),
            found,
            ..
        } => {
            assert_eq!(found, TokenKind::GroupClose);
            assert_eq!(kinds.len(), 6);
            assert!(kinds.contains(&TokenKind::RangeOpen));
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_prefix_operator_rejected() {
    assert_eq!(
        syntax_error("-foo"),
        SyntaxError::UnexpectedToken {
            expected: Expected::Token(TokenKind::Identifier),
            found: TokenKind::PrefixOperator,
            value: "-".to_string(),
            offset: 0,
        }
    );
}

#[test]
fn test_tilde_rejected() {
    let err = syntax_error("foo~");
    assert_eq!(err.offset(), 3);
    assert!(matches!(
        err,
        SyntaxError::UnexpectedToken {
            found: TokenKind::Tilde,
            ..
        }
    ));
}

#[test]
fn test_bare_regex_rejected() {
    let err = syntax_error("/foo/");
    assert!(matches!(
        err,
        SyntaxError::UnexpectedToken {
            found: TokenKind::Regex,
            offset: 0,
            ..
        }
    ));
}

// ============================================================================
// Nesting limit
// ============================================================================

fn too_deep(limit: usize, offset: usize) -> SyntaxError {
    SyntaxError::NestingTooDeep { limit, offset }
}

#[test]
fn test_deep_groups_fail_instead_of_overflowing() {
    let input = format!("{}a{}", "(".repeat(10_000), ")".repeat(10_000));
    assert_eq!(
        syntax_error(&input),
        too_deep(DEFAULT_MAX_DEPTH, DEFAULT_MAX_DEPTH)
    );

    assert_eq!(
        syntax_error(&"(".repeat(10_000)),
        too_deep(DEFAULT_MAX_DEPTH, DEFAULT_MAX_DEPTH)
    );
}

#[test]
fn test_deep_not_chain_fails() {
    let input = format!("{}a", "NOT ".repeat(200_000));
    assert_eq!(
        syntax_error(&input),
        too_deep(DEFAULT_MAX_DEPTH, DEFAULT_MAX_DEPTH * 4)
    );
}

#[test]
fn test_long_and_chain_fails() {
    // Each "a AND " is six bytes; the failing AND is the one past the limit
    let input = format!("{}a", "a AND ".repeat(1_000));
    assert_eq!(
        syntax_error(&input),
        too_deep(DEFAULT_MAX_DEPTH, DEFAULT_MAX_DEPTH * 6 + 2)
    );
}

#[test]
fn test_long_or_chain_does_not_nest() {
    let input = format!("{}a", "a OR ".repeat(1_000));
    assert!(parse(&input).is_ok());
}

#[test]
fn test_nesting_at_the_limit_parses() {
    let depth = DEFAULT_MAX_DEPTH;
    let input = format!("{}a{}", "(".repeat(depth), ")".repeat(depth));
    let query = parse(&input).unwrap();
    assert_query(&query).body(|body| {
        body.assert_term().value("a");
    });
}

#[test]
fn test_configured_max_depth() {
    let config = ParserConfig::default().with_max_depth(2);

    assert!(parse_with_config("((a))", &config).is_ok());
    assert!(parse_with_config("a AND (b)", &config).is_ok());

    assert_eq!(
        parse_with_config("(((a)))", &config).unwrap_err(),
        ParseError::Syntax(too_deep(2, 2))
    );
    assert_eq!(
        parse_with_config("NOT NOT NOT a", &config).unwrap_err(),
        ParseError::Syntax(too_deep(2, 8))
    );
    assert_eq!(
        parse_with_config("a AND NOT (b)", &config).unwrap_err(),
        ParseError::Syntax(too_deep(2, 10))
    );
}
