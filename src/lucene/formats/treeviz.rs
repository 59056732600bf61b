//! Treeviz formatter for query ASTs

use crate::lucene::ast::{AstNode, Expression, Query, RangeTerm};

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub fn to_treeviz_str(query: &Query) -> String {
    let mut result = String::new();
    result.push_str(query.node_type());
    result.push('\n');
    append_node(&mut result, &query.body, "", true);
    result
}

fn append_line(result: &mut String, node: &dyn AstNode, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    let display_label = truncate(&node.display_label(), 30);

    result.push_str(&format!(
        "{}{} {}: {}\n",
        prefix,
        connector,
        node.node_type(),
        display_label
    ));
}

fn append_node(result: &mut String, expr: &Expression, prefix: &str, is_last: bool) {
    append_line(result, expr, prefix, is_last);

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });

    match expr {
        Expression::Binary(b) => {
            append_node(result, &b.left, &new_prefix, false);
            append_node(result, &b.right, &new_prefix, true);
        }
        Expression::Unary(u) => append_node(result, &u.operand, &new_prefix, true),
        Expression::FieldGroup(g) => append_node(result, &g.body, &new_prefix, true),
        Expression::BinaryRange(r) => {
            append_bound(result, &r.left, &new_prefix, false);
            append_bound(result, &r.right, &new_prefix, true);
        }
        Expression::UnaryRange(r) => append_bound(result, &r.operand, &new_prefix, true),
        Expression::Term(_) | Expression::Phrase(_) | Expression::Regex(_) => {}
    }
}

fn append_bound(result: &mut String, bound: &RangeTerm, prefix: &str, is_last: bool) {
    append_line(result, bound, prefix, is_last);
}
