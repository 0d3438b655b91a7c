//! Parser tests.
//!
//! Most assertions compare the parenthesized `Display` rendering of the AST,
//! which makes the chosen grouping explicit.

#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

mod precedence;

use ink_ir::{Node, NodeKind, Param};
use pretty_assertions::assert_eq;

use crate::{parse, Parser, SyntaxErrorKind};

fn parse_source(source: &str) -> Result<Vec<Node>, crate::SyntaxError> {
    parse(ink_lexer::lex(source).unwrap())
}

fn render(source: &str) -> Vec<String> {
    parse_source(source)
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn render_one(source: &str) -> String {
    let mut nodes = render(source);
    assert_eq!(nodes.len(), 1, "expected one expression in {source:?}");
    nodes.remove(0)
}

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    assert_eq!(render_one("1 + 2 * 3"), "(1 + (2 * 3))");
    assert_eq!(render_one("1 * 2 + 3"), "((1 * 2) + 3)");
}

#[test]
fn test_equal_priority_is_left_associative() {
    assert_eq!(render_one("1 - 2 - 3"), "((1 - 2) - 3)");
    assert_eq!(render_one("8 / 4 * 2"), "((8 / 4) * 2)");
}

#[test]
fn test_accessor_binds_tightest() {
    assert_eq!(render_one("a.b + 1"), "(a.b + 1)");
    assert_eq!(render_one("1 + a.b.c"), "(1 + a.b.c)");
    let nodes = parse_source("1 + a.b").unwrap();
    let NodeKind::Binary { right, .. } = &nodes[0].kind else {
        panic!("expected binary expression");
    };
    assert!(matches!(right.kind, NodeKind::Binary { op: ink_ir::BinaryOp::Accessor, .. }));
}

#[test]
fn test_mixed_chain_returns_to_outer_priority() {
    assert_eq!(render_one("a + b * c + d * e"), "((a + (b * c)) + (d * e))");
    assert_eq!(render_one("1 * 2 % 3 - 4"), "((1 * (2 % 3)) - 4)");
}

#[test]
fn test_logical_operator_ladder() {
    assert_eq!(render_one("a | b ^ c & d"), "(a | (b ^ (c & d)))");
    assert_eq!(render_one("a < b & c = d"), "((a < b) & (c = d))");
}

#[test]
fn test_assignment_is_lowest() {
    assert_eq!(render_one("x := 1 * 2 + 3"), "(x := ((1 * 2) + 3))");
    assert_eq!(render_one("o.k := o.k + 1"), "(o.k := (o.k + 1))");
}

#[test]
fn test_assignment_does_not_chain_to_the_right() {
    assert_eq!(render_one("a := b := 1"), "((a := b) := 1)");
}

#[test]
fn test_negation_applies_to_atom() {
    assert_eq!(render_one("~x + 1"), "(~x + 1)");
    assert_eq!(render_one("~(1 + 2)"), "~((1 + 2))");
}

#[test]
fn test_calls_chain_left_to_right() {
    assert_eq!(render_one("f(1)(2, 3)"), "f(1)(2, 3)");
    let nodes = parse_source("f(1)(2)").unwrap();
    let NodeKind::Call { callee, args } = &nodes[0].kind else {
        panic!("expected call");
    };
    assert_eq!(args.len(), 1);
    assert!(matches!(callee.kind, NodeKind::Call { .. }));
}

#[test]
fn test_accessor_operand_is_an_atom() {
    // The right side of `.` is a full atom, calls included.
    assert_eq!(render_one("o.f(1)"), "o.f(1)");
    let nodes = parse_source("o.f(1)").unwrap();
    let NodeKind::Binary { right, .. } = &nodes[0].kind else {
        panic!("expected accessor");
    };
    assert!(matches!(right.kind, NodeKind::Call { .. }));
    assert_eq!(render_one("(o.f)(1)"), "(o.f)(1)");
}

#[test]
fn test_function_literals() {
    assert_eq!(render_one("x => x + 1"), "(x) => (x + 1)");
    assert_eq!(render_one("(a, _) => a"), "(a, _) => a");
    assert_eq!(render_one("() => ()"), "() => ()");
    assert_eq!(render_one("_ => 1"), "(_) => 1");

    let nodes = parse_source("(a, _) => a").unwrap();
    let NodeKind::Function(def) = &nodes[0].kind else {
        panic!("expected function literal");
    };
    assert_eq!(def.params, vec![Param::Named("a".to_string()), Param::Ignored]);
}

#[test]
fn test_immediately_invoked_function() {
    assert_eq!(render_one("((x) => x)(3)"), "((x) => x)(3)");
}

#[test]
fn test_function_body_ends_at_separator() {
    assert_eq!(render_one("map(xs, x => x * 2, 3)"), "map(xs, (x) => (x * 2), 3)");
}

#[test]
fn test_function_literal_with_match_body() {
    assert_eq!(
        render_one("f := (n) => n = 0 :: { true -> 0, false -> n + f(n - 1) }"),
        "(f := (n) => (n = 0) :: {true -> 0, false -> (n + f((n - 1)))})"
    );
}

#[test]
fn test_multiline_match() {
    let source = "x :: {\n  1 -> 'one'\n  _ -> 'other'\n}\ny";
    assert_eq!(render(source), vec!["x :: {1 -> 'one', _ -> 'other'}", "y"]);
}

#[test]
fn test_object_and_list_literals() {
    assert_eq!(render_one("{a: 1, 'b': [2, 3], (k): {}}"), "{a: 1, 'b': [2, 3], (k): {}}");
    assert_eq!(render_one("[]"), "[]");
    assert_eq!(render_one("{\n  a: 1\n  b: 2\n}"), "{a: 1, b: 2}");
}

#[test]
fn test_expression_lists() {
    assert_eq!(render_one("(\n  a := 1\n  a + 1\n)"), "((a := 1), (a + 1))");
    assert_eq!(render_one("()"), "()");
}

#[test]
fn test_top_level_sequence() {
    assert_eq!(render("a := 1, b := 2\n\nc"), vec!["(a := 1)", "(b := 2)", "c"]);
}

#[test]
fn test_lazy_iteration_stops_after_error() {
    let tokens = ink_lexer::lex("a\nb c\nd").unwrap();
    let mut parser = Parser::new(tokens);
    assert_eq!(parser.next().unwrap().unwrap().to_string(), "a");
    let err = parser.next().unwrap().unwrap_err();
    assert_eq!(
        err.kind,
        SyntaxErrorKind::TrailingToken {
            found: "identifier c".to_string()
        }
    );
    assert_eq!((err.span.line, err.span.col), (2, 3));
    assert!(parser.next().is_none());
    assert!(parser.next().is_none());
}

#[test]
fn test_invalid_parameter() {
    let err = parse_source("(a, 1) => a").unwrap_err();
    assert_eq!(
        err.kind,
        SyntaxErrorKind::InvalidParameter {
            found: "1".to_string()
        }
    );
}

#[test]
fn test_unclosed_group() {
    let err = parse_source("(1 + 2").unwrap_err();
    assert!(matches!(err.kind, SyntaxErrorKind::UnexpectedEnd { expected: "')'" }));
}

#[test]
fn test_missing_case_arrow() {
    let err = parse_source("x :: { 1 2 }").unwrap_err();
    assert!(matches!(err.kind, SyntaxErrorKind::TrailingToken { .. }));

    let err = parse_source("x :: { 1, 2 }").unwrap_err();
    assert!(matches!(
        err.kind,
        SyntaxErrorKind::UnexpectedToken {
            expected: "'->' after match target",
            ..
        }
    ));
}

#[test]
fn test_operator_cannot_start_expression() {
    let err = parse_source("* 2").unwrap_err();
    assert!(matches!(
        err.kind,
        SyntaxErrorKind::UnexpectedToken {
            expected: "an expression",
            ..
        }
    ));
}

#[test]
fn test_deeply_nested_groups() {
    let depth = 5_000;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(parse_source(&source).unwrap().len(), 1);
}
