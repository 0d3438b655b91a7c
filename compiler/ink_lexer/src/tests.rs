#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).unwrap().into_iter().map(|t| t.kind).collect()
}

fn ident(name: &str) -> TokenKind {
    TokenKind::Ident(name.to_string())
}

#[test]
fn test_definition_and_operators() {
    assert_eq!(
        kinds("x := 1 + 2.5"),
        vec![
            ident("x"),
            TokenKind::Define,
            TokenKind::Number(1.0),
            TokenKind::Add,
            TokenKind::Number(2.5),
            TokenKind::Separator,
        ]
    );
}

#[test]
fn test_colon_family() {
    assert_eq!(
        kinds("a :: {b: c -> d => e}"),
        vec![
            ident("a"),
            TokenKind::MatchColon,
            TokenKind::LeftBrace,
            ident("b"),
            TokenKind::KeyValueSeparator,
            ident("c"),
            TokenKind::CaseArrow,
            ident("d"),
            TokenKind::FunctionArrow,
            ident("e"),
            TokenKind::Separator,
            TokenKind::RightBrace,
            TokenKind::Separator,
        ]
    );
}

#[test]
fn test_newline_separator_only_after_expression_end() {
    assert_eq!(
        kinds("f := (x) =>\n  x +\n  1\ny"),
        vec![
            ident("f"),
            TokenKind::Define,
            TokenKind::LeftParen,
            ident("x"),
            TokenKind::Separator,
            TokenKind::RightParen,
            TokenKind::FunctionArrow,
            ident("x"),
            TokenKind::Add,
            TokenKind::Number(1.0),
            TokenKind::Separator,
            ident("y"),
            TokenKind::Separator,
        ]
    );
}

#[test]
fn test_separators_collapse() {
    assert_eq!(
        kinds("f(a,\n b,)"),
        vec![
            ident("f"),
            TokenKind::LeftParen,
            ident("a"),
            TokenKind::Separator,
            ident("b"),
            TokenKind::Separator,
            TokenKind::RightParen,
            TokenKind::Separator,
        ]
    );
}

#[test]
fn test_empty_groups_get_no_separator() {
    assert_eq!(
        kinds("()"),
        vec![
            TokenKind::LeftParen,
            TokenKind::RightParen,
            TokenKind::Separator
        ]
    );
}

#[test]
fn test_empty_identifier_and_names() {
    assert_eq!(
        kinds("_ _x is? true trueish"),
        vec![
            TokenKind::EmptyIdent,
            ident("_x"),
            ident("is?"),
            TokenKind::True,
            ident("trueish"),
            TokenKind::Separator,
        ]
    );
}

#[test]
fn test_underscore_only_stands_alone_as_empty() {
    assert_eq!(
        kinds("_ a_b __ _1 x_"),
        vec![
            TokenKind::EmptyIdent,
            ident("a_b"),
            ident("__"),
            ident("_1"),
            ident("x_"),
            TokenKind::Separator,
        ]
    );
}

#[test]
fn test_string_escapes() {
    assert_eq!(
        kinds(r"'a\'b\\c\nd\q'"),
        vec![
            TokenKind::Str(b"a'b\\c\ndq".to_vec()),
            TokenKind::Separator,
        ]
    );
}

#[test]
fn test_comments_are_skipped_across_lines() {
    let tokens = lex("`one\ntwo` x\n` trailing `").unwrap();
    assert_eq!(tokens[0].kind, ident("x"));
    assert_eq!((tokens[0].span.line, tokens[0].span.col), (2, 6));
}

#[test]
fn test_accessor_with_number_key() {
    assert_eq!(
        kinds("xs.0"),
        vec![
            ident("xs"),
            TokenKind::Accessor,
            TokenKind::Number(0.0),
            TokenKind::Separator,
        ]
    );
}

#[test]
fn test_positions() {
    let tokens = lex("a\n  bc := 'x'").unwrap();
    let b = &tokens[2];
    assert_eq!(b.kind, ident("bc"));
    assert_eq!((b.span.line, b.span.col), (2, 3));
    assert_eq!((b.span.start, b.span.end), (4, 6));
}

#[test]
fn test_errors() {
    let err = lex("a := 'open").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    assert_eq!(err.span.col, 6);

    let err = lex("x # y").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnexpectedChar('#'));
    assert_eq!(err.to_string(), "syntax error at 1:3: unexpected character '#'");

    let err = lex("` never closed").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnterminatedComment);
}
