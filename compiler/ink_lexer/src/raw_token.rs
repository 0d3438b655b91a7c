//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output before literal
//! decoding, position tracking and separator insertion.

use logos::Logos;

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r]+")] // Skip horizontal whitespace
pub(crate) enum RawToken {
    #[regex(r"`[^`]*`")]
    Comment,
    #[regex(r"`[^`]*")]
    UnterminatedComment,

    #[token("\n")]
    Newline,

    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,
    #[regex(r"'([^'\\]|\\(.|\n))*'")]
    Str,
    #[regex(r"'([^'\\]|\\(.|\n))*")]
    UnterminatedStr,
    #[token("true")]
    True,
    #[token("false")]
    False,

    #[regex(r"[A-Za-z@!?_][A-Za-z0-9@!?_]*")]
    Ident,
    // A lone `_` also matches the identifier pattern.
    #[token("_", priority = 3)]
    EmptyIdent,

    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("{")]
    LeftBrace,
    #[token("}")]
    RightBrace,
    #[token("[")]
    LeftBracket,
    #[token("]")]
    RightBracket,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token("=>")]
    FunctionArrow,
    #[token("->")]
    CaseArrow,
    #[token("::")]
    MatchColon,

    #[token("~")]
    Negation,
    #[token(".")]
    Accessor,
    #[token("+")]
    Add,
    #[token("-")]
    Subtract,
    #[token("*")]
    Multiply,
    #[token("/")]
    Divide,
    #[token("%")]
    Modulus,
    #[token(">")]
    Greater,
    #[token("<")]
    Less,
    #[token("=")]
    Equal,
    #[token("&")]
    And,
    #[token("^")]
    Xor,
    #[token("|")]
    Or,
    #[token(":=")]
    Define,
}
