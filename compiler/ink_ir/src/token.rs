//! Token types produced by the lexer and consumed by the parser.

use std::fmt;

use crate::{Name, Span};

/// Token kind, with the decoded literal payload where one applies.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    // Literals
    Number(f64),
    Str(Vec<u8>),
    True,
    False,

    // Names
    Ident(Name),
    /// `_`
    EmptyIdent,

    // Structure
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    /// `,` or a newline that ends an expression.
    Separator,
    /// `:`
    KeyValueSeparator,
    /// `=>`
    FunctionArrow,
    /// `->`
    CaseArrow,
    /// `::`
    MatchColon,

    // Operators
    /// `~`
    Negation,
    /// `.`
    Accessor,
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulus,
    Greater,
    Less,
    /// `=`
    Equal,
    /// `&`
    And,
    /// `^`
    Xor,
    /// `|`
    Or,
    /// `:=`
    Define,
}

impl TokenKind {
    /// Whether a token of this kind can end an expression.
    ///
    /// The lexer only turns a newline into a separator after such tokens.
    pub fn ends_expression(&self) -> bool {
        matches!(
            self,
            TokenKind::Number(_)
                | TokenKind::Str(_)
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Ident(_)
                | TokenKind::EmptyIdent
                | TokenKind::RightParen
                | TokenKind::RightBrace
                | TokenKind::RightBracket
        )
    }

    /// Short human-readable description for diagnostics.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Number(n) => format!("number {n}"),
            TokenKind::Str(s) => format!("string '{}'", String::from_utf8_lossy(s)),
            TokenKind::Ident(name) => format!("identifier {name}"),
            TokenKind::Separator => "separator".to_string(),
            other => format!("'{}'", other.symbol()),
        }
    }

    fn symbol(&self) -> &'static str {
        match self {
            TokenKind::Number(_) => "number",
            TokenKind::Str(_) => "string",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Ident(_) => "identifier",
            TokenKind::EmptyIdent => "_",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::LeftBracket => "[",
            TokenKind::RightBracket => "]",
            TokenKind::Separator => ",",
            TokenKind::KeyValueSeparator => ":",
            TokenKind::FunctionArrow => "=>",
            TokenKind::CaseArrow => "->",
            TokenKind::MatchColon => "::",
            TokenKind::Negation => "~",
            TokenKind::Accessor => ".",
            TokenKind::Add => "+",
            TokenKind::Subtract => "-",
            TokenKind::Multiply => "*",
            TokenKind::Divide => "/",
            TokenKind::Modulus => "%",
            TokenKind::Greater => ">",
            TokenKind::Less => "<",
            TokenKind::Equal => "=",
            TokenKind::And => "&",
            TokenKind::Xor => "^",
            TokenKind::Or => "|",
            TokenKind::Define => ":=",
        }
    }
}

/// A token with its source span.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.kind.describe(), self.span)
    }
}
