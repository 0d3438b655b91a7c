//! Lexer for Ink using logos.
//!
//! Produces the token stream the parser consumes: literals decoded, spans
//! carrying line/column, and separators inserted where a newline or a closing
//! delimiter ends an expression.

mod escape;
mod lex_error;
mod raw_token;

#[cfg(test)]
mod tests;

use ink_ir::{Span, Token, TokenKind};
use logos::Logos;

pub use lex_error::{LexError, LexErrorKind};
use raw_token::RawToken;

/// Tracks line/column lazily as tokens are produced in order.
struct Lines<'a> {
    source: &'a [u8],
    scanned: usize,
    line: u32,
    line_start: usize,
}

impl<'a> Lines<'a> {
    fn new(source: &'a str) -> Self {
        Lines {
            source: source.as_bytes(),
            scanned: 0,
            line: 1,
            line_start: 0,
        }
    }

    fn span(&mut self, range: std::ops::Range<usize>) -> Span {
        let upto = range.start.min(self.source.len());
        for (offset, &b) in self.source[self.scanned..upto].iter().enumerate() {
            if b == b'\n' {
                self.line += 1;
                self.line_start = self.scanned + offset + 1;
            }
        }
        self.scanned = self.scanned.max(upto);
        let col = range.start - self.line_start + 1;
        Span::new(
            to_u32(range.start),
            to_u32(range.end),
            self.line,
            to_u32(col),
        )
    }
}

fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Token sink applying the separator rules.
struct Stream {
    tokens: Vec<Token>,
}

impl Stream {
    fn last_ends_expression(&self) -> bool {
        self.tokens
            .last()
            .is_some_and(|tok| tok.kind.ends_expression())
    }

    fn last_is_separator(&self) -> bool {
        self.tokens
            .last()
            .is_some_and(|tok| tok.kind == TokenKind::Separator)
    }

    /// Insert a separator if the previous token closed an expression.
    fn ensure_separator(&mut self, span: Span) {
        if self.last_ends_expression() {
            self.tokens.push(Token::new(TokenKind::Separator, span));
        }
    }

    fn push(&mut self, kind: TokenKind, span: Span) {
        match kind {
            TokenKind::RightParen | TokenKind::RightBrace | TokenKind::RightBracket => {
                self.ensure_separator(Span { end: span.start, ..span });
            }
            TokenKind::Separator if self.last_is_separator() => return,
            _ => {}
        }
        self.tokens.push(Token::new(kind, span));
    }
}

/// Tokenize `source`.
///
/// Stops at the first malformed input. The returned stream always ends with
/// a separator if its last token could end an expression.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lines = Lines::new(source);
    let mut stream = Stream { tokens: Vec::new() };
    let mut logos = RawToken::lexer(source);

    while let Some(result) = logos.next() {
        let span = lines.span(logos.span());
        let slice = logos.slice();

        let raw = match result {
            Ok(raw) => raw,
            Err(()) => {
                let c = slice.chars().next().unwrap_or('\0');
                return Err(LexError::new(LexErrorKind::UnexpectedChar(c), span));
            }
        };

        let kind = match raw {
            RawToken::Comment => continue,
            RawToken::UnterminatedComment => {
                return Err(LexError::new(LexErrorKind::UnterminatedComment, span));
            }
            RawToken::UnterminatedStr => {
                return Err(LexError::new(LexErrorKind::UnterminatedString, span));
            }
            RawToken::Newline => {
                stream.ensure_separator(span);
                continue;
            }
            RawToken::Number => match slice.parse::<f64>() {
                Ok(n) => TokenKind::Number(n),
                Err(_) => {
                    return Err(LexError::new(
                        LexErrorKind::InvalidNumber(slice.to_string()),
                        span,
                    ));
                }
            },
            RawToken::Str => TokenKind::Str(escape::unescape(&slice[1..slice.len() - 1])),
            RawToken::True => TokenKind::True,
            RawToken::False => TokenKind::False,
            RawToken::Ident => TokenKind::Ident(slice.to_string()),
            RawToken::EmptyIdent => TokenKind::EmptyIdent,
            RawToken::LeftParen => TokenKind::LeftParen,
            RawToken::RightParen => TokenKind::RightParen,
            RawToken::LeftBrace => TokenKind::LeftBrace,
            RawToken::RightBrace => TokenKind::RightBrace,
            RawToken::LeftBracket => TokenKind::LeftBracket,
            RawToken::RightBracket => TokenKind::RightBracket,
            RawToken::Comma => TokenKind::Separator,
            RawToken::Colon => TokenKind::KeyValueSeparator,
            RawToken::FunctionArrow => TokenKind::FunctionArrow,
            RawToken::CaseArrow => TokenKind::CaseArrow,
            RawToken::MatchColon => TokenKind::MatchColon,
            RawToken::Negation => TokenKind::Negation,
            RawToken::Accessor => TokenKind::Accessor,
            RawToken::Add => TokenKind::Add,
            RawToken::Subtract => TokenKind::Subtract,
            RawToken::Multiply => TokenKind::Multiply,
            RawToken::Divide => TokenKind::Divide,
            RawToken::Modulus => TokenKind::Modulus,
            RawToken::Greater => TokenKind::Greater,
            RawToken::Less => TokenKind::Less,
            RawToken::Equal => TokenKind::Equal,
            RawToken::And => TokenKind::And,
            RawToken::Xor => TokenKind::Xor,
            RawToken::Or => TokenKind::Or,
            RawToken::Define => TokenKind::Define,
        };
        stream.push(kind, span);
    }

    let end = lines.span(source.len()..source.len());
    stream.ensure_separator(end);
    Ok(stream.tokens)
}
