//! Token cursor for navigating the token stream.
//!
//! Provides single-token lookahead and consumption. The parser never backs
//! up, so the cursor only moves forward.

use ink_ir::{Span, Token, TokenKind};
use tracing::trace;

use crate::error::{SyntaxError, SyntaxErrorKind};


pub struct Cursor {
    tokens: Vec<Token>,
    pos: usize,
}

impl Cursor {
    pub fn new(tokens: Vec<Token>) -> Self {
        Cursor { tokens, pos: 0 }
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// The current token, if any remain.
    #[inline]
    pub fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    #[inline]
    pub fn current_kind(&self) -> Option<&TokenKind> {
        self.current().map(|tok| &tok.kind)
    }

    /// Span of the current token, or an empty span just past the last token.
    pub fn current_span(&self) -> Span {
        match (self.current(), self.tokens.last()) {
            (Some(tok), _) => tok.span,
            (None, Some(last)) => Span {
                start: last.span.end,
                ..last.span
            },
            (None, None) => Span::DUMMY,
        }
    }

    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind() == Some(kind)
    }

    /// Consume and return the current token.
    pub fn advance(&mut self) -> Option<Token> {
        let tok = self.tokens.get(self.pos).cloned();
        if let Some(tok) = &tok {
            trace!(kind = ?tok.kind, span = %tok.span, "advance");
            self.pos += 1;
        }
        tok
    }

    /// Consume the current token if it is `kind`.
    pub fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume a token of `kind` or fail, naming `expected` in the error.
    pub fn expect(&mut self, kind: &TokenKind, expected: &'static str) -> Result<Span, SyntaxError> {
        let span = self.current_span();
        if self.eat(kind) {
            return Ok(span);
        }
        Err(self.unexpected(expected))
    }

    /// Error for whatever sits at the cursor when `expected` was wanted.
    pub fn unexpected(&self, expected: &'static str) -> SyntaxError {
        let span = self.current_span();
        match self.current() {
            Some(tok) => SyntaxError::new(
                SyntaxErrorKind::UnexpectedToken {
                    found: tok.kind.describe(),
                    expected,
                },
                span,
            ),
            None => SyntaxError::new(SyntaxErrorKind::UnexpectedEnd { expected }, span),
        }
    }
}
