//! Parser for Ink.
//!
//! Recursive descent for atoms, a single forward scan with priority floors
//! for binary operators. The parser consumes a complete token stream and
//! yields top-level expressions lazily through [`Iterator`]; it stops for
//! good after the first syntax error.

mod cursor;
mod error;
mod grammar;

#[cfg(test)]
mod tests;

use std::iter::FusedIterator;

use ink_ir::{Node, Token, TokenKind};
use tracing::trace;

use cursor::Cursor;
pub use error::{SyntaxError, SyntaxErrorKind};

/// Lazy sequence of top-level expressions over a token stream.
pub struct Parser {
    cursor: Cursor,
    finished: bool,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            finished: false,
        }
    }

    fn parse_top_level(&mut self) -> Result<Node, SyntaxError> {
        let node = self.parse_expression()?;
        if !self.cursor.eat(&TokenKind::Separator) && !self.cursor.is_at_end() {
            return Err(self.cursor.unexpected("a separator"));
        }
        Ok(node)
    }
}

impl Iterator for Parser {
    type Item = Result<Node, SyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        while self.cursor.eat(&TokenKind::Separator) {}
        if self.cursor.is_at_end() {
            self.finished = true;
            return None;
        }

        let result = self.parse_top_level();
        match &result {
            Ok(node) => trace!(span = %node.span, node = %node, "parsed top-level expression"),
            Err(_) => self.finished = true,
        }
        Some(result)
    }
}

impl FusedIterator for Parser {}

/// Parse a whole token stream eagerly.
pub fn parse(tokens: Vec<Token>) -> Result<Vec<Node>, SyntaxError> {
    Parser::new(tokens).collect()
}
