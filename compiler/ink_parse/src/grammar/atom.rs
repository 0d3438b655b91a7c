//! Atoms: the operands binary chains are built from.

use ink_ir::{Node, NodeKind, ObjectEntry, Param, Span, TokenKind, UnaryOp};

use crate::error::{SyntaxError, SyntaxErrorKind};
use crate::Parser;

impl Parser {
    pub(crate) fn parse_atom(&mut self) -> Result<Node, SyntaxError> {
        let Some(tok) = self.cursor.advance() else {
            return Err(self.cursor.unexpected("an expression"));
        };
        let span = tok.span;

        let atom = match tok.kind {
            TokenKind::Negation => {
                let operand = self.parse_atom()?;
                return Ok(Node::new(
                    NodeKind::Unary {
                        op: UnaryOp::Negate,
                        operand: Box::new(operand),
                    },
                    span,
                ));
            }
            TokenKind::Number(n) => return Ok(Node::new(NodeKind::Number(n), span)),
            TokenKind::Str(bytes) => return Ok(Node::new(NodeKind::Str(bytes), span)),
            TokenKind::True => return Ok(Node::new(NodeKind::Bool(true), span)),
            TokenKind::False => return Ok(Node::new(NodeKind::Bool(false), span)),
            TokenKind::EmptyIdent => {
                if self.cursor.eat(&TokenKind::FunctionArrow) {
                    return self.parse_function_body(vec![Param::Ignored], span);
                }
                return Ok(Node::new(NodeKind::EmptyIdent, span));
            }
            TokenKind::Ident(name) => {
                if self.cursor.eat(&TokenKind::FunctionArrow) {
                    return self.parse_function_body(vec![Param::Named(name)], span);
                }
                Node::new(NodeKind::Ident(name), span)
            }
            TokenKind::LeftParen => {
                let items = self.parse_sequence(&TokenKind::RightParen, "')'")?;
                if self.cursor.eat(&TokenKind::FunctionArrow) {
                    let params = items
                        .into_iter()
                        .map(into_param)
                        .collect::<Result<Vec<_>, _>>()?;
                    self.parse_function_body(params, span)?
                } else {
                    Node::new(NodeKind::ExprList(items), span)
                }
            }
            TokenKind::LeftBrace => return self.parse_object(span),
            TokenKind::LeftBracket => {
                let items = self.parse_sequence(&TokenKind::RightBracket, "']'")?;
                return Ok(Node::new(NodeKind::List(items), span));
            }
            other => {
                return Err(SyntaxError::new(
                    SyntaxErrorKind::UnexpectedToken {
                        found: other.describe(),
                        expected: "an expression",
                    },
                    span,
                ));
            }
        };

        self.parse_calls(atom)
    }

    /// Apply zero or more `(args)` suffixes, left to right.
    fn parse_calls(&mut self, mut callee: Node) -> Result<Node, SyntaxError> {
        while self.cursor.eat(&TokenKind::LeftParen) {
            let args = self.parse_sequence(&TokenKind::RightParen, "')'")?;
            let span = callee.span;
            callee = Node::new(
                NodeKind::Call {
                    callee: Box::new(callee),
                    args,
                },
                span,
            );
        }
        Ok(callee)
    }

    /// Parse separator-delimited expressions up to and including `close`.
    fn parse_sequence(
        &mut self,
        close: &TokenKind,
        expected: &'static str,
    ) -> Result<Vec<Node>, SyntaxError> {
        let mut items = Vec::new();
        loop {
            if self.cursor.eat(close) {
                return Ok(items);
            }
            if self.cursor.is_at_end() {
                return Err(self.cursor.unexpected(expected));
            }
            items.push(self.parse_expression()?);
            if !self.cursor.eat(&TokenKind::Separator) && !self.cursor.check(close) {
                return Err(self.cursor.unexpected(expected));
            }
        }
    }

    fn parse_object(&mut self, span: Span) -> Result<Node, SyntaxError> {
        let mut entries = Vec::new();
        loop {
            if self.cursor.eat(&TokenKind::RightBrace) {
                break;
            }
            if self.cursor.is_at_end() {
                return Err(self.cursor.unexpected("'}'"));
            }

            let key = self.parse_expression()?;
            self.cursor
                .expect(&TokenKind::KeyValueSeparator, "':' after object key")?;
            let value = self.parse_expression()?;
            let entry_span = key.span;
            entries.push(ObjectEntry {
                key,
                value,
                span: entry_span,
            });

            if !self.cursor.eat(&TokenKind::Separator) && !self.cursor.check(&TokenKind::RightBrace) {
                return Err(self.cursor.unexpected("',' or '}' after object entry"));
            }
        }
        Ok(Node::new(NodeKind::Object(entries), span))
    }

    fn parse_function_body(&mut self, params: Vec<Param>, span: Span) -> Result<Node, SyntaxError> {
        let body = self.parse_expression()?;
        Ok(Node::function(params, body, span))
    }
}

fn into_param(node: Node) -> Result<Param, SyntaxError> {
    match node.kind {
        NodeKind::Ident(name) => Ok(Param::Named(name)),
        NodeKind::EmptyIdent => Ok(Param::Ignored),
        _ => Err(SyntaxError::new(
            SyntaxErrorKind::InvalidParameter {
                found: node.to_string(),
            },
            node.span,
        )),
    }
}
