//! Expressions and binary operator chains.

use ink_ir::{BinaryOp, MatchClause, Node, NodeKind, TokenKind};
use ink_stack::ensure_sufficient_stack;

use crate::error::{SyntaxError, SyntaxErrorKind};
use crate::Parser;

impl Parser {
    /// Parse one expression: an atom, an optional binary chain, an optional
    /// match suffix.
    ///
    /// The expression must be followed by something that can end it. The
    /// terminator itself is left for the caller.
    pub(crate) fn parse_expression(&mut self) -> Result<Node, SyntaxError> {
        ensure_sufficient_stack(|| {
            let atom = self.parse_atom()?;
            let mut expr = match self.peek_binary_op() {
                Some(_) => self.parse_binary(atom, -1)?,
                None => atom,
            };

            if self.cursor.eat(&TokenKind::MatchColon) {
                expr = self.parse_match_body(expr)?;
            }

            match self.cursor.current_kind() {
                None
                | Some(
                    TokenKind::Separator
                    | TokenKind::RightParen
                    | TokenKind::RightBrace
                    | TokenKind::RightBracket
                    | TokenKind::KeyValueSeparator
                    | TokenKind::CaseArrow,
                ) => Ok(expr),
                Some(kind) => Err(SyntaxError::new(
                    SyntaxErrorKind::TrailingToken {
                        found: kind.describe(),
                    },
                    self.cursor.current_span(),
                )),
            }
        })
    }

    fn peek_binary_op(&self) -> Option<BinaryOp> {
        self.cursor.current_kind().and_then(BinaryOp::from_token)
    }

    /// Parse a binary chain starting at the operator under the cursor.
    ///
    /// Operands and operators accumulate in a flat list while priorities do
    /// not increase, which folds into a left-leaning tree. An operator that
    /// binds tighter than the last accumulated one starts a nested chain over
    /// the last operand, with that operator's priority as the nested floor.
    /// Any operator at or below `floor` belongs to an enclosing chain.
    fn parse_binary(&mut self, left: Node, floor: i32) -> Result<Node, SyntaxError> {
        let Some(first) = self.peek_binary_op() else {
            return Err(self.cursor.unexpected("a binary operator"));
        };
        self.cursor.advance();

        let mut ops = vec![first];
        let mut operands = vec![left, self.parse_atom()?];

        while let Some(op) = self.peek_binary_op() {
            if op.priority() <= floor {
                break;
            }
            let last = ops.last().map_or(floor, |last| last.priority());
            if op.priority() <= last {
                self.cursor.advance();
                ops.push(op);
                operands.push(self.parse_atom()?);
            } else {
                let Some(operand) = operands.pop() else {
                    break;
                };
                let subtree = ensure_sufficient_stack(|| self.parse_binary(operand, last))?;
                operands.push(subtree);
            }
        }

        let mut operands = operands.into_iter();
        let Some(mut tree) = operands.next() else {
            return Err(self.cursor.unexpected("an expression"));
        };
        for (op, right) in ops.into_iter().zip(operands) {
            tree = Node::binary(op, tree, right);
        }
        Ok(tree)
    }

    /// Parse `{ target -> body, ... }` after a `::`.
    fn parse_match_body(&mut self, scrutinee: Node) -> Result<Node, SyntaxError> {
        self.cursor.expect(&TokenKind::LeftBrace, "'{' to open match clauses")?;

        let mut clauses = Vec::new();
        loop {
            if self.cursor.eat(&TokenKind::RightBrace) {
                break;
            }
            if self.cursor.is_at_end() {
                return Err(self.cursor.unexpected("'}' to close match clauses"));
            }

            let target = self.parse_expression()?;
            self.cursor.expect(&TokenKind::CaseArrow, "'->' after match target")?;
            let body = self.parse_expression()?;
            let span = target.span;
            clauses.push(MatchClause { target, body, span });

            if !self.cursor.eat(&TokenKind::Separator) && !self.cursor.check(&TokenKind::RightBrace) {
                return Err(self.cursor.unexpected("',' or '}' after match clause"));
            }
        }

        let span = scrutinee.span;
        Ok(Node::new(
            NodeKind::Match {
                scrutinee: Box::new(scrutinee),
                clauses,
            },
            span,
        ))
    }
}
