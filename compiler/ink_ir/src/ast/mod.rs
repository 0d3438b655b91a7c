//! Abstract syntax tree.
//!
//! Nodes are built once by the parser and never mutated afterwards. Function
//! literals live behind an `Arc` so that every Function value created from
//! the same literal shares (and compares by identity against) one definition,
//! and so closures can keep their body alive after the parse that produced it
//! is gone.
//!
//! Match clauses and object entries are auxiliary records rather than node
//! kinds: they only ever appear inside their parent and can never be handed
//! to the evaluator on their own.

mod display;


use std::sync::Arc;

use crate::{BinaryOp, Name, Span, UnaryOp};

/// An expression node with its leftmost source position.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    Unary {
        op: UnaryOp,
        operand: Box<Node>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    Call {
        callee: Box<Node>,
        args: Vec<Node>,
    },
    Match {
        scrutinee: Box<Node>,
        clauses: Vec<MatchClause>,
    },
    /// Parenthesized sequence; also the shape of most function bodies.
    ExprList(Vec<Node>),
    /// `_`
    EmptyIdent,
    Ident(Name),
    Number(f64),
    Str(Vec<u8>),
    Bool(bool),
    Object(Vec<ObjectEntry>),
    /// `[a, b, c]`, stored positionally under keys "0", "1", ...
    List(Vec<Node>),
    Function(Arc<FunctionDef>),
}

/// One `target -> body` arm of a match expression.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchClause {
    pub target: Node,
    pub body: Node,
    pub span: Span,
}

/// One `key: value` pair of an object literal.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectEntry {
    pub key: Node,
    pub value: Node,
    pub span: Span,
}

/// A declared function parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Param {
    Named(Name),
    /// `_`: accepts an argument without binding it.
    Ignored,
}

/// The definition behind a function literal.
#[derive(Debug, PartialEq)]
pub struct FunctionDef {
    pub params: Vec<Param>,
    pub body: Node,
    pub span: Span,
}

impl Node {
    #[inline]
    pub fn new(kind: NodeKind, span: Span) -> Self {
        Node { kind, span }
    }

    pub fn binary(op: BinaryOp, left: Node, right: Node) -> Self {
        let span = left.span.to(right.span);
        Node::new(
            NodeKind::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            span,
        )
    }

    pub fn function(params: Vec<Param>, body: Node, span: Span) -> Self {
        let span = span.to(body.span);
        Node::new(
            NodeKind::Function(Arc::new(FunctionDef { params, body, span })),
            span,
        )
    }

    /// Identifier name if this node is a bare identifier.
    pub fn as_ident(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Ident(name) => Some(name),
            _ => None,
        }
    }
}
