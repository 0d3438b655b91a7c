//! Operator definitions.

use crate::TokenKind;

/// Binary operators, including assignment and property access.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Accessor,
    Mod,
    Mul,
    Div,
    Add,
    Sub,
    Gt,
    Lt,
    Eq,
    And,
    Xor,
    Or,
    Define,
}

impl BinaryOp {
    /// Map a token to the binary operator it spells, if any.
    pub fn from_token(kind: &TokenKind) -> Option<BinaryOp> {
        let op = match kind {
            TokenKind::Accessor => BinaryOp::Accessor,
            TokenKind::Modulus => BinaryOp::Mod,
            TokenKind::Multiply => BinaryOp::Mul,
            TokenKind::Divide => BinaryOp::Div,
            TokenKind::Add => BinaryOp::Add,
            TokenKind::Subtract => BinaryOp::Sub,
            TokenKind::Greater => BinaryOp::Gt,
            TokenKind::Less => BinaryOp::Lt,
            TokenKind::Equal => BinaryOp::Eq,
            TokenKind::And => BinaryOp::And,
            TokenKind::Xor => BinaryOp::Xor,
            TokenKind::Or => BinaryOp::Or,
            TokenKind::Define => BinaryOp::Define,
            _ => return None,
        };
        Some(op)
    }

    /// Binding priority; higher binds tighter.
    pub fn priority(self) -> i32 {
        match self {
            BinaryOp::Accessor => 100,
            BinaryOp::Mod => 80,
            BinaryOp::Mul | BinaryOp::Div => 50,
            BinaryOp::Add | BinaryOp::Sub => 40,
            BinaryOp::Gt | BinaryOp::Lt | BinaryOp::Eq => 30,
            BinaryOp::And => 20,
            BinaryOp::Xor => 15,
            BinaryOp::Or => 10,
            BinaryOp::Define => 0,
        }
    }

    pub fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Accessor => ".",
            BinaryOp::Mod => "%",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Gt => ">",
            BinaryOp::Lt => "<",
            BinaryOp::Eq => "=",
            BinaryOp::And => "&",
            BinaryOp::Xor => "^",
            BinaryOp::Or => "|",
            BinaryOp::Define => ":=",
        }
    }
}

/// Unary operators.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// `~`: arithmetic negation for numbers, logical not for booleans.
    Negate,
}

impl UnaryOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            UnaryOp::Negate => "~",
        }
    }
}
