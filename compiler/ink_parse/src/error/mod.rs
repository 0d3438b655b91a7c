//! Parse error types.
//!
//! The parser does not recover: the first malformed sequence aborts the
//! parse with a single [`SyntaxError`] carrying what was found, what the
//! grammar wanted there, and where.

use std::fmt;

use ink_ir::Span;


/// Structured reason for a syntax error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// A token that cannot appear here.
    UnexpectedToken {
        found: String,
        expected: &'static str,
    },
    /// The token stream ran out mid-construct.
    UnexpectedEnd { expected: &'static str },
    /// A complete expression followed by something that cannot continue it.
    TrailingToken { found: String },
    /// A parenthesized list before `=>` contained a non-identifier.
    InvalidParameter { found: String },
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken { found, expected } => {
                write!(f, "unexpected {found}, expected {expected}")
            }
            Self::UnexpectedEnd { expected } => {
                write!(f, "unexpected end of input, expected {expected}")
            }
            Self::TrailingToken { found } => {
                write!(f, "unexpected {found} following an expression")
            }
            Self::InvalidParameter { found } => {
                write!(f, "invalid function parameter {found}, expected an identifier or _")
            }
        }
    }
}

/// A syntax error with its position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub span: Span,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, span: Span) -> Self {
        SyntaxError { kind, span }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "syntax error at {}: {}", self.span, self.kind)
    }
}

impl std::error::Error for SyntaxError {}
