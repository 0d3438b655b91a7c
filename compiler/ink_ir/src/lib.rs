//! Ink IR - shared source-level types for the Ink interpreter.
//!
//! This crate contains the types every other stage agrees on:
//! - [`Span`]: source positions carried by tokens, nodes and errors
//! - [`Token`] / [`TokenKind`]: the lexer's output contract
//! - [`BinaryOp`] / [`UnaryOp`]: operators and their binding priorities
//! - [`Node`] / [`NodeKind`]: the immutable AST produced by the parser

mod ast;
mod number;
mod ops;
mod span;
mod token;

pub use ast::{FunctionDef, MatchClause, Node, NodeKind, ObjectEntry, Param};
pub use number::format_number;
pub use ops::{BinaryOp, UnaryOp};
pub use span::Span;
pub use token::{Token, TokenKind};

/// Identifier name as written in source.
pub type Name = String;
