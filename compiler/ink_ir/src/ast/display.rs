//! Source-like rendering of AST nodes.
//!
//! Used by debug logging and when a Function value is converted to a string.
//! Binary expressions are fully parenthesized so the rendering also shows how
//! precedence was resolved.

use std::fmt;

use super::{FunctionDef, Node, NodeKind, Param};
use crate::{format_number, BinaryOp};

/// Write `bytes` as a single-quoted string literal.
pub(crate) fn write_quoted(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    f.write_str("'")?;
    for chunk in String::from_utf8_lossy(bytes).chars() {
        match chunk {
            '\'' => f.write_str("\\'")?,
            '\\' => f.write_str("\\\\")?,
            c => write!(f, "{c}")?,
        }
    }
    f.write_str("'")
}

fn write_list(f: &mut fmt::Formatter<'_>, nodes: &[Node]) -> fmt::Result {
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{node}")?;
    }
    Ok(())
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            NodeKind::Unary { op, operand } => write!(f, "{}{operand}", op.as_symbol()),
            NodeKind::Binary {
                op: BinaryOp::Accessor,
                left,
                right,
            } => write!(f, "{left}.{right}"),
            NodeKind::Binary { op, left, right } => {
                write!(f, "({left} {} {right})", op.as_symbol())
            }
            NodeKind::Call { callee, args } => {
                write!(f, "{callee}(")?;
                write_list(f, args)?;
                f.write_str(")")
            }
            NodeKind::Match { scrutinee, clauses } => {
                write!(f, "{scrutinee} :: {{")?;
                for (i, clause) in clauses.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{} -> {}", clause.target, clause.body)?;
                }
                f.write_str("}")
            }
            NodeKind::ExprList(nodes) => {
                f.write_str("(")?;
                write_list(f, nodes)?;
                f.write_str(")")
            }
            NodeKind::EmptyIdent => f.write_str("_"),
            NodeKind::Ident(name) => f.write_str(name),
            NodeKind::Number(n) => f.write_str(&format_number(*n)),
            NodeKind::Str(bytes) => write_quoted(f, bytes),
            NodeKind::Bool(b) => write!(f, "{b}"),
            NodeKind::Object(entries) => {
                f.write_str("{")?;
                for (i, entry) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", entry.key, entry.value)?;
                }
                f.write_str("}")
            }
            NodeKind::List(nodes) => {
                f.write_str("[")?;
                write_list(f, nodes)?;
                f.write_str("]")
            }
            NodeKind::Function(def) => write!(f, "{def}"),
        }
    }
}

impl fmt::Display for FunctionDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match param {
                Param::Named(name) => f.write_str(name)?,
                Param::Ignored => f.write_str("_")?,
            }
        }
        write!(f, ") => {}", self.body)
    }
}
