//! Node evaluation.
//!
//! Every node evaluates against a [`Frame`] and a tail-position flag. A call
//! in tail position returns an unexecuted [`Value::Thunk`]; whoever asked
//! for a non-tail value runs it with [`resolve`], which loops instead of
//! recursing, so tail-recursive programs run in constant native stack.
//!
//! Non-tail recursion still nests Rust frames, so [`eval_node`] grows the
//! stack on demand through `ink_stack`.

mod assign;
mod call;


use std::sync::Arc;

use ink_ir::{BinaryOp, MatchClause, Node, NodeKind, ObjectEntry};
use ink_stack::ensure_sufficient_stack;

use crate::environment::Frame;
use crate::errors::{undefined_variable, EvalResult};
use crate::operators::{evaluate_binary, evaluate_unary};
use crate::value::{Table, Value};

pub use assign::{access, property_key};
pub use call::{apply, call_function, resolve};

/// Evaluate `node` to a final value.
pub fn eval(node: &Node, frame: &Frame) -> EvalResult {
    eval_node(node, frame, false)
}

/// Evaluate `node`; in tail position a call may come back as a thunk.
pub fn eval_node(node: &Node, frame: &Frame, tail: bool) -> EvalResult {
    ensure_sufficient_stack(|| eval_kind(node, frame, tail))
}

fn eval_kind(node: &Node, frame: &Frame, tail: bool) -> EvalResult {
    match &node.kind {
        NodeKind::Number(n) => Ok(Value::Number(*n)),
        NodeKind::Str(bytes) => Ok(Value::string(bytes.clone())),
        NodeKind::Bool(b) => Ok(Value::Bool(*b)),
        NodeKind::EmptyIdent => Ok(Value::Empty),
        NodeKind::Ident(name) => frame
            .get(name)
            .ok_or_else(|| undefined_variable(name).at(node.span)),
        NodeKind::Unary { op, operand } => {
            let value = eval(operand, frame)?;
            evaluate_unary(*op, &value).map_err(|e| e.at(node.span))
        }
        NodeKind::Binary {
            op: BinaryOp::Define,
            left,
            right,
        } => assign::eval_define(left, right, frame, node.span),
        NodeKind::Binary {
            op: BinaryOp::Accessor,
            left,
            right,
        } => assign::eval_access(left, right, frame, node.span),
        NodeKind::Binary { op, left, right } => {
            let left = eval(left, frame)?;
            let right = eval(right, frame)?;
            evaluate_binary(*op, &left, &right).map_err(|e| e.at(node.span))
        }
        NodeKind::Call { callee, args } => call::eval_call(callee, args, frame, tail, node.span),
        NodeKind::Match { scrutinee, clauses } => eval_match(scrutinee, clauses, frame, tail),
        NodeKind::ExprList(nodes) => eval_list(nodes, frame, tail),
        NodeKind::Object(entries) => eval_object(entries, frame),
        NodeKind::List(items) => eval_items(items, frame),
        NodeKind::Function(def) => Ok(Value::function(Arc::clone(def), frame.clone())),
    }
}

/// The scrutinee is evaluated once; clause targets in order until one is
/// equal to it.
fn eval_match(scrutinee: &Node, clauses: &[MatchClause], frame: &Frame, tail: bool) -> EvalResult {
    let value = eval(scrutinee, frame)?;
    for clause in clauses {
        let target = eval(&clause.target, frame)?;
        if value.equals(&target) {
            return eval_node(&clause.body, frame, tail);
        }
    }
    Ok(Value::Null)
}

/// A parenthesized sequence runs in its own scope; only the last
/// expression inherits the caller's tail position.
fn eval_list(nodes: &[Node], frame: &Frame, tail: bool) -> EvalResult {
    let Some((last, init)) = nodes.split_last() else {
        return Ok(Value::Null);
    };
    let scope = frame.child();
    for node in init {
        eval(node, &scope)?;
    }
    eval_node(last, &scope, tail)
}

fn eval_object(entries: &[ObjectEntry], frame: &Frame) -> EvalResult {
    let mut table = Table::default();
    for entry in entries {
        let key = property_key(&entry.key, frame)?;
        let value = eval(&entry.value, frame)?;
        table.insert(key, value);
    }
    Ok(Value::composite(table))
}

fn eval_items(items: &[Node], frame: &Frame) -> EvalResult {
    let mut table = Table::default();
    for (i, item) in items.iter().enumerate() {
        table.insert(i.to_string(), eval(item, frame)?);
    }
    Ok(Value::composite(table))
}
