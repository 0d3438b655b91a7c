//! Property access and `:=`.

use ink_ir::{format_number, BinaryOp, Node, NodeKind, Span};

use super::eval;
use crate::environment::Frame;
use crate::errors::{
    empty_assignment, invalid_assignment_target, invalid_key, non_string_byte_assignment,
    not_indexable, string_index_out_of_range, EvalError, EvalResult,
};
use crate::invariant;
use crate::value::{StrBuffer, Value};

/// Key text for the right side of `.` or an object literal key.
///
/// Identifiers and literals are used as written; anything else is evaluated
/// and must produce a string or a number.
pub fn property_key(node: &Node, frame: &Frame) -> Result<String, EvalError> {
    match &node.kind {
        NodeKind::Ident(name) => Ok(name.clone()),
        NodeKind::Str(bytes) => Ok(String::from_utf8_lossy(bytes).into_owned()),
        NodeKind::Number(n) => Ok(format_number(*n)),
        _ => match eval(node, frame)? {
            Value::Str(s) => Ok(s.to_string_lossy()),
            Value::Number(n) => Ok(format_number(n)),
            other => Err(invalid_key(&other).at(node.span)),
        },
    }
}

/// Read property `key` of `base`.
///
/// Missing composite entries and out-of-range string indices are `()`.
pub fn access(base: &Value, key: &str) -> EvalResult {
    match base {
        Value::Composite(c) => Ok(c.get(key).unwrap_or(Value::Null)),
        Value::Str(s) => Ok(string_index(key)
            .and_then(|i| s.byte_at(i))
            .map_or(Value::Null, |b| Value::string(vec![b]))),
        other => Err(not_indexable(key, other)),
    }
}

pub(super) fn eval_access(left: &Node, right: &Node, frame: &Frame, span: Span) -> EvalResult {
    let base = eval(left, frame)?;
    let key = property_key(right, frame)?;
    access(&base, &key).map_err(|e| e.at(span))
}

pub(super) fn eval_define(left: &Node, right: &Node, frame: &Frame, span: Span) -> EvalResult {
    match &left.kind {
        NodeKind::Ident(name) => {
            let value = eval(right, frame)?;
            if matches!(value, Value::Empty) {
                return Err(empty_assignment(name).at(span));
            }
            frame.set(name.clone(), value.clone());
            Ok(value)
        }
        NodeKind::Binary {
            op: BinaryOp::Accessor,
            left: base_node,
            right: key_node,
        } => {
            let base = eval(base_node, frame)?;
            let key = property_key(key_node, frame)?;
            match &base {
                Value::Composite(c) => {
                    let value = eval(right, frame)?;
                    c.set(key, value);
                    Ok(base)
                }
                Value::Str(buf) => {
                    let value = eval(right, frame)?;
                    assign_bytes(buf, &key, &value).map_err(|e| e.at(span))?;
                    if let Some(name) = base_node.as_ident() {
                        if frame.update(name, base.clone()).is_err() {
                            invariant::violation(&format!(
                                "string assignment target {name} has no binding"
                            ));
                        }
                    }
                    Ok(base)
                }
                other => Err(not_indexable(&key, other).at(span)),
            }
        }
        _ => Err(invalid_assignment_target(left).at(span)),
    }
}

/// Write the bytes of `value` into `buf` at index `key`.
fn assign_bytes(buf: &StrBuffer, key: &str, value: &Value) -> Result<(), EvalError> {
    let Value::Str(patch) = value else {
        return Err(non_string_byte_assignment(value));
    };
    // Copy first: the patch may be the buffer being written.
    let patch = patch.to_vec();
    let Some(index) = string_index(key) else {
        return Err(string_index_out_of_range(key, buf.len()));
    };
    buf.write_at(index, &patch)
        .map_err(|len| string_index_out_of_range(key, len))
}

fn string_index(key: &str) -> Option<usize> {
    key.parse::<usize>().ok()
}
