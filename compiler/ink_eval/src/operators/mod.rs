//! Unary and binary operator semantics.
//!
//! The value set is closed, so each operator is a direct match over operand
//! pairs. Assignment and property access are not here: they need the
//! unevaluated operand nodes and live in the evaluator.

use std::cmp::Ordering;

use ink_ir::{BinaryOp, UnaryOp};

use crate::errors::{
    division_by_zero, invalid_unary_operand, modulo_by_zero, non_integer_operands,
    unsupported_operands, EvalError, EvalResult,
};
use crate::invariant;
use crate::value::Value;

#[cfg(test)]
mod tests;

pub fn evaluate_unary(op: UnaryOp, operand: &Value) -> EvalResult {
    match (op, operand) {
        (UnaryOp::Negate, Value::Number(n)) => Ok(Value::Number(-n)),
        (UnaryOp::Negate, Value::Bool(b)) => Ok(Value::Bool(!b)),
        (UnaryOp::Negate, _) => Err(invalid_unary_operand(op, operand)),
    }
}

/// Apply an eagerly evaluated binary operator.
pub fn evaluate_binary(op: BinaryOp, left: &Value, right: &Value) -> EvalResult {
    match op {
        BinaryOp::Add => add(left, right),
        BinaryOp::Sub => numeric(op, left, right, |a, b| a - b),
        BinaryOp::Mul => match (left, right) {
            (Value::Bool(a), Value::Bool(b)) => Ok(Value::Bool(*a && *b)),
            _ => numeric(op, left, right, |a, b| a * b),
        },
        BinaryOp::Div => match (left, right) {
            (Value::Number(_), Value::Number(b)) if *b == 0.0 => Err(division_by_zero()),
            _ => numeric(op, left, right, |a, b| a / b),
        },
        BinaryOp::Mod => modulus(left, right),
        BinaryOp::Gt | BinaryOp::Lt => compare(op, left, right),
        BinaryOp::Eq => Ok(Value::Bool(left.equals(right))),
        BinaryOp::And | BinaryOp::Or | BinaryOp::Xor => logical(op, left, right),
        BinaryOp::Define | BinaryOp::Accessor => invariant::violation(&format!(
            "operator {} reached eager binary evaluation",
            op.as_symbol()
        )),
    }
}

fn add(left: &Value, right: &Value) -> EvalResult {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::Str(a), Value::Str(b)) => {
            let mut joined = a.to_vec();
            joined.extend_from_slice(&b.to_vec());
            Ok(Value::string(joined))
        }
        (Value::Bool(a), Value::Bool(b)) => Ok(Value::Bool(*a || *b)),
        _ => Err(unsupported_operands(BinaryOp::Add, left, right)),
    }
}

fn numeric(op: BinaryOp, left: &Value, right: &Value, f: fn(f64, f64) -> f64) -> EvalResult {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(f(*a, *b))),
        _ => Err(unsupported_operands(op, left, right)),
    }
}

/// `n` as an `i64` when it has no fractional part.
fn as_integer(n: f64) -> Option<i64> {
    let truncated = n as i64;
    (truncated as f64 == n).then_some(truncated)
}

fn integer_pair(op: BinaryOp, left: &Value, right: &Value) -> Result<(i64, i64), EvalError> {
    let (Value::Number(a), Value::Number(b)) = (left, right) else {
        return Err(unsupported_operands(op, left, right));
    };
    match (as_integer(*a), as_integer(*b)) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(non_integer_operands(op, left, right)),
    }
}

fn modulus(left: &Value, right: &Value) -> EvalResult {
    if matches!(right, Value::Number(b) if *b == 0.0) && matches!(left, Value::Number(_)) {
        return Err(modulo_by_zero());
    }
    let (a, b) = integer_pair(BinaryOp::Mod, left, right)?;
    Ok(Value::Number(a.wrapping_rem(b) as f64))
}

/// `>` and `<` over numbers and byte strings.
fn compare(op: BinaryOp, left: &Value, right: &Value) -> EvalResult {
    let ordering = match (left, right) {
        (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
        (Value::Str(a), Value::Str(b)) => Some(a.to_vec().cmp(&b.to_vec())),
        _ => return Err(unsupported_operands(op, left, right)),
    };
    let wanted = if op == BinaryOp::Gt {
        Ordering::Greater
    } else {
        Ordering::Less
    };
    Ok(Value::Bool(ordering == Some(wanted)))
}

fn logical(op: BinaryOp, left: &Value, right: &Value) -> EvalResult {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => Ok(Value::Bool(match op {
            BinaryOp::And => *a && *b,
            BinaryOp::Or => *a || *b,
            _ => a != b,
        })),
        (Value::Number(_), Value::Number(_)) => {
            let (a, b) = integer_pair(op, left, right)?;
            let bits = match op {
                BinaryOp::And => a & b,
                BinaryOp::Or => a | b,
                _ => a ^ b,
            };
            Ok(Value::Number(bits as f64))
        }
        (Value::Str(a), Value::Str(b)) => {
            let (a, b) = (a.to_vec(), b.to_vec());
            let len = a.len().max(b.len());
            let bytes = (0..len)
                .map(|i| {
                    let x = a.get(i).copied().unwrap_or(0);
                    let y = b.get(i).copied().unwrap_or(0);
                    match op {
                        BinaryOp::And => x & y,
                        BinaryOp::Or => x | y,
                        _ => x ^ y,
                    }
                })
                .collect::<Vec<u8>>();
            Ok(Value::string(bytes))
        }
        _ => Err(unsupported_operands(op, left, right)),
    }
}
