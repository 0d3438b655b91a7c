//! Argument checks shared by the natives.

use ink_eval::{wrong_arg_count, wrong_arg_type, EvalError, StrBuffer, Value};

/// Require at least `count` arguments. Extra arguments are ignored.
pub(crate) fn require(name: &str, args: &[Value], count: usize) -> Result<(), EvalError> {
    if args.len() < count {
        return Err(wrong_arg_count(name, count, args.len()));
    }
    Ok(())
}

pub(crate) fn number(name: &str, args: &[Value], index: usize) -> Result<f64, EvalError> {
    match &args[index] {
        Value::Number(n) => Ok(*n),
        other => Err(wrong_arg_type(name, index + 1, "number", other)),
    }
}

pub(crate) fn string(name: &str, args: &[Value], index: usize) -> Result<StrBuffer, EvalError> {
    match &args[index] {
        Value::Str(s) => Ok(s.clone()),
        other => Err(wrong_arg_type(name, index + 1, "string", other)),
    }
}

/// A function or native to be called back later.
pub(crate) fn callback(name: &str, args: &[Value], index: usize) -> Result<Value, EvalError> {
    match &args[index] {
        cb @ (Value::Function(_) | Value::Native(_)) => Ok(cb.clone()),
        other => Err(wrong_arg_type(name, index + 1, "function", other)),
    }
}
