//! Type inspection and conversion natives.

use std::sync::Arc;

use ink_eval::{invalid_argument, wrong_arg_type, Composite, Context, EvalResult, Value};

use crate::args;

pub(crate) fn install(ctx: &Arc<Context>) {
    ctx.define_native("string", string);
    ctx.define_native("number", number);
    ctx.define_native("point", point);
    ctx.define_native("char", char_of);
    ctx.define_native("type", type_of);
    ctx.define_native("len", len);
    ctx.define_native("keys", keys);
}

fn string(_ctx: &Arc<Context>, args: Vec<Value>) -> EvalResult {
    args::require("string", &args, 1)?;
    Ok(Value::from(args[0].to_plain_string().as_str()))
}

/// Strings that do not parse as a number give `()`.
fn number(_ctx: &Arc<Context>, args: Vec<Value>) -> EvalResult {
    args::require("number", &args, 1)?;
    match &args[0] {
        Value::Number(n) => Ok(Value::Number(*n)),
        Value::Bool(b) => Ok(Value::Number(if *b { 1.0 } else { 0.0 })),
        Value::Str(s) => Ok(s
            .to_string_lossy()
            .trim()
            .parse::<f64>()
            .map_or(Value::Null, Value::Number)),
        other => Err(wrong_arg_type("number", 1, "string", other)),
    }
}

/// Byte value of the first byte of a string.
fn point(_ctx: &Arc<Context>, args: Vec<Value>) -> EvalResult {
    args::require("point", &args, 1)?;
    let s = args::string("point", &args, 0)?;
    match s.byte_at(0) {
        Some(byte) => Ok(Value::Number(f64::from(byte))),
        None => Err(invalid_argument("point", "cannot take point of empty string")),
    }
}

/// The UTF-8 encoding of code point `n`. Fractional `n` is rejected
/// rather than truncated.
fn char_of(_ctx: &Arc<Context>, args: Vec<Value>) -> EvalResult {
    args::require("char", &args, 1)?;
    let n = args::number("char", &args, 0)?;
    let c = ((0.0..=f64::from(u32::MAX)).contains(&n) && n.fract() == 0.0)
        .then(|| char::from_u32(n as u32))
        .flatten()
        .ok_or_else(|| invalid_argument("char", format!("{n} is not a valid code point")))?;
    Ok(Value::from(c.to_string().as_str()))
}

fn type_of(_ctx: &Arc<Context>, args: Vec<Value>) -> EvalResult {
    args::require("type", &args, 1)?;
    Ok(Value::from(args[0].type_name()))
}

/// Entry count of a composite or byte length of a string.
fn len(_ctx: &Arc<Context>, args: Vec<Value>) -> EvalResult {
    args::require("len", &args, 1)?;
    match &args[0] {
        Value::Composite(c) => Ok(Value::Number(c.len() as f64)),
        Value::Str(s) => Ok(Value::Number(s.len() as f64)),
        other => Err(wrong_arg_type("len", 1, "composite or string", other)),
    }
}

/// Keys of a composite as a list, in sorted order.
fn keys(_ctx: &Arc<Context>, args: Vec<Value>) -> EvalResult {
    args::require("keys", &args, 1)?;
    let Value::Composite(c) = &args[0] else {
        return Err(wrong_arg_type("keys", 1, "composite", &args[0]));
    };
    let list: Composite = c
        .keys()
        .into_iter()
        .enumerate()
        .map(|(i, key)| (i.to_string(), Value::from(key.as_str())))
        .collect();
    Ok(Value::Composite(list))
}
