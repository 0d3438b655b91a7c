//! Numeric natives.

use std::sync::Arc;

use ink_eval::{math_domain, Context, EvalResult, Value};

use crate::args;

pub(crate) fn install(ctx: &Arc<Context>) {
    ctx.define_native("sin", |_, args| unary("sin", &args, f64::sin));
    ctx.define_native("cos", |_, args| unary("cos", &args, f64::cos));
    ctx.define_native("asin", asin);
    ctx.define_native("acos", acos);
    ctx.define_native("pow", pow);
    ctx.define_native("ln", ln);
    ctx.define_native("floor", |_, args| unary("floor", &args, f64::floor));
}

fn unary(name: &str, args: &[Value], op: fn(f64) -> f64) -> EvalResult {
    args::require(name, args, 1)?;
    Ok(Value::Number(op(args::number(name, args, 0)?)))
}

fn unit_range(name: &str, args: &[Value]) -> Result<f64, ink_eval::EvalError> {
    args::require(name, args, 1)?;
    let n = args::number(name, args, 0)?;
    if !(-1.0..=1.0).contains(&n) {
        return Err(math_domain(format!("cannot take {name} of {n}, outside [-1, 1]")));
    }
    Ok(n)
}

fn asin(_ctx: &Arc<Context>, args: Vec<Value>) -> EvalResult {
    Ok(Value::Number(unit_range("asin", &args)?.asin()))
}

fn acos(_ctx: &Arc<Context>, args: Vec<Value>) -> EvalResult {
    Ok(Value::Number(unit_range("acos", &args)?.acos()))
}

/// `pow(base, exp)`. `0^0` and fractional powers of negative numbers are
/// errors rather than NaN.
fn pow(_ctx: &Arc<Context>, args: Vec<Value>) -> EvalResult {
    args::require("pow", &args, 2)?;
    let base = args::number("pow", &args, 0)?;
    let exp = args::number("pow", &args, 1)?;
    if base == 0.0 && exp == 0.0 {
        return Err(math_domain("0^0 is not defined"));
    }
    if base < 0.0 && exp.fract() != 0.0 {
        return Err(math_domain(format!(
            "cannot raise negative number {base} to fractional power {exp}"
        )));
    }
    Ok(Value::Number(base.powf(exp)))
}

fn ln(_ctx: &Arc<Context>, args: Vec<Value>) -> EvalResult {
    args::require("ln", &args, 1)?;
    let n = args::number("ln", &args, 0)?;
    if n <= 0.0 {
        return Err(math_domain(format!("cannot take natural logarithm of {n}")));
    }
    Ok(Value::Number(n.ln()))
}
