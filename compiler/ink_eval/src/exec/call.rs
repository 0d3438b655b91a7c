//! Function calls and the tail-call trampoline.

use ink_ir::{Node, Param, Span};
use tracing::trace;

use super::{eval, eval_node};
use crate::environment::Frame;
use crate::errors::{not_callable, EvalResult};
use crate::value::{CallThunk, FunctionValue, Table, Value};

pub(super) fn eval_call(
    callee: &Node,
    args: &[Node],
    frame: &Frame,
    tail: bool,
    span: Span,
) -> EvalResult {
    let func = eval(callee, frame)?;
    let mut values = Vec::with_capacity(args.len());
    for arg in args {
        values.push(eval(arg, frame)?);
    }
    let result = apply(&func, values).map_err(|e| e.at(span))?;
    if tail {
        Ok(result)
    } else {
        resolve(result)
    }
}

/// Bind a call without running it.
///
/// Functions come back as a [`Value::Thunk`]; natives run immediately and
/// return their result.
pub fn apply(func: &Value, args: Vec<Value>) -> EvalResult {
    match func {
        Value::Function(function) => Ok(Value::Thunk(Box::new(bind(function, args)))),
        Value::Native(native) => {
            trace!(name = native.name(), "native call");
            native.call(args)
        }
        other => Err(not_callable(other)),
    }
}

/// Call `func` with `args` and run it to completion.
pub fn call_function(func: &Value, args: Vec<Value>) -> EvalResult {
    resolve(apply(func, args)?)
}

/// Run deferred calls until a final value comes out.
pub fn resolve(mut value: Value) -> EvalResult {
    while let Value::Thunk(thunk) = value {
        let CallThunk { bindings, function } = *thunk;
        trace!(function = %function.def, "trampoline");
        let frame = Frame::with_bindings(&function.env, bindings);
        value = eval_node(&function.def.body, &frame, true)?;
    }
    Ok(value)
}

/// Pair declared parameters with arguments. Missing arguments leave their
/// parameter unbound; extra arguments are dropped.
fn bind(function: &FunctionValue, args: Vec<Value>) -> CallThunk {
    let mut bindings = Table::default();
    for (param, arg) in function.def.params.iter().zip(args) {
        if let Param::Named(name) = param {
            bindings.insert(name.clone(), arg);
        }
    }
    CallThunk {
        bindings,
        function: function.clone(),
    }
}
