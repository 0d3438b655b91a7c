//! Modules, process and clock natives: `load`, `args`, `exit`, `time`,
//! `wait`.

use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use ink_eval::{invalid_argument, system_error, Composite, Context, EvalResult, Value};
use tracing::debug;

use crate::args;

pub(crate) fn install(ctx: &Arc<Context>) {
    ctx.define_native("load", load);
    ctx.define_native("args", program_args);
    ctx.define_native("exit", exit);
    ctx.define_native("time", time);
    ctx.define_native("wait", wait);
}

/// `load(path)`: the global scope of the module at `path`, relative to the
/// calling program's directory.
fn load(ctx: &Arc<Context>, args: Vec<Value>) -> EvalResult {
    args::require("load", &args, 1)?;
    let path = args::string("load", &args, 0)?.to_string_lossy();
    let module = ctx
        .engine()
        .load_module(ctx, &path)
        .map_err(|err| system_error(err.to_string()))?;
    Ok(Value::Composite(module.globals()))
}

fn program_args(ctx: &Arc<Context>, _args: Vec<Value>) -> EvalResult {
    let list: Composite = ctx
        .engine()
        .args()
        .iter()
        .enumerate()
        .map(|(i, arg)| (i.to_string(), Value::from(arg.as_str())))
        .collect();
    Ok(Value::Composite(list))
}

fn exit(_ctx: &Arc<Context>, args: Vec<Value>) -> EvalResult {
    args::require("exit", &args, 1)?;
    let code = args::number("exit", &args, 0)?;
    debug!(code, "exit requested");
    std::process::exit(code as i32)
}

/// Seconds since the Unix epoch, fractional.
fn time(_ctx: &Arc<Context>, _args: Vec<Value>) -> EvalResult {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|err| system_error(format!("system clock is before 1970: {err}")))?;
    Ok(Value::Number(elapsed.as_secs_f64()))
}

/// `wait(seconds, cb)`: call `cb()` once `seconds` have passed.
fn wait(ctx: &Arc<Context>, args: Vec<Value>) -> EvalResult {
    args::require("wait", &args, 2)?;
    let seconds = args::number("wait", &args, 0)?;
    let cb = args::callback("wait", &args, 1)?;
    let delay = Duration::try_from_secs_f64(seconds.max(0.0))
        .map_err(|err| invalid_argument("wait", format!("invalid duration {seconds}: {err}")))?;

    let task_ctx = Arc::clone(ctx);
    ctx.engine().spawn_task("wait", move || {
        std::thread::sleep(delay);
        task_ctx.call_back(&cb, Vec::new());
    });
    Ok(Value::Null)
}
