//! Standard streams: `in` and `out`.

use std::io::{self, BufRead};
use std::sync::Arc;

use ink_eval::{system_error, Context, EvalResult, NativeFunction, Value};
use tracing::debug;

use crate::{args, events};

pub(crate) fn install(ctx: &Arc<Context>) {
    ctx.define_native("in", read_stdin);
    ctx.define_native("out", out);
}

/// `out(s)`: write the bytes of `s` with no added newline.
fn out(ctx: &Arc<Context>, args: Vec<Value>) -> EvalResult {
    args::require("out", &args, 1)?;
    let bytes = args::string("out", &args, 0)?.to_vec();
    ctx.engine()
        .output()
        .write(&bytes)
        .map_err(|err| system_error(format!("could not write output: {err}")))?;
    Ok(Value::Null)
}

/// `in(cb)`: call `cb` with a data event for each stdin line, then an end
/// event at EOF. Reading stops early when `cb` returns `false` or the
/// returned `close` function is called.
fn read_stdin(ctx: &Arc<Context>, args: Vec<Value>) -> EvalResult {
    args::require("in", &args, 1)?;
    let cb = args::callback("in", &args, 0)?;

    let task_ctx = Arc::clone(ctx);
    let lease = ctx.engine().spawn_leased("in", move |lease| {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        while !lease.is_finished() {
            let mut line = Vec::new();
            let event = match input.read_until(b'\n', &mut line) {
                Ok(0) => {
                    if !lease.is_finished() {
                        task_ctx.call_back(&cb, vec![events::end()]);
                    }
                    break;
                }
                Ok(_) => {
                    if line.last() == Some(&b'\n') {
                        line.pop();
                    }
                    events::data(Value::string(line))
                }
                Err(err) => {
                    task_ctx.call_back(&cb, vec![events::error(format!("could not read stdin: {err}"))]);
                    break;
                }
            };
            if lease.is_finished() {
                break;
            }
            if let Some(Value::Bool(false)) = task_ctx.call_back(&cb, vec![event]) {
                break;
            }
        }
        debug!("stdin reader finished");
    });

    // The reader may stay blocked on stdin after closing, so close ends
    // the task's accounting itself rather than waiting for the thread.
    let close = NativeFunction::new("close", ctx, move |_, _| {
        lease.finish();
        Ok(Value::Null)
    });
    Ok(Value::Native(close))
}
