//! Interactive read-eval-print loop.

use std::io::{self, BufRead};
use std::sync::Arc;

use ink_eval::Context;

const PROMPT: &[u8] = b"> ";

/// Evaluate `input` line by line in `ctx`, echoing each result.
///
/// Bindings persist across lines. Errors are reported by the engine and the
/// session carries on, so the engine should not be in fatal mode.
pub fn repl(ctx: &Arc<Context>, mut input: impl BufRead, prompt: bool) -> io::Result<()> {
    let output = ctx.engine().output();
    let mut line = String::new();
    loop {
        if prompt {
            output.write(PROMPT)?;
        }
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let source = line.trim();
        if source.is_empty() {
            continue;
        }
        if let Ok(value) = ctx.exec(source) {
            let mut echo = value.to_plain_string();
            echo.push('\n');
            output.write(echo.as_bytes())?;
        }
    }
    if prompt {
        output.write(b"\n")?;
    }
    Ok(())
}
