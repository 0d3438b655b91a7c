//! Front end for the Ink interpreter: argument parsing, tracing setup, and
//! the run and REPL entry points behind the `ink` binary.

mod options;
mod repl;


use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Once};

use ink_eval::{Engine, EngineError, Value};
use tracing::debug;

pub use options::{parse_args, Command, Options};
pub use repl::repl;

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber, once per process.
///
/// The filter comes from `INK_LOG`, then `RUST_LOG`. Without either,
/// `verbose` turns on `debug` output and otherwise nothing is installed.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        let directives = std::env::var("INK_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok();
        let filter = match (directives, verbose) {
            (Some(directives), _) => EnvFilter::new(directives),
            (None, true) => EnvFilter::new("debug"),
            (None, false) => return,
        };
        tracing_subscriber::registry()
            .with(
                HierarchicalLayer::new(2)
                    .with_targets(true)
                    .with_indent_lines(true),
            )
            .with(filter)
            .init();
    });
}

/// Build the engine `options` describe, with the full native library.
pub fn engine_for(options: &Options) -> Arc<Engine> {
    Engine::builder()
        .fatal(options.fatal && !options.starts_repl())
        .args(options.program_args())
        .prelude(ink_std::install)
        .build()
}

/// Run what `options` ask for and return the process exit status.
///
/// Background work is drained before returning. In fatal mode the first
/// unrecovered error ends the process from inside the engine instead.
pub fn run(options: &Options) -> i32 {
    init_tracing(options.verbose);
    let engine = engine_for(options);

    let mut status = 0;
    if let Some(source) = &options.eval {
        status = exit_status(&engine.exec(source));
    } else if let Some(file) = &options.file {
        status = match absolute(file) {
            Ok(path) => exit_status(&engine.exec_path(&path)),
            Err(err) => {
                let err = EngineError::Io {
                    path: file.clone(),
                    source: err,
                };
                engine.report(&err, None);
                err.reason()
            }
        };
    }
    engine.wait_idle();

    if options.starts_repl() {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let ctx = engine.create_context(cwd, None);
        let stdin = io::stdin();
        let prompt = stdin.is_terminal();
        if let Err(err) = repl(&ctx, stdin.lock(), prompt) {
            eprintln!("error: could not read input: {err}");
            status = 1;
        }
        engine.wait_idle();
    }

    debug!(status, "exiting");
    status
}

fn exit_status(result: &Result<Value, EngineError>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(err) => err.reason(),
    }
}

fn absolute(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}
