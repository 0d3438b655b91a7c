//! Built-in tests, grouped by native module.
//!
//! Programs run against an engine with buffered output so results can be
//! read back after background tasks drain.

mod fs_tests;

use std::path::Path;
use std::sync::Arc;

use ink_eval::engine::output::buffer_output;
use ink_eval::{Engine, EngineError, Value};

pub(crate) fn engine() -> Arc<Engine> {
    Engine::builder()
        .output(buffer_output())
        .prelude(crate::install)
        .build()
}

/// Run `source` with its working directory at `dir`, wait for background
/// work, and return the program's value with everything it wrote.
pub(crate) fn run_in(dir: &Path, source: &str) -> (Result<Value, EngineError>, String) {
    let engine = engine();
    let ctx = engine.create_context(dir.to_path_buf(), None);
    let result = ctx.exec(source);
    engine.wait_idle();
    (result, engine.output().output())
}

/// Canonical string of the program's final value.
pub(crate) fn show(source: &str) -> String {
    let engine = engine();
    match engine.exec(source) {
        Ok(value) => value.to_plain_string(),
        Err(err) => format!("error: {err}"),
    }
}

/// Message of the error the program stops on.
pub(crate) fn run_err(source: &str) -> String {
    let engine = engine();
    match engine.exec(source) {
        Ok(value) => panic!("expected an error, got {value:?}"),
        Err(err) => err.to_string(),
    }
}
