//! Native built-ins for Ink.
//!
//! [`install`] binds the whole library into a context's global frame; pass
//! it to `EngineBuilder::prelude` so every program and module gets it.
//!
//! Natives that touch the filesystem, stdin or timers do their work on a
//! background task and report back through a callback, which receives an
//! event composite whose `type` is `'data'`, `'end'` or `'error'`.

#![allow(
    clippy::needless_pass_by_value,
    reason = "every native shares one signature that hands over its argument list"
)]

mod args;
mod convert;
mod events;
mod fs;
mod io;
mod math;
mod system;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use ink_eval::Context;

/// Install every built-in into `ctx`.
pub fn install(ctx: &Arc<Context>) {
    system::install(ctx);
    io::install(ctx);
    fs::install(ctx);
    math::install(ctx);
    convert::install(ctx);
}
