//! Tree-walking evaluator and execution engine for Ink.
//!
//! - [`value`]: the runtime value model and its shared buffers
//! - [`environment`]: chained lexical frames
//! - [`exec`]: node evaluation with thunk-based tail calls
//! - [`engine`]: the evaluation lock, async task accounting, module registry
//!   and per-program [`Context`]s
//!
//! Native built-ins are plugged in through [`NativeFunction`]; the standard
//! set lives in `ink_std`.

pub mod engine;
pub mod environment;
mod errors;
pub mod exec;
pub mod invariant;
mod native;
mod operators;
pub mod value;

pub use engine::{
    Context, Engine, EngineBuilder, EngineConfig, EngineError, OutputHandler, TaskLease,
};
pub use environment::Frame;
pub use errors::*;
pub use native::{NativeFn, NativeFunction};
pub use operators::{evaluate_binary, evaluate_unary};
pub use value::{CallThunk, Composite, FunctionValue, StrBuffer, Table, Value};
