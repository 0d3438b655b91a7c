//! One isolated program or module instance.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use ink_parse::Parser;
use tracing::trace;

use super::{Engine, EngineError};
use crate::environment::Frame;
use crate::errors::EvalResult;
use crate::exec;
use crate::native::NativeFunction;
use crate::value::{Composite, Value};

/// A global scope, the directory its relative paths resolve against, and
/// the engine it runs under.
pub struct Context {
    engine: Arc<Engine>,
    frame: Frame,
    cwd: PathBuf,
    file: Option<PathBuf>,
}

impl Context {
    pub(super) fn new(engine: Arc<Engine>, cwd: PathBuf, file: Option<PathBuf>) -> Self {
        Context {
            engine,
            frame: Frame::root(),
            cwd,
            file,
        }
    }

    pub fn engine(&self) -> &Arc<Engine> {
        &self.engine
    }

    /// The global frame.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Global bindings, shared with the frame.
    pub fn globals(&self) -> Composite {
        self.frame.vars().clone()
    }

    pub fn working_dir(&self) -> &Path {
        &self.cwd
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// Bind a host function as a global.
    pub fn define_native(
        self: &Arc<Self>,
        name: &str,
        func: impl Fn(&Arc<Context>, Vec<Value>) -> EvalResult + Send + Sync + 'static,
    ) {
        let native = NativeFunction::new(name, self, func);
        self.frame.set(name, Value::Native(native));
    }

    /// Lex, parse and evaluate `source` under the evaluation lock.
    ///
    /// Stops at the first error, which is reported through the engine and
    /// also returned.
    pub fn exec(self: &Arc<Self>, source: &str) -> Result<Value, EngineError> {
        let _guard = self.engine.lock.lock();
        let result = self.run(source);
        if let Err(err) = &result {
            self.engine.report(err, self.file());
        }
        result
    }

    fn run(&self, source: &str) -> Result<Value, EngineError> {
        let tokens = ink_lexer::lex(source)?;
        trace!(count = tokens.len(), "lexed");
        let mut last = Value::Null;
        for node in Parser::new(tokens) {
            last = exec::eval(&node?, &self.frame)?;
        }
        Ok(last)
    }

    /// Invoke an Ink callback from background work.
    ///
    /// Takes the evaluation lock for the duration of the call. Errors are
    /// reported since no Ink caller is waiting; the result is `None` then.
    pub fn call_back(self: &Arc<Self>, callback: &Value, args: Vec<Value>) -> Option<Value> {
        let _guard = self.engine.lock.lock();
        match exec::call_function(callback, args) {
            Ok(value) => Some(value),
            Err(err) => {
                self.engine.report(&EngineError::from(err), self.file());
                None
            }
        }
    }
}
