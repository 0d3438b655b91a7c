//! Execution engine.
//!
//! One [`Engine`] per process coordinates every running program:
//!
//! - a single evaluation lock, so at most one thread evaluates Ink code at a
//!   time;
//! - a live-task counter for native work running on background threads,
//!   which [`Engine::wait_idle`] drains before the process exits;
//! - a registry of loaded modules keyed by canonical path, so each file is
//!   executed once per engine and import cycles terminate.
//!
//! Background work re-enters evaluation only through
//! [`Context::call_back`], which takes the lock first.

mod builder;
mod context;
mod error;
mod lock;
pub mod output;


use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use tracing::{debug, error, warn};

pub use builder::{EngineBuilder, EngineConfig, Prelude};
pub use context::Context;
pub use error::{EngineError, RUNTIME_ERROR, SYNTAX_ERROR, SYSTEM_ERROR};
pub use output::{BufferOutput, OutputHandler};

use crate::value::Value;
use lock::{EvalLock, TaskCounter};

pub struct Engine {
    config: EngineConfig,
    lock: EvalLock,
    tasks: TaskCounter,
    modules: Mutex<FxHashMap<PathBuf, Arc<Context>>>,
}

impl Engine {
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    fn with_config(config: EngineConfig) -> Self {
        Engine {
            config,
            lock: EvalLock::default(),
            tasks: TaskCounter::default(),
            modules: Mutex::new(FxHashMap::default()),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn output(&self) -> &OutputHandler {
        &self.config.output
    }

    pub fn args(&self) -> &[String] {
        &self.config.args
    }

    /// A new isolated global scope with the prelude installed.
    pub fn create_context(self: &Arc<Self>, cwd: PathBuf, file: Option<PathBuf>) -> Arc<Context> {
        let ctx = Arc::new(Context::new(Arc::clone(self), cwd, file));
        if let Some(prelude) = self.config.prelude {
            prelude(&ctx);
        }
        ctx
    }

    /// Run `source` as a program in a fresh context rooted at the current
    /// directory.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn exec(self: &Arc<Self>, source: &str) -> Result<Value, EngineError> {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        self.create_context(cwd, None).exec(source)
    }

    /// Read `reader` to the end and run it like [`Engine::exec`].
    pub fn exec_reader(self: &Arc<Self>, mut reader: impl Read) -> Result<Value, EngineError> {
        let mut source = String::new();
        if let Err(source_err) = reader.read_to_string(&mut source) {
            let err = EngineError::Io {
                path: PathBuf::from("<input>"),
                source: source_err,
            };
            self.report(&err, None);
            return Err(err);
        }
        self.exec(&source)
    }

    /// Run the program in `path`. Relative imports resolve against the
    /// file's directory.
    #[tracing::instrument(level = "debug", skip(self), fields(path = %path.display()))]
    pub fn exec_path(self: &Arc<Self>, path: &Path) -> Result<Value, EngineError> {
        let result = if path.is_absolute() {
            fs::read_to_string(path).map_err(|source| EngineError::Io {
                path: path.to_path_buf(),
                source,
            })
        } else {
            Err(EngineError::RelativePath {
                path: path.to_path_buf(),
            })
        };
        let source = match result {
            Ok(source) => source,
            Err(err) => {
                self.report(&err, Some(path));
                return Err(err);
            }
        };
        let cwd = path.parent().map_or_else(|| PathBuf::from("/"), Path::to_path_buf);
        self.create_context(cwd, Some(path.to_path_buf())).exec(&source)
    }

    /// Load the module at `path` on behalf of `importer`, executing it on
    /// first use.
    ///
    /// Must be called with the evaluation lock held; it is released while
    /// the module runs and taken back before returning.
    pub fn load_module(
        self: &Arc<Self>,
        importer: &Context,
        path: &str,
    ) -> Result<Arc<Context>, EngineError> {
        let file = if path.ends_with(".ink") {
            importer.working_dir().join(path)
        } else {
            importer.working_dir().join(format!("{path}.ink"))
        };
        let canonical = fs::canonicalize(&file).map_err(|source| EngineError::Io {
            path: file.clone(),
            source,
        })?;

        if let Some(ctx) = self.modules.lock().get(&canonical) {
            debug!(path = %canonical.display(), "module already loaded");
            return Ok(Arc::clone(ctx));
        }

        let source = fs::read_to_string(&canonical).map_err(|source| EngineError::Io {
            path: canonical.clone(),
            source,
        })?;
        let cwd = canonical
            .parent()
            .map_or_else(|| PathBuf::from("/"), Path::to_path_buf);
        let ctx = self.create_context(cwd, Some(canonical.clone()));
        self.modules.lock().insert(canonical.clone(), Arc::clone(&ctx));

        debug!(path = %canonical.display(), "loading module");
        let _reacquire = self.lock.release_temporarily();
        if ctx.exec(&source).is_err() {
            warn!(path = %canonical.display(), "module stopped on an error");
        }
        Ok(ctx)
    }

    /// The registered context for a canonical module path.
    pub fn module(&self, canonical: &Path) -> Option<Arc<Context>> {
        self.modules.lock().get(canonical).cloned()
    }

    /// Run `work` on a background thread, counting it as live until it
    /// returns or unwinds.
    pub fn spawn_task(self: &Arc<Self>, name: &str, work: impl FnOnce() + Send + 'static) {
        self.spawn_leased(name, move |_| work());
    }

    /// Like [`Engine::spawn_task`], but hands back the task's [`TaskLease`]
    /// so the task can stop counting as live before its thread returns.
    ///
    /// Used for work blocked in calls that cannot be interrupted: whoever
    /// cancels it finishes the lease, and the stray thread no longer holds
    /// [`Engine::wait_idle`] open.
    pub fn spawn_leased(
        self: &Arc<Self>,
        name: &str,
        work: impl FnOnce(&TaskLease) + Send + 'static,
    ) -> TaskLease {
        self.tasks.begin();
        let lease = TaskLease {
            engine: Arc::clone(self),
            finished: Arc::new(AtomicBool::new(false)),
        };
        let guard = FinishOnDrop(lease.clone());
        debug!(task = name, "spawning task");
        let spawned = thread::Builder::new()
            .name(format!("ink-{name}"))
            .spawn(move || {
                let guard = guard;
                work(&guard.0);
            });
        // On failure the closure, and with it the guard, is dropped here.
        if let Err(err) = spawned {
            error!(task = name, %err, "could not spawn background task");
        }
        lease
    }

    /// Number of background tasks still running.
    pub fn live_tasks(&self) -> usize {
        self.tasks.live()
    }

    /// Block until every background task has finished.
    pub fn wait_idle(&self) {
        self.tasks.wait_idle();
    }

    /// Report an error that has no caller left to return to. In fatal mode
    /// this ends the process.
    pub fn report(&self, err: &EngineError, file: Option<&Path>) {
        let message = match file {
            Some(path) => format!("{}: {err}", path.display()),
            None => err.to_string(),
        };
        error!(reason = err.reason(), "{message}");
        self.config.output.report(&message);
        if self.config.fatal {
            std::process::exit(err.reason());
        }
    }
}

/// Live-task accounting for one background task.
///
/// The task stops counting as live the first time any clone calls
/// [`TaskLease::finish`]; later calls do nothing.
#[derive(Clone)]
pub struct TaskLease {
    engine: Arc<Engine>,
    finished: Arc<AtomicBool>,
}

impl TaskLease {
    pub fn finish(&self) {
        if !self.finished.swap(true, Ordering::SeqCst) {
            self.engine.tasks.finish();
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished.load(Ordering::SeqCst)
    }
}

/// Finishes the lease when the task's thread returns or unwinds.
struct FinishOnDrop(TaskLease);

impl Drop for FinishOnDrop {
    fn drop(&mut self) {
        self.0.finish();
    }
}
