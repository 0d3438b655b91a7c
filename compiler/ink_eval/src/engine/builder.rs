//! `EngineBuilder` for configuring an [`Engine`].

use std::sync::Arc;

use super::output::{stdio_output, SharedOutput};
use super::{Context, Engine};

/// Installs built-ins into a freshly created context.
pub type Prelude = fn(&Arc<Context>);

/// Settings shared by every context of one engine.
pub struct EngineConfig {
    /// Exit the process on the first reported error.
    pub fatal: bool,
    /// Program arguments exposed to Ink code.
    pub args: Vec<String>,
    /// Run on every new context before any program code.
    pub prelude: Option<Prelude>,
    pub output: SharedOutput,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            fatal: false,
            args: Vec::new(),
            prelude: None,
            output: stdio_output(),
        }
    }
}

#[derive(Default)]
pub struct EngineBuilder {
    config: EngineConfig,
}

impl EngineBuilder {
    pub fn new() -> Self {
        EngineBuilder::default()
    }

    /// Terminate the process on the first unrecovered error.
    #[must_use]
    pub fn fatal(mut self, fatal: bool) -> Self {
        self.config.fatal = fatal;
        self
    }

    #[must_use]
    pub fn args(mut self, args: Vec<String>) -> Self {
        self.config.args = args;
        self
    }

    #[must_use]
    pub fn prelude(mut self, prelude: Prelude) -> Self {
        self.config.prelude = Some(prelude);
        self
    }

    /// Direct program output and error reports. Default is stdio.
    #[must_use]
    pub fn output(mut self, output: SharedOutput) -> Self {
        self.config.output = output;
        self
    }

    pub fn build(self) -> Arc<Engine> {
        Arc::new(Engine::with_config(self.config))
    }
}
