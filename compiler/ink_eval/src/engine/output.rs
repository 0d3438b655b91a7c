//! Where program output and error reports go.
//!
//! The CLI writes to the process's stdout/stderr; tests capture both into
//! buffers. Dispatch is a plain enum match since the set is closed.

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Captures output and error reports in memory.
#[derive(Default)]
pub struct BufferOutput {
    out: Mutex<Vec<u8>>,
    err: Mutex<String>,
}

impl BufferOutput {
    pub fn new() -> Self {
        BufferOutput::default()
    }

    /// Everything written so far, lossily decoded.
    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.out.lock()).into_owned()
    }

    /// Every error report so far, one per line.
    pub fn errors(&self) -> String {
        self.err.lock().clone()
    }

    pub fn clear(&self) {
        self.out.lock().clear();
        self.err.lock().clear();
    }
}

pub enum OutputHandler {
    /// Process stdout and stderr.
    Stdio,
    Buffer(BufferOutput),
}

impl OutputHandler {
    /// Write program output verbatim.
    pub fn write(&self, bytes: &[u8]) -> io::Result<()> {
        match self {
            OutputHandler::Stdio => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(bytes)?;
                stdout.flush()
            }
            OutputHandler::Buffer(buffer) => {
                buffer.out.lock().extend_from_slice(bytes);
                Ok(())
            }
        }
    }

    /// Emit one error report line.
    pub fn report(&self, message: &str) {
        match self {
            OutputHandler::Stdio => eprintln!("{message}"),
            OutputHandler::Buffer(buffer) => {
                let mut err = buffer.err.lock();
                err.push_str(message);
                err.push('\n');
            }
        }
    }

    /// Captured output; empty for stdio.
    pub fn output(&self) -> String {
        match self {
            OutputHandler::Stdio => String::new(),
            OutputHandler::Buffer(buffer) => buffer.output(),
        }
    }

    /// Captured error reports; empty for stdio.
    pub fn errors(&self) -> String {
        match self {
            OutputHandler::Stdio => String::new(),
            OutputHandler::Buffer(buffer) => buffer.errors(),
        }
    }
}

pub type SharedOutput = Arc<OutputHandler>;

pub fn stdio_output() -> SharedOutput {
    Arc::new(OutputHandler::Stdio)
}

pub fn buffer_output() -> SharedOutput {
    Arc::new(OutputHandler::Buffer(BufferOutput::new()))
}
