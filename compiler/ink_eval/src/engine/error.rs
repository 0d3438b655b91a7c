//! Engine-level errors and their process exit codes.

use std::io;
use std::path::PathBuf;

use ink_lexer::LexError;
use ink_parse::SyntaxError;
use thiserror::Error;

use crate::errors::{ErrorCategory, EvalError};

/// Exit status of a syntax error.
pub const SYNTAX_ERROR: i32 = 1;
/// Exit status of a runtime error.
pub const RUNTIME_ERROR: i32 = 2;
/// Exit status of a failed host resource.
pub const SYSTEM_ERROR: i32 = 40;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error("system error: could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("system error: {} is not an absolute path", path.display())]
    RelativePath { path: PathBuf },
}

impl EngineError {
    /// Process exit status for this error in fatal mode.
    pub fn reason(&self) -> i32 {
        match self {
            EngineError::Lex(_) | EngineError::Syntax(_) => SYNTAX_ERROR,
            EngineError::Eval(err) => match err.category() {
                ErrorCategory::Runtime => RUNTIME_ERROR,
                ErrorCategory::System => SYSTEM_ERROR,
            },
            EngineError::Io { .. } | EngineError::RelativePath { .. } => SYSTEM_ERROR,
        }
    }
}
