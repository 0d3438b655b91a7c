//! Unrecoverable interpreter faults.
//!
//! An invariant violation means the interpreter itself is in a state it
//! should never reach. The process stops with [`EXIT_CODE`] whatever the
//! engine's fatal mode says.

use tracing::error;

/// Exit status for invariant violations.
pub const EXIT_CODE: i32 = 100;

#[cold]
pub fn violation(message: &str) -> ! {
    error!(code = EXIT_CODE, "invariant violation: {message}");
    eprintln!("invariant violation: {message}");
    std::process::exit(EXIT_CODE)
}
