//! The halt-on-failure policy.
//!
//! Filesystem operations return [`FsOpError`]; callers that want the
//! historical "log and terminate" behaviour apply [`HaltOnFailure::or_halt`]
//! at the outermost call site. Library code never exits the process.

use crate::fs_op::FsOpError;

/// Exit status used when a filesystem operation halts the process.
pub const HALT_EXIT_CODE: i32 = 1;

pub trait HaltOnFailure<T> {
    /// Unwrap the value, or report the error and exit with
    /// [`HALT_EXIT_CODE`].
    fn or_halt(self) -> T;
}

impl<T> HaltOnFailure<T> for Result<T, FsOpError> {
    fn or_halt(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => halt(&e),
        }
    }
}

/// Report `err` and terminate the process. No cleanup runs.
pub fn halt(err: &FsOpError) -> ! {
    tracing::error!(op = %err.op(), "{err}");
    eprintln!("fileops: {err}");
    std::process::exit(HALT_EXIT_CODE)
}
