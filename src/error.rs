//! Process exit codes.

/// Exit codes for the dupes application.
///
/// - 0: Success (scan ran, whatever it found or failed to read)
/// - 1: General error (no directory given, or output could not be written)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success: Scanning started and a report was printed.
    Success = 0,
    /// General error: Missing arguments or an unexpected failure.
    GeneralError = 1,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}
