//! Outcomes of bounded writes.

use core::fmt::Display;

/// fixstr result type.
pub type Result<T> = core::result::Result<T, Error>;

/// Reasons a bounded write did not complete as requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// The destination has no capacity at all. Nothing has been written.
    InvalidTarget,
    /// The content did not fit. What fits has been written and the destination is still
    /// NUL-terminated.
    Truncated,
}

impl Error {
    /// Numeric sentinel used by C-style callers. Both variants share `-1`.
    pub const fn code(&self) -> i32 {
        -1
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidTarget => f.write_str("destination buffer has no capacity"),
            Error::Truncated => f.write_str("content truncated to fit destination buffer"),
        }
    }
}

impl core::error::Error for Error {}

/// Maps `result` to the C-style status code: `0` on success, `-1` otherwise.
pub fn status<T>(result: &Result<T>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(e) => e.code(),
    }
}
