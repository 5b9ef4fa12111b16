//! Buffer-level error types.

use std::error::Error;
use std::fmt;

/// Errors raised by the fill strategies before touching memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BufferError {
    /// A pointer-walk fill was asked for zero elements. The walk writes
    /// before testing its bound, so it needs at least one slot.
    ZeroLength,
    /// The container's length after a resize differs from the request.
    LengthMismatch {
        /// Length that was requested.
        expected: usize,
        /// Length the container reported.
        actual: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroLength => write!(f, "pointer-walk fill needs at least one element"),
            Self::LengthMismatch { expected, actual } => {
                write!(f, "resize to {expected} left length {actual}")
            }
        }
    }
}

impl Error for BufferError {}
