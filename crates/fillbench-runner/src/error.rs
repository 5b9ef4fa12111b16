//! Errors surfaced to the program boundary.

use std::error::Error;
use std::fmt;
use std::io;

use fillbench_buffer::BufferError;

use crate::config::ConfigError;
use crate::phase::Phase;

/// Fatal outcomes of a benchmark run.
///
/// The first two are the conditions the benchmark itself checks for;
/// their `Display` output is the exact diagnostic line written to
/// stderr. [`exit_code()`](Self::exit_code) gives the process status
/// for each.
#[derive(Debug)]
pub enum BenchError {
    /// The raw heap block could not be allocated.
    AllocationFailure {
        /// Number of `i32` slots requested.
        requested: usize,
    },
    /// A dynamic array's capacity after its fill differs from the
    /// element count, meaning it over-allocated or reallocated.
    CapacityInvariantViolation {
        /// Phase in which the check failed.
        phase: Phase,
        /// Capacity the phase requires.
        expected: usize,
        /// Capacity the container reported.
        actual: usize,
    },
    /// The configuration failed validation.
    Config(ConfigError),
    /// A fill strategy refused its input.
    Buffer(BufferError),
    /// Writing the report failed.
    Io(io::Error),
}

impl BenchError {
    /// Status for allocation failure: the conventional general-failure value.
    pub const EXIT_ALLOCATION_FAILURE: i32 = -1;

    /// Status for a capacity invariant violation.
    pub const EXIT_CAPACITY_VIOLATION: i32 = 1;

    /// Status for everything else.
    pub const EXIT_OTHER: i32 = 2;

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::AllocationFailure { .. } => Self::EXIT_ALLOCATION_FAILURE,
            Self::CapacityInvariantViolation { .. } => Self::EXIT_CAPACITY_VIOLATION,
            Self::Config(_) | Self::Buffer(_) | Self::Io(_) => Self::EXIT_OTHER,
        }
    }
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailure { .. } => write!(f, "Fatal error with memory allocation"),
            Self::CapacityInvariantViolation { actual, .. } => {
                write!(f, "Vector capacity changed to {actual}")
            }
            Self::Config(e) => write!(f, "invalid config: {e}"),
            Self::Buffer(e) => write!(f, "fill failed: {e}"),
            Self::Io(e) => write!(f, "writing report failed: {e}"),
        }
    }
}

impl Error for BenchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Buffer(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for BenchError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<BufferError> for BenchError {
    fn from(e: BufferError) -> Self {
        Self::Buffer(e)
    }
}

impl From<io::Error> for BenchError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
