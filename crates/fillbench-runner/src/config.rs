//! Benchmark configuration and validation.

use std::error::Error;
use std::fmt;

/// Problem size and repetition count for a benchmark run.
///
/// The shipped binary always runs [`BenchConfig::default()`]; other
/// values exist so tests can run the same phases at reduced scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BenchConfig {
    /// Number of integers written per repetition. Default: 1_000_000.
    pub element_count: usize,
    /// Repetitions per phase. The reported figure is the mean over
    /// these. Default: 1000.
    pub repetitions: usize,
}

impl BenchConfig {
    /// Default problem size.
    pub const DEFAULT_ELEMENT_COUNT: usize = 1_000_000;

    /// Default repetitions per phase.
    pub const DEFAULT_REPETITIONS: usize = 1000;

    /// Create a config with the given problem size and repetition count.
    pub fn new(element_count: usize, repetitions: usize) -> Self {
        Self {
            element_count,
            repetitions,
        }
    }

    /// Check the structural invariants the phases rely on.
    ///
    /// The pointer-walk phases write before testing their bound, so at
    /// least one element is required. Every written value is the
    /// element's index as an `i32`, so the count may not exceed
    /// `i32::MAX`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.element_count == 0 {
            return Err(ConfigError::ZeroElements);
        }
        if self.repetitions == 0 {
            return Err(ConfigError::ZeroRepetitions);
        }
        if self.element_count > i32::MAX as usize {
            return Err(ConfigError::ElementCountOverflow {
                value: self.element_count,
            });
        }
        Ok(())
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ELEMENT_COUNT, Self::DEFAULT_REPETITIONS)
    }
}

/// Errors detected by [`BenchConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `element_count` is zero.
    ZeroElements,
    /// `repetitions` is zero.
    ZeroRepetitions,
    /// `element_count` exceeds `i32::MAX`.
    ElementCountOverflow {
        /// The configured count.
        value: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroElements => write!(f, "element_count must be at least 1"),
            Self::ZeroRepetitions => write!(f, "repetitions must be at least 1"),
            Self::ElementCountOverflow { value } => {
                write!(f, "element_count {value} exceeds i32::MAX")
            }
        }
    }
}

impl Error for ConfigError {}
