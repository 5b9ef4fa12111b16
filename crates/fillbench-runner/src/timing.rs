//! Per-phase timing accumulator.
//!
//! Elapsed time is measured with [`Instant`], which is monotonic, and
//! summed as `f64` seconds.

use std::time::{Duration, Instant};

/// Running total of elapsed time across the repetitions of one phase.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TimingAccumulator {
    total_secs: f64,
    samples: usize,
}

impl TimingAccumulator {
    /// An accumulator at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one repetition's elapsed time.
    pub fn record(&mut self, elapsed: Duration) {
        self.total_secs += elapsed.as_secs_f64();
        self.samples += 1;
    }

    /// Run `f`, add its wall time, and return its result.
    pub fn time<R>(&mut self, f: impl FnOnce() -> R) -> R {
        let start = Instant::now();
        let result = f();
        self.record(start.elapsed());
        result
    }

    /// Sum of all recorded durations, in seconds.
    pub fn total_secs(&self) -> f64 {
        self.total_secs
    }

    /// Number of recorded durations.
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Arithmetic mean in seconds; zero when nothing was recorded.
    pub fn mean_secs(&self) -> f64 {
        if self.samples == 0 {
            return 0.0;
        }
        self.total_secs / self.samples as f64
    }

    /// Return to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
