//! The benchmark loop.
//!
//! [`Runner`] executes the phases in [`Phase::ALL`] order. Each phase
//! is `repetitions` cycles of:
//!
//! ```text
//! [start clock] allocate/reserve/resize + fill [stop clock]
//! capacity check (dynamic-array phases) -> observer -> release
//! ```
//!
//! Only the bracketed region is timed. The first fatal condition ends
//! the run: no later repetition or phase executes.

use std::hint::black_box;
use std::io::Write;
use std::time::Instant;

use fillbench_buffer::fill::{fill_raw, fill_reserved, fill_resized_iter, fill_resized_ptr};
use fillbench_buffer::{BufferError, DynamicArray, RawAllocator, SystemAllocator};
use log::{debug, trace};

use crate::config::{BenchConfig, ConfigError};
use crate::error::BenchError;
use crate::observer::{FillObserver, NoopObserver};
use crate::phase::Phase;
use crate::report::{BenchReport, PhaseReport};
use crate::timing::TimingAccumulator;

/// Drives the four benchmark phases.
///
/// The allocator and observer are type parameters so tests can inject
/// a failing allocator or record filled contents; the container type
/// for the dynamic-array phases is chosen per call.
pub struct Runner<A = SystemAllocator, O = NoopObserver> {
    config: BenchConfig,
    allocator: A,
    observer: O,
}

impl Runner {
    /// A runner over the system allocator with no observer.
    ///
    /// Fails if `config` does not validate.
    pub fn new(config: BenchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            allocator: SystemAllocator,
            observer: NoopObserver,
        })
    }
}

impl<A: RawAllocator, O: FillObserver> Runner<A, O> {
    /// Replace the raw-block allocator.
    pub fn with_allocator<B: RawAllocator>(self, allocator: B) -> Runner<B, O> {
        Runner {
            config: self.config,
            allocator,
            observer: self.observer,
        }
    }

    /// Replace the fill observer.
    pub fn with_observer<P: FillObserver>(self, observer: P) -> Runner<A, P> {
        Runner {
            config: self.config,
            allocator: self.allocator,
            observer,
        }
    }

    /// The validated configuration.
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// The observer, for inspecting what it recorded.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Consume the runner, returning the observer.
    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Run every phase in order with `Vec<i32>` as the dynamic array,
    /// writing one report line to `out` as each phase finishes.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<BenchReport, BenchError> {
        self.run_with::<Vec<i32>, W>(out)
    }

    /// Like [`run`](Self::run) with a caller-chosen dynamic array type.
    pub fn run_with<D: DynamicArray, W: Write>(
        &mut self,
        out: &mut W,
    ) -> Result<BenchReport, BenchError> {
        let mut report = BenchReport::new();
        for phase in Phase::ALL {
            let phase_report = self.run_phase::<D>(phase)?;
            writeln!(out, "{phase_report}")?;
            report.push(phase_report);
        }
        out.flush()?;
        Ok(report)
    }

    /// Run a single phase and return its timing.
    pub fn run_phase<D: DynamicArray>(&mut self, phase: Phase) -> Result<PhaseReport, BenchError> {
        debug!(
            "phase '{phase}': {} repetitions of {} elements",
            self.config.repetitions, self.config.element_count
        );
        let report = match phase {
            Phase::RawArray => self.run_raw_phase()?,
            Phase::Reserved => self.run_array_phase::<D, _>(phase, |array, n| {
                fill_reserved(array, n);
                Ok(())
            })?,
            Phase::ResizedIter => self.run_array_phase::<D, _>(phase, |array, n| {
                fill_resized_iter(array, n);
                Ok(())
            })?,
            Phase::ResizedPtr => self.run_array_phase::<D, _>(phase, fill_resized_ptr::<D>)?,
        };
        debug!("phase '{phase}': mean {} s", report.mean_secs());
        Ok(report)
    }

    fn run_raw_phase(&mut self) -> Result<PhaseReport, BenchError> {
        let n = self.config.element_count;
        let mut timing = TimingAccumulator::new();

        for repetition in 0..self.config.repetitions {
            let start = Instant::now();
            let mut block = self
                .allocator
                .allocate(n)
                .ok_or(BenchError::AllocationFailure { requested: n })?;
            let data = fill_raw(&mut block);
            black_box(&mut *data);
            timing.record(start.elapsed());

            trace!("raw repetition {repetition} filled {} slots", data.len());
            self.observer.on_filled(Phase::RawArray, repetition, data);
            drop(block);
        }

        Ok(PhaseReport::from_timing(Phase::RawArray, &timing))
    }

    fn run_array_phase<D, F>(&mut self, phase: Phase, mut fill: F) -> Result<PhaseReport, BenchError>
    where
        D: DynamicArray,
        F: FnMut(&mut D, usize) -> Result<(), BufferError>,
    {
        let n = self.config.element_count;
        let mut timing = TimingAccumulator::new();
        let mut array = D::new_empty();

        for repetition in 0..self.config.repetitions {
            let start = Instant::now();
            fill(&mut array, n)?;
            black_box(&mut array);
            timing.record(start.elapsed());

            let capacity = array.capacity();
            if capacity != n {
                return Err(BenchError::CapacityInvariantViolation {
                    phase,
                    expected: n,
                    actual: capacity,
                });
            }

            trace!("{phase} repetition {repetition} filled {} elements", array.len());
            self.observer.on_filled(phase, repetition, array.as_slice());
            array.release();
        }

        Ok(PhaseReport::from_timing(phase, &timing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Checker {
        calls: usize,
        all_ascending: bool,
    }

    impl FillObserver for Checker {
        fn on_filled(&mut self, _phase: Phase, _repetition: usize, data: &[i32]) {
            self.calls += 1;
            self.all_ascending &= data.len() == 10
                && data.iter().enumerate().all(|(i, &v)| v == i as i32);
        }
    }

    fn small_runner() -> Runner {
        Runner::new(BenchConfig::new(10, 5)).unwrap()
    }

    #[test]
    fn new_rejects_invalid_config() {
        assert!(Runner::new(BenchConfig::new(0, 1)).is_err());
    }

    #[test]
    fn each_phase_reports_all_repetitions() {
        let mut runner = small_runner();
        for phase in Phase::ALL {
            let report = runner.run_phase::<Vec<i32>>(phase).unwrap();
            assert_eq!(report.phase, phase);
            assert_eq!(report.repetitions, 5);
            assert!(report.mean_secs().is_finite());
            assert!(report.mean_secs() >= 0.0);
        }
    }

    #[test]
    fn observer_sees_every_repetition_of_every_phase() {
        let checker = Checker {
            calls: 0,
            all_ascending: true,
        };
        let mut runner = small_runner().with_observer(checker);
        let mut out = Vec::new();
        runner.run(&mut out).unwrap();
        let checker = runner.into_observer();
        assert_eq!(checker.calls, 4 * 5);
        assert!(checker.all_ascending);
    }

    #[test]
    fn run_prints_four_lines_in_order() {
        let mut out = Vec::new();
        let report = small_runner().run(&mut out).unwrap();
        assert_eq!(report.len(), 4);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        for (line, phase) in lines.iter().zip(Phase::ALL) {
            let prefix = format!("The {} took ", phase.label());
            assert!(line.starts_with(&prefix), "{line}");
            assert!(line.ends_with(" seconds"), "{line}");
        }
    }

    #[test]
    fn default_scale_reserved_phase_holds_capacity() {
        let mut runner = Runner::new(BenchConfig::new(BenchConfig::DEFAULT_ELEMENT_COUNT, 2))
            .unwrap();
        for phase in [Phase::Reserved, Phase::ResizedIter, Phase::ResizedPtr] {
            runner.run_phase::<Vec<i32>>(phase).unwrap();
        }
    }
}
