//! Phase results and the report lines printed for them.

use std::fmt;

use smallvec::SmallVec;

use crate::phase::Phase;
use crate::timing::TimingAccumulator;

/// Outcome of one completed phase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseReport {
    /// Which phase ran.
    pub phase: Phase,
    /// Sum of the timed windows of every repetition, in seconds.
    pub total_secs: f64,
    /// Number of repetitions the total covers.
    pub repetitions: usize,
}

impl PhaseReport {
    /// Build a report from a phase's accumulator.
    pub fn from_timing(phase: Phase, timing: &TimingAccumulator) -> Self {
        Self {
            phase,
            total_secs: timing.total_secs(),
            repetitions: timing.samples(),
        }
    }

    /// Mean seconds per repetition.
    pub fn mean_secs(&self) -> f64 {
        if self.repetitions == 0 {
            return 0.0;
        }
        self.total_secs / self.repetitions as f64
    }
}

/// `The <label> took <seconds> seconds`
impl fmt::Display for PhaseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The {} took {} seconds",
            self.phase.label(),
            self.mean_secs()
        )
    }
}

/// Reports for every phase of a run, in run order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BenchReport {
    phases: SmallVec<[PhaseReport; 4]>,
}

impl BenchReport {
    /// An empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finished phase.
    pub fn push(&mut self, report: PhaseReport) {
        self.phases.push(report);
    }

    /// All phase reports in run order.
    pub fn phases(&self) -> &[PhaseReport] {
        &self.phases
    }

    /// Report for `phase`, if it ran.
    pub fn get(&self, phase: Phase) -> Option<&PhaseReport> {
        self.phases.iter().find(|r| r.phase == phase)
    }

    /// Number of phases reported.
    pub fn len(&self) -> usize {
        self.phases.len()
    }

    /// `true` if no phase has completed.
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for report in &self.phases {
            writeln!(f, "{report}")?;
        }
        Ok(())
    }
}
