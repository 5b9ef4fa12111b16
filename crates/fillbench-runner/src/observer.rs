//! Inspection hook for filled buffers.
//!
//! The runner hands each repetition's filled contents to a
//! [`FillObserver`] after the timed window closes and before the buffer
//! is released, so inspection never counts towards the measurement.

use crate::phase::Phase;

/// Receives the contents of every filled buffer.
pub trait FillObserver {
    /// Called once per repetition with the buffer's live elements.
    fn on_filled(&mut self, phase: Phase, repetition: usize, data: &[i32]);
}

/// Observer that ignores everything. The default for real runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl FillObserver for NoopObserver {
    #[inline]
    fn on_filled(&mut self, _phase: Phase, _repetition: usize, _data: &[i32]) {}
}

impl<O: FillObserver + ?Sized> FillObserver for &mut O {
    fn on_filled(&mut self, phase: Phase, repetition: usize, data: &[i32]) {
        (**self).on_filled(phase, repetition, data);
    }
}
