//! Test utilities and pathological collaborators for fillbench.
//!
//! Provides stand-ins for the runner's seams:
//!
//! - [`FailingAllocator`]: a [`RawAllocator`] that reports failure
//!   after a configurable number of successful allocations.
//! - [`OverAllocatingArray`]: a [`DynamicArray`] that always reserves
//!   more than it is asked for, tripping the capacity check.
//! - [`RecordingObserver`]: a [`FillObserver`] that keeps the last
//!   filled contents per phase.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::HashMap;

use fillbench_buffer::{DynamicArray, RawAllocator, RawBlock};
use fillbench_runner::{FillObserver, Phase};

pub mod fixtures;

/// Allocator that succeeds `successes` times, then returns `None` forever.
#[derive(Clone, Debug)]
pub struct FailingAllocator {
    successes: usize,
    calls: usize,
}

impl FailingAllocator {
    /// Fail on the very first request.
    pub fn always() -> Self {
        Self::after(0)
    }

    /// Succeed `successes` times before failing.
    pub fn after(successes: usize) -> Self {
        Self {
            successes,
            calls: 0,
        }
    }

    /// Number of allocation requests seen so far.
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl RawAllocator for FailingAllocator {
    fn allocate(&mut self, len: usize) -> Option<RawBlock> {
        self.calls += 1;
        if self.calls > self.successes {
            return None;
        }
        RawBlock::allocate(len)
    }
}

/// Dynamic array whose every growth reserves `slack` extra slots.
///
/// Backed by a `Vec<i32>`; only the capacity policy differs.
#[derive(Clone, Debug, Default)]
pub struct OverAllocatingArray {
    inner: Vec<i32>,
}

impl OverAllocatingArray {
    /// Extra slots added on every growth.
    pub const SLACK: usize = 16;
}

impl DynamicArray for OverAllocatingArray {
    fn new_empty() -> Self {
        Self::default()
    }

    fn reserve(&mut self, additional: usize) {
        self.inner.reserve_exact(additional + Self::SLACK);
    }

    fn push(&mut self, value: i32) {
        if self.inner.len() == self.inner.capacity() {
            self.inner.reserve_exact(Self::SLACK);
        }
        self.inner.push(value);
    }

    fn resize(&mut self, len: usize) {
        if len > self.inner.len() {
            let additional = len - self.inner.len();
            self.inner.reserve_exact(additional + Self::SLACK);
        }
        self.inner.resize(len, 0);
    }

    fn as_slice(&self) -> &[i32] {
        &self.inner
    }

    fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.inner
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    fn release(&mut self) {
        self.inner = Vec::new();
    }
}

/// Observer that records every callback.
///
/// Keeps the most recent contents per phase plus a count of calls per
/// phase, so tests can check both coverage and contents.
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    last: HashMap<Phase, Vec<i32>>,
    calls: HashMap<Phase, usize>,
    order: Vec<(Phase, usize)>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Contents of the most recent fill in `phase`.
    pub fn last_fill(&self, phase: Phase) -> Option<&[i32]> {
        self.last.get(&phase).map(|v| v.as_slice())
    }

    /// Number of fills observed in `phase`.
    pub fn calls(&self, phase: Phase) -> usize {
        self.calls.get(&phase).copied().unwrap_or(0)
    }

    /// Every `(phase, repetition)` pair in callback order.
    pub fn order(&self) -> &[(Phase, usize)] {
        &self.order
    }
}

impl FillObserver for RecordingObserver {
    fn on_filled(&mut self, phase: Phase, repetition: usize, data: &[i32]) {
        self.last.insert(phase, data.to_vec());
        *self.calls.entry(phase).or_insert(0) += 1;
        self.order.push((phase, repetition));
    }
}
