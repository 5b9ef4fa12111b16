//! Benchmark runner for the fillbench comparison.
//!
//! Runs four phases in a fixed order, each a number of allocate, fill,
//! check and release repetitions, and reports the mean time per
//! repetition:
//!
//! 1. [`Phase::RawArray`]: uninitialised heap block, pointer walk.
//! 2. [`Phase::Reserved`]: reserved dynamic array, append.
//! 3. [`Phase::ResizedIter`]: resized dynamic array, element iterator.
//! 4. [`Phase::ResizedPtr`]: resized dynamic array, pointer walk over
//!    its storage.
//!
//! Fatal conditions come back as [`BenchError`] values instead of
//! terminating the process; the binary maps them to exit codes.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod observer;
pub mod phase;
pub mod report;
pub mod runner;
pub mod timing;

pub use config::{BenchConfig, ConfigError};
pub use error::BenchError;
pub use observer::{FillObserver, NoopObserver};
pub use phase::Phase;
pub use report::{BenchReport, PhaseReport};
pub use runner::Runner;
pub use timing::TimingAccumulator;
