//! fillbench: how long does it take to fill a million integers?
//!
//! Compares an uninitialised heap block against a dynamic array used
//! three ways, and prints the mean time per fill for each. This is the
//! facade crate; it re-exports the sub-crates and provides the program
//! boundary used by the `fillbench` binary.
//!
//! # Quick start
//!
//! ```rust
//! use fillbench::runner::{BenchConfig, Runner};
//!
//! let mut runner = Runner::new(BenchConfig::new(10, 5)).unwrap();
//! let mut out = Vec::new();
//! let report = runner.run(&mut out).unwrap();
//! assert_eq!(report.len(), 4);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`buffer`] | `fillbench-buffer` | `RawBlock`, `DynamicArray`, fill strategies |
//! | [`runner`] | `fillbench-runner` | `Runner`, `BenchConfig`, `Phase`, reports, errors |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use std::io::Write;

use fillbench_buffer::{DynamicArray, RawAllocator};
use fillbench_runner::{BenchConfig, BenchError, FillObserver, Runner};
use log::error;

/// Storage primitives and fill strategies.
pub mod buffer {
    pub use fillbench_buffer::*;
}

/// Configuration, phases, the runner loop and its reports.
pub mod runner {
    pub use fillbench_runner::*;
}

/// Run every phase and turn the outcome into a process exit status.
///
/// Report lines go to `out`. On a fatal condition the error's
/// diagnostic line goes to `err` and the matching status is returned;
/// on success the status is `0`.
pub fn run_to_exit_code<A, O, D, W, E>(runner: &mut Runner<A, O>, out: &mut W, err: &mut E) -> i32
where
    A: RawAllocator,
    O: FillObserver,
    D: DynamicArray,
    W: Write,
    E: Write,
{
    match runner.run_with::<D, W>(out) {
        Ok(_) => 0,
        Err(e) => {
            // Flush what the completed phases printed before the diagnostic.
            let _ = out.flush();
            if writeln!(err, "{e}").and_then(|()| err.flush()).is_err() {
                error!("could not write diagnostic: {e}");
            }
            e.exit_code()
        }
    }
}

/// The full-size benchmark: one million elements, a thousand
/// repetitions, `Vec<i32>` as the dynamic array.
pub fn run_default<W: Write, E: Write>(out: &mut W, err: &mut E) -> i32 {
    let mut runner = match Runner::new(BenchConfig::default()) {
        Ok(runner) => runner,
        Err(e) => {
            let e = BenchError::from(e);
            let _ = writeln!(err, "{e}");
            return e.exit_code();
        }
    };
    run_to_exit_code::<_, _, Vec<i32>, _, _>(&mut runner, out, err)
}
