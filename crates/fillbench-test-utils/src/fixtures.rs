//! Canned configurations and expectations shared by integration tests.

use fillbench_runner::{BenchConfig, Phase};

/// Reduced element count for fast end-to-end runs.
pub const SMALL_ELEMENTS: usize = 10;

/// Reduced repetition count for fast end-to-end runs.
pub const SMALL_REPETITIONS: usize = 5;

/// The N=10, R=5 configuration.
pub fn small_config() -> BenchConfig {
    BenchConfig::new(SMALL_ELEMENTS, SMALL_REPETITIONS)
}

/// `0, 1, .., n - 1` as `i32`s.
pub fn ascending(n: usize) -> Vec<i32> {
    (0..n as i32).collect()
}

/// Split a report into lines and check each has the expected label
/// prefix and suffix. Returns the parsed mean seconds per line.
///
/// # Panics
///
/// Panics with a descriptive message on any malformed line.
pub fn parse_report(text: &str) -> Vec<(Phase, f64)> {
    text.lines()
        .zip(Phase::ALL)
        .map(|(line, phase)| {
            let prefix = format!("The {} took ", phase.label());
            let rest = line
                .strip_prefix(&prefix)
                .unwrap_or_else(|| panic!("line {line:?} lacks prefix {prefix:?}"));
            let secs = rest
                .strip_suffix(" seconds")
                .unwrap_or_else(|| panic!("line {line:?} lacks ' seconds' suffix"));
            let secs: f64 = secs
                .parse()
                .unwrap_or_else(|e| panic!("line {line:?}: bad number {secs:?}: {e}"));
            (phase, secs)
        })
        .collect()
}
