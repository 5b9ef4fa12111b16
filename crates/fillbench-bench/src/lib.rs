//! Benchmark profiles for the fillbench fill strategies.
//!
//! - [`reference_profile`]: the full 1M-element, 1000-repetition run
//! - [`single_pass_profile`]: one repetition at a given size, for
//!   timing a whole phase under criterion
//! - [`criterion_sizes`]: element counts swept by the criterion benches

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use fillbench_runner::BenchConfig;

/// The configuration the `fillbench` binary runs.
pub fn reference_profile() -> BenchConfig {
    BenchConfig::default()
}

/// One repetition of `element_count` elements.
pub fn single_pass_profile(element_count: usize) -> BenchConfig {
    BenchConfig::new(element_count, 1)
}

/// Element counts for the criterion sweep, ending at the reference size.
pub fn criterion_sizes() -> [usize; 3] {
    [10_000, 100_000, BenchConfig::DEFAULT_ELEMENT_COUNT]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_profile_validates() {
        let config = reference_profile();
        config.validate().unwrap();
        assert_eq!(config.element_count, 1_000_000);
        assert_eq!(config.repetitions, 1000);
    }

    #[test]
    fn single_pass_profile_validates() {
        let config = single_pass_profile(10);
        config.validate().unwrap();
        assert_eq!(config.repetitions, 1);
    }

    #[test]
    fn criterion_sizes_ascend_to_reference() {
        let sizes = criterion_sizes();
        assert!(sizes.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(sizes[2], reference_profile().element_count);
    }
}
