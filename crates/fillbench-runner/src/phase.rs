//! The four benchmark phases and their report labels.

use std::fmt;

/// One fill strategy under measurement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Uninitialised heap block filled by a pointer walk.
    RawArray,
    /// Dynamic array with capacity reserved up front, filled by append.
    Reserved,
    /// Dynamic array resized (zero-filled) up front, filled through its
    /// element iterator. Pays for the zero fill the raw block skips.
    ResizedIter,
    /// Dynamic array resized up front, filled by a pointer walk over its
    /// internal storage, bypassing the container interface.
    ResizedPtr,
}

impl Phase {
    /// All phases in run order.
    pub const ALL: [Phase; 4] = [
        Phase::RawArray,
        Phase::Reserved,
        Phase::ResizedIter,
        Phase::ResizedPtr,
    ];

    /// Label used in the report line.
    pub fn label(self) -> &'static str {
        match self {
            Self::RawArray => "C like implementation",
            Self::Reserved => "C++ implementation",
            Self::ResizedIter => "\"fair\" C++ implementation",
            Self::ResizedPtr => "(un)fair C++ implementation",
        }
    }

    /// Whether the phase fills a dynamic array and so is subject to the
    /// capacity check.
    pub fn uses_dynamic_array(self) -> bool {
        !matches!(self, Self::RawArray)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_order_is_fixed() {
        assert_eq!(
            Phase::ALL,
            [
                Phase::RawArray,
                Phase::Reserved,
                Phase::ResizedIter,
                Phase::ResizedPtr
            ]
        );
    }

    #[test]
    fn labels_match_report_text() {
        assert_eq!(Phase::RawArray.label(), "C like implementation");
        assert_eq!(Phase::Reserved.label(), "C++ implementation");
        assert_eq!(Phase::ResizedIter.label(), r#""fair" C++ implementation"#);
        assert_eq!(Phase::ResizedPtr.label(), "(un)fair C++ implementation");
    }

    #[test]
    fn only_raw_phase_skips_capacity_check() {
        let checked: Vec<_> = Phase::ALL
            .iter()
            .filter(|p| p.uses_dynamic_array())
            .collect();
        assert_eq!(checked.len(), 3);
        assert!(!Phase::RawArray.uses_dynamic_array());
    }
}
