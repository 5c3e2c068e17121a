//! Fixed scalar parameters driving the measurement script.
//!
//! All knobs live in one [`BenchParams`] value threaded explicitly through
//! initialization and each phase, so every phase is independently testable
//! with small sizes.

// =============================================================================
// Default values
// =============================================================================

/// Number of elements loaded into every collection at initialization.
pub const DEFAULT_COLLECTION_SIZE: usize = 15_000;

/// Removal/lookup key for the map phase, outside the populated key range.
pub const DEFAULT_KEY: i32 = 20_000;

/// Target element/value, outside the initially populated range.
pub const DEFAULT_ELEMENT: i32 = 100_000;

// =============================================================================
// BenchParams
// =============================================================================

/// Parameters for one benchmark run.
///
/// `key` and `element` are deliberately outside `0..collection_size` so that
/// searches before the first insertion miss and removals of absent values
/// exercise the not-found path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchParams {
    /// Initial element count of every collection.
    pub collection_size: usize,
    /// Map-phase key used for insertion and conditional removal.
    pub key: i32,
    /// Element inserted, searched for, and removed in every phase.
    pub element: i32,
}

impl BenchParams {
    /// Index position representing the start of a sequence.
    #[must_use]
    pub const fn first_index(&self) -> usize {
        0
    }

    /// Index position representing the middle of a sequence.
    #[must_use]
    pub const fn middle_index(&self) -> usize {
        self.collection_size / 2
    }
}

impl Default for BenchParams {
    fn default() -> Self {
        Self {
            collection_size: DEFAULT_COLLECTION_SIZE,
            key: DEFAULT_KEY,
            element: DEFAULT_ELEMENT,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_default_params() {
        let params = BenchParams::default();
        assert_eq!(params.collection_size, 15_000);
        assert_eq!(params.key, 20_000);
        assert_eq!(params.element, 100_000);
    }

    #[rstest]
    fn test_index_positions() {
        let params = BenchParams::default();
        assert_eq!(params.first_index(), 0);
        assert_eq!(params.middle_index(), 7_500);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 0)]
    #[case(3, 1)]
    #[case(15_000, 7_500)]
    fn test_middle_index_halves_size(#[case] size: usize, #[case] expected: usize) {
        let params = BenchParams {
            collection_size: size,
            ..BenchParams::default()
        };
        assert_eq!(params.middle_index(), expected);
    }

    #[rstest]
    fn test_targets_outside_populated_range() {
        let params = BenchParams::default();
        assert!(params.key >= params.collection_size as i32);
        assert!(params.element >= params.collection_size as i32);
    }
}
