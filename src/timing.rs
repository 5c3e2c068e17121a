//! Single-operation timing.
//!
//! The timing window covers exactly one call: a monotonic [`Instant`] read
//! immediately before the operation and one immediately after. No setup or
//! teardown sits inside the window, and nothing is averaged; every
//! measurement stands alone.

use std::hint::black_box;
use std::time::{Duration, Instant};

// =============================================================================
// Measurement
// =============================================================================

/// One timed operation: what ran, on which collection, and for how long.
///
/// `collection` is a caller-supplied label rather than anything derived from
/// runtime type information, so the report format is decoupled from the
/// concrete structure under test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    /// Short operation label, e.g. `"Element addition to index 0"`.
    pub operation: String,
    /// Label of the collection under test, e.g. `"LinkedList"`.
    pub collection: &'static str,
    /// Elapsed wall-clock time of the single call.
    pub elapsed: Duration,
}

impl Measurement {
    /// Elapsed time in whole nanoseconds.
    #[must_use]
    pub const fn elapsed_nanos(&self) -> u128 {
        self.elapsed.as_nanos()
    }
}

// =============================================================================
// time_operation
// =============================================================================

/// Runs `operation` once and returns its result together with the elapsed
/// time.
///
/// The result is passed through [`black_box`] so the measured call cannot be
/// optimized away when its value goes unused.
pub fn time_operation<T>(operation: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let result = black_box(operation());
    let elapsed = start.elapsed();
    (result, elapsed)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_time_operation_returns_result() {
        let (result, _) = time_operation(|| 2 + 2);
        assert_eq!(result, 4);
    }

    #[rstest]
    fn test_time_operation_runs_exactly_once() {
        let mut calls = 0;
        let ((), _) = time_operation(|| calls += 1);
        assert_eq!(calls, 1);
    }

    #[rstest]
    fn test_elapsed_covers_slept_duration() {
        let ((), elapsed) = time_operation(|| std::thread::sleep(Duration::from_millis(5)));
        assert!(elapsed >= Duration::from_millis(5));
    }

    #[rstest]
    fn test_measurement_elapsed_nanos() {
        let measurement = Measurement {
            operation: "Element search".to_string(),
            collection: "Vec",
            elapsed: Duration::from_nanos(1_234),
        };
        assert_eq!(measurement.elapsed_nanos(), 1_234);
    }
}
