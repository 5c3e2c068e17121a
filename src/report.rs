//! Measurement reporting.
//!
//! Emits one plain-text line per measurement in the form
//! `<operation label>, <collection label>, time spent: <elapsed> ns.`
//! followed by a blank line after each group of related measurements.
//! The writer is generic so the binary passes stdout while tests capture
//! the exact output in memory.

use std::io::{self, Write};

use crate::timing::Measurement;

// =============================================================================
// Reporter
// =============================================================================

/// Writes measurement lines to an underlying [`Write`] target.
#[derive(Debug)]
pub struct Reporter<W> {
    writer: W,
}

impl<W: Write> Reporter<W> {
    /// Wraps a writer.
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Emits one measurement line.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn record(&mut self, measurement: &Measurement) -> io::Result<()> {
        writeln!(
            self.writer,
            "{}, {}, time spent: {} ns.",
            measurement.operation,
            measurement.collection,
            measurement.elapsed_nanos()
        )
    }

    /// Emits the blank line that terminates a group of related measurements.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn end_group(&mut self) -> io::Result<()> {
        writeln!(self.writer)
    }

    /// Consumes the reporter and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::time::Duration;

    fn measurement(operation: &str, collection: &'static str, nanos: u64) -> Measurement {
        Measurement {
            operation: operation.to_string(),
            collection,
            elapsed: Duration::from_nanos(nanos),
        }
    }

    #[rstest]
    fn test_record_formats_single_line() {
        let mut reporter = Reporter::new(Vec::new());
        reporter
            .record(&measurement("Element addition to index 0", "Vec", 420))
            .unwrap();

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(output, "Element addition to index 0, Vec, time spent: 420 ns.\n");
    }

    #[rstest]
    fn test_end_group_emits_blank_line() {
        let mut reporter = Reporter::new(Vec::new());
        reporter
            .record(&measurement("Element search", "HashSet", 100))
            .unwrap();
        reporter
            .record(&measurement("Element search", "BTreeSet", 250))
            .unwrap();
        reporter.end_group().unwrap();

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Element search, HashSet, time spent: 100 ns.",
                "Element search, BTreeSet, time spent: 250 ns.",
                "",
            ]
        );
    }

    #[rstest]
    fn test_zero_elapsed_is_reported_as_zero() {
        let mut reporter = Reporter::new(Vec::new());
        reporter
            .record(&measurement("Element removal", "LinkedList", 0))
            .unwrap();

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(output, "Element removal, LinkedList, time spent: 0 ns.\n");
    }
}
