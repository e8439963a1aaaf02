//! Plain-text report.
//!
//! Lines are written in a fixed order:
//!
//! ```text
//! Error walking from  <root> :  <error>     (one per traversal/stat failure)
//! Error reading files of len:  <length>     (one per abandoned length)
//! No duplicates detected                    (when no group was confirmed)
//! Wasted space:  <kb> kb                    (otherwise, followed by...)
//! <path>, <path>[, <path>...]               (...one line per group)
//! ```

use std::io::{self, Write};

use crate::duplicates::ScanReport;

/// Text formatter for scan results.
#[derive(Debug)]
pub struct TextOutput<'a> {
    report: &'a ScanReport,
}

impl<'a> TextOutput<'a> {
    /// Create a new text output for `report`.
    #[must_use]
    pub fn new(report: &'a ScanReport) -> Self {
        Self { report }
    }

    /// Write the full report.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `writer` fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for failure in &self.report.walk_errors {
            writeln!(
                writer,
                "Error walking from  {} :  {}",
                failure.root.display(),
                failure.error
            )?;
        }

        for failure in &self.report.read_errors {
            writeln!(writer, "Error reading files of len:  {}", failure.size)?;
        }

        if !self.report.has_duplicates() {
            writeln!(writer, "No duplicates detected")?;
            return Ok(());
        }

        writeln!(
            writer,
            "Wasted space:  {} kb",
            self.report.accounting.wasted_kib()
        )?;
        for group in &self.report.groups {
            writeln!(writer, "{}", group.render())?;
        }
        Ok(())
    }
}
