//! JSON output formatter for duplicate scan results.
//!
//! Provides machine-readable JSON output for scripting and automation.
//!
//! # Output Schema
//!
//! ```json
//! {
//!   "wasted_space_kb": 0,
//!   "dedupe_size": 10,
//!   "total_size": 20,
//!   "duplicates": [
//!     {
//!       "checksum": "cbf43926",
//!       "size": 10,
//!       "files": ["/path/to/a", "/path/to/b"]
//!     }
//!   ],
//!   "walk_errors": [
//!     { "root": "/unreadable", "kind": "traversal", "error": "..." }
//!   ],
//!   "read_errors": [
//!     { "size": 42, "path": "/some/file", "error": "..." }
//!   ],
//!   "files_indexed": 3,
//!   "scan_duration_ms": 4
//! }
//! ```

use std::io::Write;

use serde::Serialize;

use crate::duplicates::{DuplicateGroup, ReadFailure, ScanReport, WalkFailure};
use crate::scanner::ScanErrorKind;

/// A single duplicate group in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonDuplicateGroup {
    /// CRC-32 as eight hex digits
    pub checksum: String,
    /// File size in bytes
    pub size: u64,
    /// Paths of all duplicate files, in read order
    pub files: Vec<String>,
}

impl JsonDuplicateGroup {
    /// Create a JSON duplicate group from a DuplicateGroup.
    #[must_use]
    pub fn from_duplicate_group(group: &DuplicateGroup) -> Self {
        Self {
            checksum: group.checksum_hex(),
            size: group.size,
            files: group
                .files
                .iter()
                .map(|p| p.to_string_lossy().into_owned())
                .collect(),
        }
    }
}

/// A traversal or stat failure in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonWalkError {
    /// Root being walked
    pub root: String,
    /// "traversal" or "stat"
    pub kind: &'static str,
    /// Error message
    pub error: String,
}

impl JsonWalkError {
    fn from_failure(failure: &WalkFailure) -> Self {
        let kind = match failure.error.kind() {
            ScanErrorKind::Traversal => "traversal",
            ScanErrorKind::Stat => "stat",
            ScanErrorKind::Read => "read",
        };
        Self {
            root: failure.root.to_string_lossy().into_owned(),
            kind,
            error: failure.error.to_string(),
        }
    }
}

/// A read failure in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonReadError {
    /// Byte length of the abandoned bucket
    pub size: u64,
    /// File that could not be read
    pub path: String,
    /// Error message
    pub error: String,
}

impl JsonReadError {
    fn from_failure(failure: &ReadFailure) -> Self {
        Self {
            size: failure.size,
            path: failure.error.path().to_string_lossy().into_owned(),
            error: failure.error.to_string(),
        }
    }
}

/// Complete JSON output structure.
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput {
    /// Reclaimable space in kibibytes, truncated
    pub wasted_space_kb: u64,
    /// Bytes that would remain after deduplication
    pub dedupe_size: u64,
    /// Bytes currently occupied by all copies
    pub total_size: u64,
    /// List of duplicate groups
    pub duplicates: Vec<JsonDuplicateGroup>,
    /// Traversal and stat failures
    pub walk_errors: Vec<JsonWalkError>,
    /// Read failures
    pub read_errors: Vec<JsonReadError>,
    /// Number of files indexed
    pub files_indexed: usize,
    /// Duration of the scan in milliseconds
    pub scan_duration_ms: u64,
}

impl JsonOutput {
    /// Create a new JSON output from a scan report.
    ///
    /// # Example
    ///
    /// ```
    /// use dupes::duplicates::ScanReport;
    /// use dupes::output::JsonOutput;
    ///
    /// let output = JsonOutput::new(&ScanReport::default());
    /// assert!(output.duplicates.is_empty());
    /// ```
    #[must_use]
    pub fn new(report: &ScanReport) -> Self {
        Self {
            wasted_space_kb: report.accounting.wasted_kib(),
            dedupe_size: report.accounting.dedupe_size,
            total_size: report.accounting.total_size,
            duplicates: report
                .groups
                .iter()
                .map(JsonDuplicateGroup::from_duplicate_group)
                .collect(),
            walk_errors: report
                .walk_errors
                .iter()
                .map(JsonWalkError::from_failure)
                .collect(),
            read_errors: report
                .read_errors
                .iter()
                .map(JsonReadError::from_failure)
                .collect(),
            files_indexed: report.files_indexed,
            scan_duration_ms: report.scan_duration.as_millis() as u64,
        }
    }

    /// Write pretty-printed JSON followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), serde_json::Error> {
        serde_json::to_writer_pretty(&mut *writer, self)?;
        writeln!(writer).map_err(serde_json::Error::io)
    }
}
