//! Duplicate finder implementation with two-phase detection.
//!
//! # Overview
//!
//! This module orchestrates the duplicate detection pipeline:
//! 1. **Phase 1 - Size grouping**: Walk every root and index files by byte
//!    length (see [`crate::duplicates::groups`] module)
//! 2. **Phase 2 - Checksums**: For each candidate length, in the order it was
//!    detected, read every file of that length and group by CRC-32
//!
//! Errors never abort the whole run. A traversal error is recorded and the
//! walk continues; a stat error abandons the current root; a read error
//! abandons the current length bucket.
//!
//! # Example
//!
//! ```no_run
//! use dupes::duplicates::DuplicateFinder;
//! use std::path::PathBuf;
//!
//! let finder = DuplicateFinder::with_defaults();
//! let report = finder.find_duplicates_in_paths(&[PathBuf::from(".")]);
//!
//! println!("Wasted space: {} kb", report.accounting.wasted_kib());
//! for group in &report.groups {
//!     println!("{}", group.render());
//! }
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use super::groups::{DuplicateGroup, SizeIndex, SpaceAccounting};
use crate::scanner::{checksum, Checksum, DiskReader, FileReader, ScanError, Walker, WalkerConfig};

/// Outcome of checksumming one size bucket.
#[derive(Debug, Default)]
pub struct BucketResolution {
    /// Groups confirmed in this bucket, in detection order
    pub groups: Vec<DuplicateGroup>,
    /// The read failure that cut the bucket short, if any
    pub error: Option<ScanError>,
}

/// Group the files of one size bucket by content checksum.
///
/// Files are read in bucket order. A checksum group is confirmed when its
/// second member is read; at that moment one copy's size is added to
/// `accounting.dedupe_size`. Once the bucket is exhausted each confirmed
/// group adds `size * members` to `accounting.total_size`, using its final
/// membership.
///
/// If a read fails the remaining paths are skipped. Groups confirmed before
/// the failure are still returned and accounted for, alongside the error.
pub fn resolve_bucket<R: FileReader + ?Sized>(
    paths: &[PathBuf],
    reader: &R,
    accounting: &mut SpaceAccounting,
) -> BucketResolution {
    let mut by_checksum: HashMap<Checksum, Vec<PathBuf>> = HashMap::new();
    let mut detected: Vec<(Checksum, u64)> = Vec::new();
    let mut error = None;

    for path in paths {
        let data = match reader.read_file(path) {
            Ok(data) => data,
            Err(e) => {
                log::warn!("Failed to read {}: {}", path.display(), e);
                error = Some(e);
                break;
            }
        };

        let sum = checksum(&data);
        log::trace!("Checksum {:08x}: {}", sum, path.display());

        let members = by_checksum.entry(sum).or_default();
        members.push(path.clone());
        if members.len() == 2 {
            let size = data.len() as u64;
            log::debug!("Duplicate group confirmed: {:08x} ({} bytes)", sum, size);
            accounting.add_detected(size);
            detected.push((sum, size));
        }
    }

    let groups = detected
        .into_iter()
        .map(|(sum, size)| {
            let files = by_checksum.remove(&sum).unwrap_or_default();
            let group = DuplicateGroup::new(sum, size, files);
            accounting.add_members(group.size, group.len());
            group
        })
        .collect();

    BucketResolution { groups, error }
}

/// Configuration for the duplicate finder.
#[derive(Debug, Clone, Default)]
pub struct FinderConfig {
    /// Walker configuration for directory traversal.
    pub walker_config: WalkerConfig,
}

impl FinderConfig {
    /// Set the walker configuration.
    #[must_use]
    pub fn with_walker_config(mut self, config: WalkerConfig) -> Self {
        self.walker_config = config;
        self
    }
}

/// A traversal or stat failure while walking one root.
#[derive(Debug)]
pub struct WalkFailure {
    /// Root being walked when the error occurred
    pub root: PathBuf,
    /// The error itself
    pub error: ScanError,
}

/// A read failure while checksumming one candidate length.
#[derive(Debug)]
pub struct ReadFailure {
    /// Byte length of the abandoned bucket
    pub size: u64,
    /// The error itself
    pub error: ScanError,
}

/// Everything a scan determined, ready for formatting.
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Confirmed groups, by candidate length then detection order
    pub groups: Vec<DuplicateGroup>,
    /// Wasted-space totals
    pub accounting: SpaceAccounting,
    /// Traversal and stat failures, in the order they occurred
    pub walk_errors: Vec<WalkFailure>,
    /// Read failures, one per abandoned length
    pub read_errors: Vec<ReadFailure>,
    /// Number of files placed in the size index
    pub files_indexed: usize,
    /// Number of lengths shared by two or more files
    pub candidate_lengths: usize,
    /// Duration of the entire scan
    pub scan_duration: Duration,
}

impl ScanReport {
    /// Whether any duplicate group was confirmed.
    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        !self.groups.is_empty()
    }

    /// Whether any error was recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.walk_errors.is_empty() || !self.read_errors.is_empty()
    }
}

/// Duplicate finder that orchestrates the two-phase detection pipeline.
///
/// All state for a run lives in locals of
/// [`find_duplicates_in_paths`](Self::find_duplicates_in_paths); the finder
/// itself only holds configuration and the file reader, so one finder can
/// run any number of independent scans.
pub struct DuplicateFinder<R = DiskReader> {
    config: FinderConfig,
    reader: R,
}

impl DuplicateFinder<DiskReader> {
    /// Create a new duplicate finder reading from the local filesystem.
    #[must_use]
    pub fn new(config: FinderConfig) -> Self {
        Self::with_reader(config, DiskReader)
    }

    /// Create a new duplicate finder with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(FinderConfig::default())
    }
}

impl<R: FileReader> DuplicateFinder<R> {
    /// Create a finder that stats and reads files through `reader`.
    #[must_use]
    pub fn with_reader(config: FinderConfig, reader: R) -> Self {
        Self { config, reader }
    }

    /// Find duplicates beneath a single root.
    #[must_use]
    pub fn find_duplicates(&self, root: &Path) -> ScanReport {
        self.find_duplicates_in_paths(&[root.to_path_buf()])
    }

    /// Find duplicates across several roots, processed in the given order.
    ///
    /// Never fails: every error is recorded in the returned report.
    #[must_use]
    pub fn find_duplicates_in_paths(&self, roots: &[PathBuf]) -> ScanReport {
        let start_time = Instant::now();
        let mut report = ScanReport::default();
        let mut index = SizeIndex::new();

        for root in roots {
            log::info!("Scanning {}", root.display());
            if let Err(error) = self.index_root(root, &mut index, &mut report.walk_errors) {
                log::warn!("Abandoning {}: {}", root.display(), error);
                report.walk_errors.push(WalkFailure {
                    root: root.clone(),
                    error,
                });
            }
        }

        report.files_indexed = index.files_indexed();
        report.candidate_lengths = index.candidate_lengths().len();
        log::info!(
            "Indexed {} files, {} candidate lengths",
            report.files_indexed,
            report.candidate_lengths
        );

        if !index.has_candidates() {
            log::debug!("No two files share a length, skipping checksums");
        }

        for &size in index.candidate_lengths() {
            let resolution = resolve_bucket(index.bucket(size), &self.reader, &mut report.accounting);
            report.groups.extend(resolution.groups);
            if let Some(error) = resolution.error {
                report.read_errors.push(ReadFailure { size, error });
            }
        }

        report.scan_duration = start_time.elapsed();
        log::info!(
            "Found {} duplicate groups, {} bytes reclaimable, in {:?}",
            report.groups.len(),
            report.accounting.wasted_bytes(),
            report.scan_duration
        );
        if report.has_errors() {
            log::info!(
                "Scan finished with {} walk errors and {} read errors",
                report.walk_errors.len(),
                report.read_errors.len()
            );
        }
        report
    }

    /// Walk one root, feeding every file to the size index.
    ///
    /// Traversal errors are pushed to `walk_errors` and the walk continues.
    /// A stat failure stops the walk and is returned.
    fn index_root(
        &self,
        root: &Path,
        index: &mut SizeIndex,
        walk_errors: &mut Vec<WalkFailure>,
    ) -> Result<(), ScanError> {
        let walker = Walker::new(root, self.config.walker_config.clone());
        for entry in walker.walk() {
            match entry {
                Ok(path) => index.index(path, &self.reader)?,
                Err(error) => walk_errors.push(WalkFailure {
                    root: root.to_path_buf(),
                    error,
                }),
            }
        }
        Ok(())
    }
}
