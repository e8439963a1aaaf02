//! Size indexing, duplicate groups and space accounting.
//!
//! # Overview
//!
//! Size indexing is the first phase of duplicate detection. Every file is
//! placed in a bucket keyed by its exact byte length; files with different
//! lengths cannot be duplicates, so only buckets that reach two members
//! (candidate lengths) are ever read.
//!
//! Candidate lengths are remembered in the order they first reached two
//! members. That order drives the content phase and therefore the order of
//! groups in the final report.
//!
//! # Example
//!
//! ```
//! use dupes::duplicates::SizeIndex;
//! use dupes::scanner::FileEntry;
//! use std::path::PathBuf;
//!
//! let mut index = SizeIndex::new();
//! index.insert(FileEntry::new(PathBuf::from("/a"), 10));
//! index.insert(FileEntry::new(PathBuf::from("/b"), 20));
//! index.insert(FileEntry::new(PathBuf::from("/c"), 10));
//!
//! assert_eq!(index.candidate_lengths(), &[10]);
//! assert_eq!(index.bucket(10).len(), 2);
//! ```

use std::collections::HashMap;
use std::path::PathBuf;

use crate::scanner::{checksum_hex, Checksum, FileEntry, FileReader, ScanError};

/// Paths grouped by exact byte length, in discovery order.
#[derive(Debug, Clone, Default)]
pub struct SizeIndex {
    buckets: HashMap<u64, Vec<PathBuf>>,
    candidates: Vec<u64>,
    files_indexed: usize,
}

impl SizeIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stat `path` through `reader` and add it to the bucket for its length.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Stat`] if the length cannot be determined. The
    /// index is left unchanged in that case.
    pub fn index<R: FileReader + ?Sized>(
        &mut self,
        path: PathBuf,
        reader: &R,
    ) -> Result<(), ScanError> {
        let size = reader.file_len(&path)?;
        log::trace!("Indexed {} ({} bytes)", path.display(), size);
        self.insert(FileEntry::new(path, size));
        Ok(())
    }

    /// Add a file whose length is already known.
    ///
    /// The length becomes a candidate the moment its bucket reaches exactly
    /// two members; later members do not record it again.
    pub fn insert(&mut self, entry: FileEntry) {
        let FileEntry { path, size } = entry;
        let bucket = self.buckets.entry(size).or_default();
        bucket.push(path);
        self.files_indexed += 1;
        if bucket.len() == 2 {
            log::debug!("Length {} is a duplicate candidate", size);
            self.candidates.push(size);
        }
    }

    /// Lengths that reached two members, in the order they did so.
    #[must_use]
    pub fn candidate_lengths(&self) -> &[u64] {
        &self.candidates
    }

    /// All paths with the given length, in discovery order.
    #[must_use]
    pub fn bucket(&self, size: u64) -> &[PathBuf] {
        self.buckets.get(&size).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether any length has two or more files.
    #[must_use]
    pub fn has_candidates(&self) -> bool {
        !self.candidates.is_empty()
    }

    /// Total number of paths indexed.
    #[must_use]
    pub fn files_indexed(&self) -> usize {
        self.files_indexed
    }
}

/// A set of files believed identical: same length and same checksum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateGroup {
    /// CRC-32 of the shared content
    pub checksum: Checksum,
    /// File size in bytes (shared by all members)
    pub size: u64,
    /// Members in the order they were read
    pub files: Vec<PathBuf>,
}

impl DuplicateGroup {
    /// Create a new duplicate group.
    #[must_use]
    pub fn new(checksum: Checksum, size: u64, files: Vec<PathBuf>) -> Self {
        Self {
            checksum,
            size,
            files,
        }
    }

    /// Number of files in this group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if this group is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Checksum as eight hex digits.
    #[must_use]
    pub fn checksum_hex(&self) -> String {
        checksum_hex(self.checksum)
    }

    /// Member paths joined with `", "`.
    #[must_use]
    pub fn render(&self) -> String {
        self.files
            .iter()
            .map(|p| p.to_string_lossy())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Running totals for the wasted-space estimate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpaceAccounting {
    /// One copy's size per group: what would remain after deduplication
    pub dedupe_size: u64,
    /// Size times member count per group: what all copies occupy now
    pub total_size: u64,
}

impl SpaceAccounting {
    /// Record a newly confirmed group of `size`-byte files.
    pub fn add_detected(&mut self, size: u64) {
        self.dedupe_size += size;
    }

    /// Record a group's final membership of `members` copies.
    pub fn add_members(&mut self, size: u64, members: usize) {
        self.total_size += size * members as u64;
    }

    /// Bytes that deduplication would reclaim.
    #[must_use]
    pub fn wasted_bytes(&self) -> u64 {
        self.total_size.saturating_sub(self.dedupe_size)
    }

    /// Reclaimable space in kibibytes, truncated.
    #[must_use]
    pub fn wasted_kib(&self) -> u64 {
        self.wasted_bytes() / 1024
    }
}
