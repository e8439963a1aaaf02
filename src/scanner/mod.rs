//! Scanner module for directory traversal and file checksumming.
//!
//! This module provides functionality for:
//! - Deterministic directory walking using walkdir
//! - Whole-file CRC-32 checksums
//! - The [`FileReader`] seam through which the duplicate finder stats and
//!   reads files
//!
//! # Architecture
//!
//! The scanner is divided into submodules:
//! - [`walker`]: Directory traversal and file discovery
//! - [`hasher`]: CRC-32 content checksums
//!
//! # Example
//!
//! ```no_run
//! use dupes::scanner::{Walker, WalkerConfig};
//! use std::path::Path;
//!
//! let walker = Walker::new(Path::new("."), WalkerConfig::default());
//! for entry in walker.walk() {
//!     match entry {
//!         Ok(path) => println!("{}", path.display()),
//!         Err(e) => eprintln!("Warning: {}", e),
//!     }
//! }
//! ```

pub mod hasher;
pub mod walker;

use std::fs;
use std::path::{Path, PathBuf};

// Re-export main types
pub use hasher::{checksum, checksum_hex, Checksum};
pub use walker::Walker;

/// A discovered file and its byte length.
///
/// Produced by a metadata query during indexing; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path as yielded by the walker (absolute or root-relative)
    pub path: PathBuf,
    /// File size in bytes
    pub size: u64,
}

impl FileEntry {
    /// Create a new FileEntry.
    #[must_use]
    pub fn new(path: PathBuf, size: u64) -> Self {
        Self { path, size }
    }
}

/// Configuration for directory walking.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Follow symbolic links during traversal.
    /// Symlink loops are reported as traversal errors.
    pub follow_symlinks: bool,
}

impl WalkerConfig {
    /// Create a new configuration from CLI arguments.
    #[must_use]
    pub fn new(follow_symlinks: bool) -> Self {
        Self { follow_symlinks }
    }
}

/// Coarse classification of a [`ScanError`].
///
/// Callers use this to decide whether to continue or abort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanErrorKind {
    /// A traversal step failed; the walk continues.
    Traversal,
    /// A metadata query failed; the walk of the current root aborts.
    Stat,
    /// A content read failed; the current size bucket is abandoned.
    Read,
}

/// Errors that can occur during scanning.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// Walking a directory tree failed at `path`.
    #[error("{path}: {source}")]
    Traversal {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Retrieving metadata for a file failed.
    #[error("stat {path}: {source}")]
    Stat {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Reading the content of a file failed.
    #[error("read {path}: {source}")]
    Read {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// The kind of this error.
    #[must_use]
    pub fn kind(&self) -> ScanErrorKind {
        match self {
            Self::Traversal { .. } => ScanErrorKind::Traversal,
            Self::Stat { .. } => ScanErrorKind::Stat,
            Self::Read { .. } => ScanErrorKind::Read,
        }
    }

    /// The path the error refers to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Traversal { path, .. } | Self::Stat { path, .. } | Self::Read { path, .. } => {
                path
            }
        }
    }
}

/// Filesystem access used by the duplicate finder.
///
/// The finder only needs two capabilities: the byte length of a path and
/// its complete content. Tests substitute their own implementation to
/// inject failures.
pub trait FileReader {
    /// Return the byte length of the file at `path`, following symlinks.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Stat`] if the metadata query fails.
    fn file_len(&self, path: &Path) -> Result<u64, ScanError>;

    /// Read the whole file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Read`] if the file cannot be opened or read.
    fn read_file(&self, path: &Path) -> Result<Vec<u8>, ScanError>;
}

/// [`FileReader`] backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskReader;

impl FileReader for DiskReader {
    fn file_len(&self, path: &Path) -> Result<u64, ScanError> {
        fs::metadata(path)
            .map(|m| m.len())
            .map_err(|source| ScanError::Stat {
                path: path.to_path_buf(),
                source,
            })
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>, ScanError> {
        // fs::read opens, reads to end and closes before returning
        fs::read(path).map_err(|source| ScanError::Read {
            path: path.to_path_buf(),
            source,
        })
    }
}
