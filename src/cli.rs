//! Command-line interface definitions for dupes.
//!
//! This module defines all CLI arguments using the clap derive API.
//!
//! # Example
//!
//! ```bash
//! # Scan two trees for duplicates
//! dupes ~/Pictures /mnt/backup/Pictures
//!
//! # JSON output for scripting
//! dupes --output json ~/Downloads
//!
//! # Verbose mode for debugging
//! dupes -v ~/Downloads
//! ```

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::scanner::WalkerConfig;

/// Find duplicate files by size and content checksum.
///
/// Walks every given directory, groups files by length, then compares the
/// CRC-32 of files that share a length. Prints the estimated wasted space
/// and one line per group of identical files.
#[derive(Debug, Parser)]
#[command(name = "dupes")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directories to scan, in order
    ///
    /// Not enforced by the parser: an empty list is reported by the
    /// application itself.
    #[arg(value_name = "DIR")]
    pub paths: Vec<PathBuf>,

    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Follow symbolic links during scan
    ///
    /// Symlink loops are reported as walk errors.
    #[arg(long)]
    pub follow_symlinks: bool,
}

impl Cli {
    /// Walker configuration implied by the flags.
    #[must_use]
    pub fn walker_config(&self) -> WalkerConfig {
        WalkerConfig::new(self.follow_symlinks)
    }
}

/// Output format for scan results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text report
    Text,
    /// JSON output for scripting
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
