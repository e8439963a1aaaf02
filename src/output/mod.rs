//! Output formatters for duplicate scan results.
//!
//! This module provides different output formats for a [`ScanReport`]:
//! - Plain text, the default human-readable report
//! - JSON for automation and scripting
//!
//! # Example
//!
//! ```no_run
//! use dupes::duplicates::DuplicateFinder;
//! use dupes::output::TextOutput;
//! use std::path::Path;
//!
//! let report = DuplicateFinder::with_defaults().find_duplicates(Path::new("."));
//! TextOutput::new(&report).write_to(&mut std::io::stdout()).unwrap();
//! ```
//!
//! [`ScanReport`]: crate::duplicates::ScanReport

pub mod json;
pub mod text;

// Re-export main types
pub use json::JsonOutput;
pub use text::TextOutput;
