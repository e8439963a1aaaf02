//! Duplicate detection module.
//!
//! This module provides functionality for:
//! - Size-based file grouping (Phase 1)
//! - Whole-file checksum comparison within each size group (Phase 2)
//! - Duplicate group and wasted-space accounting

pub mod finder;
pub mod groups;

pub use finder::{
    resolve_bucket, BucketResolution, DuplicateFinder, FinderConfig, ReadFailure, ScanReport,
    WalkFailure,
};
pub use groups::{DuplicateGroup, SizeIndex, SpaceAccounting};
