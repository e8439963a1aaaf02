//! CRC-32 content checksums.
//!
//! # Overview
//! Files that share a byte length are compared by the CRC-32 (IEEE
//! polynomial) of their complete content. This is a fast, non-cryptographic
//! checksum: two different files with the same length and checksum are
//! reported as duplicates.

/// A 32-bit content checksum.
pub type Checksum = u32;

/// Compute the CRC-32 (IEEE) checksum of `data`.
///
/// # Example
///
/// ```
/// use dupes::scanner::checksum;
///
/// assert_eq!(checksum(b"123456789"), 0xCBF4_3926);
/// ```
#[must_use]
pub fn checksum(data: &[u8]) -> Checksum {
    crc32fast::hash(data)
}

/// Format a checksum as eight lowercase hex digits.
#[must_use]
pub fn checksum_hex(sum: Checksum) -> String {
    format!("{sum:08x}")
}
