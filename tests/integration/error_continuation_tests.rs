use dupes::duplicates::{DuplicateFinder, FinderConfig};
use dupes::scanner::{DiskReader, FileReader, ScanError, ScanErrorKind};
use std::fs;
use std::io;
use std::path::Path;
use tempfile::tempdir;

/// Disk reader that refuses to read any file named `locked`.
struct LockedReader;

impl FileReader for LockedReader {
    fn file_len(&self, path: &Path) -> Result<u64, ScanError> {
        DiskReader.file_len(path)
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>, ScanError> {
        if path.file_name().is_some_and(|n| n == "locked") {
            return Err(ScanError::Read {
                path: path.to_path_buf(),
                source: io::Error::from(io::ErrorKind::PermissionDenied),
            });
        }
        DiskReader.read_file(path)
    }
}

#[test]
fn test_missing_root_does_not_stop_other_roots() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a"), b"dup").unwrap();
    fs::write(dir.path().join("b"), b"dup").unwrap();
    let missing = dir.path().join("does-not-exist");

    let report = DuplicateFinder::with_defaults()
        .find_duplicates_in_paths(&[missing.clone(), dir.path().to_path_buf()]);

    assert_eq!(report.walk_errors.len(), 1);
    assert_eq!(report.walk_errors[0].root, missing);
    assert_eq!(report.walk_errors[0].error.kind(), ScanErrorKind::Traversal);
    assert_eq!(report.groups.len(), 1);
}

#[test]
fn test_read_error_abandons_only_its_length() {
    let dir = tempdir().unwrap();
    // Length 6 bucket: keep, locked, later
    fs::write(dir.path().join("keep"), b"sixsix").unwrap();
    fs::write(dir.path().join("later"), b"sixsix").unwrap();
    fs::write(dir.path().join("locked"), b"sixsix").unwrap();
    // Length 2 bucket
    fs::write(dir.path().join("p"), b"pp").unwrap();
    fs::write(dir.path().join("q"), b"pp").unwrap();

    let finder = DuplicateFinder::with_reader(FinderConfig::default(), LockedReader);
    let report = finder.find_duplicates(dir.path());

    // Read order in the length-6 bucket is keep, later, locked: the group
    // keep+later is confirmed before the failure and survives
    assert_eq!(report.read_errors.len(), 1);
    assert_eq!(report.read_errors[0].size, 6);
    assert_eq!(report.read_errors[0].error.kind(), ScanErrorKind::Read);
    assert_eq!(report.groups.len(), 2);
    assert_eq!(report.groups[0].size, 6);
    assert_eq!(report.groups[1].size, 2);
}

#[test]
fn test_read_error_before_second_member_yields_no_group() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a"), b"1234").unwrap();
    fs::write(dir.path().join("locked"), b"1234").unwrap();
    fs::write(dir.path().join("z"), b"1234").unwrap();

    let finder = DuplicateFinder::with_reader(FinderConfig::default(), LockedReader);
    let report = finder.find_duplicates(dir.path());

    assert_eq!(report.read_errors.len(), 1);
    assert!(report.groups.is_empty());
    assert_eq!(report.accounting.dedupe_size, 0);
    assert_eq!(report.accounting.total_size, 0);
}

#[cfg(unix)]
#[test]
fn test_dangling_symlink_aborts_its_root_only() {
    use std::os::unix::fs::symlink;

    let dir1 = tempdir().unwrap();
    let dir2 = tempdir().unwrap();
    symlink(dir1.path().join("nowhere"), dir1.path().join("dangling")).unwrap();
    fs::write(dir2.path().join("x"), b"pair").unwrap();
    fs::write(dir2.path().join("y"), b"pair").unwrap();

    let report = DuplicateFinder::with_defaults()
        .find_duplicates_in_paths(&[dir1.path().to_path_buf(), dir2.path().to_path_buf()]);

    assert_eq!(report.walk_errors.len(), 1);
    assert_eq!(report.walk_errors[0].error.kind(), ScanErrorKind::Stat);
    assert_eq!(report.groups.len(), 1);
}
