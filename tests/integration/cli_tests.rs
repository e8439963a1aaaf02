use clap::Parser;
use dupes::cli::Cli;
use dupes::error::ExitCode;
use dupes::run_with_writer;
use std::fs;
use tempfile::tempdir;

fn run(args: &[&str]) -> (ExitCode, String) {
    let cli = Cli::try_parse_from(std::iter::once("dupes").chain(args.iter().copied())).unwrap();
    let mut out = Vec::new();
    let code = run_with_writer(&cli, &mut out).unwrap();
    (code, String::from_utf8(out).unwrap())
}

#[test]
fn test_missing_directory_argument() {
    let (code, out) = run(&[]);

    assert_eq!(code, ExitCode::GeneralError);
    assert_eq!(out, "Missing directory argument.\n");
}

#[test]
fn test_scenario_a_one_group() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a"), b"XXXXXXXXXX").unwrap();
    fs::write(dir.path().join("b"), b"XXXXXXXXXX").unwrap();
    fs::write(dir.path().join("c"), b"YYYYYYYYYYYYYYYYYYYY").unwrap();

    let root = dir.path().to_str().unwrap();
    let (code, out) = run(&[root]);

    let expected = format!(
        "Wasted space:  0 kb\n{}, {}\n",
        dir.path().join("a").display(),
        dir.path().join("b").display()
    );
    assert_eq!(code, ExitCode::Success);
    assert_eq!(out, expected);
}

#[test]
fn test_scenario_b_same_length_different_content() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a"), b"XXXXXXXXXX").unwrap();
    fs::write(dir.path().join("b"), b"ZZZZZZZZZZ").unwrap();

    let (code, out) = run(&[dir.path().to_str().unwrap()]);

    assert_eq!(code, ExitCode::Success);
    assert_eq!(out, "No duplicates detected\n");
}

#[test]
fn test_scenario_c_empty_directory() {
    let dir = tempdir().unwrap();

    let (code, out) = run(&[dir.path().to_str().unwrap()]);

    assert_eq!(code, ExitCode::Success);
    assert_eq!(out, "No duplicates detected\n");
}

#[test]
fn test_scenario_d_three_copies() {
    let dir = tempdir().unwrap();
    for name in ["a", "b", "c"] {
        fs::write(dir.path().join(name), b"five!").unwrap();
    }

    let (_, out) = run(&[dir.path().to_str().unwrap()]);

    let expected = format!(
        "Wasted space:  0 kb\n{}, {}, {}\n",
        dir.path().join("a").display(),
        dir.path().join("b").display(),
        dir.path().join("c").display()
    );
    assert_eq!(out, expected);
}

#[test]
fn test_missing_root_still_scans_others() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a"), vec![1u8; 3000]).unwrap();
    fs::write(dir.path().join("b"), vec![1u8; 3000]).unwrap();
    let missing = dir.path().join("missing");

    let (code, out) = run(&[missing.to_str().unwrap(), dir.path().to_str().unwrap()]);
    let lines: Vec<_> = out.lines().collect();

    assert_eq!(code, ExitCode::Success);
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with(&format!("Error walking from  {} :  ", missing.display())));
    assert_eq!(lines[1], "Wasted space:  2 kb");
}

#[test]
#[cfg(unix)]
fn test_symlink_loop_reported_beside_duplicates() {
    use std::os::unix::fs::symlink;

    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a"), b"pair").unwrap();
    fs::write(dir.path().join("b"), b"pair").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    symlink(dir.path(), dir.path().join("sub").join("loop")).unwrap();

    let root = dir.path().to_str().unwrap();
    let (code, out) = run(&["--follow-symlinks", root]);
    let lines: Vec<_> = out.lines().collect();

    assert_eq!(code, ExitCode::Success);
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with(&format!("Error walking from  {root} :  ")));
    assert_eq!(lines[1], "Wasted space:  0 kb");
    assert_eq!(
        lines[2],
        format!(
            "{}, {}",
            dir.path().join("a").display(),
            dir.path().join("b").display()
        )
    );
}

#[test]
fn test_json_output() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a"), b"json").unwrap();
    fs::write(dir.path().join("b"), b"json").unwrap();

    let (code, out) = run(&["--output", "json", dir.path().to_str().unwrap()]);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(code, ExitCode::Success);
    assert_eq!(value["duplicates"].as_array().unwrap().len(), 1);
    assert_eq!(value["dedupe_size"], 4);
    assert_eq!(value["total_size"], 8);
    assert_eq!(value["wasted_space_kb"], 0);
}

#[test]
fn test_output_is_identical_across_runs() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a"), b"same").unwrap();
    fs::write(dir.path().join("b"), b"same").unwrap();
    fs::write(dir.path().join("c"), b"other!").unwrap();
    fs::write(dir.path().join("d"), b"other!").unwrap();

    let root = dir.path().to_str().unwrap();
    assert_eq!(run(&[root]), run(&[root]));
}
