//! dupes - Duplicate File Finder
//!
//! Finds duplicate files across one or more directory trees. Files are first
//! grouped by byte length; only files that share a length are read, and
//! those are grouped again by the CRC-32 of their content. Each group of two
//! or more files with equal length and checksum is reported, together with
//! an estimate of the space deduplication would reclaim.

pub mod cli;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod output;
pub mod scanner;

use std::io::Write;

use anyhow::{Context, Result};

use crate::cli::{Cli, OutputFormat};
use crate::duplicates::{DuplicateFinder, FinderConfig};
use crate::error::ExitCode;
use crate::output::{JsonOutput, TextOutput};

/// Run the application, writing the report to stdout.
///
/// # Errors
///
/// Returns an error only if the report cannot be written.
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    logging::init_logging(cli.verbose, cli.quiet);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with_writer(&cli, &mut out)
}

/// Run the application against an arbitrary writer.
///
/// Returns [`ExitCode::GeneralError`] if no directory was given and
/// [`ExitCode::Success`] once scanning has begun, however many walk or read
/// errors were encountered.
///
/// # Errors
///
/// Returns an error only if writing to `out` fails.
pub fn run_with_writer<W: Write>(cli: &Cli, out: &mut W) -> Result<ExitCode> {
    if cli.paths.is_empty() {
        writeln!(out, "Missing directory argument.").context("Failed to write output")?;
        return Ok(ExitCode::GeneralError);
    }

    let config = FinderConfig::default().with_walker_config(cli.walker_config());
    let finder = DuplicateFinder::new(config);
    let report = finder.find_duplicates_in_paths(&cli.paths);

    match cli.output {
        OutputFormat::Text => TextOutput::new(&report)
            .write_to(out)
            .context("Failed to write report")?,
        OutputFormat::Json => JsonOutput::new(&report)
            .write_to(out)
            .context("Failed to write JSON report")?,
    }
    out.flush().context("Failed to flush output")?;

    Ok(ExitCode::Success)
}
