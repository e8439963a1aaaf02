//! dupes - Duplicate File Finder
//!
//! Entry point for the dupes CLI application.

use clap::Parser;
use dupes::{cli::Cli, error::ExitCode};

fn main() {
    let cli = Cli::parse();

    match dupes::run_app(cli) {
        Ok(code) => std::process::exit(code.as_i32()),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    }
}
