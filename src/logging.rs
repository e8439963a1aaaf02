//! Diagnostic logging to stderr.
//!
//! Diagnostics go through the `log` facade with `env_logger` behind it, so
//! stdout carries nothing but the report. `RUST_LOG` wins when it is set;
//! otherwise `--quiet` and `--verbose` pick the level, with warnings as the
//! default.
//!
//! At `-v` and above each line also carries a timestamp and the emitting
//! module.
//!
//! ```rust,no_run
//! use dupes::logging::init_logging;
//!
//! init_logging(1, false);
//! log::debug!("visible at -v");
//! ```

use env_logger::{Builder, Env};
use log::LevelFilter;
use std::io::Write;

/// Install the stderr logger for this process.
///
/// Only the first call takes effect.
pub fn init_logging(verbose: u8, quiet: bool) {
    let level = determine_level(verbose, quiet);
    let mut builder = Builder::from_env(Env::default().default_filter_or(level.as_str()));

    if verbose == 0 {
        builder.format(|buf, record| {
            let style = buf.default_level_style(record.level());
            writeln!(buf, "{style}{:<5}{style:#} {}", record.level(), record.args())
        });
    } else {
        builder.format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let timestamp = buf.timestamp_millis();
            writeln!(
                buf,
                "{timestamp} {style}{:<5}{style:#} [{}] {}",
                record.level(),
                record.module_path().unwrap_or("dupes"),
                record.args()
            )
        });
    }

    match builder.try_init() {
        Ok(()) => log::debug!("Logger ready, CLI level {}", level),
        Err(e) => log::trace!("Logger already installed: {}", e),
    }
}

/// Map `-q`/`-v` to a level filter; `-q` wins over `-v`.
fn determine_level(verbose: u8, quiet: bool) -> LevelFilter {
    match (quiet, verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Warn,
        (false, 1) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    }
}
