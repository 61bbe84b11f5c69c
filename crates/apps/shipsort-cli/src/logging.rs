//! Tracing subscriber setup.
//!
//! The log file level follows the `LOGGING`/`DEBUG` flags of the settings.
//! `--verbose` or `RUST_LOG` add a stderr layer on top.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LogConfig;
use crate::error::{CliError, CliResult};

/// Timestamp format of log file lines.
const LOG_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Level written to the log file.
pub fn file_level(log: &LogConfig) -> LevelFilter {
    match (log.logging, log.debug) {
        (true, true) => LevelFilter::DEBUG,
        (true, false) => LevelFilter::INFO,
        (false, _) => LevelFilter::WARN,
    }
}

/// Filter for the stderr layer, if one is wanted.
fn stderr_filter(verbose: bool) -> Option<EnvFilter> {
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if verbose {
        Some(EnvFilter::from_default_env().add_directive("shipsort=debug".parse().unwrap()))
    } else if has_rust_log {
        Some(EnvFilter::from_default_env())
    } else {
        None
    }
}

/// Install the global subscriber.
///
/// Call once, after the settings are loaded.
pub fn init(log: &LogConfig, verbose: bool) -> CliResult<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log.log_file)
        .map_err(|e| {
            CliError::config(format!(
                "cannot open log file {}: {}",
                log.log_file.display(),
                e
            ))
        })?;

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_timer(ChronoLocal::new(LOG_TIME_FORMAT.to_string()))
        .with_filter(file_level(log));

    let stderr_layer = stderr_filter(verbose).map(|filter| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_filter(filter)
    });

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| CliError::config(format!("cannot initialize logging: {}", e)))
}
