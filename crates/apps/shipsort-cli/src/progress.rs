//! Progress spinner utilities for CLI commands.

use indicatif::{ProgressBar, ProgressStyle};

use crate::output::OutputFormat;

/// Create a spinner progress bar with a message.
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.green} {msg}")
            .expect("Invalid progress bar template"),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Create a hidden progress bar (no-op).
///
/// Use this when running in non-interactive mode or JSON output.
pub fn hidden() -> ProgressBar {
    ProgressBar::hidden()
}

/// Spinner for human output, hidden otherwise.
pub fn for_format(format: OutputFormat, msg: &str) -> ProgressBar {
    match format {
        OutputFormat::Human => spinner(msg),
        OutputFormat::Json => hidden(),
    }
}

/// Run an operation with a spinner, returning the result.
///
/// The spinner is cleared on completion.
pub fn with_spinner<F, T>(pb: ProgressBar, op: F) -> T
where
    F: FnOnce() -> T,
{
    let result = op();
    pb.finish_and_clear();
    result
}
