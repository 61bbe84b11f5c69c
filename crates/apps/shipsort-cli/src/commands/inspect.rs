//! Inspect a single log file.

use std::path::Path;

use shipsort_ops::{destination_in, LogSink, TracingSink, Triage};

use crate::config::Settings;
use crate::error::{CliError, CliResult};
use crate::output::{InspectOutput, OutputFormat, Render};

/// Execute the inspect command.
///
/// Classifies and extracts `file` with the configured rules. Nothing is
/// moved and no report is written.
pub fn inspect(settings: &Settings, format: OutputFormat, file: &Path) -> CliResult<String> {
    inspect_with_sink(settings, format, file, &TracingSink)
}

/// Execute the inspect command, logging to `log`.
pub fn inspect_with_sink(
    settings: &Settings,
    format: OutputFormat,
    file: &Path,
    log: &dyn LogSink,
) -> CliResult<String> {
    if !file.is_file() {
        return Err(CliError::FileNotFound(file.display().to_string()));
    }
    let bytes = std::fs::read(file)?;
    let text = String::from_utf8_lossy(&bytes);
    let file_name = file
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let config = settings.to_pipeline()?;
    let triage = Triage::new(config, log);
    let decision = triage.decide(&file_name, &text);
    let would_move_to = triage
        .move_target(decision.disposition)
        .map(|dir| destination_in(dir, file).display().to_string());

    let output = InspectOutput {
        file: file.display().to_string(),
        disposition: decision.disposition,
        reason: decision.reason,
        fields: decision.fields,
        would_move_to,
    };

    Ok(output.render(format))
}
