//! Triage run command.

use shipsort_ops::{CsvExporter, LogSink, TracingSink, Triage};

use crate::bootstrap::ensure_dirs;
use crate::config::Settings;
use crate::error::CliResult;
use crate::output::{OutputFormat, Render, RunOutput};
use crate::progress;

/// Command-line overrides for a run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub dry_run: bool,
    pub move_processed: bool,
    pub move_skipped: bool,
}

/// Execute the run command.
pub fn run(settings: &Settings, format: OutputFormat, options: RunOptions) -> CliResult<String> {
    run_with_sink(settings, format, options, &TracingSink)
}

/// Execute the run command, logging to `log`.
pub fn run_with_sink(
    settings: &Settings,
    format: OutputFormat,
    options: RunOptions,
    log: &dyn LogSink,
) -> CliResult<String> {
    let mut config = settings.to_pipeline()?;
    config.dry_run = options.dry_run;
    config.moves.move_processed |= options.move_processed;
    config.moves.move_skipped |= options.move_skipped;
    config.validate()?;

    ensure_dirs(&config, log)?;

    let exporter = CsvExporter::new(&config.parent, &config.output_basename);
    let triage = Triage::new(config, log);
    let pb = progress::for_format(format, "Sorting shipment logs...");
    let report = progress::with_spinner(pb, || triage.run_and_export(&exporter))?;

    Ok(RunOutput::from_report(&report).render(format))
}
