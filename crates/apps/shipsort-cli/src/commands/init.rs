//! Initialize a settings file and the directory layout.

use std::path::Path;

use shipsort_ops::{LogSink, PipelineConfig, TracingSink};

use crate::bootstrap::ensure_dirs;
use crate::config::Settings;
use crate::error::{CliError, CliResult};
use crate::output::{InitOutput, OutputFormat, Render};
use crate::prompt;

/// Execute the init command.
///
/// The default settings use paths relative to the working directory, so the
/// directory layout is created there.
pub fn init(settings_path: &Path, format: OutputFormat, force: bool) -> CliResult<String> {
    let workdir = std::env::current_dir()?;
    init_with_sink(settings_path, &workdir, format, force, &TracingSink)
}

/// Execute the init command, creating the layout under `workdir`.
pub fn init_with_sink(
    settings_path: &Path,
    workdir: &Path,
    format: OutputFormat,
    force: bool,
    log: &dyn LogSink,
) -> CliResult<String> {
    if settings_path.exists() && !force {
        if !prompt::is_interactive() {
            return Err(CliError::user(format!(
                "{} already exists; pass --force to overwrite it",
                settings_path.display()
            )));
        }
        let overwrite = prompt::confirm(&format!("Overwrite {}?", settings_path.display()))?;
        if !overwrite {
            return Err(CliError::user("Aborted; settings left unchanged"));
        }
    }

    let settings = Settings::default();
    settings.save(settings_path)?;

    let created = ensure_dirs(&PipelineConfig::under(workdir), log)?;

    let output = InitOutput {
        settings_path: settings_path.display().to_string(),
        created_dirs: created.iter().map(|d| d.display().to_string()).collect(),
    };

    Ok(output.render(format))
}
