//! Settings file.
//!
//! The settings keep the section and key names of the legacy
//! `settings.json` (`filepaths`, `commands`, `log_config`). Files ending in
//! `.json` are read as JSON, anything else as TOML.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use shipsort_ops::{MoveToggles, PipelineConfig, TriagePaths};
use shipsort_types::{
    DEFAULT_ALTERNATE_PREFIX, DEFAULT_LOG_FILE, DEFAULT_OUTPUT_BASENAME, DEFAULT_PARENT_DIR,
    DEFAULT_PROCESSED_DIR, DEFAULT_SCOPE_MARKER, DEFAULT_SKIPPED_DIR, DEFAULT_SOURCE_DIR,
    DEFAULT_WARNING_DIR,
};

use crate::error::{CliError, CliResult};

/// Default settings file, looked up in the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = "shipsort.toml";

/// Expand environment variables in a string.
/// Supports `${VAR_NAME}` syntax.
fn expand_env_vars(input: &str) -> String {
    let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap();
    re.replace_all(input, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| caps[0].to_string())
    })
    .to_string()
}

fn expand_path(path: &Path) -> PathBuf {
    PathBuf::from(expand_env_vars(&path.to_string_lossy()))
}

/// Settings loaded from TOML or JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory layout and report name.
    pub filepaths: FilePaths,
    /// Scope marker and triage toggles.
    pub commands: CommandSettings,
    /// Log file configuration.
    pub log_config: LogConfig,
}

impl Settings {
    /// Load settings from a file.
    ///
    /// Unlike most tools a missing file is an error: running with silent
    /// defaults would move files around in the wrong place.
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Err(CliError::ConfigNotFound(path.to_path_buf()));
        }
        let contents = std::fs::read_to_string(path)?;
        let mut settings: Self = if is_json(path) {
            serde_json::from_str(&contents)?
        } else {
            toml::from_str(&contents)?
        };

        settings.filepaths.expand_env_vars();

        Ok(settings)
    }

    /// Save settings to a file, in the format implied by its extension.
    pub fn save(&self, path: &Path) -> CliResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let contents = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)
                .map_err(|e| CliError::config(format!("Failed to serialize settings: {}", e)))?
        };
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Resolve the settings into a pipeline configuration.
    ///
    /// The parent directory is made absolute and must exist. Relative paths
    /// stay relative to the working directory.
    pub fn to_pipeline(&self) -> CliResult<PipelineConfig> {
        let fp = &self.filepaths;
        let parent = absolute(&fp.parent)?;
        if !parent.is_dir() {
            return Err(CliError::ParentNotDirectory(parent));
        }

        let config = PipelineConfig {
            scope_marker: self.commands.process_criteria.clone(),
            require_single_detail: self.commands.warn_if_more_than_one_detail,
            moves: MoveToggles {
                move_processed: self.commands.move_processed,
                move_skipped: self.commands.move_skipped,
                move_unhandled_to_warning: self.commands.move_unhandled_files_to_warning,
            },
            dry_run: false,
            paths: TriagePaths {
                source: fp.source.clone(),
                processed: fp.processed.clone(),
                skipped: fp.skipped.clone(),
                warning: fp.warning.clone(),
                alternate_prefix: fp.unc_processed.clone(),
            },
            parent,
            output_basename: fp.outputfile.clone(),
        };
        config.validate()?;
        Ok(config)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn absolute(path: &Path) -> CliResult<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

/// Directory layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePaths {
    /// Directory receiving the CSV report.
    pub parent: PathBuf,
    /// Tree scanned for `*.txt` logs.
    pub source: PathBuf,
    /// Destination of processed logs.
    pub processed: PathBuf,
    /// Destination of skipped logs.
    pub skipped: PathBuf,
    /// Destination of logs that need manual handling.
    pub warning: PathBuf,
    /// Report basename; the run timestamp is prepended.
    pub outputfile: String,
    /// Prefix recorded in the `unc_path` column.
    #[serde(rename = "UNC_processed")]
    pub unc_processed: PathBuf,
}

impl FilePaths {
    fn expand_env_vars(&mut self) {
        for path in [
            &mut self.parent,
            &mut self.source,
            &mut self.processed,
            &mut self.skipped,
            &mut self.warning,
            &mut self.unc_processed,
        ] {
            *path = expand_path(path);
        }
        self.outputfile = expand_env_vars(&self.outputfile);
    }
}

impl Default for FilePaths {
    fn default() -> Self {
        Self {
            parent: PathBuf::from(DEFAULT_PARENT_DIR),
            source: PathBuf::from(DEFAULT_SOURCE_DIR),
            processed: PathBuf::from(DEFAULT_PROCESSED_DIR),
            skipped: PathBuf::from(DEFAULT_SKIPPED_DIR),
            warning: PathBuf::from(DEFAULT_WARNING_DIR),
            outputfile: DEFAULT_OUTPUT_BASENAME.to_string(),
            unc_processed: PathBuf::from(DEFAULT_ALTERNATE_PREFIX),
        }
    }
}

/// Scope marker and triage toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandSettings {
    /// Literal a log must contain to be processed.
    pub process_criteria: String,
    /// Move processed logs.
    pub move_processed: bool,
    /// Move skipped logs.
    pub move_skipped: bool,
    /// Send logs without `1Details` to warning.
    #[serde(rename = "warn_if_more_than_1Detail")]
    pub warn_if_more_than_one_detail: bool,
    /// Move logs that need manual handling.
    #[serde(alias = "move_undhandled_files_to_warning")]
    pub move_unhandled_files_to_warning: bool,
}

impl Default for CommandSettings {
    fn default() -> Self {
        Self {
            process_criteria: DEFAULT_SCOPE_MARKER.to_string(),
            move_processed: false,
            move_skipped: false,
            warn_if_more_than_one_detail: true,
            move_unhandled_files_to_warning: true,
        }
    }
}

/// Log file configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Write debug messages (needs `LOGGING`).
    #[serde(rename = "DEBUG")]
    pub debug: bool,
    /// Write info messages; with neither flag only warnings are written.
    #[serde(rename = "LOGGING")]
    pub logging: bool,
    /// File the log is appended to.
    pub log_file: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            debug: true,
            logging: true,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

/// Settings path used when `--config` is absent.
pub fn default_settings_path() -> PathBuf {
    PathBuf::from(DEFAULT_SETTINGS_FILE)
}
