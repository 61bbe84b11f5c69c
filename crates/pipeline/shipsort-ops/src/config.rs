//! Configuration types for the pipeline.
//!
//! These are resolved values: the CLI reads the settings file, expands
//! variables and hands the pipeline a `PipelineConfig`. Nothing in this crate
//! parses raw settings.

use std::path::{Path, PathBuf};

use shipsort_types::{
    DEFAULT_ALTERNATE_PREFIX, DEFAULT_OUTPUT_BASENAME, DEFAULT_PARENT_DIR,
    DEFAULT_PROCESSED_DIR, DEFAULT_SCOPE_MARKER, DEFAULT_SKIPPED_DIR, DEFAULT_SOURCE_DIR,
    DEFAULT_WARNING_DIR,
};

use crate::error::{OpsError, OpsResult};

/// Directories the pipeline reads from and moves files into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriagePaths {
    /// Tree scanned for log files.
    pub source: PathBuf,
    /// Destination of processed files.
    pub processed: PathBuf,
    /// Destination of skipped files.
    pub skipped: PathBuf,
    /// Destination of files needing manual handling.
    pub warning: PathBuf,
    /// Prefix recorded in the report's alternate path column.
    pub alternate_prefix: PathBuf,
}

impl TriagePaths {
    /// Lay out all directories under `root` with the default names.
    pub fn under(root: &Path) -> Self {
        Self {
            source: root.join(DEFAULT_SOURCE_DIR),
            processed: root.join(DEFAULT_PROCESSED_DIR),
            skipped: root.join(DEFAULT_SKIPPED_DIR),
            warning: root.join(DEFAULT_WARNING_DIR),
            alternate_prefix: PathBuf::from(DEFAULT_ALTERNATE_PREFIX),
        }
    }

    /// The three triage destinations.
    pub fn destinations(&self) -> [&Path; 3] {
        [&self.processed, &self.skipped, &self.warning]
    }
}

impl Default for TriagePaths {
    fn default() -> Self {
        Self::under(Path::new(""))
    }
}

/// Which triage moves are performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveToggles {
    /// Move processed files into the processed directory.
    pub move_processed: bool,
    /// Move skipped files into the skipped directory.
    pub move_skipped: bool,
    /// Move warned files into the warning directory.
    pub move_unhandled_to_warning: bool,
}

impl Default for MoveToggles {
    fn default() -> Self {
        Self {
            move_processed: false,
            move_skipped: false,
            move_unhandled_to_warning: true,
        }
    }
}

/// Resolved settings for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Literal a file must contain to be processed.
    pub scope_marker: String,
    /// Route logs without the single-detail marker to warning.
    pub require_single_detail: bool,
    /// Move behavior.
    pub moves: MoveToggles,
    /// Classify and extract without moving files or writing a report.
    pub dry_run: bool,
    /// Directory layout.
    pub paths: TriagePaths,
    /// Directory receiving the report.
    pub parent: PathBuf,
    /// Report basename; the run timestamp is prepended.
    pub output_basename: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            scope_marker: DEFAULT_SCOPE_MARKER.to_string(),
            require_single_detail: true,
            moves: MoveToggles::default(),
            dry_run: false,
            paths: TriagePaths::default(),
            parent: PathBuf::from(DEFAULT_PARENT_DIR),
            output_basename: DEFAULT_OUTPUT_BASENAME.to_string(),
        }
    }
}

impl PipelineConfig {
    /// Create a configuration with every directory under `root`.
    pub fn under(root: &Path) -> Self {
        Self {
            paths: TriagePaths::under(root),
            parent: root.to_path_buf(),
            ..Default::default()
        }
    }

    /// Set the scope marker.
    pub fn with_scope_marker(mut self, marker: impl Into<String>) -> Self {
        self.scope_marker = marker.into();
        self
    }

    /// Enable or disable the single-detail check.
    pub fn with_single_detail_check(mut self, enabled: bool) -> Self {
        self.require_single_detail = enabled;
        self
    }

    /// Replace the move toggles.
    pub fn with_moves(mut self, moves: MoveToggles) -> Self {
        self.moves = moves;
        self
    }

    /// Enable or disable dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Check the settings that would make a run meaningless.
    pub fn validate(&self) -> OpsResult<()> {
        if self.scope_marker.is_empty() {
            return Err(OpsError::invalid_config("scope marker must not be empty"));
        }
        if self.output_basename.trim().is_empty() {
            return Err(OpsError::invalid_config("output file name must not be empty"));
        }
        if !self.parent.is_dir() {
            return Err(OpsError::invalid_config(format!(
                "parent {} is not a directory",
                self.parent.display()
            )));
        }
        Ok(())
    }
}
