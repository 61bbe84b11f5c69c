//! Helper functions for creating test fixtures.

use std::fs;
use std::path::{Path, PathBuf};

use shipsort_ops::{MoveToggles, PipelineConfig};
use tempfile::TempDir;

/// A log that is in scope, simple and has all four fields.
///
/// Fields: `JOB456`, `DO789`, `AWB001`.
pub const PROCESSABLE_LOG: &str = "\
Station: ZRH
Summary: 1Details
Shipment: JOB456-DO789
Carrier: SWISS, AWB001, priority
";

/// A log without the scope marker.
pub const OUT_OF_SCOPE_LOG: &str = "\
Station: GVA
Summary: 1Details
Shipment: JOB111-DO222
Carrier: SWISS, AWB333, priority
";

/// An in-scope log describing several shipments.
pub const MULTI_DETAIL_LOG: &str = "\
Station: ZRH
Summary: 2Details
Shipment: JOB456-DO789
Carrier: SWISS, AWB001, priority
Shipment: JOB457-DO790
Carrier: SWISS, AWB002, priority
";

/// An in-scope, simple log with no airwaybill segment.
pub const UNPARSEABLE_LOG: &str = "\
Station: ZRH
Summary: 1Details
Shipment: JOB456-DO789
Carrier: SWISS
";

/// Build a processable log with custom fields.
pub fn shipment_log(job: &str, order: &str, airwaybill: &str) -> String {
    format!(
        "Station: ZRH\nSummary: 1Details\nShipment: {}-{}\nCarrier: SWISS, {}, priority\n",
        job, order, airwaybill
    )
}

/// A temporary working directory with source, processed, skipped and
/// warning directories, plus a parent for the report.
pub struct SourceTree {
    temp: TempDir,
    config: PipelineConfig,
}

impl SourceTree {
    /// Create the tree with default toggles.
    pub fn new() -> Self {
        let temp = TempDir::new().expect("create temp dir");
        let config = PipelineConfig::under(temp.path());
        for dir in [
            &config.paths.source,
            &config.paths.processed,
            &config.paths.skipped,
            &config.paths.warning,
        ] {
            fs::create_dir_all(dir).expect("create triage dir");
        }
        Self { temp, config }
    }

    /// Root of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    pub fn source(&self) -> &Path {
        &self.config.paths.source
    }

    pub fn processed(&self) -> &Path {
        &self.config.paths.processed
    }

    pub fn skipped(&self) -> &Path {
        &self.config.paths.skipped
    }

    pub fn warning(&self) -> &Path {
        &self.config.paths.warning
    }

    /// Pipeline configuration pointing at this tree.
    pub fn config(&self) -> PipelineConfig {
        self.config.clone()
    }

    /// Pipeline configuration with every move enabled.
    pub fn config_moving_all(&self) -> PipelineConfig {
        self.config().with_moves(MoveToggles {
            move_processed: true,
            move_skipped: true,
            move_unhandled_to_warning: true,
        })
    }

    /// Write a log file at `relative` under the source directory.
    pub fn add_log(&self, relative: &str, text: &str) -> PathBuf {
        let path = self.config.paths.source.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create log parent");
        }
        fs::write(&path, text).expect("write log");
        path
    }

    /// File names currently in `dir`, sorted.
    pub fn files_in(&self, dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .map(|entries| {
                entries
                    .filter_map(|e| e.ok())
                    .filter(|e| e.path().is_file())
                    .map(|e| e.file_name().to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default();
        names.sort();
        names
    }
}

impl Default for SourceTree {
    fn default() -> Self {
        Self::new()
    }
}
