//! Classification, extraction and triage of shipment log files.
//!
//! This crate holds the decision core of shipsort: given a tree of log files
//! it decides which are processed, skipped or need manual handling, extracts
//! the shipment fields of the processed ones and moves files into the
//! matching directories.
//!
//! # Module Organization
//!
//! - [`error`] - Operation error types
//! - [`config`] - Resolved pipeline settings
//! - [`log`] - Logging collaborator trait
//! - [`extraction`] - Field extraction
//! - [`classify`] - Scope and single-detail classification
//! - [`scan`] - Enumeration of log files
//! - [`mover`] - Moving files into triage directories
//! - [`report`] - Record accumulation and deduplication
//! - [`export`] - CSV report writing
//! - [`triage`] - Per-file triage and the batch run
//!
//! # Example
//!
//! ```no_run
//! use shipsort_ops::{CsvExporter, PipelineConfig, TracingSink, Triage};
//!
//! let config = PipelineConfig::default();
//! let exporter = CsvExporter::new(&config.parent, &config.output_basename);
//! let report = Triage::new(config, &TracingSink)
//!     .run_and_export(&exporter)
//!     .expect("run failed");
//! println!("{}", report.counts.summary_line());
//! ```

pub mod classify;
pub mod config;
pub mod error;
pub mod export;
pub mod extraction;
pub mod log;
pub mod mover;
pub mod report;
pub mod scan;
pub mod triage;

pub use classify::{Classification, Classifier};
pub use config::{MoveToggles, PipelineConfig, TriagePaths};
pub use error::{MoveError, OpsError, OpsResult};
pub use export::{report_file_name, write_csv, CsvExporter, ReportExporter};
pub use extraction::{FieldExtractor, PatternExtractor};
pub use log::{LogSink, TracingSink};
pub use mover::{destination_in, FileMover, FsMover};
pub use report::{dedup_first, ReportTable};
pub use scan::find_log_files;
pub use triage::{Decision, FileOutcome, RunCounts, RunReport, Triage};
