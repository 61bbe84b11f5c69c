//! Per-file triage and the batch run.
//!
//! Every log file goes through one pass:
//!
//! 1. read the text (unreadable files are warned)
//! 2. classify: out of scope files are skipped, non-simple files are warned
//! 3. extract: a full match is processed, anything less is warned
//! 4. move the file according to its disposition, if enabled
//!
//! No per-file fault escapes this module; each one ends as a disposition and
//! a log line. Move failures are logged and leave the disposition untouched.

use std::path::{Path, PathBuf};

use serde::Serialize;
use shipsort_types::{Disposition, ExtractedFields, ShipmentRecord, WarningReason};

use crate::classify::{Classification, Classifier};
use crate::config::PipelineConfig;
use crate::error::OpsResult;
use crate::export::ReportExporter;
use crate::extraction::{FieldExtractor, PatternExtractor};
use crate::log::LogSink;
use crate::mover::{destination_in, FileMover, FsMover};
use crate::report::ReportTable;
use crate::scan::find_log_files;

/// Outcome of classifying and extracting one file's text, before any move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub disposition: Disposition,
    pub reason: Option<WarningReason>,
    pub fields: Option<ExtractedFields>,
}

impl Decision {
    fn processed(fields: ExtractedFields) -> Self {
        Self {
            disposition: Disposition::Processed,
            reason: None,
            fields: Some(fields),
        }
    }

    fn skipped() -> Self {
        Self {
            disposition: Disposition::Skipped,
            reason: None,
            fields: None,
        }
    }

    fn warning(reason: WarningReason) -> Self {
        Self {
            disposition: Disposition::Warning,
            reason: Some(reason),
            fields: None,
        }
    }
}

/// Everything that happened to one file during a run.
#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    /// Where the file was found.
    pub path: PathBuf,
    pub disposition: Disposition,
    /// Set for [`Disposition::Warning`].
    pub reason: Option<WarningReason>,
    /// Set for [`Disposition::Processed`].
    pub fields: Option<ExtractedFields>,
    /// Where the file was moved, or would have been in a dry run.
    pub moved_to: Option<PathBuf>,
    /// Why the move failed.
    pub move_error: Option<String>,
}

/// Per-disposition totals of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunCounts {
    pub total: usize,
    pub processed: usize,
    pub skipped: usize,
    pub warnings: usize,
    pub move_failures: usize,
}

impl RunCounts {
    fn record(&mut self, outcome: &FileOutcome) {
        self.total += 1;
        match outcome.disposition {
            Disposition::Processed => self.processed += 1,
            Disposition::Skipped => self.skipped += 1,
            Disposition::Warning => self.warnings += 1,
        }
        if outcome.move_error.is_some() {
            self.move_failures += 1;
        }
    }

    /// One-line summary logged at the end of a run.
    pub fn summary_line(&self) -> String {
        format!(
            "Total files handled: {} Processed files: {} Skipped files: {} Warnings: {}",
            self.total, self.processed, self.skipped, self.warnings
        )
    }
}

/// Result of a full run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub outcomes: Vec<FileOutcome>,
    pub counts: RunCounts,
    /// Deduplicated records, in enumeration order.
    pub records: Vec<ShipmentRecord>,
    /// Records dropped as duplicates.
    pub duplicates_dropped: usize,
    /// Where the report was written; `None` for dry runs.
    pub report_path: Option<PathBuf>,
    pub dry_run: bool,
}

/// Classifies, extracts and moves log files.
pub struct Triage<'a> {
    config: PipelineConfig,
    classifier: Classifier,
    extractor: PatternExtractor,
    mover: Box<dyn FileMover + 'a>,
    log: &'a dyn LogSink,
}

impl<'a> Triage<'a> {
    /// Create a triage run with the pattern extractor and filesystem mover.
    pub fn new(config: PipelineConfig, log: &'a dyn LogSink) -> Self {
        let classifier = Classifier::new(config.scope_marker.clone(), config.require_single_detail);
        Self {
            config,
            classifier,
            extractor: PatternExtractor::new(),
            mover: Box::new(FsMover),
            log,
        }
    }

    /// Replace the file mover.
    pub fn with_mover(mut self, mover: impl FileMover + 'a) -> Self {
        self.mover = Box::new(mover);
        self
    }

    /// Decide what to do with a file's text. No side effects beyond logging.
    pub fn decide(&self, file_name: &str, text: &str) -> Decision {
        let Classification {
            in_scope,
            is_simple,
        } = self.classifier.classify_file(file_name, text, self.log);
        self.log.debug(&format!(
            "{}: in_scope={} is_simple={}",
            file_name, in_scope, is_simple
        ));

        if !in_scope {
            return Decision::skipped();
        }
        if !is_simple {
            return Decision::warning(WarningReason::MultipleDetails);
        }

        match self.extractor.extract(file_name, text) {
            Ok(fields) => {
                self.log
                    .debug(&format!("{}: extracted {:?}", file_name, fields));
                Decision::processed(fields)
            }
            Err(failed) => {
                self.log.warn(&format!(
                    "{} did not match the field patterns ({})",
                    file_name, failed
                ));
                Decision::warning(WarningReason::PatternMismatch {
                    field: failed.field,
                })
            }
        }
    }

    /// Read, decide and move one file, appending its record to `table`.
    pub fn triage_file(&self, path: &Path, table: &mut ReportTable) -> FileOutcome {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let decision = match std::fs::read(path) {
            Ok(bytes) => self.decide(&file_name, &String::from_utf8_lossy(&bytes)),
            Err(e) => {
                self.log
                    .error(&format!("Could not read {}: {}", path.display(), e));
                Decision::warning(WarningReason::Unreadable {
                    message: e.to_string(),
                })
            }
        };

        if let Some(fields) = &decision.fields {
            table.push(fields.clone(), path);
        }

        let mut outcome = FileOutcome {
            path: path.to_path_buf(),
            disposition: decision.disposition,
            reason: decision.reason,
            fields: decision.fields,
            moved_to: None,
            move_error: None,
        };

        if let Some(dir) = self.move_target(outcome.disposition) {
            self.move_file(&mut outcome, dir);
        }

        outcome
    }

    /// Scan the source tree and triage every log file in order.
    ///
    /// Returns the deduplicated records; nothing is exported.
    pub fn run(&self) -> OpsResult<RunReport> {
        let paths = &self.config.paths;
        let files = find_log_files(&paths.source, &paths.destinations(), self.log)?;
        self.log.info(&format!(
            "Found {} log files in {}",
            files.len(),
            paths.source.display()
        ));

        let mut table = ReportTable::new(paths.alternate_prefix.clone());
        let mut counts = RunCounts::default();
        let mut outcomes = Vec::with_capacity(files.len());

        for path in &files {
            let outcome = self.triage_file(path, &mut table);
            counts.record(&outcome);
            outcomes.push(outcome);
        }

        let collected = table.len();
        let records = table.build(self.log);
        let duplicates_dropped = collected - records.len();

        self.log.info(&counts.summary_line());
        if counts.move_failures > 0 {
            self.log
                .warn(&format!("{} files could not be moved", counts.move_failures));
        }

        Ok(RunReport {
            outcomes,
            counts,
            records,
            duplicates_dropped,
            report_path: None,
            dry_run: self.config.dry_run,
        })
    }

    /// Run and hand the records to `exporter`, unless this is a dry run.
    pub fn run_and_export(&self, exporter: &dyn ReportExporter) -> OpsResult<RunReport> {
        let mut report = self.run()?;
        if !self.config.dry_run {
            let path = exporter.export(&report.records)?;
            self.log.info(&format!(
                "Wrote {} records to {}",
                report.records.len(),
                path.display()
            ));
            report.report_path = Some(path);
        }
        Ok(report)
    }

    /// Directory a file with this disposition moves to, if moving is enabled.
    pub fn move_target(&self, disposition: Disposition) -> Option<&Path> {
        let moves = &self.config.moves;
        let paths = &self.config.paths;
        match disposition {
            Disposition::Processed if moves.move_processed => Some(&paths.processed),
            Disposition::Skipped if moves.move_skipped => Some(&paths.skipped),
            Disposition::Warning if moves.move_unhandled_to_warning => Some(&paths.warning),
            _ => None,
        }
    }

    fn move_file(&self, outcome: &mut FileOutcome, dir: &Path) {
        if self.config.dry_run {
            let to = destination_in(dir, &outcome.path);
            self.log.info(&format!(
                "Dry run: would move {} -> {}",
                outcome.path.display(),
                to.display()
            ));
            outcome.moved_to = Some(to);
            return;
        }

        match self.mover.move_into(&outcome.path, dir) {
            Ok(to) => {
                self.log.debug(&format!(
                    "File is moved: {} -> {}",
                    outcome.path.display(),
                    to.display()
                ));
                outcome.moved_to = Some(to);
            }
            Err(e) => {
                self.log.error(&e.to_string());
                outcome.move_error = Some(e.to_string());
            }
        }
    }
}

impl std::fmt::Debug for Triage<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Triage")
            .field("config", &self.config)
            .field("classifier", &self.classifier)
            .finish_non_exhaustive()
    }
}
