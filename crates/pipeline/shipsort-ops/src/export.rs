//! Writing the deduplicated report.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeZone};
use shipsort_types::{ShipmentRecord, CSV_COLUMNS, REPORT_TIMESTAMP_FORMAT};

use crate::error::{OpsError, OpsResult};

/// Persists the records of a run.
pub trait ReportExporter {
    /// Write `records` and return where they went.
    fn export(&self, records: &[ShipmentRecord]) -> OpsResult<PathBuf>;
}

/// Name of the report file for a run started at `at`.
///
/// Produces `<YYYY_Mon_DD_HH_MM>_<basename>`, e.g. `2024_Mar_05_14_07_extracted_data.csv`.
pub fn report_file_name<Tz>(at: &DateTime<Tz>, basename: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!("{}_{}", at.format(REPORT_TIMESTAMP_FORMAT), basename)
}

/// Writes the report as CSV with a header row.
#[derive(Debug, Clone)]
pub struct CsvExporter {
    parent: PathBuf,
    basename: String,
    timestamp: DateTime<Local>,
}

impl CsvExporter {
    /// Exporter writing into `parent`, stamped with the current local time.
    pub fn new(parent: impl Into<PathBuf>, basename: impl Into<String>) -> Self {
        Self::at(parent, basename, Local::now())
    }

    /// Exporter stamped with a fixed time.
    pub fn at(
        parent: impl Into<PathBuf>,
        basename: impl Into<String>,
        timestamp: DateTime<Local>,
    ) -> Self {
        Self {
            parent: parent.into(),
            basename: basename.into(),
            timestamp,
        }
    }

    /// Full path of the report this exporter writes.
    pub fn target(&self) -> PathBuf {
        self.parent
            .join(report_file_name(&self.timestamp, &self.basename))
    }
}

impl ReportExporter for CsvExporter {
    fn export(&self, records: &[ShipmentRecord]) -> OpsResult<PathBuf> {
        let path = self.target();
        write_csv(&path, records)?;
        Ok(path)
    }
}

/// Write `records` to `path`, header first.
///
/// A report that fails part way is removed rather than left truncated.
pub fn write_csv(path: &Path, records: &[ShipmentRecord]) -> OpsResult<()> {
    let file = File::create(path).map_err(|e| OpsError::Report {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    if let Err(e) = write_records(file, path, records) {
        let _ = std::fs::remove_file(path);
        return Err(e);
    }
    Ok(())
}

fn write_records<W: Write>(out: W, path: &Path, records: &[ShipmentRecord]) -> OpsResult<()> {
    let report_err = |source| OpsError::Report {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(out);

    // Written explicitly so an empty run still yields a header.
    writer.write_record(CSV_COLUMNS).map_err(report_err)?;
    for record in records {
        writer.serialize(record).map_err(report_err)?;
    }
    writer.flush().map_err(|e| report_err(e.into()))?;
    Ok(())
}
