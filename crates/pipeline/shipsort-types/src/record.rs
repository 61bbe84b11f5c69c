//! Extracted fields and the shipment record.

use serde::{Deserialize, Serialize, Serializer};
use std::path::{Path, PathBuf};

/// Column order of the CSV report.
pub const CSV_COLUMNS: [&str; 6] = [
    "reference_id",
    "job_number",
    "distribution_order_number",
    "airwaybill",
    "path",
    "unc_path",
];

/// The four fields of a fully extracted shipment log.
///
/// Only produced when every pattern matched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExtractedFields {
    /// Digits from the file name.
    pub reference_id: String,
    /// Token following `Shipment:`.
    pub job_number: String,
    /// Suffix of the job number after the hyphen.
    pub distribution_order_number: String,
    /// Token from a comma-delimited segment.
    pub airwaybill: String,
}

/// One row of the report.
///
/// Field names and order match [`CSV_COLUMNS`] when serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentRecord {
    pub reference_id: String,
    pub job_number: String,
    pub distribution_order_number: String,
    pub airwaybill: String,
    /// Where the file was found.
    #[serde(rename = "path", serialize_with = "serialize_path_lossy")]
    pub source_path: PathBuf,
    /// File name re-rooted under the alternate prefix.
    #[serde(rename = "unc_path", serialize_with = "serialize_path_lossy")]
    pub alternate_path: PathBuf,
}

/// Paths that are not valid UTF-8 are written with replacement characters
/// rather than failing the whole report.
fn serialize_path_lossy<P, S>(path: &P, serializer: S) -> Result<S::Ok, S::Error>
where
    P: AsRef<Path>,
    S: Serializer,
{
    serializer.serialize_str(&path.as_ref().to_string_lossy())
}

impl ShipmentRecord {
    /// Build a record from extracted fields and the file's two locations.
    pub fn new(fields: ExtractedFields, source_path: PathBuf, alternate_path: PathBuf) -> Self {
        Self {
            reference_id: fields.reference_id,
            job_number: fields.job_number,
            distribution_order_number: fields.distribution_order_number,
            airwaybill: fields.airwaybill,
            source_path,
            alternate_path,
        }
    }

    /// Key used to drop duplicate shipments from the report.
    pub fn dedup_key(&self) -> (&str, &str) {
        (&self.distribution_order_number, &self.airwaybill)
    }
}

/// Re-root `source`'s file name under `prefix`.
pub fn alternate_path_for(prefix: &Path, source: &Path) -> PathBuf {
    match source.file_name() {
        Some(name) => prefix.join(name),
        None => prefix.to_path_buf(),
    }
}
