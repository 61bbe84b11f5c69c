//! Enumeration types for the triage pipeline.

use serde::{Deserialize, Serialize};

/// Terminal classification of a file for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disposition {
    /// All fields extracted; the file contributed a record.
    Processed,
    /// The file does not carry the scope marker.
    Skipped,
    /// The file is in scope but needs manual handling.
    Warning,
}

impl Disposition {
    /// Name used in logs and human output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Processed => "processed",
            Self::Skipped => "skipped",
            Self::Warning => "warning",
        }
    }
}

impl std::fmt::Display for Disposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four fields extracted from a shipment log, in extraction order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Digits taken from the file name.
    ReferenceId,
    /// Token after `Shipment:`.
    JobNumber,
    /// Suffix of the job number after the hyphen.
    DistributionOrderNumber,
    /// Token between commas.
    Airwaybill,
}

impl Field {
    /// Column name of the field in the CSV report.
    pub fn column(&self) -> &'static str {
        match self {
            Self::ReferenceId => "reference_id",
            Self::JobNumber => "job_number",
            Self::DistributionOrderNumber => "distribution_order_number",
            Self::Airwaybill => "airwaybill",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column())
    }
}

/// Why a file ended with [`Disposition::Warning`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum WarningReason {
    /// The single-detail marker is missing; the log may hold several shipments.
    MultipleDetails,
    /// A field pattern had no match.
    PatternMismatch {
        /// First field without a match.
        field: Field,
    },
    /// The file could not be read.
    Unreadable {
        /// I/O error message.
        message: String,
    },
}

impl std::fmt::Display for WarningReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MultipleDetails => write!(f, "contains more than one detail"),
            Self::PatternMismatch { field } => write!(f, "no match for {}", field),
            Self::Unreadable { message } => write!(f, "unreadable: {}", message),
        }
    }
}
