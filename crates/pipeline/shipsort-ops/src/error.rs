//! Error types for the pipeline.
//!
//! `OpsError` covers the failures that end a run. Per-file faults never
//! surface as `OpsError`; they become a disposition plus a log entry.
//! `MoveError` is the recoverable failure of a single file move.

use std::path::PathBuf;

use shipsort_types::ErrorCode;
use thiserror::Error;

/// Result type for pipeline operations.
pub type OpsResult<T> = std::result::Result<T, OpsError>;

/// Errors that abort a pipeline operation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OpsError {
    /// A setting failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The source directory does not exist.
    #[error("source directory not found: {0}")]
    SourceMissing(PathBuf),

    /// The source tree could not be walked.
    #[error("cannot scan {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// The report could not be written.
    #[error("failed to write report {path}: {source}")]
    Report {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl OpsError {
    /// Create an invalid configuration error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Map this error to its stable error code.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::InvalidConfig(_) => ErrorCode::ConfigInvalid,
            Self::SourceMissing(_) | Self::Walk { .. } => ErrorCode::SourceUnreadable,
            Self::Report { .. } => ErrorCode::ReportWriteFailed,
        }
    }
}

/// Failure to move one file into a triage directory.
#[derive(Debug, Error)]
pub enum MoveError {
    /// The file is locked by another process or we lack permission.
    #[error("file in use, could not be moved: {0}")]
    Locked(PathBuf),

    /// The file vanished before it could be moved.
    #[error("file was not found: {0}")]
    SourceMissing(PathBuf),

    /// Any other I/O failure.
    #[error("failed to move {from} -> {to}: {source}")]
    Io {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MoveError {
    /// Classify an I/O error raised while moving `from` to `to`.
    pub fn from_io(from: PathBuf, to: PathBuf, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::Locked(from),
            std::io::ErrorKind::NotFound => Self::SourceMissing(from),
            _ => Self::Io { from, to, source },
        }
    }
}
