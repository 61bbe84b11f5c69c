//! Error codes and the extraction failure type.
//!
//! Error codes are stable numeric identifiers shown next to every fatal
//! error the CLI prints, together with a recovery hint.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::enums::Field;

/// Stable error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
#[non_exhaustive]
pub enum ErrorCode {
    // =========================================================================
    // Configuration Errors (0x0100 - 0x01FF)
    // =========================================================================
    /// Settings file missing
    ConfigNotFound = 0x0100,
    /// Settings file could not be parsed
    ConfigInvalid = 0x0101,
    /// Parent directory missing or not a directory
    ParentNotDirectory = 0x0102,

    // =========================================================================
    // Filesystem Errors (0x0200 - 0x02FF)
    // =========================================================================
    /// Source tree could not be walked
    SourceUnreadable = 0x0200,
    /// Report could not be written
    ReportWriteFailed = 0x0201,
    /// Input file missing
    FileNotFound = 0x0202,

    // =========================================================================
    // Internal Errors
    // =========================================================================
    /// Internal error
    InternalError = 0xFFFF,
}

impl ErrorCode {
    /// Returns true if this is a configuration error (0x0100-0x01FF)
    pub fn is_config_error(&self) -> bool {
        let code = *self as u16;
        (0x0100..=0x01FF).contains(&code)
    }

    /// Get the numeric code value
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get a user-friendly suggestion for recovering from this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::ConfigNotFound => {
                Some("Create a settings file with 'shipsort init' or pass --config.")
            }
            Self::ConfigInvalid => Some("Check the settings file syntax and value types."),
            Self::ParentNotDirectory => {
                Some("Set filepaths.parent to an existing directory.")
            }
            Self::SourceUnreadable => Some("Check that the source directory exists and is readable."),
            Self::ReportWriteFailed => Some("Check write permissions on the parent directory."),
            Self::FileNotFound => Some("Check the file path."),
            Self::InternalError => Some("An internal error occurred. Please report this issue."),
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::ConfigNotFound => write!(f, "CONFIG_NOT_FOUND"),
            ErrorCode::ConfigInvalid => write!(f, "CONFIG_INVALID"),
            ErrorCode::ParentNotDirectory => write!(f, "PARENT_NOT_DIRECTORY"),
            ErrorCode::SourceUnreadable => write!(f, "SOURCE_UNREADABLE"),
            ErrorCode::ReportWriteFailed => write!(f, "REPORT_WRITE_FAILED"),
            ErrorCode::FileNotFound => write!(f, "FILE_NOT_FOUND"),
            ErrorCode::InternalError => write!(f, "INTERNAL_ERROR"),
        }
    }
}

/// One of the four field patterns had no match.
///
/// Extraction is all-or-nothing, so this carries only the first missing field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no match for {field}")]
pub struct ExtractionFailed {
    /// First field whose pattern did not match.
    pub field: Field,
}
