//! CLI error types.

use std::path::PathBuf;

use shipsort_types::ErrorCode;
use thiserror::Error;

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error enum wrapping all crate errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Settings file missing.
    #[error("Settings file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// Parent directory missing or not a directory.
    #[error("Parent is not a directory or not defined: {}", .0.display())]
    ParentNotDirectory(PathBuf),

    /// Pipeline error.
    #[error("{0}")]
    Ops(#[from] shipsort_ops::OpsError),

    /// IO error.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// User-facing error with actionable message.
    #[error("{0}")]
    User(String),

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(String),
}

impl CliError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a user-facing error.
    pub fn user(msg: impl Into<String>) -> Self {
        Self::User(msg.into())
    }

    /// Whether this error came from loading or validating settings.
    pub fn is_config_error(&self) -> bool {
        self.error_code().is_config_error()
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            // User errors: 1
            Self::User(_) => 1,
            // Not found: 2
            Self::FileNotFound(_) => 2,
            // Config errors: 3
            Self::Config(_)
            | Self::ConfigNotFound(_)
            | Self::ParentNotDirectory(_)
            | Self::Toml(_)
            | Self::Json(_) => 3,
            Self::Ops(e) if e.error_code().is_config_error() => 3,
            // Pipeline errors: 4
            Self::Ops(_) => 4,
            // IO errors: 5
            Self::Io(_) => 5,
        }
    }

    /// Get the stable error code for this error.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::ConfigNotFound(_) => ErrorCode::ConfigNotFound,
            Self::ParentNotDirectory(_) => ErrorCode::ParentNotDirectory,
            Self::Config(_) | Self::Toml(_) | Self::Json(_) => ErrorCode::ConfigInvalid,
            Self::FileNotFound(_) => ErrorCode::FileNotFound,
            Self::Ops(e) => e.error_code(),
            Self::Io(_) | Self::User(_) => ErrorCode::InternalError,
        }
    }
}
