//! Markers, patterns and default settings.
//!
//! The defaults mirror the settings file written by `shipsort init`.

// =============================================================================
// Markers
// =============================================================================

/// Default scope marker (site code) a file must contain to be processed.
pub const DEFAULT_SCOPE_MARKER: &str = "ZRH";

/// Literal marking a log that describes exactly one shipment.
pub const SINGLE_DETAIL_MARKER: &str = "1Details";

/// Extension of the log files picked up from the source tree.
pub const LOG_FILE_EXTENSION: &str = "txt";

// =============================================================================
// Field Patterns
// =============================================================================

/// Digits following an underscore, searched in the file name.
pub const REFERENCE_ID_PATTERN: &str = r"_(\d+)";

/// Word characters following `Shipment:` and whitespace.
pub const JOB_NUMBER_PATTERN: &str = r"Shipment:\s+(\w+)";

/// Word characters after the hyphen of the job number.
pub const DISTRIBUTION_ORDER_PATTERN: &str = r"Shipment:\s+\w+-(\w+)";

/// Word characters between `, ` and `,`.
pub const AIRWAYBILL_PATTERN: &str = r",\s(\w+),";

// =============================================================================
// Default Paths
// =============================================================================

/// Default parent directory receiving the CSV report.
pub const DEFAULT_PARENT_DIR: &str = ".";

/// Default directory scanned for log files.
pub const DEFAULT_SOURCE_DIR: &str = "source";

/// Default destination for processed files.
pub const DEFAULT_PROCESSED_DIR: &str = "processed";

/// Default destination for skipped files.
pub const DEFAULT_SKIPPED_DIR: &str = "skipped";

/// Default destination for files needing manual handling.
pub const DEFAULT_WARNING_DIR: &str = "warning";

/// Default alternate prefix recorded in the `unc_path` column.
pub const DEFAULT_ALTERNATE_PREFIX: &str = "UNC_processed";

/// Default report basename; the run timestamp is prepended.
pub const DEFAULT_OUTPUT_BASENAME: &str = "extracted_data.csv";

/// Default log file.
pub const DEFAULT_LOG_FILE: &str = "Log.txt";

/// chrono format of the timestamp prefix of report file names.
pub const REPORT_TIMESTAMP_FORMAT: &str = "%Y_%b_%d_%H_%M";
