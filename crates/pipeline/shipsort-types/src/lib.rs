//! Data structures for the shipsort triage pipeline.
//!
//! This crate provides the types shared by the pipeline and the CLI. It
//! contains no business logic, only type definitions with serialization
//! support.
//!
//! # Module Organization
//!
//! - [`enums`] - Dispositions, extracted fields and warning reasons
//! - [`constants`] - Markers, patterns and default settings
//! - [`error`] - Error codes and the extraction failure type
//! - [`record`] - Extracted fields and the shipment record
//!
//! # Example
//!
//! ```
//! use shipsort_types::{ExtractedFields, ShipmentRecord};
//! use std::path::PathBuf;
//!
//! let fields = ExtractedFields {
//!     reference_id: "00123".into(),
//!     job_number: "JOB456".into(),
//!     distribution_order_number: "DO789".into(),
//!     airwaybill: "AWB001".into(),
//! };
//! let record = ShipmentRecord::new(
//!     fields,
//!     PathBuf::from("source/log_00123.txt"),
//!     PathBuf::from("UNC_processed/log_00123.txt"),
//! );
//!
//! assert_eq!(record.dedup_key(), ("DO789", "AWB001"));
//! ```

/// Crate version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod constants;
pub mod enums;
pub mod error;
pub mod record;

// Re-export all public types at the crate root for convenience

// Enums
pub use enums::{Disposition, Field, WarningReason};

// Constants
pub use constants::*;

// Error types
pub use error::{ErrorCode, ExtractionFailed};

// Records
pub use record::{alternate_path_for, ExtractedFields, ShipmentRecord, CSV_COLUMNS};
