//! Field extraction.
//!
//! Turns a log file's name and text into the four shipment fields.
//!
//! # Design
//!
//! The module uses a trait (`FieldExtractor`) so the triage step does not
//! depend on how fields are found:
//!
//! - `PatternExtractor`: regular expressions, first match wins

mod pattern;

pub use pattern::PatternExtractor;

use shipsort_types::{ExtractedFields, ExtractionFailed};

/// Trait for extracting shipment fields from a log file.
///
/// Extraction is all-or-nothing: either every field is found or the first
/// missing one is reported. Implementations must be free of side effects.
pub trait FieldExtractor {
    /// Extract the four fields.
    ///
    /// # Arguments
    /// * `file_name` - Name of the log file (not the full path)
    /// * `text` - Full text of the log file
    fn extract(&self, file_name: &str, text: &str) -> Result<ExtractedFields, ExtractionFailed>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extractor_is_object_safe() {
        fn _takes_extractor(_: &dyn FieldExtractor) {}
    }
}
