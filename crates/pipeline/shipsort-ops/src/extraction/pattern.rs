//! Regular-expression field extraction.

use regex::Regex;
use shipsort_types::{
    ExtractedFields, ExtractionFailed, Field, AIRWAYBILL_PATTERN, DISTRIBUTION_ORDER_PATTERN,
    JOB_NUMBER_PATTERN, REFERENCE_ID_PATTERN,
};

use super::FieldExtractor;

/// Extracts fields with one regular expression per field.
///
/// Each pattern has a single capture group. When a pattern matches several
/// times only the leftmost match is used, so a log with several `Shipment:`
/// lines yields the first one.
#[derive(Debug, Clone)]
pub struct PatternExtractor {
    reference_id: Regex,
    job_number: Regex,
    distribution_order_number: Regex,
    airwaybill: Regex,
}

impl PatternExtractor {
    /// Create an extractor with the standard shipment patterns.
    pub fn new() -> Self {
        Self {
            reference_id: compile(REFERENCE_ID_PATTERN),
            job_number: compile(JOB_NUMBER_PATTERN),
            distribution_order_number: compile(DISTRIBUTION_ORDER_PATTERN),
            airwaybill: compile(AIRWAYBILL_PATTERN),
        }
    }

    fn pattern(&self, field: Field) -> &Regex {
        match field {
            Field::ReferenceId => &self.reference_id,
            Field::JobNumber => &self.job_number,
            Field::DistributionOrderNumber => &self.distribution_order_number,
            Field::Airwaybill => &self.airwaybill,
        }
    }

    /// First capture of `field`'s pattern in `haystack`.
    fn first_match(&self, field: Field, haystack: &str) -> Result<String, ExtractionFailed> {
        self.pattern(field)
            .captures(haystack)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or(ExtractionFailed { field })
    }
}

impl Default for PatternExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PatternExtractor {
    fn extract(&self, file_name: &str, text: &str) -> Result<ExtractedFields, ExtractionFailed> {
        Ok(ExtractedFields {
            reference_id: self.first_match(Field::ReferenceId, file_name)?,
            job_number: self.first_match(Field::JobNumber, text)?,
            distribution_order_number: self.first_match(Field::DistributionOrderNumber, text)?,
            airwaybill: self.first_match(Field::Airwaybill, text)?,
        })
    }
}

// The patterns are compile-time constants covered by the tests below.
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid field pattern {}: {}", pattern, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Site ZRH 1Details\nShipment: JOB456-DO789\nCarrier, AWB001, express\n";

    #[test]
    fn test_extracts_all_fields() {
        let extractor = PatternExtractor::new();
        let fields = extractor.extract("log_00123.txt", SAMPLE).unwrap();
        assert_eq!(fields.reference_id, "00123");
        assert_eq!(fields.job_number, "JOB456");
        assert_eq!(fields.distribution_order_number, "DO789");
        assert_eq!(fields.airwaybill, "AWB001");
    }

    #[test]
    fn test_first_match_wins() {
        let text = "Shipment: A1-B1\nShipment: A2-B2\n, X1, , X2,";
        let fields = PatternExtractor::new()
            .extract("log_7_8.txt", text)
            .unwrap();
        assert_eq!(fields.reference_id, "7");
        assert_eq!(fields.job_number, "A1");
        assert_eq!(fields.distribution_order_number, "B1");
        assert_eq!(fields.airwaybill, "X1");
    }

    #[test]
    fn test_reference_id_needs_underscore() {
        let err = PatternExtractor::new()
            .extract("log00123.txt", SAMPLE)
            .unwrap_err();
        assert_eq!(err.field, Field::ReferenceId);
    }

    #[test]
    fn test_job_number_without_hyphen_fails_on_distribution_order() {
        let text = "Shipment: JOB456\n, AWB001,";
        let err = PatternExtractor::new()
            .extract("log_1.txt", text)
            .unwrap_err();
        assert_eq!(err.field, Field::DistributionOrderNumber);
    }

    #[test]
    fn test_missing_shipment_marker_reports_job_number() {
        let text = "nothing here, AWB001,";
        let err = PatternExtractor::new()
            .extract("log_1.txt", text)
            .unwrap_err();
        assert_eq!(err.field, Field::JobNumber);
    }

    #[test]
    fn test_airwaybill_needs_whitespace_after_comma() {
        let text = "Shipment: J-D\n,AWB001,";
        let err = PatternExtractor::new()
            .extract("log_1.txt", text)
            .unwrap_err();
        assert_eq!(err.field, Field::Airwaybill);
    }

    #[test]
    fn test_shipment_marker_allows_any_whitespace() {
        let text = "Shipment:\t\n  JOB9-DO9\n, AWB9,";
        let fields = PatternExtractor::new().extract("x_9.txt", text).unwrap();
        assert_eq!(fields.job_number, "JOB9");
        assert_eq!(fields.distribution_order_number, "DO9");
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let extractor = PatternExtractor::new();
        let first = extractor.extract("log_00123.txt", SAMPLE);
        let second = extractor.extract("log_00123.txt", SAMPLE);
        assert_eq!(first, second);
    }
}
