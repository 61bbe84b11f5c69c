//! Report accumulation and deduplication.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use shipsort_types::{alternate_path_for, ExtractedFields, ShipmentRecord};

use crate::log::LogSink;

/// Ordered collection of the records produced by one run.
#[derive(Debug, Clone, Default)]
pub struct ReportTable {
    alternate_prefix: PathBuf,
    records: Vec<ShipmentRecord>,
}

impl ReportTable {
    /// Create an empty table recording alternate paths under `alternate_prefix`.
    pub fn new(alternate_prefix: impl Into<PathBuf>) -> Self {
        Self {
            alternate_prefix: alternate_prefix.into(),
            records: Vec::new(),
        }
    }

    /// Annotate `fields` with the file's paths and append the record.
    pub fn push(&mut self, fields: ExtractedFields, source_path: &Path) -> &ShipmentRecord {
        let record = ShipmentRecord::new(
            fields,
            source_path.to_path_buf(),
            alternate_path_for(&self.alternate_prefix, source_path),
        );
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop later records sharing a (distribution order, airwaybill) key.
    pub fn build(self, log: &dyn LogSink) -> Vec<ShipmentRecord> {
        dedup_first(self.records, log)
    }
}

/// Keep the first record for each (distribution order, airwaybill) key.
pub fn dedup_first(records: Vec<ShipmentRecord>, log: &dyn LogSink) -> Vec<ShipmentRecord> {
    let mut seen: HashSet<(String, String)> = HashSet::with_capacity(records.len());
    let mut unique = Vec::with_capacity(records.len());

    for record in records {
        let (order, airwaybill) = record.dedup_key();
        if seen.insert((order.to_owned(), airwaybill.to_owned())) {
            unique.push(record);
        } else {
            log.debug(&format!(
                "Dropping duplicate shipment {}/{} from {}",
                record.distribution_order_number,
                record.airwaybill,
                record.source_path.display()
            ));
        }
    }

    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::MemorySink;

    fn fields(reference: &str, order: &str, awb: &str) -> ExtractedFields {
        ExtractedFields {
            reference_id: reference.into(),
            job_number: format!("JOB-{}", order),
            distribution_order_number: order.into(),
            airwaybill: awb.into(),
        }
    }

    #[test]
    fn test_push_annotates_paths() {
        let mut table = ReportTable::new("//unc/processed");
        let record = table.push(fields("1", "DO1", "AWB1"), Path::new("source/x/log_1.txt"));
        assert_eq!(record.source_path, PathBuf::from("source/x/log_1.txt"));
        assert_eq!(record.alternate_path, PathBuf::from("//unc/processed/log_1.txt"));
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let sink = MemorySink::default();
        let mut table = ReportTable::new("unc");
        table.push(fields("1", "DO1", "AWB1"), Path::new("a_1.txt"));
        table.push(fields("2", "DO2", "AWB1"), Path::new("a_2.txt"));
        table.push(fields("3", "DO1", "AWB1"), Path::new("a_3.txt"));
        table.push(fields("4", "DO1", "AWB2"), Path::new("a_4.txt"));

        let unique = table.build(&sink);

        let refs: Vec<_> = unique.iter().map(|r| r.reference_id.as_str()).collect();
        assert_eq!(refs, vec!["1", "2", "4"]);
        assert_eq!(sink.at("debug").len(), 1);
    }

    #[test]
    fn test_dedup_empty() {
        let sink = MemorySink::default();
        assert!(ReportTable::new("unc").build(&sink).is_empty());
    }
}
