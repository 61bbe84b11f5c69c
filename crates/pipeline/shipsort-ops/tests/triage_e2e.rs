//! End-to-end triage runs over temporary source trees.
//!
//! These tests exercise complete runs using `SourceTree` and
//! `RecordingSink` from `shipsort_test_utils`.

use chrono::{Local, TimeZone};
use shipsort_ops::{CsvExporter, MoveToggles, Triage};
use shipsort_test_utils::*;
use shipsort_types::{Disposition, Field, WarningReason};

// =========================================================================
// Dispositions
// =========================================================================

#[test]
fn test_processable_log_yields_record() {
    let tree = SourceTree::new();
    let path = tree.add_log("log_00123.txt", PROCESSABLE_LOG);
    let sink = RecordingSink::new();

    let report = Triage::new(tree.config(), &sink).run().unwrap();

    assert_eq!(report.records.len(), 1);
    let record = &report.records[0];
    assert_eq!(record.reference_id, "00123");
    assert_eq!(record.job_number, "JOB456");
    assert_eq!(record.distribution_order_number, "DO789");
    assert_eq!(record.airwaybill, "AWB001");
    assert_eq!(record.source_path, path);
    assert_eq!(
        record.alternate_path,
        std::path::PathBuf::from("UNC_processed/log_00123.txt")
    );
    assert_eq!(report.outcomes[0].disposition, Disposition::Processed);
}

#[test]
fn test_out_of_scope_log_is_skipped_and_absent() {
    let tree = SourceTree::new();
    tree.add_log("log_1.txt", OUT_OF_SCOPE_LOG);
    let sink = RecordingSink::new();

    let report = Triage::new(tree.config_moving_all(), &sink).run().unwrap();

    assert_eq!(report.outcomes[0].disposition, Disposition::Skipped);
    assert!(report.records.is_empty());
    assert_eq!(tree.files_in(tree.skipped()), vec!["log_1.txt"]);
}

#[test]
fn test_multi_detail_log_is_warned_and_moved() {
    let tree = SourceTree::new();
    tree.add_log("log_00123.txt", MULTI_DETAIL_LOG);
    let sink = RecordingSink::new();

    let report = Triage::new(tree.config(), &sink).run().unwrap();

    let outcome = &report.outcomes[0];
    assert_eq!(outcome.disposition, Disposition::Warning);
    assert_eq!(outcome.reason, Some(WarningReason::MultipleDetails));
    assert!(report.records.is_empty());
    assert_eq!(tree.files_in(tree.warning()), vec!["log_00123.txt"]);
    assert!(sink.contains(Level::Warn, "log_00123.txt"));
}

#[test]
fn test_unparseable_log_is_warned() {
    let tree = SourceTree::new();
    tree.add_log("log_5.txt", UNPARSEABLE_LOG);
    let sink = RecordingSink::new();

    let config = tree.config().with_moves(MoveToggles {
        move_unhandled_to_warning: false,
        ..MoveToggles::default()
    });
    let report = Triage::new(config, &sink).run().unwrap();

    assert_eq!(
        report.outcomes[0].reason,
        Some(WarningReason::PatternMismatch {
            field: Field::Airwaybill
        })
    );
    assert!(report.records.is_empty());
    assert!(tree.files_in(tree.warning()).is_empty());
    assert_eq!(tree.files_in(tree.source()), vec!["log_5.txt"]);
}

// =========================================================================
// Moves
// =========================================================================

#[test]
fn test_all_moves_enabled_empties_source() {
    let tree = SourceTree::new();
    tree.add_log("a/log_1.txt", PROCESSABLE_LOG);
    tree.add_log("b/log_2.txt", OUT_OF_SCOPE_LOG);
    tree.add_log("c/log_3.txt", MULTI_DETAIL_LOG);
    let sink = RecordingSink::new();

    let report = Triage::new(tree.config_moving_all(), &sink).run().unwrap();

    assert_eq!(report.counts.total, 3);
    assert_eq!(tree.files_in(tree.processed()), vec!["log_1.txt"]);
    assert_eq!(tree.files_in(tree.skipped()), vec!["log_2.txt"]);
    assert_eq!(tree.files_in(tree.warning()), vec!["log_3.txt"]);
    // The record keeps the path the file was found at.
    assert!(report.records[0].source_path.ends_with("a/log_1.txt"));
}

#[test]
fn test_locked_files_do_not_abort_the_run() {
    let tree = SourceTree::new();
    tree.add_log("log_1.txt", PROCESSABLE_LOG);
    tree.add_log("log_2.txt", MULTI_DETAIL_LOG);
    let sink = RecordingSink::new();

    let report = Triage::new(tree.config_moving_all(), &sink)
        .with_mover(LockedMover)
        .run()
        .unwrap();

    assert_eq!(report.counts.processed, 1);
    assert_eq!(report.counts.warnings, 1);
    assert_eq!(report.counts.move_failures, 2);
    assert_eq!(report.records.len(), 1);
    assert_eq!(sink.errors().len(), 2);
}

#[test]
fn test_destinations_inside_source_are_not_rescanned() {
    let tree = SourceTree::new();
    let mut config = tree.config_moving_all();
    config.paths.processed = tree.source().join("done");
    std::fs::create_dir_all(&config.paths.processed).unwrap();
    std::fs::write(config.paths.processed.join("log_9.txt"), PROCESSABLE_LOG).unwrap();
    tree.add_log("log_1.txt", PROCESSABLE_LOG);
    let sink = RecordingSink::new();

    let report = Triage::new(config, &sink).run().unwrap();

    assert_eq!(report.counts.total, 1);
}

// =========================================================================
// Report
// =========================================================================

#[test]
fn test_duplicates_keep_first_in_path_order() {
    let tree = SourceTree::new();
    tree.add_log("log_2.txt", &shipment_log("JOBB", "DO1", "AWB1"));
    tree.add_log("log_1.txt", &shipment_log("JOBA", "DO1", "AWB1"));
    tree.add_log("log_3.txt", &shipment_log("JOBC", "DO2", "AWB1"));
    let sink = RecordingSink::new();

    let report = Triage::new(tree.config(), &sink).run().unwrap();

    let refs: Vec<_> = report
        .records
        .iter()
        .map(|r| r.reference_id.as_str())
        .collect();
    assert_eq!(refs, vec!["1", "3"]);
    assert_eq!(report.duplicates_dropped, 1);
    assert_eq!(report.counts.processed, 3);
}

#[test]
fn test_run_and_export_writes_csv() {
    let tree = SourceTree::new();
    tree.add_log("log_00123.txt", PROCESSABLE_LOG);
    tree.add_log("log_00124.txt", OUT_OF_SCOPE_LOG);
    let sink = RecordingSink::new();
    let at = Local.with_ymd_and_hms(2023, 11, 2, 8, 30, 0).earliest().unwrap();
    let exporter = CsvExporter::at(tree.root(), "extracted_data.csv", at);

    let report = Triage::new(tree.config(), &sink)
        .run_and_export(&exporter)
        .unwrap();

    let path = report.report_path.unwrap();
    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "2023_Nov_02_08_30_extracted_data.csv"
    );
    let contents = std::fs::read_to_string(path).unwrap();
    assert_eq!(contents.lines().count(), 2);
    assert!(contents.lines().nth(1).unwrap().starts_with("00123,JOB456,DO789,AWB001,"));
}

#[cfg(unix)]
#[test]
fn test_non_utf8_file_name_still_reaches_the_report() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let tree = SourceTree::new();
    tree.add_log("log_1.txt", PROCESSABLE_LOG);
    let odd = tree
        .source()
        .join(OsStr::from_bytes(b"log_2\xff.txt"));
    std::fs::write(&odd, shipment_log("JOB900", "DO901", "AWB902")).unwrap();
    let sink = RecordingSink::new();
    let at = Local.with_ymd_and_hms(2023, 11, 2, 8, 30, 0).earliest().unwrap();
    let exporter = CsvExporter::at(tree.root(), "extracted_data.csv", at);

    let report = Triage::new(tree.config_moving_all(), &sink)
        .run_and_export(&exporter)
        .unwrap();

    assert_eq!(report.counts.processed, 2);
    assert_eq!(
        tree.files_in(tree.processed()),
        vec!["log_1.txt", "log_2\u{FFFD}.txt"]
    );
    let contents = std::fs::read_to_string(report.report_path.unwrap()).unwrap();
    let rows: Vec<_> = contents.lines().skip(1).collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[1].starts_with("2,JOB900,DO901,AWB902,"));
    assert!(rows[1].ends_with("log_2\u{FFFD}.txt"));
}

#[test]
fn test_dry_run_moves_nothing_and_writes_nothing() {
    let tree = SourceTree::new();
    tree.add_log("log_1.txt", PROCESSABLE_LOG);
    tree.add_log("log_2.txt", MULTI_DETAIL_LOG);
    let sink = RecordingSink::new();
    let exporter = CsvExporter::new(tree.root(), "extracted_data.csv");

    let report = Triage::new(tree.config_moving_all().with_dry_run(true), &sink)
        .run_and_export(&exporter)
        .unwrap();

    assert!(report.dry_run);
    assert!(report.report_path.is_none());
    assert_eq!(report.records.len(), 1);
    assert_eq!(tree.files_in(tree.source()), vec!["log_1.txt", "log_2.txt"]);
    assert!(report.outcomes.iter().all(|o| o.moved_to.is_some()));
}

#[test]
fn test_summary_logged_once() {
    let tree = SourceTree::new();
    tree.add_log("log_1.txt", PROCESSABLE_LOG);
    let sink = RecordingSink::new();

    Triage::new(tree.config(), &sink).run().unwrap();

    let summaries: Vec<_> = sink
        .at(Level::Info)
        .into_iter()
        .filter(|m| m.starts_with("Total files handled"))
        .collect();
    assert_eq!(
        summaries,
        vec!["Total files handled: 1 Processed files: 1 Skipped files: 0 Warnings: 0"]
    );
}
