//! A legacy `settings.json` drives a full run.

use shipsort_cli::commands::run::run_with_sink;
use shipsort_cli::commands::RunOptions;
use shipsort_cli::{OutputFormat, Settings};
use shipsort_test_utils::{
    Level, RecordingSink, SourceTree, MULTI_DETAIL_LOG, OUT_OF_SCOPE_LOG, PROCESSABLE_LOG,
};

fn legacy_settings(tree: &SourceTree) -> String {
    let json = serde_json::json!({
        "filepaths": {
            "parent": tree.root(),
            "source": tree.source(),
            "processed": tree.processed(),
            "skipped": tree.skipped(),
            "warning": tree.warning(),
            "outputfile": "extracted_data.csv",
            "UNC_processed": "//server/share/processed"
        },
        "commands": {
            "process_criteria": "ZRH",
            "move_processed": true,
            "move_skipped": true,
            "warn_if_more_than_1Detail": true,
            "move_undhandled_files_to_warning": true
        },
        "log_config": {
            "DEBUG": false,
            "LOGGING": true,
            "log_file": tree.root().join("Log.txt")
        }
    });
    serde_json::to_string_pretty(&json).unwrap()
}

#[test]
fn test_legacy_settings_run_sorts_every_file() {
    let tree = SourceTree::new();
    tree.add_log("log_1.txt", PROCESSABLE_LOG);
    tree.add_log("nested/log_2.txt", OUT_OF_SCOPE_LOG);
    tree.add_log("log_3.txt", MULTI_DETAIL_LOG);

    let settings_path = tree.root().join("settings.json");
    std::fs::write(&settings_path, legacy_settings(&tree)).unwrap();
    let settings = Settings::load(&settings_path).unwrap();
    assert!(settings.commands.move_unhandled_files_to_warning);

    let sink = RecordingSink::new();
    let output =
        run_with_sink(&settings, OutputFormat::Json, RunOptions::default(), &sink).unwrap();

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["counts"]["total"], 3);
    assert_eq!(value["counts"]["processed"], 1);
    assert_eq!(value["counts"]["skipped"], 1);
    assert_eq!(value["counts"]["warnings"], 1);
    assert_eq!(value["records"], 1);

    assert_eq!(tree.files_in(tree.processed()), vec!["log_1.txt"]);
    assert_eq!(tree.files_in(tree.skipped()), vec!["log_2.txt"]);
    assert_eq!(tree.files_in(tree.warning()), vec!["log_3.txt"]);
    assert!(sink.contains(Level::Warn, "log_3.txt contains more than 1 Detail"));

    let report_path = value["report_path"].as_str().unwrap();
    let report = std::fs::read_to_string(report_path).unwrap();
    let mut lines = report.lines();
    assert_eq!(
        lines.next(),
        Some("reference_id,job_number,distribution_order_number,airwaybill,path,unc_path")
    );
    let row = lines.next().unwrap();
    assert!(row.starts_with("1,JOB456,DO789,AWB001,"));
    assert!(row.ends_with("//server/share/processed/log_1.txt"));
    assert_eq!(lines.next(), None);
}

#[test]
fn test_missing_settings_file_is_fatal() {
    let tree = SourceTree::new();
    let err = Settings::load(&tree.root().join("settings.json")).unwrap_err();
    assert_eq!(err.exit_code(), 3);
    assert_eq!(
        err.error_code().suggestion().map(|s| s.contains("shipsort init")),
        Some(true)
    );
}
