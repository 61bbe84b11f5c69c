//! Creation of the triage directory layout.

use std::path::PathBuf;

use shipsort_ops::{LogSink, PipelineConfig};

use crate::error::CliResult;

/// Create any missing source, processed, skipped or warning directory.
///
/// Returns the directories that were created.
pub fn ensure_dirs(config: &PipelineConfig, log: &dyn LogSink) -> CliResult<Vec<PathBuf>> {
    let paths = &config.paths;
    let mut created = Vec::new();
    for dir in [
        &paths.source,
        &paths.processed,
        &paths.skipped,
        &paths.warning,
    ] {
        if dir.is_dir() {
            continue;
        }
        std::fs::create_dir_all(dir)?;
        log.warn(&format!("New directory created: {}", dir.display()));
        created.push(dir.clone());
    }
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shipsort_test_utils::RecordingSink;
    use tempfile::TempDir;

    #[test]
    fn test_creates_missing_dirs() {
        let temp = TempDir::new().unwrap();
        let config = PipelineConfig::under(temp.path());
        let sink = RecordingSink::new();

        let created = ensure_dirs(&config, &sink).unwrap();

        assert_eq!(created.len(), 4);
        assert!(config.paths.warning.is_dir());
        assert_eq!(sink.warnings().len(), 4);
    }

    #[test]
    fn test_existing_dirs_are_left_alone() {
        let temp = TempDir::new().unwrap();
        let config = PipelineConfig::under(temp.path());
        std::fs::create_dir_all(&config.paths.source).unwrap();
        std::fs::create_dir_all(&config.paths.processed).unwrap();
        let sink = RecordingSink::new();

        let created = ensure_dirs(&config, &sink).unwrap();

        assert_eq!(created, vec![config.paths.skipped.clone(), config.paths.warning.clone()]);
        assert!(sink.warnings().iter().all(|w| w.starts_with("New directory created")));
    }
}
