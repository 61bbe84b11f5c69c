//! Enumeration of log files under the source tree.

use std::path::{Component, Path, PathBuf};

use shipsort_types::LOG_FILE_EXTENSION;
use walkdir::WalkDir;

use crate::error::{OpsError, OpsResult};
use crate::log::LogSink;

/// Collect every `*.txt` file under `source`, sorted by path.
///
/// Directories listed in `exclude` are not descended into, so triage
/// destinations nested in the source tree are not rescanned. Entries that
/// cannot be read are logged and skipped; only an unreadable `source`
/// itself is an error.
pub fn find_log_files(
    source: &Path,
    exclude: &[&Path],
    log: &dyn LogSink,
) -> OpsResult<Vec<PathBuf>> {
    if !source.is_dir() {
        return Err(OpsError::SourceMissing(source.to_path_buf()));
    }

    let exclude: Vec<PathBuf> = exclude.iter().map(|dir| without_cur_dir(dir)).collect();
    let mut files = Vec::new();
    let walker = WalkDir::new(source)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0
                || !entry.file_type().is_dir()
                || !exclude.contains(&without_cur_dir(entry.path()))
        });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                return Err(OpsError::Walk {
                    path: source.to_path_buf(),
                    source: err,
                })
            }
            Err(err) => {
                log.error(&format!("Skipping unreadable entry: {}", err));
                continue;
            }
        };

        if entry.file_type().is_file() && has_log_extension(entry.path()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

/// Drop `.` components so `./source/processed` and `source/processed` compare equal.
fn without_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

fn has_log_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == LOG_FILE_EXTENSION)
}
