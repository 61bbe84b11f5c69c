//! Moving files into triage directories.

use std::path::{Path, PathBuf};

use crate::error::MoveError;

/// Moves a file into a directory, keeping its file name.
pub trait FileMover {
    /// Move `from` into `dir` and return the destination path.
    fn move_into(&self, from: &Path, dir: &Path) -> Result<PathBuf, MoveError>;
}

/// Destination of `from` when moved into `dir`.
pub fn destination_in(dir: &Path, from: &Path) -> PathBuf {
    match from.file_name() {
        Some(name) => dir.join(name),
        None => dir.to_path_buf(),
    }
}

/// Renames files on the local filesystem.
///
/// A file already present at the destination is replaced.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsMover;

impl FileMover for FsMover {
    fn move_into(&self, from: &Path, dir: &Path) -> Result<PathBuf, MoveError> {
        let to = destination_in(dir, from);
        std::fs::rename(from, &to)
            .map_err(|e| MoveError::from_io(from.to_path_buf(), to.clone(), e))?;
        Ok(to)
    }
}
