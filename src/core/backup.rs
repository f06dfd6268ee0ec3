//! Recursive directory backup

use crate::core::error::{RecordsError, Result};
use std::fs;
use std::path::Path;

/// Counters describing the outcome of a backup run.
///
/// A run with a non-zero `failures` count still completes: per-entry copy
/// failures are logged and skipped, so the operation can end "mostly
/// succeeded".
#[derive(Debug, Clone, Default)]
pub struct BackupSummary {
    /// Files copied to the destination
    pub files_copied: usize,
    /// Directories created at the destination
    pub directories_created: usize,
    /// Entries that failed to copy and were skipped
    pub failures: usize,
}

impl BackupSummary {
    /// Returns whether every entry was copied
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.failures == 0
    }
}

/// Back up the contents of `source` into `destination`.
///
/// Recursively recreates the directory structure and copies every file,
/// overwriting files that already exist at the destination. The destination
/// is created if absent. Traversal depth is unbounded and symlink cycles are
/// not detected.
///
/// # Errors
/// - [`RecordsError::NotFound`] when `source` does not exist or is not a
///   directory
/// - [`RecordsError::Io`] when the destination cannot be created or the
///   source cannot be read at the top level
///
/// Failures on individual entries below the top level are logged, counted in
/// the summary and skipped rather than aborting the walk.
pub fn backup_directory(source: &Path, destination: &Path) -> Result<BackupSummary> {
    if !source.is_dir() {
        return Err(RecordsError::NotFound {
            entity: "backup source directory",
            key: source.display().to_string(),
        });
    }

    let mut summary = BackupSummary::default();
    if !destination.exists() {
        fs::create_dir_all(destination)?;
        summary.directories_created += 1;
    }

    copy_tree(source, destination, &mut summary)?;
    crate::info!(
        "backup finished: {} files, {} directories, {} failures",
        summary.files_copied,
        summary.directories_created,
        summary.failures
    );
    Ok(summary)
}

/// Copy one directory level, recursing into subdirectories
fn copy_tree(source: &Path, destination: &Path, summary: &mut BackupSummary) -> Result<()> {
    for entry in fs::read_dir(source)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                crate::error!("failed to read entry under {}: {e}", source.display());
                summary.failures += 1;
                continue;
            }
        };
        let src_path = entry.path();
        let dst_path = destination.join(entry.file_name());

        if src_path.is_dir() {
            if !dst_path.exists() {
                if let Err(e) = fs::create_dir_all(&dst_path) {
                    crate::error!("failed to create {}: {e}", dst_path.display());
                    summary.failures += 1;
                    continue;
                }
                summary.directories_created += 1;
            }
            // A subdirectory that cannot be listed is a single failure, not
            // an abort of the whole walk.
            if let Err(e) = copy_tree(&src_path, &dst_path, summary) {
                crate::error!("failed to walk {}: {e}", src_path.display());
                summary.failures += 1;
            }
        } else {
            match fs::copy(&src_path, &dst_path) {
                Ok(_) => summary.files_copied += 1,
                Err(e) => {
                    crate::error!("failed to copy {}: {e}", src_path.display());
                    summary.failures += 1;
                }
            }
        }
    }
    Ok(())
}
