//! Backup command handler

use campus_records::config::Config;
use campus_records::core::backup::backup_directory;
use std::path::{Path, PathBuf};

/// Run a one-shot directory backup.
///
/// Source defaults to the configured data directory, destination to the
/// configured backup directory.
pub fn run(source: Option<&Path>, destination: Option<&Path>, config: &Config) {
    let source: PathBuf =
        source.map_or_else(|| PathBuf::from(&config.paths.data_dir), Path::to_path_buf);
    let destination: PathBuf = destination.map_or_else(
        || PathBuf::from(&config.paths.backup_dir),
        Path::to_path_buf,
    );

    match backup_directory(&source, &destination) {
        Ok(summary) => {
            println!(
                "✓ Backup completed from '{}' to '{}': {} files copied, {} directories created.",
                source.display(),
                destination.display(),
                summary.files_copied,
                summary.directories_created
            );
            if !summary.is_complete() {
                eprintln!(
                    "✗ {} entries failed to copy; see the log for details.",
                    summary.failures
                );
            }
        }
        Err(e) => {
            eprintln!("✗ Backup failed: {e}");
            std::process::exit(1);
        }
    }
}
