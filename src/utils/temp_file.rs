use std::fs;
use std::io;
use std::path::PathBuf;

use tempfile::TempPath;

/// Claim a fixed path for the current run, removing any leftover from an
/// earlier run. The returned `TempPath` deletes the file when dropped.
pub fn claim(path: impl Into<PathBuf>) -> io::Result<TempPath> {
    let path = path.into();
    if path.exists() {
        log::debug!("Removing stale {}", path.display());
        fs::remove_file(&path)?;
    }
    Ok(TempPath::from_path(path))
}
