//! Output bookkeeping: parent-directory creation and timestamped backups.
//!
//! Backups are `<name>.<ext>.bak-<YYYYmmdd-HHMMSS>` siblings of the
//! original. Nothing here is transactional; a crash between the backup and
//! the rewrite leaves the backup in place and the sweep can simply be
//! re-run.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::{Error, Result};

fn backup_path(path: &Path) -> PathBuf {
    let timestamp = Local::now().format("%Y%m%d-%H%M%S");
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!("{name}.bak-{timestamp}"))
}

/// Create the parent directory of `path` if it is missing.
pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Move an existing file aside before a fresh cover replaces it. Returns
/// the backup location, or `None` when there was nothing to back up.
pub fn backup_by_rename(path: &Path) -> Result<Option<PathBuf>> {
    if !path.exists() {
        return Ok(None);
    }
    let backup = backup_path(path);
    fs::rename(path, &backup)
        .map_err(|e| Error::Output(format!("Failed to back up {}: {e}", path.display())))?;
    Ok(Some(backup))
}

/// Copy an existing file aside before it is corrected in place.
pub fn backup_by_copy(path: &Path) -> Result<PathBuf> {
    let backup = backup_path(path);
    fs::copy(path, &backup)
        .map_err(|e| Error::Output(format!("Failed to back up {}: {e}", path.display())))?;
    Ok(backup)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backup_rename_moves_file_and_keeps_extension_prefix() {
        let dir = tempfile::tempdir().expect("tempdir");
        let target = dir.path().join("main.png");
        fs::write(&target, b"old").expect("write");

        let backup = backup_by_rename(&target)
            .expect("backup")
            .expect("file existed");
        assert!(!target.exists());
        assert!(backup.exists());
        let name = backup.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("main.png.bak-"), "unexpected name: {name}");
    }

    #[test]
    fn backup_rename_of_missing_file_is_a_noop() {
        let dir = tempfile::tempdir().expect("tempdir");
        let target = dir.path().join("missing.png");
        assert!(backup_by_rename(&target).expect("no-op").is_none());
    }

    #[test]
    fn backup_copy_leaves_original_in_place() {
        let dir = tempfile::tempdir().expect("tempdir");
        let target = dir.path().join("cover.png");
        fs::write(&target, b"bytes").expect("write");

        let backup = backup_by_copy(&target).expect("backup");
        assert!(target.exists());
        assert_eq!(fs::read(backup).expect("read"), b"bytes");
    }

    #[test]
    fn ensure_parent_creates_nested_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let target = dir.path().join("a/b/c/main.png");
        ensure_parent(&target).expect("create parents");
        assert!(target.parent().unwrap().is_dir());
    }
}
