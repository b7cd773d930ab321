//! Locked, crash-safe file replacement
//!
//! Shared by the config file and the file store. A writer takes an exclusive
//! lock on a sidecar file, writes the new content to `<name>.tmp`, syncs it and
//! renames it over the target. Readers never see a half-written file.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;

/// Open `lock_path` and block until this process holds it exclusively
///
/// The lock is released when the returned file is dropped.
pub(crate) fn lock_exclusive(lock_path: &Path) -> io::Result<File> {
    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(lock_path)?;
    lock_file.lock_exclusive()?;
    Ok(lock_file)
}

/// Sibling path the new content is staged in before the rename
pub(crate) fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Replace `path` with `bytes` via a synced temp file and a rename
///
/// Callers that race with other processes hold [`lock_exclusive`] around this.
pub(crate) fn replace_file(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let temp_path = temp_path(path);
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)?;
    temp_file.write_all(bytes)?;
    temp_file.sync_all()?;

    fs::rename(&temp_path, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_temp_path_appends_suffix() {
        assert_eq!(
            temp_path(Path::new("/data/progress.json")),
            PathBuf::from("/data/progress.json.tmp")
        );
        assert_eq!(
            temp_path(Path::new("config.toml")),
            PathBuf::from("config.toml.tmp")
        );
    }

    #[test]
    fn test_replace_overwrites_and_cleans_up() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("user.json");
        fs::write(&path, "old and much longer content").unwrap();

        replace_file(&path, b"new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn test_replace_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gone").join("user.json");

        assert!(replace_file(&path, b"{}").is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_lock_is_exclusive_until_dropped() {
        let dir = tempdir().unwrap();
        let lock_path = dir.path().join(".store.lock");

        let held = lock_exclusive(&lock_path).unwrap();
        let other = File::open(&lock_path).unwrap();
        assert!(other.try_lock_exclusive().is_err());

        drop(held);
        assert!(other.try_lock_exclusive().is_ok());
    }
}
