//! File-backed snapshot store.

use std::{fs, io, path::PathBuf};

use crate::{SnapshotStore, StorageError};

/// Stores each key as a single file (`<dir>/<key>.json`).
///
/// The directory is created lazily on the first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the given directory.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SnapshotStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path(key), value)?;

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path(key)) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn read_missing_key_returns_none() -> TestResult {
        let dir = tempfile::tempdir()?;
        let store = FileStore::new(dir.path());

        assert_eq!(store.read("absent")?, None);

        Ok(())
    }

    #[test]
    fn write_then_read_round_trips() -> TestResult {
        let dir = tempfile::tempdir()?;
        let store = FileStore::new(dir.path());

        store.write("cart", "[1,2,3]")?;

        assert_eq!(store.read("cart")?, Some("[1,2,3]".to_string()));

        Ok(())
    }

    #[test]
    fn write_replaces_previous_value() -> TestResult {
        let dir = tempfile::tempdir()?;
        let store = FileStore::new(dir.path());

        store.write("cart", "old")?;
        store.write("cart", "new")?;

        assert_eq!(store.read("cart")?, Some("new".to_string()));

        Ok(())
    }

    #[test]
    fn remove_is_idempotent() -> TestResult {
        let dir = tempfile::tempdir()?;
        let store = FileStore::new(dir.path());

        store.write("cart", "value")?;
        store.remove("cart")?;
        store.remove("cart")?;

        assert_eq!(store.read("cart")?, None);

        Ok(())
    }

    #[test]
    fn write_creates_missing_directory() -> TestResult {
        let dir = tempfile::tempdir()?;
        let store = FileStore::new(dir.path().join("nested/state"));

        store.write("cart", "value")?;

        assert_eq!(store.read("cart")?, Some("value".to_string()));

        Ok(())
    }
}
