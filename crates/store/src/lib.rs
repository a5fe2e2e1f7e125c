//! Persistent key-value snapshot storage.
//!
//! The cart and the session credentials are both persisted as small string
//! snapshots keyed by name. The [`SnapshotStore`] trait is the seam between
//! the domain containers and whatever holds the bytes; [`FileStore`] is the
//! production backend and [`MemoryStore`] backs tests.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Errors raised by a snapshot store backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying filesystem failure.
    #[error("storage io error")]
    Io(#[from] std::io::Error),
}

/// A string key-value store holding at most one value per key.
pub trait SnapshotStore {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend cannot be written.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove any value stored under `key`. Removing a missing key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
