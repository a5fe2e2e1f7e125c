//! Token persistence.

use souk_store::{SnapshotStore, StorageError};

const ACCESS_TOKEN_KEY: &str = "access_token";
const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Stored session tokens, backed by a [`SnapshotStore`].
#[derive(Debug, Clone)]
pub struct CredentialStore<S> {
    storage: S,
}

impl<S: SnapshotStore> CredentialStore<S> {
    /// Wrap a snapshot store.
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// The stored access token, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backing store fails.
    pub fn access_token(&self) -> Result<Option<String>, StorageError> {
        self.storage.read(ACCESS_TOKEN_KEY)
    }

    /// The stored refresh token, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backing store fails.
    pub fn refresh_token(&self) -> Result<Option<String>, StorageError> {
        self.storage.read(REFRESH_TOKEN_KEY)
    }

    /// Replace the access token, leaving the refresh token in place.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backing store fails.
    pub fn store_access_token(&self, access: &str) -> Result<(), StorageError> {
        self.storage.write(ACCESS_TOKEN_KEY, access)
    }

    /// Store a freshly issued token pair.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backing store fails.
    pub fn store_pair(&self, access: &str, refresh: &str) -> Result<(), StorageError> {
        self.storage.write(ACCESS_TOKEN_KEY, access)?;
        self.storage.write(REFRESH_TOKEN_KEY, refresh)
    }

    /// Remove both tokens, ending the session.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backing store fails.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove(ACCESS_TOKEN_KEY)?;
        self.storage.remove(REFRESH_TOKEN_KEY)
    }
}
