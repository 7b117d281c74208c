//! Storage backends for the configuration store
//!
//! A [`ConfigStore`](crate::config_store::ConfigStore) keeps its entries in a
//! [`StorageBackend`]. Only in-memory storage ships with the crate; the store
//! lives for the lifetime of the process and is never persisted.

use std::error::Error;

// ============================================================================
// STORAGE TRAITS
// ============================================================================

/// Where a config store keeps its string entries.
///
/// The store wraps its backend in a lock, so implementations need no
/// synchronization of their own.
pub trait StorageBackend: Send + Sync {
    type Error: Error + Send + Sync + 'static;

    /// Insert `value` under `key`; an existing entry is overwritten
    fn set(&mut self, key: String, value: String) -> Result<(), Self::Error>;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Drop the entry for `key` and hand back its old value
    fn remove(&mut self, key: &str) -> Result<Option<String>, Self::Error>;

    fn contains_key(&self, key: &str) -> Result<bool, Self::Error>;

    /// Every key currently held. Callers that need a stable order sort it.
    fn keys(&self) -> Result<Vec<String>, Self::Error>;

    fn clear(&mut self) -> Result<(), Self::Error>;

    fn len(&self) -> Result<usize, Self::Error>;

    fn is_empty(&self) -> Result<bool, Self::Error> {
        Ok(self.len()? == 0)
    }

    /// Key/value pairs copied out of the backend.
    ///
    /// The default goes through `keys` and `get`; backends holding a map
    /// should override it with a single pass.
    fn entries(&self) -> Result<Vec<(String, String)>, Self::Error> {
        let mut entries = Vec::new();
        for key in self.keys()? {
            if let Some(value) = self.get(&key)? {
                entries.push((key, value));
            }
        }
        Ok(entries)
    }
}

// ============================================================================
// STORAGE IMPLEMENTATIONS
// ============================================================================

mod memory;
pub use memory::{InMemoryStorage, InMemoryStorageError};
