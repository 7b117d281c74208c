use super::store::{ConfigSnapshot, InMemoryConfigStore};
use crate::PatternResult;
use crate::storage::InMemoryStorageError;
use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// A non-owning view of an in-memory [`ConfigStore`](super::ConfigStore).
///
/// Cloning a handle is cheap and never copies entries: every clone reaches the
/// same underlying map, so a `set` through one handle is visible through all
/// of them. Two handles compare equal only when they point at the same store.
#[derive(Clone)]
pub struct ConfigHandle {
    store: Arc<InMemoryConfigStore>,
}

/// In-memory storage cannot fail; strip the `Result`.
fn infallible<T>(result: Result<T, InMemoryStorageError>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

impl ConfigHandle {
    pub(super) fn from_arc(store: Arc<InMemoryConfigStore>) -> Self {
        Self { store }
    }

    /// Creates a fresh default-populated store that is not the process-wide one.
    ///
    /// Useful for tests and for code that takes the store by injection.
    pub fn detached() -> Self {
        Self::from_arc(Arc::new(InMemoryConfigStore::new()))
    }

    /// Value for `key`, or `None` when absent
    pub fn get(&self, key: &str) -> Option<String> {
        infallible(self.store.get(key))
    }

    /// Inserts or overwrites `key`
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        infallible(self.store.set(key, value))
    }

    /// Value for `key`, or [`PatternError::KeyNotFound`](crate::PatternError::KeyNotFound)
    pub fn require(&self, key: &str) -> PatternResult<String> {
        self.store.require(key)
    }

    pub fn remove(&self, key: &str) -> Option<String> {
        infallible(self.store.remove(key))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        infallible(self.store.contains_key(key))
    }

    /// All keys, sorted
    pub fn keys(&self) -> Vec<String> {
        infallible(self.store.keys())
    }

    pub fn len(&self) -> usize {
        infallible(self.store.len())
    }

    pub fn is_empty(&self) -> bool {
        infallible(self.store.is_empty())
    }

    /// Restores exactly the default entries; every handle observes the reset.
    pub fn reset_to_defaults(&self) {
        infallible(self.store.reset_to_defaults())
    }

    pub fn snapshot(&self) -> ConfigSnapshot {
        infallible(self.store.snapshot())
    }

    pub fn instance_id(&self) -> Uuid {
        self.store.instance_id()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.store.created_at()
    }

    /// Whether both handles refer to the same store
    pub fn same_store(&self, other: &ConfigHandle) -> bool {
        Arc::ptr_eq(&self.store, &other.store)
    }

    /// Number of live handles to this store, the process-wide slot included
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.store)
    }

    /// Borrow the underlying store
    pub fn store(&self) -> &InMemoryConfigStore {
        &self.store
    }
}

impl PartialEq for ConfigHandle {
    fn eq(&self, other: &Self) -> bool {
        self.same_store(other)
    }
}

impl Eq for ConfigHandle {}

impl fmt::Debug for ConfigHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigHandle")
            .field("instance_id", &self.instance_id())
            .finish()
    }
}
