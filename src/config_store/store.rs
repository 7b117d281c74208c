use crate::storage::{InMemoryStorage, StorageBackend};
use crate::{PatternError, PatternResult};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, info};
use uuid::Uuid;

use super::DEFAULT_ENTRIES;

/// ConfigStore is a thread-safe string-to-string configuration map layered over
/// a [`StorageBackend`]. Every store starts out holding [`DEFAULT_ENTRIES`].
///
/// Reads take a shared lock and writes an exclusive one; no lock outlives the
/// call that took it.
pub struct ConfigStore<S: StorageBackend = InMemoryStorage> {
    storage: RwLock<S>,
    instance_id: Uuid,
    created_at: DateTime<Utc>,
}

/// Type alias for the in-memory ConfigStore used by the process-wide instance
pub type InMemoryConfigStore = ConfigStore<InMemoryStorage>;

impl<S: StorageBackend> ConfigStore<S> {
    /// Creates a new ConfigStore over the provided storage backend and installs
    /// the default entries into it.
    ///
    /// Existing entries in `storage` are kept unless a default overwrites them.
    pub fn with_storage(mut storage: S) -> Result<Self, S::Error> {
        for (key, value) in DEFAULT_ENTRIES {
            storage.set(key.to_string(), value.to_string())?;
        }

        let store = Self {
            storage: RwLock::new(storage),
            instance_id: Uuid::new_v4(),
            created_at: Utc::now(),
        };
        info!(instance_id = %store.instance_id, "configuration store created");
        Ok(store)
    }

    /// Identity of this store, fixed at creation
    pub fn instance_id(&self) -> Uuid {
        self.instance_id
    }

    /// When this store was created
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Gets a value from the store.
    ///
    /// # Returns
    ///
    /// `Ok(Some(value))` if the key exists, `Ok(None)` if it doesn't, or `Err`
    /// if the backend failed.
    pub fn get(&self, key: &str) -> Result<Option<String>, S::Error> {
        self.storage.read().get(key)
    }

    /// Sets a value, inserting or overwriting the entry for `key`.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) -> Result<(), S::Error> {
        let key = key.into();
        debug!(instance_id = %self.instance_id, key = %key, "config entry set");
        self.storage.write().set(key, value.into())
    }

    /// Gets a value, treating an absent key as [`PatternError::KeyNotFound`].
    pub fn require(&self, key: &str) -> PatternResult<String> {
        match self.get(key) {
            Ok(Some(value)) => Ok(value),
            Ok(None) => Err(PatternError::KeyNotFound(key.to_string())),
            Err(e) => Err(PatternError::Storage(Box::new(e))),
        }
    }

    /// Removes a value, returning it if it existed.
    pub fn remove(&self, key: &str) -> Result<Option<String>, S::Error> {
        debug!(instance_id = %self.instance_id, key = %key, "config entry removed");
        self.storage.write().remove(key)
    }

    /// Checks if a key exists.
    pub fn contains_key(&self, key: &str) -> Result<bool, S::Error> {
        self.storage.read().contains_key(key)
    }

    /// Gets all keys, sorted.
    pub fn keys(&self) -> Result<Vec<String>, S::Error> {
        let mut keys = self.storage.read().keys()?;
        keys.sort();
        Ok(keys)
    }

    /// Gets the number of entries.
    pub fn len(&self) -> Result<usize, S::Error> {
        self.storage.read().len()
    }

    /// Checks if the store is empty.
    pub fn is_empty(&self) -> Result<bool, S::Error> {
        self.storage.read().is_empty()
    }

    /// Replaces the whole contents with exactly [`DEFAULT_ENTRIES`].
    ///
    /// Defaults are written before other keys are pruned, so a backend failure
    /// partway through still leaves every default key present. The whole reset
    /// happens under one write lock.
    pub fn reset_to_defaults(&self) -> Result<(), S::Error> {
        let mut storage = self.storage.write();
        for (key, value) in DEFAULT_ENTRIES {
            storage.set(key.to_string(), value.to_string())?;
        }
        for key in storage.keys()? {
            if !DEFAULT_ENTRIES.iter().any(|(default, _)| *default == key) {
                storage.remove(&key)?;
            }
        }
        info!(instance_id = %self.instance_id, "configuration store reset to defaults");
        Ok(())
    }

    /// Copies out the current contents.
    pub fn snapshot(&self) -> Result<ConfigSnapshot, S::Error> {
        let entries = self.storage.read().entries()?;
        Ok(ConfigSnapshot {
            instance_id: self.instance_id,
            created_at: self.created_at,
            entries: entries.into_iter().collect(),
        })
    }
}

impl InMemoryConfigStore {
    /// Creates a new in-memory store holding the default entries
    pub fn new() -> Self {
        match Self::with_storage(InMemoryStorage::with_capacity(DEFAULT_ENTRIES.len())) {
            Ok(store) => store,
            Err(never) => match never {},
        }
    }
}

impl Default for InMemoryConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StorageBackend> fmt::Debug for ConfigStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigStore")
            .field("instance_id", &self.instance_id)
            .field("created_at", &self.created_at)
            .finish_non_exhaustive()
    }
}

/// Point-in-time copy of a store's entries.
///
/// A snapshot is detached from the store: later writes do not show up in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigSnapshot {
    pub instance_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub entries: BTreeMap<String, String>,
}

impl ConfigSnapshot {
    /// Value for `key` at the time the snapshot was taken
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether the entries are exactly [`DEFAULT_ENTRIES`]
    pub fn is_default(&self) -> bool {
        self.entries.len() == DEFAULT_ENTRIES.len()
            && DEFAULT_ENTRIES
                .iter()
                .all(|(key, value)| self.get(key) == Some(*value))
    }

    /// Pretty-printed JSON form, with password values masked.
    pub fn to_json_redacted(&self) -> PatternResult<String> {
        let mut redacted = self.clone();
        if let Some(password) = redacted.entries.get_mut("password") {
            *password = "********".to_string();
        }
        Ok(serde_json::to_string_pretty(&redacted)?)
    }

    /// Pretty-printed JSON form
    pub fn to_json(&self) -> PatternResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
