use super::StorageBackend;
use std::collections::HashMap;
use std::fmt;

/// Backend holding entries in a plain `HashMap`; lives and dies with the process
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    data: HashMap<String, String>,
}

/// Error type for in-memory storage operations.
///
/// Uninhabited: a `Result<T, InMemoryStorageError>` is always `Ok`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InMemoryStorageError {}

impl fmt::Display for InMemoryStorageError {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl std::error::Error for InMemoryStorageError {}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    /// Pre-size for `capacity` entries; the config store passes the default count
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: HashMap::with_capacity(capacity),
        }
    }
}

impl StorageBackend for InMemoryStorage {
    type Error = InMemoryStorageError;

    fn set(&mut self, key: String, value: String) -> Result<(), Self::Error> {
        self.data.insert(key, value);
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.data.get(key).cloned())
    }

    fn remove(&mut self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.data.remove(key))
    }

    fn contains_key(&self, key: &str) -> Result<bool, Self::Error> {
        Ok(self.data.contains_key(key))
    }

    fn keys(&self) -> Result<Vec<String>, Self::Error> {
        Ok(self.data.keys().cloned().collect())
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.data.clear();
        Ok(())
    }

    fn len(&self) -> Result<usize, Self::Error> {
        Ok(self.data.len())
    }

    fn entries(&self) -> Result<Vec<(String, String)>, Self::Error> {
        Ok(self
            .data
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_storage_basic_operations() {
        let mut storage = InMemoryStorage::new();

        storage.set("key1".to_string(), "value1".to_string()).unwrap();
        assert_eq!(storage.get("key1").unwrap(), Some("value1".to_string()));

        // Non-existent key
        assert_eq!(storage.get("nonexistent").unwrap(), None);

        assert!(storage.contains_key("key1").unwrap());
        assert!(!storage.contains_key("nonexistent").unwrap());

        assert_eq!(storage.len().unwrap(), 1);
        assert!(!storage.is_empty().unwrap());

        assert_eq!(
            storage.remove("key1").unwrap(),
            Some("value1".to_string())
        );
        assert_eq!(storage.remove("key1").unwrap(), None);
        assert!(storage.is_empty().unwrap());
    }

    #[test]
    fn test_in_memory_storage_overwrite() {
        let mut storage = InMemoryStorage::with_capacity(4);

        storage.set("user".to_string(), "admin".to_string()).unwrap();
        storage.set("user".to_string(), "root".to_string()).unwrap();

        assert_eq!(storage.get("user").unwrap(), Some("root".to_string()));
        assert_eq!(storage.len().unwrap(), 1);
    }

    #[test]
    fn test_in_memory_storage_keys_entries_and_clear() {
        let mut storage = InMemoryStorage::new();

        storage.set("key1".to_string(), "value1".to_string()).unwrap();
        storage.set("key2".to_string(), "value2".to_string()).unwrap();
        storage.set("key3".to_string(), "value3".to_string()).unwrap();

        let mut keys = storage.keys().unwrap();
        keys.sort();
        assert_eq!(keys, vec!["key1", "key2", "key3"]);

        let mut entries = storage.entries().unwrap();
        entries.sort();
        assert_eq!(entries[1], ("key2".to_string(), "value2".to_string()));

        storage.clear().unwrap();
        assert_eq!(storage.len().unwrap(), 0);
        assert!(storage.keys().unwrap().is_empty());
    }
}
