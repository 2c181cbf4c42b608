//! Key-value text persistence
//!
//! The whole collection is written as one JSON array under a single key.
//! Every write replaces the previous blob; there is no incremental update.

use std::collections::HashMap;

use crate::error::StorageError;
use crate::recipe::Recipe;

/// Key-value text storage addressed by a fixed key
pub trait Storage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process storage, used natively and when LocalStorage is unavailable
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one item
    pub fn with_item(key: &str, value: &str) -> Self {
        let mut items = HashMap::new();
        items.insert(key.to_string(), value.to_string());
        Self { items }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: Storage + ?Sized> Storage for &mut S {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}

/// Serialize the full collection
pub fn encode(recipes: &[Recipe]) -> Result<String, StorageError> {
    Ok(serde_json::to_string(recipes)?)
}

/// Parse a stored collection
pub fn decode(text: &str) -> Result<Vec<Recipe>, serde_json::Error> {
    serde_json::from_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::RecipeDraft;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_memory_storage_read_write() {
        let mut storage = MemoryStorage::new();
        assert!(storage.read("k").unwrap().is_none());

        storage.write("k", "first").unwrap();
        storage.write("k", "second").unwrap();
        assert_eq!(storage.read("k").unwrap().as_deref(), Some("second"));
        assert_eq!(storage.get("k"), Some("second"));
        assert!(storage.read("other").unwrap().is_none());
    }

    #[test]
    fn test_boxed_storage_delegates() {
        let mut storage: Box<dyn Storage> = Box::new(MemoryStorage::with_item("k", "v"));
        assert_eq!(storage.read("k").unwrap().as_deref(), Some("v"));
        storage.write("k", "w").unwrap();
        assert_eq!(storage.read("k").unwrap().as_deref(), Some("w"));
    }

    #[test]
    fn test_decode_accepts_empty_array() {
        assert!(decode("[]").unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_malformed_text() {
        assert!(decode("not json").is_err());
        assert!(decode("{\"id\": 1}").is_err());
        assert!(decode("[{\"name\": \"no id\"}]").is_err());
    }

    #[test]
    fn test_encode_preserves_order() {
        let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let recipes: Vec<_> = ["B", "A", "C"]
            .iter()
            .enumerate()
            .map(|(i, name)| {
                RecipeDraft::new(*name, "Snacks")
                    .ingredient("Salt", "1 pinch")
                    .into_recipe(i.to_string(), at)
            })
            .collect();

        let text = encode(&recipes).unwrap();
        assert!(text.starts_with('['));
        assert_eq!(decode(&text).unwrap(), recipes);
    }
}
