//! In-memory key-value store.

use super::kv::KeyValueStore;
use accred_core::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// A key-value store backed by an in-memory map.
///
/// Nothing survives the process; this is the injected test double for the
/// file-backed store and is also useful for ephemeral demo setups.
#[derive(Default)]
pub struct MemoryKeyValueStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    async fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn write(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_read_remove() {
        let store = MemoryKeyValueStore::new();
        assert!(store.read("k").await.unwrap().is_none());

        store.write("k", "v").await.unwrap();
        assert_eq!(store.read("k").await.unwrap().as_deref(), Some("v"));

        store.remove("k").await.unwrap();
        assert!(store.read("k").await.unwrap().is_none());
    }
}
