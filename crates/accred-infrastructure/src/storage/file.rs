//! File-backed key-value store.

use super::kv::KeyValueStore;
use accred_core::error::{AccredError, Result};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

/// A key-value store persisting each key as one file under a base directory.
///
/// Values survive process restarts. Writes are plain file writes with no
/// locking; two concurrent writers interleave arbitrarily and the last write
/// wins, matching the adapter contract.
///
/// Directory structure:
/// ```text
/// base_dir/
/// ├── teacher_applications
/// ├── auth_token
/// └── current_user
/// ```
pub struct FileKeyValueStore {
    base_dir: PathBuf,
}

impl FileKeyValueStore {
    /// Creates a store rooted at `base_dir`. The directory is created lazily
    /// on first write.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Returns the base directory.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(key)
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn read(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.key_path(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AccredError::data_access(format!(
                "Failed to read key '{}': {}",
                key, e
            ))),
        }
    }

    async fn write(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.base_dir).await.map_err(|e| {
            AccredError::data_access(format!(
                "Failed to create store directory {:?}: {}",
                self.base_dir, e
            ))
        })?;
        fs::write(self.key_path(key), value)
            .await
            .map_err(|e| AccredError::data_access(format!("Failed to write key '{}': {}", key, e)))
    }

    async fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.key_path(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AccredError::data_access(format!(
                "Failed to remove key '{}': {}",
                key, e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (FileKeyValueStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path().join("store"));
        (store, temp_dir)
    }

    #[tokio::test]
    async fn test_read_absent_key() {
        let (store, _temp_dir) = create_test_store();
        assert!(store.read("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let (store, _temp_dir) = create_test_store();
        store.write("auth_token", "mock-token-1").await.unwrap();
        let value = store.read("auth_token").await.unwrap();
        assert_eq!(value.as_deref(), Some("mock-token-1"));
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let (store, _temp_dir) = create_test_store();
        store.write("k", "first").await.unwrap();
        store.write("k", "second").await.unwrap();
        assert_eq!(store.read("k").await.unwrap().as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let (store, _temp_dir) = create_test_store();
        store.write("k", "v").await.unwrap();
        store.remove("k").await.unwrap();
        assert!(store.read("k").await.unwrap().is_none());
        // Removing again is not an error.
        store.remove("k").await.unwrap();
    }

    #[tokio::test]
    async fn test_values_survive_a_new_handle() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("store");

        let store = FileKeyValueStore::new(&dir);
        store.write("k", "persisted").await.unwrap();
        drop(store);

        let reopened = FileKeyValueStore::new(&dir);
        assert_eq!(
            reopened.read("k").await.unwrap().as_deref(),
            Some("persisted")
        );
    }
}
