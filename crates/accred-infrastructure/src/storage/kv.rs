//! Key-value store adapter trait.

use accred_core::error::Result;
use async_trait::async_trait;

/// Names of the logical records in the store namespace.
pub mod keys {
    /// The application collection, persisted as one JSON array.
    pub const APPLICATIONS: &str = "teacher_applications";
    /// The opaque session token.
    pub const AUTH_TOKEN: &str = "auth_token";
    /// The signed-in user record, persisted as a JSON object.
    pub const CURRENT_USER: &str = "current_user";
}

/// A thin adapter over a persistent key-value store.
///
/// The adapter exclusively owns the raw serialized bytes; repositories and
/// services own the typed view and never bypass it.
///
/// Implementations are NOT transactional: concurrent writers may interleave
/// arbitrarily and the last write wins. The system assumes a single active
/// writer.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`, or `None` when absent.
    async fn read(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    async fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Removes the value stored under `key`. Removing an absent key is not
    /// an error.
    async fn remove(&self, key: &str) -> Result<()>;
}
