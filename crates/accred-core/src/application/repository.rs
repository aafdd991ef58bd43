//! Application repository trait.
//!
//! Defines the interface for application persistence operations.

use super::model::{Application, ApplicationDraft, ApplicationPatch};
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for managing application persistence.
///
/// This trait defines the contract for persisting and retrieving submitted
/// applications, decoupling the application's core logic from the specific
/// storage mechanism (e.g., file-backed key-value store, in-memory store).
///
/// # Implementation Notes
///
/// The collection is persisted as a single JSON array under one storage key.
/// Every mutating operation rewrites the entire collection; implementations
/// must preserve this whole-collection read-modify-write contract.
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Lists all stored applications.
    ///
    /// An absent or malformed collection is treated as empty, never as an
    /// error; parse failures are logged and swallowed.
    async fn list(&self) -> Result<Vec<Application>>;

    /// Creates a new application from the submitted draft.
    ///
    /// The repository assigns the identity: a millisecond-timestamp `id`,
    /// `submitted_at`, an initial `Pending` status, and an empty comment
    /// list. Returns the created record.
    ///
    /// # Errors
    ///
    /// Propagates underlying store write failures.
    async fn create(&self, draft: ApplicationDraft) -> Result<Application>;

    /// Applies a partial update to an existing application.
    ///
    /// Fields absent from the patch are left untouched; `updated_at` is set
    /// on every call. Returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns a `NotFound` error when no application matches `id`; in that
    /// case the stored collection is not altered.
    async fn update(&self, id: &str, patch: ApplicationPatch) -> Result<Application>;

    /// Finds an application by its ID.
    ///
    /// Returns `Ok(None)` when no application matches; absence is not an
    /// error.
    async fn get_by_id(&self, id: &str) -> Result<Option<Application>>;

    /// Appends a reviewer comment to an application.
    ///
    /// The author is the currently signed-in user, falling back to the
    /// literal `"Admin"` when no session exists. Returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns a `NotFound` error when no application matches `id`.
    async fn add_comment(&self, id: &str, text: &str) -> Result<Application>;
}
