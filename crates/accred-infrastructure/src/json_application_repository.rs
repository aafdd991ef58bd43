//! Key-value-store-backed ApplicationRepository implementation.
//!
//! The whole collection lives under one key as a single JSON array. Every
//! mutation is a whole-collection read-modify-write: O(n) per operation in
//! both time and write volume, which is the deliberate scalability ceiling
//! of this store.

use crate::clock;
use crate::storage::{keys, KeyValueStore};
use accred_core::application::{
    Application, ApplicationDraft, ApplicationPatch, ApplicationRepository, ApplicationStatus,
    Comment,
};
use accred_core::auth::AuthenticatedUser;
use accred_core::error::{AccredError, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

/// Application repository persisting the collection as one JSON array.
pub struct JsonApplicationRepository {
    store: Arc<dyn KeyValueStore>,
}

impl JsonApplicationRepository {
    /// Creates a repository over the given store.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Loads the full collection.
    ///
    /// An absent key or a payload that fails to parse yields an empty
    /// collection; the parse failure is logged and swallowed. Underlying
    /// store read failures still propagate.
    async fn load_collection(&self) -> Result<Vec<Application>> {
        match self.store.read(keys::APPLICATIONS).await? {
            None => Ok(Vec::new()),
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(applications) => Ok(applications),
                Err(e) => {
                    warn!(error = %e, "malformed application collection, treating as empty");
                    Ok(Vec::new())
                }
            },
        }
    }

    /// Serializes and persists the full collection.
    async fn persist_collection(&self, applications: &[Application]) -> Result<()> {
        let raw = serde_json::to_string(applications)?;
        self.store.write(keys::APPLICATIONS, &raw).await
    }

    /// Resolves the comment author: the persisted current user's username,
    /// or the literal "Admin" when no session exists or the record is
    /// malformed.
    async fn comment_author(&self) -> String {
        match self.store.read(keys::CURRENT_USER).await {
            Ok(Some(raw)) => match serde_json::from_str::<AuthenticatedUser>(&raw) {
                Ok(user) => user.username,
                Err(e) => {
                    warn!(error = %e, "malformed current user record, falling back to Admin");
                    "Admin".to_string()
                }
            },
            Ok(None) => "Admin".to_string(),
            Err(e) => {
                warn!(error = %e, "failed to read current user, falling back to Admin");
                "Admin".to_string()
            }
        }
    }
}

#[async_trait]
impl ApplicationRepository for JsonApplicationRepository {
    async fn list(&self) -> Result<Vec<Application>> {
        self.load_collection().await
    }

    async fn create(&self, draft: ApplicationDraft) -> Result<Application> {
        let mut applications = self.load_collection().await?;

        let record = Application {
            id: clock::millis_id(),
            draft,
            status: ApplicationStatus::Pending,
            submitted_at: clock::now(),
            updated_at: None,
            approved_at: None,
            rejected_at: None,
            comments: Vec::new(),
        };

        applications.push(record.clone());
        self.persist_collection(&applications).await?;
        debug!(id = %record.id, "application created");

        Ok(record)
    }

    async fn update(&self, id: &str, patch: ApplicationPatch) -> Result<Application> {
        let mut applications = self.load_collection().await?;

        let Some(application) = applications.iter_mut().find(|app| app.id == id) else {
            return Err(AccredError::not_found("application", id));
        };

        if let Some(status) = patch.status {
            application.status = status;
        }
        if let Some(at) = patch.approved_at {
            application.approved_at = Some(at);
        }
        if let Some(at) = patch.rejected_at {
            application.rejected_at = Some(at);
        }
        application.updated_at = Some(clock::now());

        let updated = application.clone();
        self.persist_collection(&applications).await?;
        debug!(id = %updated.id, status = %updated.status, "application updated");

        Ok(updated)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Application>> {
        let applications = self.load_collection().await?;
        Ok(applications.into_iter().find(|app| app.id == id))
    }

    async fn add_comment(&self, id: &str, text: &str) -> Result<Application> {
        let author = self.comment_author().await;
        let mut applications = self.load_collection().await?;

        let Some(application) = applications.iter_mut().find(|app| app.id == id) else {
            return Err(AccredError::not_found("application", id));
        };

        application.comments.push(Comment {
            id: clock::millis_id(),
            text: text.to_string(),
            author,
            created_at: clock::now(),
        });
        application.updated_at = Some(clock::now());

        let updated = application.clone();
        self.persist_collection(&applications).await?;
        debug!(id = %updated.id, "comment added");

        Ok(updated)
    }
}
