//! Review use case: approving, rejecting, and commenting on applications.
//!
//! The decision is one-way and terminal: only a pending application can be
//! approved or rejected, and a decided application never changes status
//! again. The repository itself stays a permissive merge; the guard lives
//! here, where the review workflow is defined.

use accred_core::application::{
    Application, ApplicationPatch, ApplicationRepository, ApplicationStatus,
};
use accred_core::error::{AccredError, Result};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

/// Use case for reviewing submitted applications.
pub struct ReviewService {
    repository: Arc<dyn ApplicationRepository>,
}

impl ReviewService {
    /// Creates the service over the given repository.
    pub fn new(repository: Arc<dyn ApplicationRepository>) -> Self {
        Self { repository }
    }

    /// Approves a pending application, stamping `approved_at`.
    ///
    /// # Errors
    ///
    /// `NotFound` when no application matches `id`; `InvalidState` when the
    /// application has already been decided (the stored record is left
    /// unchanged).
    pub async fn approve(&self, id: &str) -> Result<Application> {
        self.decide(id, ApplicationStatus::Approved).await
    }

    /// Rejects a pending application, stamping `rejected_at`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`approve`](Self::approve).
    pub async fn reject(&self, id: &str) -> Result<Application> {
        self.decide(id, ApplicationStatus::Rejected).await
    }

    /// Appends a reviewer comment to an application.
    pub async fn comment(&self, id: &str, text: &str) -> Result<Application> {
        self.repository.add_comment(id, text).await
    }

    async fn decide(&self, id: &str, decision: ApplicationStatus) -> Result<Application> {
        let application = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| AccredError::not_found("application", id))?;

        if !application.is_pending() {
            return Err(AccredError::invalid_state(format!(
                "application '{}' has already been {}",
                id, application.status
            )));
        }

        let now = Utc::now();
        let patch = match decision {
            ApplicationStatus::Approved => ApplicationPatch::approve(now),
            ApplicationStatus::Rejected => ApplicationPatch::reject(now),
            ApplicationStatus::Pending => {
                return Err(AccredError::invalid_state(
                    "pending is not a review decision",
                ))
            }
        };

        let updated = self.repository.update(id, patch).await?;
        info!(id = %updated.id, status = %updated.status, "application decided");
        Ok(updated)
    }
}
