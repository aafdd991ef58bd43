//! Read-side queries over the application collection: status filtering,
//! free-text search, newest-first ordering, and dashboard statistics.

use accred_core::application::{Application, ApplicationRepository, ApplicationStatus};
use accred_core::error::Result;
use std::sync::Arc;

/// Status filter for listing applications.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// No status filtering.
    #[default]
    All,
    /// Only applications with the given status.
    Status(ApplicationStatus),
}

/// A list query: status filter plus an optional free-text search.
#[derive(Debug, Clone, Default)]
pub struct ApplicationQuery {
    pub status: StatusFilter,
    /// Case-insensitive substring match over name, email, current school,
    /// and desired accreditation.
    pub search: Option<String>,
}

/// Counts shown on the review dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplicationStats {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

/// Read-side service over the application collection.
pub struct ApplicationQueryService {
    repository: Arc<dyn ApplicationRepository>,
}

impl ApplicationQueryService {
    /// Creates the service over the given repository.
    pub fn new(repository: Arc<dyn ApplicationRepository>) -> Self {
        Self { repository }
    }

    /// Lists applications matching the query, newest first.
    pub async fn query(&self, query: &ApplicationQuery) -> Result<Vec<Application>> {
        let mut applications = self.repository.list().await?;

        if let StatusFilter::Status(status) = query.status {
            applications.retain(|app| app.status == status);
        }

        if let Some(search) = query.search.as_deref().filter(|s| !s.trim().is_empty()) {
            let needle = search.to_lowercase();
            applications.retain(|app| matches_search(app, &needle));
        }

        applications.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        Ok(applications)
    }

    /// Returns the `n` most recent applications.
    pub async fn recent(&self, n: usize) -> Result<Vec<Application>> {
        let mut applications = self.query(&ApplicationQuery::default()).await?;
        applications.truncate(n);
        Ok(applications)
    }

    /// Returns the per-status counts for the dashboard.
    pub async fn stats(&self) -> Result<ApplicationStats> {
        let applications = self.repository.list().await?;
        let count =
            |status| applications.iter().filter(|app| app.status == status).count();
        Ok(ApplicationStats {
            total: applications.len(),
            pending: count(ApplicationStatus::Pending),
            approved: count(ApplicationStatus::Approved),
            rejected: count(ApplicationStatus::Rejected),
        })
    }
}

fn matches_search(application: &Application, needle: &str) -> bool {
    let draft = &application.draft;
    [
        &draft.first_name,
        &draft.last_name,
        &draft.email,
        &draft.current_school,
        &draft.desired_accreditation,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}
