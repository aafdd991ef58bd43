//! Public submission use case.
//!
//! Validates a draft the way the submission form does (presence of required
//! fields plus an email format check) before handing it to the repository.

use accred_core::application::{Application, ApplicationDraft, ApplicationRepository};
use accred_core::error::{AccredError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;
use tracing::debug;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

/// Use case for submitting a new accreditation application.
pub struct SubmissionService {
    repository: Arc<dyn ApplicationRepository>,
}

impl SubmissionService {
    /// Creates the service over the given repository.
    pub fn new(repository: Arc<dyn ApplicationRepository>) -> Self {
        Self { repository }
    }

    /// Validates and submits a draft, returning the created record.
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error with the form's message text when a
    /// required field is missing or the email is malformed; nothing is
    /// created in that case. Store failures propagate from `create`.
    pub async fn submit(&self, draft: ApplicationDraft) -> Result<Application> {
        validate_draft(&draft)?;
        let created = self.repository.create(draft).await?;
        debug!(id = %created.id, "application submitted");
        Ok(created)
    }
}

/// Runs the form's step-by-step validation over the whole draft.
///
/// Documents and additional certifications are optional; everything else is
/// required.
fn validate_draft(draft: &ApplicationDraft) -> Result<()> {
    if draft.first_name.trim().is_empty()
        || draft.last_name.trim().is_empty()
        || draft.email.trim().is_empty()
        || draft.phone.trim().is_empty()
    {
        return Err(AccredError::validation(
            "Please fill in all personal information fields",
        ));
    }
    if !EMAIL_RE.is_match(&draft.email) {
        return Err(AccredError::validation(
            "Please enter a valid email address",
        ));
    }
    if draft.current_school.trim().is_empty()
        || draft.years_experience.trim().is_empty()
        || draft.current_certification.trim().is_empty()
        || draft.desired_accreditation.trim().is_empty()
        || draft.education.trim().is_empty()
    {
        return Err(AccredError::validation(
            "Please fill in all professional details",
        ));
    }
    if draft.teaching_philosophy.trim().is_empty() {
        return Err(AccredError::validation(
            "Please provide your teaching philosophy",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use accred_core::application::ApplicationStatus;
    use accred_infrastructure::{JsonApplicationRepository, MemoryKeyValueStore};

    fn create_test_service() -> (SubmissionService, Arc<dyn ApplicationRepository>) {
        let store = Arc::new(MemoryKeyValueStore::new());
        let repository: Arc<dyn ApplicationRepository> =
            Arc::new(JsonApplicationRepository::new(store));
        (SubmissionService::new(repository.clone()), repository)
    }

    fn valid_draft() -> ApplicationDraft {
        ApplicationDraft {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@x.com".to_string(),
            phone: "555-0100".to_string(),
            current_school: "Analytical High".to_string(),
            years_experience: "12".to_string(),
            current_certification: "Secondary Mathematics".to_string(),
            desired_accreditation: "Advanced Mathematics".to_string(),
            education: "BSc Mathematics".to_string(),
            additional_certifications: None,
            teaching_philosophy: "Learning by doing".to_string(),
            documents: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_valid_draft_is_created_pending() {
        let (service, _repo) = create_test_service();

        let created = service.submit(valid_draft()).await.unwrap();

        assert!(created.id.parse::<i64>().is_ok());
        assert_eq!(created.status, ApplicationStatus::Pending);
        assert_eq!(created.draft.first_name, "Ada");
    }

    #[tokio::test]
    async fn test_missing_personal_field_is_rejected() {
        let (service, repo) = create_test_service();

        let mut draft = valid_draft();
        draft.phone = String::new();
        let err = service.submit(draft).await.unwrap_err();

        assert!(err.is_validation());
        assert!(err
            .to_string()
            .contains("Please fill in all personal information fields"));
        assert!(repo.list().await.unwrap().is_empty(), "nothing was created");
    }

    #[tokio::test]
    async fn test_malformed_email_is_rejected() {
        let (service, repo) = create_test_service();

        let mut draft = valid_draft();
        draft.email = "not-an-email".to_string();
        let err = service.submit(draft).await.unwrap_err();

        assert!(err.is_validation());
        assert!(err.to_string().contains("valid email address"));
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_professional_detail_is_rejected() {
        let (service, _repo) = create_test_service();

        let mut draft = valid_draft();
        draft.desired_accreditation = "  ".to_string();
        let err = service.submit(draft).await.unwrap_err();

        assert!(err
            .to_string()
            .contains("Please fill in all professional details"));
    }

    #[tokio::test]
    async fn test_missing_teaching_philosophy_is_rejected() {
        let (service, _repo) = create_test_service();

        let mut draft = valid_draft();
        draft.teaching_philosophy = String::new();
        let err = service.submit(draft).await.unwrap_err();

        assert!(err
            .to_string()
            .contains("Please provide your teaching philosophy"));
    }

    #[tokio::test]
    async fn test_optional_fields_may_be_absent() {
        let (service, _repo) = create_test_service();

        let mut draft = valid_draft();
        draft.additional_certifications = None;
        draft.documents = Vec::new();
        assert!(service.submit(draft).await.is_ok());
    }
}
