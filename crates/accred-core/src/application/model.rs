//! Application domain model.
//!
//! This module contains the core entities that represent a teacher credential
//! accreditation submission in the application's domain layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents the review status of a submitted application.
///
/// Applications start as `Pending` and are decided exactly once, moving to
/// either `Approved` or `Rejected`. The lowercase wire form matches the
/// persisted JSON collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    /// The application has been submitted but not yet reviewed.
    Pending,
    /// A reviewer accepted the application.
    Approved,
    /// A reviewer declined the application.
    Rejected,
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplicationStatus::Pending => write!(f, "pending"),
            ApplicationStatus::Approved => write!(f, "approved"),
            ApplicationStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// A file attached to an application.
///
/// The content is carried inline as a data-URL string; there is no external
/// file storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentAttachment {
    /// Original file name as supplied by the applicant.
    pub name: String,
    /// File size in bytes.
    pub size: u64,
    /// MIME type of the file.
    #[serde(rename = "type")]
    pub content_type: String,
    /// Inline-encoded file content (data URL).
    pub data: String,
    /// When the file was attached.
    pub uploaded_at: DateTime<Utc>,
}

/// A reviewer comment on an application.
///
/// Comments are append-only: they are never edited, removed, or reordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Unique identifier (millisecond-timestamp string).
    pub id: String,
    /// Free-text comment body.
    pub text: String,
    /// Username of the comment author.
    pub author: String,
    /// When the comment was created.
    pub created_at: DateTime<Utc>,
}

/// The applicant-supplied portion of an application.
///
/// This is what the public submission form collects; the repository turns it
/// into a full [`Application`] record on create.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub current_school: String,
    /// Years of teaching experience, kept as free text like the rest.
    pub years_experience: String,
    pub current_certification: String,
    pub desired_accreditation: String,
    pub education: String,
    /// Optional; applicants may leave this empty.
    #[serde(default)]
    pub additional_certifications: Option<String>,
    pub teaching_philosophy: String,
    /// Attached files; may be empty.
    #[serde(default)]
    pub documents: Vec<DocumentAttachment>,
}

/// A submitted teacher credential accreditation application.
///
/// The draft fields are flattened into the record so the persisted JSON is a
/// single flat object per application, matching the stored collection layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Unique identifier (millisecond-timestamp string); immutable.
    pub id: String,
    /// The applicant-supplied fields.
    #[serde(flatten)]
    pub draft: ApplicationDraft,
    /// Current review status.
    pub status: ApplicationStatus,
    /// Creation timestamp; immutable.
    pub submitted_at: DateTime<Utc>,
    /// Set on every mutation after creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Set once, when the application is approved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<DateTime<Utc>>,
    /// Set once, when the application is rejected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejected_at: Option<DateTime<Utc>>,
    /// Reviewer comments, append-only.
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Application {
    /// Returns true if the application has not been decided yet.
    pub fn is_pending(&self) -> bool {
        self.status == ApplicationStatus::Pending
    }
}

/// A partial update applied to an existing application.
///
/// Only the review outcome is mutable after submission; applicant fields,
/// `id`, and `submitted_at` never change. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ApplicationStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejected_at: Option<DateTime<Utc>>,
}

impl ApplicationPatch {
    /// Builds the patch that marks an application approved at `at`.
    pub fn approve(at: DateTime<Utc>) -> Self {
        Self {
            status: Some(ApplicationStatus::Approved),
            approved_at: Some(at),
            ..Self::default()
        }
    }

    /// Builds the patch that marks an application rejected at `at`.
    pub fn reject(at: DateTime<Utc>) -> Self {
        Self {
            status: Some(ApplicationStatus::Rejected),
            rejected_at: Some(at),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_draft() -> ApplicationDraft {
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

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&ApplicationStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");
        let status: ApplicationStatus = serde_json::from_str("\"rejected\"").unwrap();
        assert_eq!(status, ApplicationStatus::Rejected);
    }

    #[test]
    fn test_application_json_is_flat_and_camel_case() {
        let app = Application {
            id: "1700000000000".to_string(),
            draft: sample_draft(),
            status: ApplicationStatus::Pending,
            submitted_at: Utc::now(),
            updated_at: None,
            approved_at: None,
            rejected_at: None,
            comments: Vec::new(),
        };

        let value: serde_json::Value = serde_json::to_value(&app).unwrap();
        // Draft fields are flattened next to the record fields.
        assert_eq!(value["firstName"], "Ada");
        assert_eq!(value["teachingPhilosophy"], "Learning by doing");
        assert_eq!(value["status"], "pending");
        // Unset decision timestamps are omitted entirely.
        assert!(value.get("approvedAt").is_none());
        assert!(value.get("rejectedAt").is_none());
    }

    #[test]
    fn test_application_round_trip() {
        let app = Application {
            id: "1700000000001".to_string(),
            draft: sample_draft(),
            status: ApplicationStatus::Approved,
            submitted_at: Utc::now(),
            updated_at: Some(Utc::now()),
            approved_at: Some(Utc::now()),
            rejected_at: None,
            comments: vec![Comment {
                id: "1700000000002".to_string(),
                text: "Strong candidate".to_string(),
                author: "admin".to_string(),
                created_at: Utc::now(),
            }],
        };

        let json = serde_json::to_string(&app).unwrap();
        let back: Application = serde_json::from_str(&json).unwrap();
        assert_eq!(back, app);
    }

    #[test]
    fn test_patch_approve_sets_only_approval_fields() {
        let at = Utc::now();
        let patch = ApplicationPatch::approve(at);
        assert_eq!(patch.status, Some(ApplicationStatus::Approved));
        assert_eq!(patch.approved_at, Some(at));
        assert!(patch.rejected_at.is_none());
    }
}
