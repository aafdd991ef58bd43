//! Application layer for Accred.
//!
//! Use cases built on the core traits: the session context, public
//! submission with validation, the review workflow, and read-side queries
//! for the dashboard and list views.

pub mod auth_context;
pub mod query;
pub mod review;
pub mod submission;

pub use crate::auth_context::AuthContext;
pub use crate::query::{ApplicationQuery, ApplicationQueryService, ApplicationStats, StatusFilter};
pub use crate::review::ReviewService;
pub use crate::submission::SubmissionService;
