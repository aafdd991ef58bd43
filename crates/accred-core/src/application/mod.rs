//! Application domain: models and repository contract for submitted
//! accreditation applications.

pub mod model;
pub mod repository;

pub use model::{
    Application, ApplicationDraft, ApplicationPatch, ApplicationStatus, Comment,
    DocumentAttachment,
};
pub use repository::ApplicationRepository;
