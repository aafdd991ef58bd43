//! Authentication domain: session identity types and the auth service
//! contract.

pub mod model;
pub mod service;

pub use model::{AuthenticatedUser, LoginOutcome};
pub use service::AuthService;
