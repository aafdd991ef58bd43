//! Core domain layer for Accred.
//!
//! Contains the domain models (applications, comments, attachments, session
//! identity), the shared error type, and the repository/service traits that
//! the infrastructure layer implements. This crate performs no I/O.

pub mod application;
pub mod auth;
pub mod error;

// Re-export common error type
pub use error::AccredError;
