//! Infrastructure layer for Accred.
//!
//! Implements the core traits over a persistent key-value store: the store
//! adapter itself (file-backed and in-memory), the JSON-array application
//! repository, the mock authentication service, plus path and configuration
//! management.

pub mod clock;
pub mod config;
pub mod json_application_repository;
pub mod mock_auth_service;
pub mod paths;
pub mod storage;

pub use crate::config::AccredConfig;
pub use crate::json_application_repository::JsonApplicationRepository;
pub use crate::mock_auth_service::MockAuthService;
pub use crate::paths::AccredPaths;
pub use crate::storage::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
