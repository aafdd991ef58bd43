//! Unified path management for accred data and configuration files.
//!
//! All persisted state lives under a single per-user application directory.
//! A base-directory override is supported so tests can point everything at a
//! temporary location.

use accred_core::error::{AccredError, Result};
use std::path::{Path, PathBuf};

/// Unified path management for accred.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/accred/            # Config directory
/// └── config.toml              # Application configuration
///
/// ~/.local/share/accred/       # Data directory
/// └── store/                   # Key-value store files
///     ├── teacher_applications
///     ├── auth_token
///     └── current_user
/// ```
#[derive(Debug, Clone)]
pub struct AccredPaths {
    /// Optional base directory override (for testing). When set, both config
    /// and data live under this directory.
    base: Option<PathBuf>,
}

impl AccredPaths {
    /// Creates a path resolver, optionally rooted at a custom base directory.
    pub fn new(base: Option<&Path>) -> Self {
        Self {
            base: base.map(Path::to_path_buf),
        }
    }

    /// Returns the accred configuration directory.
    pub fn config_dir(&self) -> Result<PathBuf> {
        if let Some(base) = &self.base {
            return Ok(base.clone());
        }
        dirs::config_dir()
            .map(|dir| dir.join("accred"))
            .ok_or_else(|| AccredError::config("Cannot find config directory"))
    }

    /// Returns the accred data directory.
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(base) = &self.base {
            return Ok(base.clone());
        }
        dirs::data_dir()
            .map(|dir| dir.join("accred"))
            .ok_or_else(|| AccredError::config("Cannot find data directory"))
    }

    /// Returns the path to the main configuration file.
    pub fn config_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    /// Returns the directory holding the key-value store files.
    pub fn store_dir(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join("store"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_dir_ends_with_accred() {
        let paths = AccredPaths::new(None);
        let config_dir = paths.config_dir().unwrap();
        assert!(config_dir.ends_with("accred"));
    }

    #[test]
    fn test_config_file_under_config_dir() {
        let paths = AccredPaths::new(None);
        let config_file = paths.config_file().unwrap();
        assert!(config_file.ends_with("config.toml"));
        assert!(config_file.starts_with(paths.config_dir().unwrap()));
    }

    #[test]
    fn test_base_override_roots_everything() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let paths = AccredPaths::new(Some(temp_dir.path()));
        assert_eq!(paths.config_dir().unwrap(), temp_dir.path());
        assert!(paths.store_dir().unwrap().starts_with(temp_dir.path()));
    }

    #[test]
    fn test_store_dir_under_data_dir() {
        let paths = AccredPaths::new(None);
        let store_dir = paths.store_dir().unwrap();
        assert!(store_dir.ends_with("store"));
        assert!(store_dir.starts_with(paths.data_dir().unwrap()));
    }
}
