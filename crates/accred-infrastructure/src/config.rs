//! Application configuration loading.
//!
//! Reads `config.toml` from the accred config directory. A missing or empty
//! file yields the defaults; a file that exists but cannot be parsed is an
//! error.

use crate::paths::AccredPaths;
use accred_core::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default simulated login latency in milliseconds.
pub const DEFAULT_LOGIN_DELAY_MS: u64 = 500;

/// Top-level accred configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccredConfig {
    /// Overrides the key-value store directory. When unset, the platform
    /// data directory is used.
    pub data_dir: Option<PathBuf>,
    /// Artificial delay applied to login attempts, mimicking network
    /// latency.
    pub login_delay_ms: u64,
}

impl Default for AccredConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            login_delay_ms: DEFAULT_LOGIN_DELAY_MS,
        }
    }
}

impl AccredConfig {
    /// Loads the configuration from the resolved config file path.
    ///
    /// # Returns
    ///
    /// - `Ok(AccredConfig)`: Parsed configuration, or the defaults if the
    ///   file does not exist or is empty.
    /// - `Err(_)`: The file exists but could not be read or parsed.
    pub fn load(paths: &AccredPaths) -> Result<Self> {
        let config_path = paths.config_file()?;
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let paths = AccredPaths::new(Some(temp_dir.path()));
        let config = AccredConfig::load(&paths).unwrap();
        assert_eq!(config, AccredConfig::default());
        assert_eq!(config.login_delay_ms, DEFAULT_LOGIN_DELAY_MS);
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let mut file = fs::File::create(&config_path).unwrap();
        writeln!(file, "login_delay_ms = 25").unwrap();

        let paths = AccredPaths::new(Some(temp_dir.path()));
        let config = AccredConfig::load(&paths).unwrap();
        assert_eq!(config.login_delay_ms, 25);
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        fs::write(temp_dir.path().join("config.toml"), "not valid toml [[").unwrap();

        let paths = AccredPaths::new(Some(temp_dir.path()));
        let result = AccredConfig::load(&paths);
        assert!(result.is_err());
        assert!(result.unwrap_err().is_serialization());
    }
}
