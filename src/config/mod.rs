use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod defaults;
pub mod manager;
pub mod validation;

pub use manager::ConfigManager;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Config {
    pub git: GitConfig,
    pub scan: ScanConfig,
    pub cleanup: CleanupConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GitConfig {
    /// Remote whose branches decide whether a local branch is still alive.
    pub remote: String,
    /// Run `git fetch --prune` before classifying.
    pub fetch_before_scan: bool,
    /// Never classified and never deleted.
    pub protected_branches: Vec<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ScanConfig {
    pub jobs: usize,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CleanupConfig {
    /// Delete with `git branch -D` instead of `-d`.
    pub force_delete: bool,
    pub confirm: bool,
}

impl Default for GitConfig {
    fn default() -> Self {
        defaults::default_git_config()
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        defaults::default_scan_config()
    }
}

impl Default for CleanupConfig {
    fn default() -> Self {
        defaults::default_cleanup_config()
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        validation::validate_config(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert_eq!(config.git.remote, "origin");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "git": { "remote": "upstream" } }"#).unwrap();
        assert_eq!(config.git.remote, "upstream");
        assert!(config.git.fetch_before_scan);
        assert_eq!(config.scan, ScanConfig::default());
        assert_eq!(config.cleanup, CleanupConfig::default());
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("jobs must be at least 1".to_string());
        assert_eq!(err.to_string(), "Validation error: jobs must be at least 1");

        let io: ConfigError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(io, ConfigError::Io(_)));
        assert_eq!(io.to_string(), "IO error: gone");
    }
}
