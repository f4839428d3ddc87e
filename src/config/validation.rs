use super::{Config, ConfigError, GitConfig, Result, ScanConfig};
use crate::core::git::GitValidator;

pub const MAX_JOBS: usize = 64;

pub fn validate_config(config: &Config) -> Result<()> {
    validate_git_config(&config.git)?;
    validate_scan_config(&config.scan)?;
    Ok(())
}

pub fn validate_git_config(git: &GitConfig) -> Result<()> {
    if git.remote.is_empty() {
        return Err(ConfigError::Validation(
            "Remote name cannot be empty".to_string(),
        ));
    }

    GitValidator::validate_remote_name(&git.remote)
        .map_err(|e| ConfigError::Validation(e.to_string()))?;

    for branch in &git.protected_branches {
        GitValidator::validate_branch_name(branch).map_err(|e| {
            ConfigError::Validation(format!("Invalid protected branch: {}", e))
        })?;
    }

    Ok(())
}

pub fn validate_scan_config(scan: &ScanConfig) -> Result<()> {
    if scan.jobs == 0 {
        return Err(ConfigError::Validation(
            "Scan jobs must be at least 1".to_string(),
        ));
    }

    if scan.jobs > MAX_JOBS {
        return Err(ConfigError::Validation(format!(
            "Scan jobs cannot exceed {}",
            MAX_JOBS
        )));
    }

    Ok(())
}
