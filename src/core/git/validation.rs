use crate::utils::error::{Result, SweepError};
use regex::Regex;

const MAX_REF_NAME_LEN: usize = 250;

/// Ref-name checks shared by branch and remote names.
pub struct GitValidator;

impl GitValidator {
    /// Validate a local branch name against git's ref naming rules.
    pub fn validate_branch_name(name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(SweepError::invalid_branch_name(name, "name is empty"));
        }

        if name.len() > MAX_REF_NAME_LEN {
            return Err(SweepError::invalid_branch_name(name, "name is too long"));
        }

        if name.starts_with("refs/") {
            return Err(SweepError::invalid_branch_name(
                name,
                "must not start with 'refs/'",
            ));
        }

        let invalid_patterns = [
            (r"\.\.", "contains '..'"),
            (r"^-", "starts with '-'"),
            (r"/$|\.$", "ends with '/' or '.'"),
            (r"\.lock$", "ends with '.lock'"),
            (r"[\x00-\x20\x7f]", "contains whitespace or control characters"),
            (r"~|\^|:|\\|\*|\?|\[", "contains special git characters"),
            (r"^@$", "is exactly '@'"),
            (r"/\.|^\.", "has a component starting with '.'"),
            (r"//", "contains an empty component"),
            (r"@\{", "contains '@{'"),
        ];

        for (pattern, reason) in invalid_patterns {
            let regex = Regex::new(pattern)
                .map_err(|e| SweepError::git_operation(format!("Regex error: {}", e)))?;
            if regex.is_match(name) {
                return Err(SweepError::invalid_branch_name(name, reason));
            }
        }

        Ok(())
    }

    /// Remote names follow the same rules as branch names, minus the slash.
    pub fn validate_remote_name(name: &str) -> Result<()> {
        if name.contains('/') {
            return Err(SweepError::invalid_args(format!(
                "Invalid remote name '{}': must not contain '/'",
                name
            )));
        }

        Self::validate_branch_name(name).map_err(|e| {
            SweepError::invalid_args(format!("Invalid remote name '{}': {}", name, e))
        })
    }
}
