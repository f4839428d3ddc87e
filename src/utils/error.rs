use thiserror::Error;

#[derive(Error, Debug)]
pub enum SweepError {
    #[error("Git operation failed: {message}")]
    GitOperation { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid arguments: {message}")]
    InvalidArgs { message: String },

    #[error("Repository state error: {message}")]
    RepoState { message: String },

    #[error("Invalid branch name: {name} - {reason}")]
    InvalidBranchName { name: String, reason: String },

    #[error("Branch '{name}' is already classified as {category}")]
    AlreadyClassified { name: String, category: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SweepError>;

impl SweepError {
    pub fn git_operation(message: impl Into<String>) -> Self {
        Self::GitOperation {
            message: message.into(),
        }
    }

    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn invalid_args(message: impl Into<String>) -> Self {
        Self::InvalidArgs {
            message: message.into(),
        }
    }

    pub fn repo_state(message: impl Into<String>) -> Self {
        Self::RepoState {
            message: message.into(),
        }
    }

    pub fn invalid_branch_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidBranchName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn already_classified(name: impl Into<String>, category: impl ToString) -> Self {
        Self::AlreadyClassified {
            name: name.into(),
            category: category.to_string(),
        }
    }
}

impl From<crate::config::ConfigError> for SweepError {
    fn from(error: crate::config::ConfigError) -> Self {
        Self::Config {
            message: error.to_string(),
        }
    }
}
