pub mod cli;
pub mod config;
pub mod core;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::Config;
pub use crate::core::branches::{BranchClassification, Category};
pub use crate::core::classifier::{BranchClassifier, ClassificationRun, ClassifyOptions};
pub use crate::core::git::{GitOperations, GitService};
pub use crate::core::remover::{BranchRemover, PrunePlan, PruneResults};
pub use utils::{Result, SweepError};
