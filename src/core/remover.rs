use crate::core::branches::BranchClassification;
use crate::core::git::GitOperations;

/// Branches a prune would delete. Built from the Stale bucket only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrunePlan {
    pub branches: Vec<String>,
}

impl PrunePlan {
    pub fn from_classification(classification: &BranchClassification) -> Self {
        Self {
            branches: classification.stale().to_vec(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.branches.len()
    }
}

#[derive(Debug, Default)]
pub struct PruneResults {
    pub deleted: Vec<String>,
    pub errors: Vec<String>,
}

impl PruneResults {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

pub struct BranchRemover<'a, G: GitOperations> {
    git: &'a G,
    force: bool,
}

impl<'a, G: GitOperations> BranchRemover<'a, G> {
    pub fn new(git: &'a G, force: bool) -> Self {
        Self { git, force }
    }

    /// Deletes every planned branch; a failure is recorded and the rest still run.
    pub fn execute(&self, plan: PrunePlan) -> PruneResults {
        let mut results = PruneResults::default();

        for branch in plan.branches {
            match self.git.delete_branch(&branch, self.force) {
                Ok(()) => {
                    tracing::info!(branch = %branch, "deleted stale branch");
                    results.deleted.push(branch);
                }
                Err(e) => {
                    tracing::warn!(branch = %branch, "failed to delete: {}", e);
                    results
                        .errors
                        .push(format!("Failed to remove branch {branch}: {e}"));
                }
            }
        }

        results
    }
}
