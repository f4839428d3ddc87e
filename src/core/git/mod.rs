use crate::utils::error::Result;
use std::path::Path;

pub mod branch;
pub mod repository;
pub mod validation;
pub mod worktree;

pub use branch::{BranchManager, LocalBranch};
pub use repository::GitRepository;
pub use validation::GitValidator;
pub use worktree::{WorktreeInfo, WorktreeManager};

/// Git queries and mutations the classifier and remover depend on.
pub trait GitOperations {
    fn list_local_branches(&self) -> Result<Vec<LocalBranch>>;
    /// Branches checked out in any worktree of the repository.
    fn checked_out_branches(&self) -> Result<Vec<String>>;
    fn fetch_prune(&self, remote: &str) -> Result<()>;
    fn remote_branch_exists(&self, remote: &str, name: &str) -> Result<bool>;
    fn unpushed_commit_count(&self, name: &str, remote: &str) -> Result<usize>;
    fn delete_branch(&self, name: &str, force: bool) -> Result<()>;
}

pub struct GitService {
    repo: GitRepository,
}

impl GitService {
    pub fn discover() -> Result<Self> {
        let repo = GitRepository::discover()?;
        repo.validate()?;
        Ok(Self { repo })
    }

    pub fn discover_from(path: &Path) -> Result<Self> {
        let repo = GitRepository::discover_from(path)?;
        repo.validate()?;
        Ok(Self { repo })
    }

    pub fn repository(&self) -> &GitRepository {
        &self.repo
    }

    pub fn worktree_manager(&self) -> WorktreeManager<'_> {
        WorktreeManager::new(&self.repo)
    }

    pub fn branch_manager(&self) -> BranchManager<'_> {
        BranchManager::new(&self.repo)
    }
}

impl GitOperations for GitService {
    fn list_local_branches(&self) -> Result<Vec<LocalBranch>> {
        self.branch_manager().list_local_branches()
    }

    fn checked_out_branches(&self) -> Result<Vec<String>> {
        self.worktree_manager().checked_out_branches()
    }

    fn fetch_prune(&self, remote: &str) -> Result<()> {
        self.repo.fetch_prune(remote)
    }

    fn remote_branch_exists(&self, remote: &str, name: &str) -> Result<bool> {
        self.branch_manager().remote_branch_exists(remote, name)
    }

    fn unpushed_commit_count(&self, name: &str, remote: &str) -> Result<usize> {
        self.branch_manager().unpushed_commit_count(name, remote)
    }

    fn delete_branch(&self, name: &str, force: bool) -> Result<()> {
        self.branch_manager().delete_branch(name, force)
    }
}
