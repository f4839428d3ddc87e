use crate::core::git::{GitOperations, LocalBranch};
use crate::utils::{Result, SweepError};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// In-memory stand-in for a repository, shareable across classifier workers.
#[derive(Default)]
pub struct MockGit {
    branches: Vec<LocalBranch>,
    checked_out: Vec<String>,
    remote_branches: HashSet<String>,
    unpushed: HashMap<String, usize>,
    failing_deletes: HashSet<String>,
    fail_remote_lookup: bool,
    fetched: AtomicBool,
    deleted: Mutex<Vec<(String, bool)>>,
}

impl MockGit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_branch(mut self, branch: LocalBranch) -> Self {
        self.branches.push(branch);
        self
    }

    /// Marks `name` as checked out in some worktree.
    pub fn with_checked_out(mut self, name: &str) -> Self {
        self.checked_out.push(name.to_string());
        self
    }

    pub fn with_remote_branch(mut self, name: &str) -> Self {
        self.remote_branches.insert(name.to_string());
        self
    }

    pub fn with_unpushed(mut self, name: &str, count: usize) -> Self {
        self.unpushed.insert(name.to_string(), count);
        self
    }

    pub fn with_failing_delete(mut self, name: &str) -> Self {
        self.failing_deletes.insert(name.to_string());
        self
    }

    pub fn with_failing_remote_lookup(mut self) -> Self {
        self.fail_remote_lookup = true;
        self
    }

    pub fn was_fetched(&self) -> bool {
        self.fetched.load(Ordering::SeqCst)
    }

    /// Branches passed to `delete_branch`, with their force flag.
    pub fn deleted(&self) -> Vec<(String, bool)> {
        self.deleted
            .lock()
            .map(|deleted| deleted.clone())
            .unwrap_or_default()
    }
}

impl GitOperations for MockGit {
    fn list_local_branches(&self) -> Result<Vec<LocalBranch>> {
        Ok(self.branches.clone())
    }

    fn checked_out_branches(&self) -> Result<Vec<String>> {
        Ok(self.checked_out.clone())
    }

    fn fetch_prune(&self, _remote: &str) -> Result<()> {
        self.fetched.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn remote_branch_exists(&self, _remote: &str, name: &str) -> Result<bool> {
        if self.fail_remote_lookup {
            return Err(SweepError::git_operation("remote lookup failed"));
        }
        Ok(self.remote_branches.contains(name))
    }

    fn unpushed_commit_count(&self, name: &str, _remote: &str) -> Result<usize> {
        Ok(self.unpushed.get(name).copied().unwrap_or(0))
    }

    fn delete_branch(&self, name: &str, force: bool) -> Result<()> {
        if self.failing_deletes.contains(name) {
            return Err(SweepError::git_operation(format!(
                "error: branch '{}' not found",
                name
            )));
        }
        if let Ok(mut deleted) = self.deleted.lock() {
            deleted.push((name.to_string(), force));
        }
        Ok(())
    }
}
