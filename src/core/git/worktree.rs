use super::repository::{execute_git_command, GitRepository};
use crate::utils::error::{Result, SweepError};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorktreeInfo {
    pub path: PathBuf,
    /// Empty for detached or bare worktrees.
    pub branch: String,
    pub commit: String,
    pub is_bare: bool,
}

pub struct WorktreeManager<'a> {
    repo: &'a GitRepository,
}

impl<'a> WorktreeManager<'a> {
    pub fn new(repo: &'a GitRepository) -> Self {
        Self { repo }
    }

    pub fn list_worktrees(&self) -> Result<Vec<WorktreeInfo>> {
        let output = execute_git_command(self.repo, &["worktree", "list", "--porcelain"])?;
        parse_worktree_output(&output)
    }

    /// Branches checked out in the main worktree or any linked one.
    pub fn checked_out_branches(&self) -> Result<Vec<String>> {
        Ok(self
            .list_worktrees()?
            .into_iter()
            .filter(|worktree| !worktree.is_bare && !worktree.branch.is_empty())
            .map(|worktree| worktree.branch)
            .collect())
    }
}

fn parse_worktree_output(output: &str) -> Result<Vec<WorktreeInfo>> {
    let mut worktrees = Vec::new();
    let mut block: Vec<&str> = Vec::new();

    for line in output.lines().map(str::trim).chain(std::iter::once("")) {
        if line.is_empty() {
            if !block.is_empty() {
                worktrees.push(parse_worktree_block(&block)?);
                block.clear();
            }
        } else {
            block.push(line);
        }
    }

    Ok(worktrees)
}

fn parse_worktree_block(lines: &[&str]) -> Result<WorktreeInfo> {
    let first_line = lines[0];
    let path_str = first_line.strip_prefix("worktree ").ok_or_else(|| {
        SweepError::git_operation(format!("Invalid worktree block: {}", first_line))
    })?;

    let mut worktree = WorktreeInfo {
        path: PathBuf::from(path_str),
        branch: String::new(),
        commit: String::new(),
        is_bare: false,
    };

    for &line in &lines[1..] {
        if let Some(commit) = line.strip_prefix("HEAD ") {
            worktree.commit = commit.to_string();
        } else if let Some(branch) = line.strip_prefix("branch ") {
            worktree.branch = branch
                .strip_prefix("refs/heads/")
                .unwrap_or(branch)
                .to_string();
        } else if line == "bare" {
            worktree.is_bare = true;
        }
    }

    Ok(worktree)
}
