use super::repository::{execute_git_command, ref_exists, GitRepository};
use super::validation::GitValidator;
use crate::utils::error::{Result, SweepError};

const FIELD_SEPARATOR: char = '\t';
const BRANCH_FORMAT: &str =
    "--format=%(refname:short)%09%(upstream:short)%09%(upstream:track)%09%(objectname)";

/// A local branch as reported by `git for-each-ref refs/heads`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalBranch {
    pub name: String,
    pub upstream: Option<String>,
    /// The configured upstream ref no longer exists (`[gone]`).
    pub upstream_gone: bool,
    pub commit: String,
}

impl LocalBranch {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            upstream: None,
            upstream_gone: false,
            commit: String::new(),
        }
    }

    pub fn with_upstream(mut self, upstream: impl Into<String>, gone: bool) -> Self {
        self.upstream = Some(upstream.into());
        self.upstream_gone = gone;
        self
    }

    pub fn has_live_upstream(&self) -> bool {
        self.upstream.is_some() && !self.upstream_gone
    }
}

pub struct BranchManager<'a> {
    repo: &'a GitRepository,
}

impl<'a> BranchManager<'a> {
    pub fn new(repo: &'a GitRepository) -> Self {
        Self { repo }
    }

    pub fn list_local_branches(&self) -> Result<Vec<LocalBranch>> {
        let output = execute_git_command(self.repo, &["for-each-ref", BRANCH_FORMAT, "refs/heads"])?;

        let mut branches = Vec::new();
        for line in output.lines() {
            if let Some(branch) = parse_branch_line(line)? {
                branches.push(branch);
            }
        }

        Ok(branches)
    }

    /// Whether `refs/remotes/<remote>/<name>` resolves locally.
    pub fn remote_branch_exists(&self, remote: &str, name: &str) -> Result<bool> {
        ref_exists(self.repo, &format!("refs/remotes/{}/{}", remote, name))
    }

    /// Commits on `name` that no ref of `remote` contains.
    pub fn unpushed_commit_count(&self, name: &str, remote: &str) -> Result<usize> {
        let output = execute_git_command(
            self.repo,
            &[
                "rev-list",
                "--count",
                &format!("refs/heads/{}", name),
                "--not",
                &format!("--remotes={}", remote),
            ],
        )?;

        output.parse::<usize>().map_err(|e| {
            SweepError::git_operation(format!(
                "Unexpected rev-list output for '{}': {} ({})",
                name, output, e
            ))
        })
    }

    pub fn delete_branch(&self, name: &str, force: bool) -> Result<()> {
        GitValidator::validate_branch_name(name)?;

        if self.repo.get_current_branch()?.as_deref() == Some(name) {
            return Err(SweepError::git_operation(format!(
                "Cannot delete the checked-out branch '{}'",
                name
            )));
        }

        let flag = if force { "-D" } else { "-d" };
        execute_git_command(self.repo, &["branch", flag, name])?;
        Ok(())
    }
}

fn parse_branch_line(line: &str) -> Result<Option<LocalBranch>> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    let [name, upstream, track, commit] = fields.as_slice() else {
        return Err(SweepError::git_operation(format!(
            "Malformed branch line: {}",
            line
        )));
    };

    let upstream = (!upstream.is_empty()).then(|| upstream.to_string());
    Ok(Some(LocalBranch {
        name: name.to_string(),
        upstream_gone: upstream.is_some() && track.contains("gone"),
        upstream,
        commit: commit.to_string(),
    }))
}
