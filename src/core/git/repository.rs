use crate::utils::error::{Result, SweepError};
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Clone)]
pub struct GitRepository {
    pub root: PathBuf,
    pub git_dir: PathBuf,
}

impl GitRepository {
    pub fn discover() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| {
            SweepError::git_operation(format!("Failed to get current directory: {}", e))
        })?;

        Self::discover_from(&current_dir)
    }

    pub fn discover_from(path: &Path) -> Result<Self> {
        let output = Command::new("git")
            .current_dir(path)
            .args(["rev-parse", "--show-toplevel"])
            .output()
            .map_err(|e| SweepError::git_operation(format!("Failed to execute git: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SweepError::git_operation(format!(
                "Not a git repository or git not found: {}",
                stderr.trim()
            )));
        }

        let root = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let root = PathBuf::from(root);

        let git_dir = Self::get_git_dir(&root)?;

        Ok(Self { root, git_dir })
    }

    pub fn validate(&self) -> Result<()> {
        if !self.root.exists() {
            return Err(SweepError::repo_state("Repository root does not exist"));
        }

        if !self.git_dir.exists() {
            return Err(SweepError::repo_state("Git directory does not exist"));
        }

        Ok(())
    }

    /// Name of the checked-out branch, `None` when HEAD is detached.
    pub fn get_current_branch(&self) -> Result<Option<String>> {
        match execute_git_command(self, &["symbolic-ref", "--quiet", "--short", "HEAD"]) {
            Ok(branch) if !branch.is_empty() => Ok(Some(branch)),
            Ok(_) => Ok(None),
            Err(_) => {
                // symbolic-ref fails on a detached HEAD; make sure HEAD itself resolves
                execute_git_command(self, &["rev-parse", "--verify", "HEAD"])?;
                Ok(None)
            }
        }
    }

    pub fn has_remote(&self, remote: &str) -> Result<bool> {
        let remotes = execute_git_command(self, &["remote"])?;
        Ok(remotes.lines().any(|line| line.trim() == remote))
    }

    pub fn fetch_prune(&self, remote: &str) -> Result<()> {
        if !self.has_remote(remote)? {
            return Err(SweepError::git_operation(format!(
                "Remote '{}' is not configured",
                remote
            )));
        }

        execute_git_command(self, &["fetch", "--prune", "--quiet", remote])?;
        Ok(())
    }

    fn get_git_dir(repo_root: &Path) -> Result<PathBuf> {
        let output = Command::new("git")
            .current_dir(repo_root)
            .args(["rev-parse", "--git-dir"])
            .output()
            .map_err(|e| SweepError::git_operation(format!("Failed to get git dir: {}", e)))?;

        if !output.status.success() {
            return Err(SweepError::git_operation(
                "Failed to determine git directory".to_string(),
            ));
        }

        let git_dir = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let git_dir = if Path::new(&git_dir).is_absolute() {
            PathBuf::from(git_dir)
        } else {
            repo_root.join(git_dir)
        };

        Ok(git_dir)
    }
}

pub fn execute_git_command(repo: &GitRepository, args: &[&str]) -> Result<String> {
    execute_git_command_in(&repo.root, args)
}

/// `Ok(false)` only when `refname` is missing; any other git failure is an error.
pub fn ref_exists(repo: &GitRepository, refname: &str) -> Result<bool> {
    tracing::trace!(dir = %repo.root.display(), "git rev-parse --verify --quiet {}", refname);

    let output = Command::new("git")
        .current_dir(&repo.root)
        .args(["rev-parse", "--verify", "--quiet", refname])
        .output()
        .map_err(|e| SweepError::git_operation(format!("Failed to execute git: {}", e)))?;

    if output.status.success() {
        return Ok(true);
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    if output.status.code() == Some(1) && stderr.trim().is_empty() {
        return Ok(false);
    }

    Err(SweepError::git_operation(format!(
        "Failed to look up '{}': {}",
        refname,
        stderr.trim()
    )))
}

pub fn execute_git_command_in(dir: &Path, args: &[&str]) -> Result<String> {
    tracing::trace!(dir = %dir.display(), "git {}", args.join(" "));

    let output = Command::new("git")
        .current_dir(dir)
        .args(args)
        .output()
        .map_err(|e| SweepError::git_operation(format!("Failed to execute git: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(SweepError::git_operation(format!(
            "Git command failed ({}): {}",
            args.join(" "),
            stderr.trim()
        )));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(stdout.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::*;

    #[test]
    fn test_repository_discovery() {
        let (temp_dir, service) = setup_test_repo();
        let repo = service.repository();
        assert_eq!(repo.root, temp_dir.path().canonicalize().unwrap());
        assert!(repo.git_dir.exists());
        assert!(repo.validate().is_ok());
    }

    #[test]
    fn test_discovery_outside_repository_fails() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let result = GitRepository::discover_from(temp_dir.path());
        assert!(matches!(result, Err(SweepError::GitOperation { .. })));
    }

    #[test]
    fn test_get_current_branch() {
        let (_temp_dir, service) = setup_test_repo();
        let branch = service
            .repository()
            .get_current_branch()
            .expect("Failed to get current branch");
        assert_eq!(branch.as_deref(), Some("main"));
    }

    #[test]
    fn test_detached_head_has_no_current_branch() {
        let (temp_dir, service) = setup_test_repo();
        run_git(temp_dir.path(), &["checkout", "--quiet", "--detach", "HEAD"]);

        let branch = service.repository().get_current_branch().unwrap();
        assert!(branch.is_none());
    }

    #[test]
    fn test_fetch_prune_requires_configured_remote() {
        let (_temp_dir, service) = setup_test_repo();
        let repo = service.repository();

        assert!(!repo.has_remote("origin").unwrap());
        let err = repo.fetch_prune("origin").unwrap_err();
        assert!(err.to_string().contains("Remote 'origin' is not configured"));
    }

    #[test]
    fn test_fetch_prune_drops_deleted_remote_branches() {
        let fixture = setup_repo_with_remote();
        create_branch_with_commit(&fixture.local, "feature/gone", "gone.txt");
        run_git(&fixture.local, &["push", "--quiet", "origin", "feature/gone"]);
        run_git(&fixture.local, &["checkout", "--quiet", "main"]);

        let repo = fixture.service.repository();
        let tracking_ref = "refs/remotes/origin/feature/gone";
        assert!(execute_git_command(repo, &["rev-parse", "--verify", tracking_ref]).is_ok());

        run_git(&fixture.remote, &["branch", "-D", "feature/gone"]);
        repo.fetch_prune("origin").unwrap();

        assert!(execute_git_command(repo, &["rev-parse", "--verify", tracking_ref]).is_err());
    }

    #[test]
    fn test_failed_command_reports_args() {
        let (_temp_dir, service) = setup_test_repo();
        let err = execute_git_command(service.repository(), &["rev-parse", "--verify", "nope"])
            .unwrap_err();
        assert!(err.to_string().contains("rev-parse --verify nope"));
    }
}
