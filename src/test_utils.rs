pub mod mock_git;

#[cfg(test)]
pub mod test_helpers {
    use crate::core::git::GitService;
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::process::Command;
    use tempfile::TempDir;

    pub fn run_git(dir: &Path, args: &[&str]) -> String {
        let output = Command::new("git")
            .current_dir(dir)
            .args(args)
            .output()
            .expect("Failed to run git");
        assert!(
            output.status.success(),
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }

    fn init_working_repo(repo_path: &Path) {
        run_git(repo_path, &["init", "--quiet", "--initial-branch=main"]);
        run_git(repo_path, &["config", "user.name", "Test User"]);
        run_git(repo_path, &["config", "user.email", "test@example.com"]);
        run_git(repo_path, &["config", "commit.gpgsign", "false"]);

        fs::write(repo_path.join("README.md"), "# Test Repository")
            .expect("Failed to write README");
        run_git(repo_path, &["add", "README.md"]);
        run_git(repo_path, &["commit", "--quiet", "-m", "Initial commit"]);
    }

    pub fn setup_test_repo() -> (TempDir, GitService) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        init_working_repo(temp_dir.path());

        let service = GitService::discover_from(temp_dir.path()).expect("Failed to discover repo");
        (temp_dir, service)
    }

    /// A working clone at `local` whose `origin` is the bare repo at `remote`.
    pub struct RemoteFixture {
        pub temp_dir: TempDir,
        pub local: PathBuf,
        pub remote: PathBuf,
        pub service: GitService,
    }

    pub fn setup_repo_with_remote() -> RemoteFixture {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let remote = temp_dir.path().join("remote.git");
        let local = temp_dir.path().join("local");
        fs::create_dir_all(&remote).expect("Failed to create remote dir");
        fs::create_dir_all(&local).expect("Failed to create local dir");

        run_git(&remote, &["init", "--quiet", "--bare", "--initial-branch=main"]);
        init_working_repo(&local);
        run_git(
            &local,
            &["remote", "add", "origin", remote.to_str().expect("utf-8 temp path")],
        );
        run_git(&local, &["push", "--quiet", "-u", "origin", "main"]);

        let service = GitService::discover_from(&local).expect("Failed to discover repo");
        RemoteFixture {
            temp_dir,
            local,
            remote,
            service,
        }
    }

    /// Checks out a new branch from HEAD and commits one file on it.
    pub fn create_branch_with_commit(repo_path: &Path, branch: &str, file: &str) {
        run_git(repo_path, &["checkout", "--quiet", "-b", branch]);
        fs::write(repo_path.join(file), format!("content of {file}"))
            .expect("Failed to write file");
        run_git(repo_path, &["add", file]);
        run_git(repo_path, &["commit", "--quiet", "-m", &format!("Add {file}")]);
    }
}
