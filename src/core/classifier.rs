use crate::config::Config;
use crate::core::branches::{BranchClassification, Category};
use crate::core::git::{GitOperations, LocalBranch};
use crate::utils::Result;
use std::collections::HashSet;
use std::sync::mpsc;
use std::thread;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifyOptions {
    pub remote: String,
    pub fetch: bool,
    pub jobs: usize,
    pub protected_branches: Vec<String>,
}

impl ClassifyOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            remote: config.git.remote.clone(),
            fetch: config.git.fetch_before_scan,
            jobs: config.scan.jobs,
            protected_branches: config.git.protected_branches.clone(),
        }
    }

    pub fn is_protected(&self, branch: &str) -> bool {
        self.protected_branches.iter().any(|b| b == branch)
    }
}

/// Outcome of one classification run.
#[derive(Debug, Clone, Default)]
pub struct ClassificationRun {
    /// Protected branches and branches checked out in a worktree; never classified.
    pub skipped: Vec<String>,
    pub classification: BranchClassification,
}

pub struct BranchClassifier<'a, G: GitOperations> {
    git: &'a G,
    options: ClassifyOptions,
}

impl<'a, G: GitOperations + Sync> BranchClassifier<'a, G> {
    pub fn new(git: &'a G, options: ClassifyOptions) -> Self {
        Self { git, options }
    }

    pub fn run(&self) -> Result<ClassificationRun> {
        if self.options.fetch {
            tracing::info!(remote = %self.options.remote, "fetching and pruning remote refs");
            self.git.fetch_prune(&self.options.remote)?;
        }

        let branches = self.git.list_local_branches()?;
        let checked_out: HashSet<String> = self.git.checked_out_branches()?.into_iter().collect();

        let (skipped, candidates): (Vec<LocalBranch>, Vec<LocalBranch>) =
            branches.into_iter().partition(|branch| {
                checked_out.contains(&branch.name) || self.options.is_protected(&branch.name)
            });

        let skipped: Vec<String> = skipped.into_iter().map(|b| b.name).collect();
        if !skipped.is_empty() {
            tracing::debug!("skipping protected or checked-out branches: {:?}", skipped);
        }

        let classification = if self.options.jobs <= 1 || candidates.len() <= 1 {
            self.classify_sequential(&candidates)?
        } else {
            self.classify_parallel(&candidates)?
        };

        tracing::info!(
            ok = classification.ok().len(),
            stale = classification.stale().len(),
            pending_changes = classification.pending_changes().len(),
            "classification finished"
        );

        Ok(ClassificationRun {
            skipped,
            classification,
        })
    }

    pub fn classify_branch(&self, branch: &LocalBranch) -> Result<Category> {
        let (category, reason) = self.verdict(branch)?;
        tracing::debug!(branch = %branch.name, %category, "{}", reason);
        Ok(category)
    }

    fn verdict(&self, branch: &LocalBranch) -> Result<(Category, &'static str)> {
        if branch.has_live_upstream() {
            return Ok((Category::Ok, "upstream is present"));
        }

        if self
            .git
            .remote_branch_exists(&self.options.remote, &branch.name)?
        {
            return Ok((Category::Ok, "remote branch with the same name exists"));
        }

        if self
            .git
            .unpushed_commit_count(&branch.name, &self.options.remote)?
            > 0
        {
            return Ok((
                Category::PendingChanges,
                "has commits the remote does not contain",
            ));
        }

        Ok((Category::Stale, "gone from the remote with nothing unpushed"))
    }

    fn classify_sequential(&self, candidates: &[LocalBranch]) -> Result<BranchClassification> {
        let mut classification = BranchClassification::new();
        for branch in candidates {
            let category = self.classify_branch(branch)?;
            classification.try_push(category, branch.name.as_str())?;
        }
        Ok(classification)
    }

    /// Workers classify disjoint chunks and report over a channel; this thread
    /// is the only one appending to the classification.
    fn classify_parallel(&self, candidates: &[LocalBranch]) -> Result<BranchClassification> {
        let jobs = self.options.jobs.min(candidates.len());
        let chunk_size = candidates.len().div_ceil(jobs);
        let (tx, rx) = mpsc::channel::<Result<(Category, String)>>();

        thread::scope(|scope| {
            for chunk in candidates.chunks(chunk_size) {
                let tx = tx.clone();
                scope.spawn(move || {
                    for branch in chunk {
                        let verdict = self
                            .classify_branch(branch)
                            .map(|category| (category, branch.name.clone()));
                        if tx.send(verdict).is_err() {
                            break;
                        }
                    }
                });
            }
            drop(tx);

            let mut classification = BranchClassification::new();
            for verdict in rx {
                let (category, name) = verdict?;
                classification.try_push(category, name)?;
            }
            Ok(classification)
        })
    }
}
