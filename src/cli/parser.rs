use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "branch-sweep")]
#[command(about = "Find and remove local git branches that are gone from the remote")]
#[command(
    version,
    long_about = "Sorts local branches into ok, stale and pending changes buckets.\n\
                  When run without any command, performs a scan."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub global: GlobalArgs,
}

#[derive(Args, Debug, Default, Clone)]
pub struct GlobalArgs {
    /// Repository to operate on (defaults to the current directory)
    #[arg(long, short = 'C', global = true, value_name = "PATH")]
    pub repo: Option<PathBuf>,

    /// Remote to compare against (overrides the configured remote)
    #[arg(long, global = true, value_name = "NAME")]
    pub remote: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify local branches and print a report
    Scan(ScanArgs),
    /// Delete stale branches
    Prune(PruneArgs),
    /// Show or reset configuration
    Config(ConfigArgs),
    /// Generate shell completion script
    Completion(CompletionArgs),
}

#[derive(Args, Debug, Default, Clone)]
pub struct ClassifyArgs {
    /// Skip `git fetch --prune` before classifying
    #[arg(long, help = "Skip fetching and pruning remote refs first")]
    pub no_fetch: bool,

    /// Number of worker threads used to classify branches
    #[arg(long, short = 'j', value_name = "N")]
    pub jobs: Option<usize>,
}

#[derive(Args, Debug, Default)]
pub struct ScanArgs {
    #[command(flatten)]
    pub classify: ClassifyArgs,

    /// Output the report as JSON
    #[arg(long, help = "Output as JSON")]
    pub json: bool,
}

#[derive(Args, Debug, Default)]
pub struct PruneArgs {
    #[command(flatten)]
    pub classify: ClassifyArgs,

    /// Skip confirmation prompts
    #[arg(long, short, help = "Skip confirmation prompts")]
    pub force: bool,

    /// Only show what would be deleted (dry run)
    #[arg(long, help = "Only show what would be deleted (dry run)")]
    pub dry_run: bool,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Reset configuration to defaults
    Reset,
}

#[derive(Args, Debug)]
pub struct CompletionArgs {
    /// Shell to generate completion for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl ClassifyArgs {
    pub fn validate(&self) -> crate::utils::Result<()> {
        if self.jobs == Some(0) {
            return Err(crate::utils::SweepError::invalid_args(
                "--jobs must be at least 1",
            ));
        }
        Ok(())
    }
}

impl GlobalArgs {
    pub fn validate(&self) -> crate::utils::Result<()> {
        if let Some(remote) = &self.remote {
            crate::core::git::GitValidator::validate_remote_name(remote)?;
        }
        Ok(())
    }
}
