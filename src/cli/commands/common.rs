use crate::cli::parser::{ClassifyArgs, GlobalArgs};
use crate::config::Config;
use crate::core::classifier::ClassifyOptions;
use crate::core::git::GitService;
use crate::utils::Result;

pub fn open_repository(global: &GlobalArgs) -> Result<GitService> {
    match &global.repo {
        Some(path) => GitService::discover_from(path),
        None => GitService::discover(),
    }
}

/// Configured options with command-line overrides applied.
pub fn resolve_options(config: &Config, global: &GlobalArgs, args: &ClassifyArgs) -> ClassifyOptions {
    let mut options = ClassifyOptions::from_config(config);

    if let Some(remote) = &global.remote {
        options.remote = remote.clone();
    }
    if args.no_fetch {
        options.fetch = false;
    }
    if let Some(jobs) = args.jobs {
        options.jobs = jobs;
    }

    options
}
