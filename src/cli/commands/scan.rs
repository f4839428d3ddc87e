use super::common::{open_repository, resolve_options};
use crate::cli::parser::{GlobalArgs, ScanArgs};
use crate::cli::report::{self, ScanReport};
use crate::config::Config;
use crate::core::classifier::{BranchClassifier, ClassifyOptions};
use crate::core::git::GitOperations;
use crate::utils::Result;
use std::path::PathBuf;

pub fn execute(config: Config, global: &GlobalArgs, args: ScanArgs) -> Result<()> {
    args.classify.validate()?;

    let git_service = open_repository(global)?;
    let options = resolve_options(&config, global, &args.classify);
    let repository = git_service.repository().root.clone();

    let report = scan(&git_service, repository, options)?;

    if args.json {
        println!("{}", report::render_json(&report)?);
    } else {
        print!("{}", report::render_text(&report));
    }

    Ok(())
}

pub fn scan<G: GitOperations + Sync>(
    git: &G,
    repository: PathBuf,
    options: ClassifyOptions,
) -> Result<ScanReport> {
    let remote = options.remote.clone();
    let run = BranchClassifier::new(git, options).run()?;
    Ok(ScanReport::new(repository, remote, run))
}
