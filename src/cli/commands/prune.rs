use super::common::{open_repository, resolve_options};
use crate::cli::parser::{GlobalArgs, PruneArgs};
use crate::cli::report;
use crate::config::Config;
use crate::core::classifier::BranchClassifier;
use crate::core::remover::{BranchRemover, PrunePlan};
use crate::utils::{Result, SweepError};
use dialoguer::Confirm;

pub const NON_INTERACTIVE_ENV: &str = "BRANCH_SWEEP_NON_INTERACTIVE";

pub fn execute(config: Config, global: &GlobalArgs, args: PruneArgs) -> Result<()> {
    args.classify.validate()?;

    let git_service = open_repository(global)?;
    let options = resolve_options(&config, global, &args.classify);
    let run = BranchClassifier::new(&git_service, options).run()?;

    let plan = PrunePlan::from_classification(&run.classification);
    if plan.is_empty() {
        println!("🧹 No stale branches - nothing to prune");
        return Ok(());
    }

    if args.dry_run {
        print!("{}", report::render_dry_run(&plan, &run.classification));
        return Ok(());
    }

    if needs_confirmation(&config, &args) && !confirm_prune(&plan)? {
        println!("Prune cancelled");
        return Ok(());
    }

    let remover = BranchRemover::new(&git_service, config.cleanup.force_delete);
    let results = remover.execute(plan);
    print!("{}", report::render_prune_results(&results));
    if !results.is_success() {
        tracing::warn!(failed = results.errors.len(), "prune finished with failures");
    }

    Ok(())
}

fn needs_confirmation(config: &Config, args: &PruneArgs) -> bool {
    !args.force && config.cleanup.confirm
}

fn is_non_interactive() -> bool {
    std::env::var(NON_INTERACTIVE_ENV).is_ok()
        || std::env::var("CI").is_ok()
        || !atty::is(atty::Stream::Stdin)
}

fn confirm_prune(plan: &PrunePlan) -> Result<bool> {
    println!("🧹 Branch Sweep");
    println!("===============\n");
    println!("  🗑️  {} stale branches:", plan.len());
    for branch in &plan.branches {
        println!("     {branch}");
    }

    if is_non_interactive() {
        return Err(SweepError::invalid_args(
            "Cannot prune in non-interactive mode. Use --force flag to skip confirmation prompts.",
        ));
    }

    Ok(Confirm::new()
        .with_prompt("Delete these branches?")
        .default(false)
        .interact()
        .unwrap_or(false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::default_config;

    #[test]
    fn test_prune_args_defaults() {
        let args = PruneArgs::default();
        assert!(!args.force);
        assert!(!args.dry_run);
        assert!(!args.classify.no_fetch);
    }

    #[test]
    fn test_needs_confirmation() {
        let mut config = default_config();
        let mut args = PruneArgs::default();
        assert!(needs_confirmation(&config, &args));

        args.force = true;
        assert!(!needs_confirmation(&config, &args));

        args.force = false;
        config.cleanup.confirm = false;
        assert!(!needs_confirmation(&config, &args));
    }
}
