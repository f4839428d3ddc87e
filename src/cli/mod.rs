pub mod commands;
pub mod parser;
pub mod report;


pub use parser::{Cli, Commands};

use crate::cli::parser::ScanArgs;
use crate::config::{Config, ConfigManager};
use crate::utils::{Result, SweepError};

pub fn execute_command(cli: Cli) -> Result<()> {
    execute_command_with_config(cli, None)
}

pub fn execute_command_with_config(cli: Cli, test_config: Option<Config>) -> Result<()> {
    cli.global.validate()?;

    match cli.command.unwrap_or(Commands::Scan(ScanArgs::default())) {
        Commands::Scan(args) => commands::scan::execute(load_config(test_config)?, &cli.global, args),
        Commands::Prune(args) => {
            commands::prune::execute(load_config(test_config)?, &cli.global, args)
        }
        Commands::Config(args) => commands::config::execute(args),
        Commands::Completion(args) => commands::completion::execute(args),
    }
}

fn load_config(test_config: Option<Config>) -> Result<Config> {
    match test_config {
        Some(cfg) => Ok(cfg),
        None => ConfigManager::load_or_create()
            .map_err(|e| SweepError::config_error(format!("Failed to load config: {}", e))),
    }
}
