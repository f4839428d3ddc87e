use crate::cli::parser::{ConfigArgs, ConfigCommands};
use crate::config::ConfigManager;
use crate::utils::{Result, SweepError};

pub fn execute(args: ConfigArgs) -> Result<()> {
    match args.command.unwrap_or(ConfigCommands::Show) {
        ConfigCommands::Show => execute_show(),
        ConfigCommands::Path => {
            println!("{}", ConfigManager::config_path().display());
            Ok(())
        }
        ConfigCommands::Reset => execute_reset(),
    }
}

fn execute_show() -> Result<()> {
    let config = ConfigManager::load_or_create()
        .map_err(|e| SweepError::config_error(format!("Failed to load configuration: {e}")))?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

fn execute_reset() -> Result<()> {
    let path = ConfigManager::config_path();
    ConfigManager::reset_to_path(&path)
        .map_err(|e| SweepError::config_error(format!("Failed to reset configuration: {e}")))?;
    println!("✅ Configuration reset to defaults at {}", path.display());
    Ok(())
}
