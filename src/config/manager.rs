use super::defaults::{default_config, get_config_file_path};
use super::{Config, Result};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

pub struct ConfigManager;

impl ConfigManager {
    pub fn config_path() -> PathBuf {
        get_config_file_path()
    }

    pub fn load_or_create() -> Result<Config> {
        Self::load_or_create_at(&Self::config_path())
    }

    /// Reads `path`, writing the defaults there first if it does not exist yet.
    pub fn load_or_create_at(path: &Path) -> Result<Config> {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "creating default configuration");
                Self::reset_to_path(path)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Config> {
        Self::parse(&fs::read_to_string(path)?)
    }

    pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
        config.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = fs::File::create(path)?;
        serde_json::to_writer_pretty(&mut file, config)?;
        file.write_all(b"\n")?;
        file.sync_all()?;
        Ok(())
    }

    pub fn reset_to_path(path: &Path) -> Result<Config> {
        let config = default_config();
        Self::save_to_path(&config, path)?;
        Ok(config)
    }

    fn parse(content: &str) -> Result<Config> {
        let config: Config = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}
