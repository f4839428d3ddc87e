use super::{CleanupConfig, Config, GitConfig, ScanConfig};

pub const CONFIG_PATH_ENV: &str = "BRANCH_SWEEP_CONFIG_PATH";

pub fn default_config() -> Config {
    Config {
        git: default_git_config(),
        scan: default_scan_config(),
        cleanup: default_cleanup_config(),
    }
}

pub fn default_git_config() -> GitConfig {
    GitConfig {
        remote: "origin".to_string(),
        fetch_before_scan: true,
        protected_branches: vec![
            "main".to_string(),
            "master".to_string(),
            "develop".to_string(),
        ],
    }
}

pub fn default_scan_config() -> ScanConfig {
    ScanConfig { jobs: 1 }
}

pub fn default_cleanup_config() -> CleanupConfig {
    // `-d` refuses branches not merged into HEAD, even when the remote has every commit
    CleanupConfig {
        force_delete: true,
        confirm: true,
    }
}

pub fn get_default_config_dir() -> std::path::PathBuf {
    if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "branch-sweep") {
        proj_dirs.config_dir().to_path_buf()
    } else if let Some(base_dirs) = directories::BaseDirs::new() {
        base_dirs.home_dir().join(".config").join("branch-sweep")
    } else {
        std::path::PathBuf::from(".branch-sweep")
    }
}

pub fn get_config_file_path() -> std::path::PathBuf {
    if let Ok(config_path) = std::env::var(CONFIG_PATH_ENV) {
        return std::path::PathBuf::from(config_path);
    }

    get_default_config_dir().join("config.json")
}
