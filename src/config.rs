//! Configuration loading
//!
//! Reads `~/.config/rangeview/config.toml`. A missing file gives the
//! defaults; a malformed one gives the defaults plus a warning for the log.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::RangeviewError;

mod types;

pub use types::{Config, NotificationConfig, SourceConfig};

const CONFIG_DIR: &str = "rangeview";
const CONFIG_FILE: &str = "config.toml";

/// Loaded config plus the reason it fell back to defaults, if it did
#[derive(Debug)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config from the default location
pub fn load_config() -> ConfigResult {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => ConfigResult {
            config: Config::default(),
            warning: None,
        },
    }
}

pub fn load_config_from_path(path: &Path) -> ConfigResult {
    if !path.exists() {
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    match read_config(path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => ConfigResult {
            config: Config::default(),
            warning: Some(e.to_string()),
        },
    }
}

fn read_config(path: &Path) -> Result<Config, RangeviewError> {
    let contents = fs::read_to_string(path)?;
    toml::from_str(&contents).map_err(|e| RangeviewError::InvalidConfig {
        path: path.display().to_string(),
        message: e.message().to_string(),
    })
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
