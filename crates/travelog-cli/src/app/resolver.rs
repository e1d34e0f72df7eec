//! Path resolution for config and storage files.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::{default_config_path, default_storage_path, TravelogConfig};
use crate::constants::CONFIG_ENV;

/// Resolve the config file path, checking TRAVELOG_CONFIG first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var(CONFIG_ENV) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the storage file from CLI args, then config, then the default.
pub fn resolve_storage_path(cli: &Cli, config: Option<&TravelogConfig>) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.journal.as_deref() {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }
    if let Some(config) = config {
        return Ok(PathBuf::from(&config.storage.path));
    }
    default_storage_path()
}

/// Error message when a config file already exists.
pub fn existing_config_message(config_path: &Path) -> String {
    format!(
        "A config file already exists at {}\nHint: Run `travelog init --force` to overwrite it.",
        config_path.display()
    )
}
