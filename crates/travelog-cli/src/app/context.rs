//! Application context for the Travelog CLI.
//!
//! Bundles CLI arguments with the lazily-loaded config file so handlers
//! do not thread paths and settings through every call.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;
use tracing::debug;

use travelog_core::{FileStorage, Journal, ListRenderer};

use crate::cli::Cli;
use crate::config::{read_config, TravelogConfig};
use crate::ui::UiContext;

use super::resolver::{resolve_config_path, resolve_storage_path};

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<Option<TravelogConfig>>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Get the CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the config file contents, loading them lazily.
    ///
    /// A missing config file is not an error; defaults apply.
    pub fn config(&self) -> anyhow::Result<Option<&TravelogConfig>> {
        let config = self.config.get_or_try_init(|| {
            let path = resolve_config_path()?;
            if !path.exists() {
                debug!(path = %path.display(), "no config file; using defaults");
                return Ok::<_, anyhow::Error>(None);
            }
            read_config(&path).map(Some)
        })?;
        Ok(config.as_ref())
    }

    /// Storage file the journal reads and writes.
    pub fn storage_path(&self) -> anyhow::Result<PathBuf> {
        resolve_storage_path(self.cli, self.config()?)
    }

    /// Build a UI context for output formatting.
    pub fn ui_context(&self, json: bool, format: Option<&str>) -> UiContext {
        UiContext::from_env(json, format, self.cli.no_color, self.cli.ascii)
    }

    /// Open the journal over the resolved storage file.
    pub fn open_journal(&self) -> anyhow::Result<Journal<FileStorage>> {
        let path = self.storage_path()?;
        debug!(path = %path.display(), "opening journal");
        let mut renderer = ListRenderer::new();
        if let Some(pattern) = self.config()?.and_then(|c| c.ui.date_format.clone()) {
            renderer = renderer.with_date_format(pattern);
        }
        Ok(Journal::new(FileStorage::open(path)).with_renderer(renderer))
    }
}
