//! Init command: write the config file.

use std::path::PathBuf;

use chrono::format::{Item, StrftimeItems};
use tracing::info;

use crate::app::{existing_config_message, resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{default_storage_path, write_config, TravelogConfig};
use crate::errors::CliError;
use crate::ui::{hint, print, receipt};

/// Reject strftime patterns chrono cannot format.
fn validate_date_format(pattern: &str) -> anyhow::Result<()> {
    if pattern.trim().is_empty() || StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(CliError::invalid_input_with_hint(
            format!("Invalid date format: {}", pattern),
            "Hint: Use a strftime pattern such as \"%B %-d, %Y\" or \"%d.%m.%Y\".",
        )
        .into());
    }
    Ok(())
}

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let config_path = resolve_config_path()?;
    if config_path.exists() && !args.force {
        return Err(CliError::invalid_input(existing_config_message(&config_path)).into());
    }
    if let Some(pattern) = args.date_format.as_deref() {
        validate_date_format(pattern)?;
    }

    let storage_path = match args.path.as_deref().or(ctx.cli().journal.as_deref()) {
        Some(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => default_storage_path()?,
    };

    let config = TravelogConfig::new(storage_path.clone(), args.date_format.clone());
    write_config(&config_path, &config)?;
    info!(config = %config_path.display(), storage = %storage_path.display(), "config written");

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        let config_display = config_path.display().to_string();
        let storage_display = storage_path.display().to_string();
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                "Initialized travelog",
                &[
                    ("Config", config_display.as_str()),
                    ("Storage", storage_display.as_str()),
                ],
            ),
        );
        if ui_ctx.mode.is_pretty() {
            print(&ui_ctx, &hint(&ui_ctx, "Run `travelog add` to record your first trip."));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_date_format() {
        assert!(validate_date_format("%B %-d, %Y").is_ok());
        assert!(validate_date_format("%d.%m.%Y").is_ok());
        assert!(validate_date_format("%Q").is_err());
        assert!(validate_date_format("  ").is_err());
    }
}
