//! Interactive prompts for entry fields.

use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

/// Return `value` if given, otherwise prompt for it when `interactive`.
///
/// Without a value or a terminal the field is left blank; the form decides
/// whether that is acceptable.
pub fn prompt_field(
    label: &str,
    value: Option<&str>,
    interactive: bool,
    allow_empty: bool,
) -> anyhow::Result<String> {
    if let Some(value) = value {
        return Ok(value.to_string());
    }
    if !interactive {
        return Ok(String::new());
    }
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .allow_empty(allow_empty)
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", label.to_lowercase(), e))
}
