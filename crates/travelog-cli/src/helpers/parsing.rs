//! Parsing helpers for command arguments.

use chrono::NaiveDate;

use crate::errors::CliError;

/// Normalize a visit date to `YYYY-MM-DD`.
///
/// Blank input passes through untouched so the form can report the missing
/// field itself.
pub fn parse_date(value: &str) -> anyhow::Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| {
        CliError::invalid_input_with_hint(
            format!("Invalid date: {}", trimmed),
            "Hint: Use the YYYY-MM-DD format, e.g. 2024-05-01.",
        )
    })?;
    Ok(date.format("%Y-%m-%d").to_string())
}

/// Output format for the list command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Plain,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Plain => "plain",
        }
    }
}

/// Parse output format string.
pub fn parse_output_format(value: Option<&str>) -> anyhow::Result<Option<OutputFormat>> {
    match value {
        None => Ok(None),
        Some("table") => Ok(Some(OutputFormat::Table)),
        Some("plain") => Ok(Some(OutputFormat::Plain)),
        Some(other) => Err(CliError::invalid_input(format!(
            "Unsupported format: {} (use table or plain)",
            other
        ))
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_normalizes() {
        assert_eq!(parse_date(" 2024-05-01 ").unwrap(), "2024-05-01");
        assert_eq!(parse_date("2024-5-1").unwrap(), "2024-05-01");
    }

    #[test]
    fn test_parse_date_blank_passes_through() {
        assert_eq!(parse_date("   ").unwrap(), "");
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        let err = parse_date("May 1st").unwrap_err();
        let cli = err.downcast_ref::<CliError>().unwrap();
        assert_eq!(cli.exit_code(), crate::constants::exit_codes::INVALID_INPUT);
        assert!(parse_date("2024-02-30").is_err());
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format(None).unwrap(), None);
        assert_eq!(parse_output_format(Some("table")).unwrap(), Some(OutputFormat::Table));
        assert_eq!(parse_output_format(Some("plain")).unwrap(), Some(OutputFormat::Plain));
        assert!(parse_output_format(Some("csv")).is_err());
    }
}
