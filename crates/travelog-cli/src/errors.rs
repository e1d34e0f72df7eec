//! CLI error types for structured error handling.
//!
//! Typed errors map to specific exit codes so scripts can tell a rejected
//! submission apart from a missing config or a storage failure.

use std::fmt;

use travelog_core::JournalError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (config, storage file)
    NotFound { message: String, hint: String },

    /// Invalid user input, including submissions the form rejected
    InvalidInput {
        message: String,
        hint: Option<String>,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => write!(f, "{}\n{}", message, hint),
            CliError::InvalidInput { message, hint } => {
                if let Some(h) = hint {
                    write!(f, "{}\n{}", message, h)
                } else {
                    write!(f, "{}", message)
                }
            }
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: None,
        }
    }

    /// Create an InvalidInput error with a hint.
    pub fn invalid_input_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Wrap a rejected submission, using the message the form displayed.
    pub fn rejected(err: &JournalError, shown: Option<&str>) -> Self {
        let message = shown
            .map(String::from)
            .unwrap_or_else(|| travelog_core::form::user_message(err));
        let hint = match err {
            JournalError::MissingRequiredField(_) => {
                Some("Hint: Pass --city and --date, e.g. --city Lisbon --date 2024-05-01")
            }
            JournalError::ImageTooLarge { .. } => {
                Some("Hint: Resize the photo or add the entry without --image.")
            }
            JournalError::UnsupportedImage(_) => {
                Some("Hint: Supported photos are png, jpg, gif, webp, bmp, svg, avif and heic.")
            }
            _ => None,
        };
        CliError::InvalidInput {
            message,
            hint: hint.map(String::from),
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput { .. } => exit_codes::INVALID_INPUT,
        }
    }
}

/// Exit code for an error that reached `main`.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CliError>()
        .map(CliError::exit_code)
        .unwrap_or(exit_codes::FAILURE)
}
