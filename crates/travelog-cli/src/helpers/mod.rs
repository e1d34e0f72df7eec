//! Input and parsing helper functions for the CLI.
//!
//! This module provides utilities for:
//! - Prompting for missing entry fields (`input`)
//! - Date and format parsing (`parsing`)

mod input;
mod parsing;

// Re-export public API
pub use input::prompt_field;
pub use parsing::{parse_date, parse_output_format, OutputFormat};
