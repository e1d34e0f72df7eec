//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (storage failures and anything unexpected)
/// - 2: Misuse of shell command (reserved by shells, used by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure.
    pub const FAILURE: i32 = 1;

    /// Resource not found (config, storage file).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments (including rejected submissions).
    pub const INVALID_INPUT: i32 = 4;
}

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "TRAVELOG_LOG";

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "TRAVELOG_CONFIG";
