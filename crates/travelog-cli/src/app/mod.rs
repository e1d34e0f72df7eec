//! Application-level utilities for the Travelog CLI.
//!
//! This module provides:
//! - Path resolution for config and storage files
//! - The per-invocation application context

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
pub use resolver::{existing_config_message, resolve_config_path};
