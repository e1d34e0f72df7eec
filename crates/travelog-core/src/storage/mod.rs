//! Storage abstraction for Travelog.
//!
//! The journal persists to a single key/value slot, the same shape as a
//! browser's local storage: string keys, string values, whole-value writes.
//!
//! ## Architecture
//!
//! - `KeyValueStore`: the backend trait
//! - `MemoryStorage`: in-process map (tests, ephemeral sessions)
//! - `FileStorage`: JSON object file on disk, replaced atomically on write
//!
//! The entry collection itself is managed by [`crate::store::EntryStore`],
//! which serializes it under one fixed key.

pub mod file;
pub mod memory;
pub mod traits;
pub mod types;

// Re-export public types
pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use traits::KeyValueStore;
pub use types::{Entry, EntryId};
