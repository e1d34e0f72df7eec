//! # Travelog Core
//!
//! Core library for Travelog - a local travel journal of cities, dates,
//! memos and photos.
//!
//! This crate provides the domain logic, storage abstractions, and data
//! models independent of any user interface.
//!
//! ## Architecture
//!
//! - **storage**: key/value backend trait, memory and file backends, `Entry`
//! - **store**: the entry collection persisted under one key
//! - **image**: photo validation and `data:` URL encoding
//! - **form**: form state, validation and submission
//! - **render**: visible list (newest first) and HTML output
//! - **journal**: UI events routed to explicit handlers

pub mod clock;
pub mod error;
pub mod form;
pub mod fs;
pub mod image;
pub mod journal;
pub mod render;
pub mod storage;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{JournalError, Result};
pub use form::{AttachmentIndicator, FormController, FormFields};
pub use image::{ImageAttachment, MAX_IMAGE_BYTES};
pub use journal::{Journal, Outcome, UiEvent};
pub use render::{EntryNode, ListRenderer, VisibleList};
pub use storage::{Entry, EntryId, FileStorage, KeyValueStore, MemoryStorage};
pub use store::{EntryStore, STORAGE_KEY};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
