//! Core data types for the storage layer.

use serde::{Deserialize, Serialize};

/// Entry identifier: creation time in milliseconds since the Unix epoch.
pub type EntryId = i64;

/// One journal record.
///
/// Serialized as `{id, city, date, memo, image}`; `image` is written as
/// `null` when absent. Records written before photos existed carry no
/// `image` key and still deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier within the collection
    pub id: EntryId,

    /// City visited
    pub city: String,

    /// Calendar date, `YYYY-MM-DD`
    pub date: String,

    /// Free-form notes (may contain newlines)
    #[serde(default)]
    pub memo: String,

    /// Encoded photo (`data:` URL)
    #[serde(default)]
    pub image: Option<String>,
}

impl Entry {
    pub fn new(id: EntryId, city: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id,
            city: city.into(),
            date: date.into(),
            memo: String::new(),
            image: None,
        }
    }

    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Identifier of the rendered node for this entry.
    pub fn node_id(&self) -> String {
        node_id_for(self.id)
    }
}

/// Identifier of the rendered node for entry `id`.
pub fn node_id_for(id: EntryId) -> String {
    format!("entry-{}", id)
}
