//! Form controller: field state, validation and submission.
//!
//! The controller owns what the form currently shows (field values, the
//! attachment indicator and the error banner). Submitting validates, encodes
//! the photo if one is attached, builds an [`Entry`] and hands it to the
//! store. Nothing is written unless every check passes.

use tracing::debug;

use crate::clock::Clock;
use crate::error::{JournalError, Result};
use crate::image::{ImageAttachment, MAX_IMAGE_BYTES};
use crate::storage::{Entry, KeyValueStore};
use crate::store::EntryStore;

/// Label shown when no photo is attached.
pub const DEFAULT_ATTACHMENT_LABEL: &str = "Attach a photo (optional)";

/// Current values of the form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub city: String,
    pub date: String,
    pub memo: String,
    pub image: Option<ImageAttachment>,
}

impl FormFields {
    pub fn new(city: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            date: date.into(),
            ..Self::default()
        }
    }

    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }

    pub fn with_image(mut self, image: ImageAttachment) -> Self {
        self.image = Some(image);
        self
    }
}

/// State of the photo attachment indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachmentIndicator {
    NoImage,
    Selected { file_name: String },
}

impl AttachmentIndicator {
    pub fn label(&self) -> String {
        match self {
            Self::NoImage => DEFAULT_ATTACHMENT_LABEL.to_string(),
            Self::Selected { file_name } => file_name.clone(),
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, Self::Selected { .. })
    }
}

/// Trimmed, checked field values.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Validated {
    city: String,
    date: String,
    memo: String,
}

/// Message shown in the error banner for `err`.
pub fn user_message(err: &JournalError) -> String {
    match err {
        JournalError::MissingRequiredField(_) => "Please enter both a city and a date.".to_string(),
        JournalError::ImageTooLarge { .. } => format!(
            "The photo must be {} MB or smaller.",
            MAX_IMAGE_BYTES / (1024 * 1024)
        ),
        JournalError::UnsupportedImage(name) => {
            format!("\"{}\" is not a supported image file.", name)
        }
        JournalError::ImageEncoding(_) => {
            "The photo could not be read. Please choose it again.".to_string()
        }
        other => format!("The entry could not be saved: {}", other),
    }
}

/// Form state plus the submit handler.
#[derive(Debug, Default)]
pub struct FormController {
    fields: FormFields,
    error: Option<String>,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// Replace every field value at once.
    pub fn fill(&mut self, fields: FormFields) {
        self.fields = fields;
    }

    pub fn set_city(&mut self, city: impl Into<String>) {
        self.fields.city = city.into();
    }

    pub fn set_date(&mut self, date: impl Into<String>) {
        self.fields.date = date.into();
    }

    pub fn set_memo(&mut self, memo: impl Into<String>) {
        self.fields.memo = memo.into();
    }

    /// Handle a change of the photo input.
    pub fn select_image(&mut self, image: Option<ImageAttachment>) -> AttachmentIndicator {
        self.fields.image = image;
        self.attachment()
    }

    pub fn attachment(&self) -> AttachmentIndicator {
        match &self.fields.image {
            Some(image) => AttachmentIndicator::Selected {
                file_name: image.file_name(),
            },
            None => AttachmentIndicator::NoImage,
        }
    }

    /// Text of the error banner, if it is showing.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Clear every field and reset the attachment indicator.
    pub fn reset(&mut self) {
        self.fields = FormFields::default();
    }

    fn validate(&self) -> Result<Validated> {
        let city = self.fields.city.trim();
        if city.is_empty() {
            return Err(JournalError::MissingRequiredField("city"));
        }
        let date = self.fields.date.trim();
        if date.is_empty() {
            return Err(JournalError::MissingRequiredField("date"));
        }
        Ok(Validated {
            city: city.to_string(),
            date: date.to_string(),
            memo: self.fields.memo.trim().to_string(),
        })
    }

    /// Handle a submit: validate, encode the photo, store the entry.
    ///
    /// On success the form is cleared and the stored entry returned. On
    /// failure the error banner shows a message, the fields are kept for
    /// correction, and the store is untouched unless the failure came from
    /// the store itself.
    pub async fn submit<S, C>(&mut self, store: &mut EntryStore<S>, clock: &C) -> Result<Entry>
    where
        S: KeyValueStore,
        C: Clock + ?Sized,
    {
        match self.build_and_store(store, clock).await {
            Ok(entry) => {
                self.clear_error();
                self.reset();
                debug!(id = entry.id, city = %entry.city, "entry submitted");
                Ok(entry)
            }
            Err(err) => {
                debug!(error = %err, "submission rejected");
                self.show_error(user_message(&err));
                Err(err)
            }
        }
    }

    async fn build_and_store<S, C>(&self, store: &mut EntryStore<S>, clock: &C) -> Result<Entry>
    where
        S: KeyValueStore,
        C: Clock + ?Sized,
    {
        let fields = self.validate()?;
        let image = match &self.fields.image {
            Some(attachment) => Some(attachment.encode().await?),
            None => None,
        };

        let id = store.next_id(clock.now_millis())?;
        let entry = Entry {
            id,
            city: fields.city,
            date: fields.date,
            memo: fields.memo,
            image,
        };
        store.add(entry.clone())?;
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::storage::MemoryStorage;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_valid_submit_stores_and_clears() {
        let mut store = EntryStore::new(MemoryStorage::new());
        let clock = FixedClock::new(1_700_000_000_000);
        let mut form = FormController::new();
        form.fill(FormFields::new("Hanoi", "2024-02-10").with_memo("pho\nrain"));

        let entry = form.submit(&mut store, &clock).await.unwrap();

        assert_eq!(entry.id, 1_700_000_000_000);
        assert_eq!(entry.city, "Hanoi");
        assert_eq!(entry.date, "2024-02-10");
        assert_eq!(entry.memo, "pho\nrain");
        assert_eq!(entry.image, None);
        assert_eq!(store.load().unwrap(), vec![entry]);
        assert_eq!(form.fields(), &FormFields::default());
        assert_eq!(form.attachment(), AttachmentIndicator::NoImage);
        assert!(form.error().is_none());
    }

    #[tokio::test]
    async fn test_blank_city_or_date_is_rejected() {
        let mut store = EntryStore::new(MemoryStorage::new());
        let clock = FixedClock::new(1);

        for (city, date) in [("   ", "2024-01-01"), ("Lima", ""), ("", "")] {
            let mut form = FormController::new();
            form.fill(FormFields::new(city, date));

            let err = form.submit(&mut store, &clock).await.unwrap_err();

            assert!(matches!(err, JournalError::MissingRequiredField(_)));
            assert!(form.error().is_some());
            assert_eq!(form.fields().city, city);
        }
        assert!(store.backend().get_item(crate::store::STORAGE_KEY).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_oversized_image_aborts_without_mutation() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("big.png");
        std::fs::File::create(&path)
            .unwrap()
            .set_len(6 * 1024 * 1024)
            .unwrap();

        let mut store = EntryStore::new(MemoryStorage::new());
        store.add(Entry::new(1, "Existing", "2024-01-01")).unwrap();
        let mut form = FormController::new();
        form.fill(FormFields::new("Cairo", "2024-03-03").with_image(ImageAttachment::new(&path)));

        let err = form.submit(&mut store, &FixedClock::new(5)).await.unwrap_err();

        assert!(matches!(err, JournalError::ImageTooLarge { .. }));
        assert_eq!(form.error(), Some("The photo must be 5 MB or smaller."));
        assert_eq!(store.load().unwrap().len(), 1);
        assert!(form.attachment().is_selected());
    }

    #[tokio::test]
    async fn test_small_image_is_encoded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("view.jpg");
        std::fs::write(&path, [0xFF, 0xD8, 0xFF, 0xE0]).unwrap();

        let mut store = EntryStore::new(MemoryStorage::new());
        let mut form = FormController::new();
        form.fill(FormFields::new("Quito", "2024-07-07"));
        assert_eq!(
            form.select_image(Some(ImageAttachment::new(&path))).label(),
            "view.jpg"
        );

        let entry = form.submit(&mut store, &FixedClock::new(9)).await.unwrap();

        let image = entry.image.expect("image should be stored");
        assert!(image.starts_with("data:image/jpeg;base64,"));
        assert_eq!(form.attachment().label(), DEFAULT_ATTACHMENT_LABEL);
    }

    #[tokio::test]
    async fn test_same_millisecond_submissions_get_distinct_ids() {
        let mut store = EntryStore::new(MemoryStorage::new());
        let clock = FixedClock::new(42);
        let mut form = FormController::new();

        form.fill(FormFields::new("A", "2024-01-01"));
        let first = form.submit(&mut store, &clock).await.unwrap();
        form.fill(FormFields::new("B", "2024-01-01"));
        let second = form.submit(&mut store, &clock).await.unwrap();

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_error_clears_after_successful_submit() {
        let mut store = EntryStore::new(MemoryStorage::new());
        let clock = FixedClock::new(1);
        let mut form = FormController::new();

        assert!(form.submit(&mut store, &clock).await.is_err());
        assert!(form.error().is_some());

        form.set_city("Bergen");
        form.set_date("2024-08-08");
        form.set_memo("  fjords  ");
        let entry = form.submit(&mut store, &clock).await.unwrap();

        assert_eq!(entry.memo, "fjords");
        assert!(form.error().is_none());
    }
}
