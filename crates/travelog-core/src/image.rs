//! Photo attachments and their text encoding.
//!
//! Photos are stored inline as `data:<mime>;base64,<payload>` URLs so an
//! entry stays self-contained and can be displayed without a file lookup.

use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::debug;

use crate::error::{JournalError, Result};

/// Largest accepted photo, in bytes (5 MiB).
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

const IMAGE_TYPES: &[(&str, &str)] = &[
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("bmp", "image/bmp"),
    ("svg", "image/svg+xml"),
    ("avif", "image/avif"),
    ("heic", "image/heic"),
];

/// A photo file selected for the next submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    path: PathBuf,
}

impl ImageAttachment {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name shown on the attachment indicator.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// MIME type derived from the file extension, if it is an image type.
    pub fn mime_type(&self) -> Option<&'static str> {
        let ext = self.path.extension()?.to_str()?.to_ascii_lowercase();
        IMAGE_TYPES
            .iter()
            .find(|(known, _)| *known == ext)
            .map(|(_, mime)| *mime)
    }

    /// Size of the file on disk.
    pub async fn size(&self) -> Result<u64> {
        let metadata = tokio::fs::metadata(&self.path)
            .await
            .map_err(|e| JournalError::ImageEncoding(format!("{}: {}", self.file_name(), e)))?;
        Ok(metadata.len())
    }

    /// Reject non-image files and files over [`MAX_IMAGE_BYTES`].
    pub async fn validate(&self) -> Result<&'static str> {
        let mime = self
            .mime_type()
            .ok_or_else(|| JournalError::UnsupportedImage(self.file_name()))?;
        check_size(self.size().await?)?;
        Ok(mime)
    }

    /// Read the file and encode it as a `data:` URL.
    ///
    /// # Errors
    ///
    /// - `JournalError::UnsupportedImage` if the extension is not an image type
    /// - `JournalError::ImageTooLarge` if the file exceeds the size limit
    /// - `JournalError::ImageEncoding` if the file cannot be read
    pub async fn encode(&self) -> Result<String> {
        let mime = self.validate().await?;
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| JournalError::ImageEncoding(format!("{}: {}", self.file_name(), e)))?;
        // The file may have grown between the metadata check and the read.
        check_size(bytes.len() as u64)?;
        let encoded = encode_data_url(mime, &bytes);
        debug!(file = %self.file_name(), bytes = bytes.len(), "image encoded");
        Ok(encoded)
    }
}

fn check_size(size: u64) -> Result<()> {
    if size > MAX_IMAGE_BYTES {
        return Err(JournalError::ImageTooLarge {
            size,
            limit: MAX_IMAGE_BYTES,
        });
    }
    Ok(())
}

/// Encode raw bytes as a `data:` URL.
pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Byte length of the payload carried by a base64 `data:` URL.
pub fn data_url_payload_len(data_url: &str) -> Option<usize> {
    let rest = data_url.strip_prefix("data:")?;
    let (_, payload) = rest.split_once(";base64,")?;
    STANDARD.decode(payload).ok().map(|bytes| bytes.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_mime_from_extension() {
        assert_eq!(ImageAttachment::new("a.PNG").mime_type(), Some("image/png"));
        assert_eq!(ImageAttachment::new("b.jpeg").mime_type(), Some("image/jpeg"));
        assert_eq!(ImageAttachment::new("notes.txt").mime_type(), None);
        assert_eq!(ImageAttachment::new("no_extension").mime_type(), None);
    }

    #[test]
    fn test_encode_data_url_and_payload_len() {
        let url = encode_data_url("image/png", PNG_HEADER);
        assert!(url.starts_with("data:image/png;base64,"));
        assert_eq!(data_url_payload_len(&url), Some(PNG_HEADER.len()));
        assert_eq!(data_url_payload_len("https://example.test/a.png"), None);
    }

    #[tokio::test]
    async fn test_encode_small_image() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("photo.png");
        std::fs::write(&path, PNG_HEADER).unwrap();

        let encoded = ImageAttachment::new(&path).encode().await.unwrap();
        assert_eq!(encoded, encode_data_url("image/png", PNG_HEADER));
    }

    #[tokio::test]
    async fn test_rejects_oversized_image() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("huge.jpg");
        let file = std::fs::File::create(&path).unwrap();
        file.set_len(6 * 1024 * 1024).unwrap();

        let err = ImageAttachment::new(&path).encode().await.unwrap_err();
        assert!(matches!(err, JournalError::ImageTooLarge { size, .. } if size == 6 * 1024 * 1024));
    }

    #[tokio::test]
    async fn test_exact_limit_is_accepted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("edge.gif");
        let file = std::fs::File::create(&path).unwrap();
        file.set_len(MAX_IMAGE_BYTES).unwrap();

        assert!(ImageAttachment::new(&path).validate().await.is_ok());
    }

    #[tokio::test]
    async fn test_missing_file_is_encoding_failure() {
        let dir = tempdir().unwrap();
        let err = ImageAttachment::new(dir.path().join("gone.png"))
            .encode()
            .await
            .unwrap_err();
        assert!(matches!(err, JournalError::ImageEncoding(_)));
    }

    #[tokio::test]
    async fn test_non_image_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"hello").unwrap();

        let err = ImageAttachment::new(&path).encode().await.unwrap_err();
        assert!(matches!(err, JournalError::UnsupportedImage(name) if name == "notes.txt"));
    }
}
