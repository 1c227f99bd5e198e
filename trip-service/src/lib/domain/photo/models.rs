use std::path::PathBuf;

use chrono::DateTime;
use chrono::Utc;

/// Metadata of a stored photo, returned on upload.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredPhoto {
    pub id: String,
    /// Storage-generated filename ({uuid}.{ext}); the identifier used by
    /// downloads, deletes, and place image references.
    pub filename: String,
    pub original_name: String,
    pub mime_type: String,
    pub size: u64,
    pub path: PathBuf,
    pub created_at: DateTime<Utc>,
}

/// An uploaded file as received from the transport layer.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub original_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Location of a freshly written file, reported by the storage layer.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedFile {
    pub id: String,
    pub filename: String,
    pub path: PathBuf,
}

/// MIME types accepted for upload.
pub const SUPPORTED_MIME_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "image/svg+xml",
];

pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// File extension used when storing a photo of the given MIME type.
/// None means the type is not accepted for upload.
pub fn extension_for(mime_type: &str) -> Option<&'static str> {
    match mime_type {
        "image/jpeg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/gif" => Some("gif"),
        "image/webp" => Some("webp"),
        "image/svg+xml" => Some("svg"),
        _ => None,
    }
}

/// MIME type served for a stored filename, derived from its extension.
pub fn mime_for(filename: &str) -> &'static str {
    let extension = filename
        .rsplit('.')
        .next()
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("bmp") => "image/bmp",
        Some("tiff") => "image/tiff",
        _ => DEFAULT_MIME_TYPE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_for_supported_types() {
        assert_eq!(extension_for("image/jpeg"), Some("jpg"));
        assert_eq!(extension_for("image/svg+xml"), Some("svg"));
        assert_eq!(extension_for("application/pdf"), None);
    }

    #[test]
    fn test_mime_for_known_extensions() {
        assert_eq!(mime_for("photo.jpg"), "image/jpeg");
        assert_eq!(mime_for("photo.JPEG"), "image/jpeg");
        assert_eq!(mime_for("photo.webp"), "image/webp");
    }

    #[test]
    fn test_mime_for_unknown_extension_falls_back() {
        assert_eq!(mime_for("photo.xyz"), DEFAULT_MIME_TYPE);
        assert_eq!(mime_for("no-extension"), DEFAULT_MIME_TYPE);
    }
}
