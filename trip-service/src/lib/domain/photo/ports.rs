use crate::domain::photo::errors::PhotoError;
use crate::domain::photo::models::SavedFile;
use crate::domain::photo::models::StoredPhoto;
use crate::domain::photo::models::UploadedFile;

/// Port for photo operations.
///
/// Used by the HTTP handlers and by resource services validating image
/// references. Operations are synchronous: photo storage is local,
/// blocking filesystem I/O.
pub trait PhotoServicePort: Send + Sync + 'static {
    /// Validate and store an uploaded photo.
    ///
    /// # Errors
    /// * `EmptyFile` - Upload carries no bytes
    /// * `UnsupportedType` - MIME type outside the accepted set
    /// * `TooLarge` - Upload exceeds the configured size cap
    /// * `Io` - Write failed
    fn upload(&self, file: UploadedFile) -> Result<StoredPhoto, PhotoError>;

    /// Whether a stored photo with this filename exists.
    fn exists(&self, filename: &str) -> bool;

    /// Read a stored photo and the MIME type to serve it with.
    ///
    /// # Errors
    /// * `NotFound` - No stored photo with this filename
    /// * `Io` - Read failed
    fn download(&self, filename: &str) -> Result<(Vec<u8>, &'static str), PhotoError>;

    /// Remove a stored photo.
    ///
    /// # Errors
    /// * `NotFound` - No stored photo with this filename
    /// * `Io` - Delete failed
    fn delete(&self, filename: &str) -> Result<(), PhotoError>;
}

/// Raw file persistence for photos.
///
/// Implementations generate the opaque filenames; callers never choose
/// where bytes land on disk.
pub trait PhotoStorage: Send + Sync + 'static {
    /// Write bytes under a freshly generated `{uuid}.{extension}` name.
    fn save(&self, bytes: &[u8], extension: &str) -> Result<SavedFile, PhotoError>;

    fn exists(&self, filename: &str) -> bool;

    fn read(&self, filename: &str) -> Result<Vec<u8>, PhotoError>;

    fn delete(&self, filename: &str) -> Result<(), PhotoError>;
}
