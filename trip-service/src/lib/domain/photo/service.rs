use std::sync::Arc;

use chrono::Utc;

use crate::domain::photo::errors::PhotoError;
use crate::domain::photo::models::extension_for;
use crate::domain::photo::models::mime_for;
use crate::domain::photo::models::StoredPhoto;
use crate::domain::photo::models::UploadedFile;
use crate::domain::photo::ports::PhotoServicePort;
use crate::domain::photo::ports::PhotoStorage;

/// Domain service implementation for photo operations.
///
/// Validates uploads before anything touches disk; raw persistence is
/// delegated to the storage port.
pub struct PhotoService<S>
where
    S: PhotoStorage,
{
    storage: Arc<S>,
    max_file_size: u64,
}

impl<S> PhotoService<S>
where
    S: PhotoStorage,
{
    pub fn new(storage: Arc<S>, max_file_size: u64) -> Self {
        Self {
            storage,
            max_file_size,
        }
    }
}

impl<S> PhotoServicePort for PhotoService<S>
where
    S: PhotoStorage,
{
    fn upload(&self, file: UploadedFile) -> Result<StoredPhoto, PhotoError> {
        let Some(extension) = extension_for(&file.mime_type) else {
            return Err(PhotoError::UnsupportedType(file.mime_type));
        };

        let size = file.bytes.len() as u64;
        if size == 0 {
            return Err(PhotoError::EmptyFile);
        }
        if size > self.max_file_size {
            return Err(PhotoError::TooLarge {
                max: self.max_file_size,
                actual: size,
            });
        }

        let saved = self.storage.save(&file.bytes, extension)?;

        Ok(StoredPhoto {
            id: saved.id,
            filename: saved.filename,
            original_name: file.original_name,
            mime_type: file.mime_type,
            size,
            path: saved.path,
            created_at: Utc::now(),
        })
    }

    fn exists(&self, filename: &str) -> bool {
        self.storage.exists(filename)
    }

    fn download(&self, filename: &str) -> Result<(Vec<u8>, &'static str), PhotoError> {
        let bytes = self.storage.read(filename)?;

        Ok((bytes, mime_for(filename)))
    }

    fn delete(&self, filename: &str) -> Result<(), PhotoError> {
        self.storage.delete(filename)
    }
}
