use std::fs;
use std::path::PathBuf;

use uuid::Uuid;

use crate::domain::photo::errors::PhotoError;
use crate::domain::photo::models::SavedFile;
use crate::domain::photo::ports::PhotoStorage;

/// Filesystem-backed photo storage.
///
/// Filenames are generated here ({uuid}.{ext}); lookups go through
/// `resolve`, which refuses anything that could escape the upload
/// directory.
pub struct FsPhotoStorage {
    directory: PathBuf,
}

impl FsPhotoStorage {
    /// Open the storage, creating the directory if needed.
    ///
    /// # Errors
    /// * `Io` - Directory creation failed
    pub fn new(directory: impl Into<PathBuf>) -> Result<Self, PhotoError> {
        let directory = directory.into();
        fs::create_dir_all(&directory).map_err(|e| PhotoError::Io(e.to_string()))?;

        Ok(Self { directory })
    }

    /// Resolve a stored filename to its path. Separators and parent
    /// references are treated as not found rather than joined.
    fn resolve(&self, filename: &str) -> Result<PathBuf, PhotoError> {
        if filename.is_empty() || filename.contains(['/', '\\']) || filename.contains("..") {
            return Err(PhotoError::NotFound(filename.to_string()));
        }

        Ok(self.directory.join(filename))
    }
}

impl PhotoStorage for FsPhotoStorage {
    fn save(&self, bytes: &[u8], extension: &str) -> Result<SavedFile, PhotoError> {
        let id = Uuid::new_v4().to_string();
        let filename = format!("{}.{}", id, extension);
        let path = self.directory.join(&filename);

        fs::write(&path, bytes).map_err(|e| PhotoError::Io(e.to_string()))?;

        Ok(SavedFile { id, filename, path })
    }

    fn exists(&self, filename: &str) -> bool {
        self.resolve(filename)
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    fn read(&self, filename: &str) -> Result<Vec<u8>, PhotoError> {
        let path = self.resolve(filename)?;
        if !path.exists() {
            return Err(PhotoError::NotFound(filename.to_string()));
        }

        fs::read(&path).map_err(|e| PhotoError::Io(e.to_string()))
    }

    fn delete(&self, filename: &str) -> Result<(), PhotoError> {
        let path = self.resolve(filename)?;
        if !path.exists() {
            return Err(PhotoError::NotFound(filename.to_string()));
        }

        fs::remove_file(&path).map_err(|e| PhotoError::Io(e.to_string()))
    }
}
