use thiserror::Error;

/// Top-level error for photo operations
#[derive(Debug, Clone, Error)]
pub enum PhotoError {
    #[error("No file was uploaded")]
    MissingFile,

    #[error("Invalid file size")]
    EmptyFile,

    #[error("Unsupported photo type: {0}")]
    UnsupportedType(String),

    #[error("File size exceeds maximum of {max} bytes")]
    TooLarge { max: u64, actual: u64 },

    #[error("Photo not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Io(String),
}
