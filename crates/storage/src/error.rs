use thiserror::Error;

/// Errors that can occur when interacting with the persistence store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// An I/O error occurred while reading or writing the backing store.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing store content could not be parsed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;
