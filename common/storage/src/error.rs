use thiserror::Error;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to write storage file '{0}': {1}")]
    Write(String, String),
    #[error("failed to serialize storage contents: {0}")]
    Serialize(String),
}
