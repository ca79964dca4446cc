use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by an [`ObjectStore`](super::ObjectStore) backend
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Bucket does not exist: {0}")]
    NoSuchBucket(String),

    #[error("Bucket already exists: {0}")]
    BucketAlreadyExists(String),

    #[error("Failed to sign download URL: {0}")]
    Presign(String),

    #[error("Storage service error: {0}")]
    Service(String),
}
