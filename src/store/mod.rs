//! Object store access
//!
//! This module is organized into submodules:
//! - `types`: Wire types and typed listing options
//! - `error`: Store error taxonomy
//! - `s3`: Backend over an S3-compatible endpoint
//! - `memory`: In-process backend with the same listing semantics

mod error;
mod memory;
mod s3;
mod types;

use async_trait::async_trait;
use std::time::Duration;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryStore;
pub use s3::{S3ClientConfig, S3Store};
pub use types::{
    Bucket, CommonPrefix, ListObjectsOptions, ListingPage, ObjectEntry, DEFAULT_DELIMITER,
    MAX_KEYS,
};

/// Operations the HTTP endpoints proxy to the storage service
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// List all buckets visible to the configured credentials
    async fn list_buckets(&self) -> StoreResult<Vec<Bucket>>;

    /// Create a bucket; naming rules are enforced by the service
    async fn create_bucket(&self, name: &str) -> StoreResult<()>;

    /// List one page of objects and common prefixes
    async fn list_objects(
        &self,
        bucket: &str,
        options: &ListObjectsOptions,
    ) -> StoreResult<ListingPage>;

    /// Sign a time-limited GET URL for one object. The object is not checked
    /// for existence.
    async fn presign_download(&self, bucket: &str, key: &str, ttl: Duration)
        -> StoreResult<String>;
}
