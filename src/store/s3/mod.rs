mod buckets;
mod client;
mod list;
mod presigned;

use super::{Bucket, ListObjectsOptions, ListingPage, ObjectStore, StoreResult};
use async_trait::async_trait;
use aws_sdk_s3::Client;
use std::time::Duration;

pub use client::S3ClientConfig;

/// [`ObjectStore`] backed by an S3-compatible endpoint
#[derive(Clone)]
pub struct S3Store {
    client: Client,
    region: String,
}

impl S3Store {
    pub fn new(config: &S3ClientConfig) -> Self {
        Self {
            client: client::create_s3_client(config),
            region: config.region.clone(),
        }
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn list_buckets(&self) -> StoreResult<Vec<Bucket>> {
        list::list_buckets(&self.client).await
    }

    async fn create_bucket(&self, name: &str) -> StoreResult<()> {
        buckets::create_bucket(&self.client, &self.region, name).await
    }

    async fn list_objects(
        &self,
        bucket: &str,
        options: &ListObjectsOptions,
    ) -> StoreResult<ListingPage> {
        list::list_objects(&self.client, bucket, options).await
    }

    async fn presign_download(
        &self,
        bucket: &str,
        key: &str,
        ttl: Duration,
    ) -> StoreResult<String> {
        presigned::presign_get(&self.client, bucket, key, ttl).await
    }
}
