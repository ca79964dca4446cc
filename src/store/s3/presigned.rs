//! S3 presigned URL generation

use crate::store::{StoreError, StoreResult};
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::Client;
use std::time::Duration;

/// Generate a presigned GET URL for object access
pub(super) async fn presign_get(
    client: &Client,
    bucket: &str,
    key: &str,
    expires_in: Duration,
) -> StoreResult<String> {
    let presigning_config = PresigningConfig::builder()
        .expires_in(expires_in)
        .build()
        .map_err(|e| StoreError::Presign(e.to_string()))?;

    let presigned_request = client
        .get_object()
        .bucket(bucket)
        .key(key)
        .presigned(presigning_config)
        .await
        .map_err(|e| StoreError::Presign(DisplayErrorContext(&e).to_string()))?;

    Ok(presigned_request.uri().to_string())
}
