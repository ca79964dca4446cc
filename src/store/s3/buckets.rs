//! S3 bucket creation

use crate::store::{StoreError, StoreResult};
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::types::{BucketLocationConstraint, CreateBucketConfiguration};
use aws_sdk_s3::Client;

/// Region in which buckets are created without a location constraint
const DEFAULT_REGION: &str = "us-east-1";

pub(super) async fn create_bucket(client: &Client, region: &str, name: &str) -> StoreResult<()> {
    let mut request = client.create_bucket().bucket(name);

    if region != DEFAULT_REGION {
        let configuration = CreateBucketConfiguration::builder()
            .location_constraint(BucketLocationConstraint::from(region))
            .build();
        request = request.create_bucket_configuration(configuration);
    }

    request.send().await.map_err(|e| {
        let conflict = e
            .as_service_error()
            .map(|err| err.is_bucket_already_exists() || err.is_bucket_already_owned_by_you())
            .unwrap_or(false);
        if conflict {
            StoreError::BucketAlreadyExists(name.to_string())
        } else {
            StoreError::Service(DisplayErrorContext(&e).to_string())
        }
    })?;

    Ok(())
}
