//! S3 list operations (buckets, objects)

use crate::store::{
    Bucket, CommonPrefix, ListObjectsOptions, ListingPage, ObjectEntry, StoreError, StoreResult,
};
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::Client;
use chrono::{DateTime, Utc};

/// List all buckets visible to the client's credentials
pub(super) async fn list_buckets(client: &Client) -> StoreResult<Vec<Bucket>> {
    let response = client
        .list_buckets()
        .send()
        .await
        .map_err(|e| StoreError::Service(DisplayErrorContext(&e).to_string()))?;

    let buckets = response
        .buckets()
        .iter()
        .filter_map(|bucket| {
            let name = bucket.name()?.to_string();
            Some(Bucket {
                name,
                creation_date: bucket.creation_date().and_then(to_utc),
            })
        })
        .collect();

    Ok(buckets)
}

/// List one page of objects with the given prefix, delimiter and cursor.
/// The page is returned as the service produced it.
pub(super) async fn list_objects(
    client: &Client,
    bucket: &str,
    options: &ListObjectsOptions,
) -> StoreResult<ListingPage> {
    let mut request = client
        .list_objects_v2()
        .bucket(bucket)
        .delimiter(&options.delimiter)
        .max_keys(options.max_keys);

    if let Some(p) = &options.prefix {
        request = request.prefix(p);
    }
    if let Some(token) = &options.continuation_token {
        request = request.continuation_token(token);
    }

    let response = request.send().await.map_err(|e| {
        let no_such_bucket = e
            .as_service_error()
            .map(|err| err.is_no_such_bucket())
            .unwrap_or(false);
        if no_such_bucket {
            StoreError::NoSuchBucket(bucket.to_string())
        } else {
            StoreError::Service(DisplayErrorContext(&e).to_string())
        }
    })?;

    let contents = response
        .contents()
        .iter()
        .filter_map(|obj| {
            let key = obj.key()?.to_string();
            Some(ObjectEntry {
                key,
                size: obj.size().unwrap_or(0),
                last_modified: obj.last_modified().and_then(to_utc),
                etag: obj.e_tag().map(|s| s.to_string()),
                storage_class: obj.storage_class().map(|c| c.as_str().to_string()),
            })
        })
        .collect();

    let common_prefixes = response
        .common_prefixes()
        .iter()
        .filter_map(|prefix| {
            prefix.prefix().map(|s| CommonPrefix {
                prefix: s.to_string(),
            })
        })
        .collect();

    Ok(ListingPage {
        name: response.name().unwrap_or(bucket).to_string(),
        prefix: response.prefix().map(|s| s.to_string()),
        delimiter: response.delimiter().map(|s| s.to_string()),
        max_keys: response.max_keys().unwrap_or(options.max_keys),
        key_count: response.key_count().unwrap_or(0),
        is_truncated: response.is_truncated().unwrap_or(false),
        contents,
        common_prefixes,
        continuation_token: response.continuation_token().map(|s| s.to_string()),
        next_continuation_token: response.next_continuation_token().map(|s| s.to_string()),
    })
}

fn to_utc(dt: &aws_sdk_s3::primitives::DateTime) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(dt.secs(), dt.subsec_nanos())
}
