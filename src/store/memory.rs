//! In-process object store with S3 listing semantics

use super::{
    Bucket, CommonPrefix, ListObjectsOptions, ListingPage, ObjectEntry, ObjectStore, StoreError,
    StoreResult,
};
use async_trait::async_trait;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD as CURSOR, Engine as _};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::ops::Bound;
use std::time::Duration;
use tokio::sync::RwLock;

const DEFAULT_BASE_URL: &str = "http://localhost:4566";

#[derive(Debug, Clone)]
struct StoredObject {
    size: i64,
    last_modified: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct MemoryBucket {
    created: Option<DateTime<Utc>>,
    objects: BTreeMap<String, StoredObject>,
}

/// Keys or common prefixes produced while walking a bucket
enum Item<'a> {
    Object(&'a str, &'a StoredObject),
    Prefix(String),
}

impl Item<'_> {
    fn marker(&self) -> &str {
        match self {
            Item::Object(key, _) => key,
            Item::Prefix(prefix) => prefix,
        }
    }
}

/// [`ObjectStore`] that keeps buckets and object metadata in memory.
///
/// Listings follow ListObjectsV2: keys are walked in lexicographic order,
/// keys sharing the prefix up to the next delimiter collapse into one common
/// prefix, and `max_keys` counts entries and prefixes together.
pub struct InMemoryStore {
    base_url: String,
    buckets: RwLock<BTreeMap<String, MemoryBucket>>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Presigned URLs are rooted at `base_url`
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            buckets: RwLock::new(BTreeMap::new()),
        }
    }

    /// Record an object of `size` bytes, replacing any existing one
    pub async fn put_object(&self, bucket: &str, key: &str, size: i64) -> StoreResult<()> {
        let mut buckets = self.buckets.write().await;
        let entry = buckets
            .get_mut(bucket)
            .ok_or_else(|| StoreError::NoSuchBucket(bucket.to_string()))?;
        entry.objects.insert(
            key.to_string(),
            StoredObject {
                size,
                last_modified: Utc::now(),
            },
        );
        Ok(())
    }
}

#[async_trait]
impl ObjectStore for InMemoryStore {
    async fn list_buckets(&self) -> StoreResult<Vec<Bucket>> {
        let buckets = self.buckets.read().await;
        Ok(buckets
            .iter()
            .map(|(name, bucket)| Bucket {
                name: name.clone(),
                creation_date: bucket.created,
            })
            .collect())
    }

    async fn create_bucket(&self, name: &str) -> StoreResult<()> {
        let mut buckets = self.buckets.write().await;
        if buckets.contains_key(name) {
            return Err(StoreError::BucketAlreadyExists(name.to_string()));
        }
        buckets.insert(
            name.to_string(),
            MemoryBucket {
                created: Some(Utc::now()),
                objects: BTreeMap::new(),
            },
        );
        Ok(())
    }

    async fn list_objects(
        &self,
        bucket: &str,
        options: &ListObjectsOptions,
    ) -> StoreResult<ListingPage> {
        let buckets = self.buckets.read().await;
        let entry = buckets
            .get(bucket)
            .ok_or_else(|| StoreError::NoSuchBucket(bucket.to_string()))?;

        let prefix = options.prefix.as_deref().unwrap_or("");
        let delimiter = options.delimiter.as_str();
        let marker = options
            .continuation_token
            .as_deref()
            .map(decode_cursor)
            .transpose()?;
        let limit = options.max_keys.max(0) as usize;

        let start = marker.as_deref().unwrap_or(prefix);
        let mut contents = Vec::new();
        let mut common_prefixes: Vec<CommonPrefix> = Vec::new();
        let mut last_marker: Option<String> = None;
        let mut truncated = false;

        for (key, object) in entry
            .objects
            .range::<str, _>((Bound::Included(start), Bound::Unbounded))
        {
            if !key.starts_with(prefix) {
                break;
            }
            if marker.as_deref().is_some_and(|m| key.as_str() <= m) {
                continue;
            }

            let rest = &key[prefix.len()..];
            let split = if delimiter.is_empty() {
                None
            } else {
                rest.find(delimiter)
            };
            let item = match split {
                Some(idx) => Item::Prefix(format!("{}{}", prefix, &rest[..idx + delimiter.len()])),
                None => Item::Object(key.as_str(), object),
            };

            if let Item::Prefix(cp) = &item {
                if common_prefixes.last().is_some_and(|last| &last.prefix == cp) {
                    continue;
                }
                if marker.as_deref().is_some_and(|m| cp.as_str() <= m) {
                    continue;
                }
            }

            if contents.len() + common_prefixes.len() == limit {
                truncated = true;
                break;
            }

            last_marker = Some(item.marker().to_string());
            match item {
                Item::Object(key, object) => contents.push(ObjectEntry {
                    key: key.to_string(),
                    size: object.size,
                    last_modified: Some(object.last_modified),
                    etag: None,
                    storage_class: Some("STANDARD".to_string()),
                }),
                Item::Prefix(prefix) => common_prefixes.push(CommonPrefix { prefix }),
            }
        }

        let next_continuation_token = if truncated {
            last_marker.as_deref().map(encode_cursor)
        } else {
            None
        };

        Ok(ListingPage {
            name: bucket.to_string(),
            prefix: options.prefix.clone(),
            delimiter: Some(options.delimiter.clone()),
            max_keys: options.max_keys,
            key_count: (contents.len() + common_prefixes.len()) as i32,
            is_truncated: next_continuation_token.is_some(),
            contents,
            common_prefixes,
            continuation_token: options.continuation_token.clone(),
            next_continuation_token,
        })
    }

    async fn presign_download(
        &self,
        bucket: &str,
        key: &str,
        ttl: Duration,
    ) -> StoreResult<String> {
        let encoded_key = key
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");
        Ok(format!(
            "{}/{}/{}?X-Amz-Algorithm=AWS4-HMAC-SHA256&X-Amz-Date={}&X-Amz-Expires={}&X-Amz-SignedHeaders=host",
            self.base_url,
            urlencoding::encode(bucket),
            encoded_key,
            Utc::now().format("%Y%m%dT%H%M%SZ"),
            ttl.as_secs()
        ))
    }
}

fn encode_cursor(marker: &str) -> String {
    CURSOR.encode(marker.as_bytes())
}

fn decode_cursor(token: &str) -> StoreResult<String> {
    CURSOR
        .decode(token)
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .ok_or_else(|| {
            StoreError::Service("The continuation token provided is incorrect".to_string())
        })
}
