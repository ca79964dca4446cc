//! Object store types shared by the endpoints, the browser client and the views

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of entries plus common prefixes returned per listing page
pub const MAX_KEYS: i32 = 1000;

/// Delimiter used to group keys into one level of virtual folders
pub const DEFAULT_DELIMITER: &str = "/";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Bucket {
    pub name: String,
    #[serde(default)]
    pub creation_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ObjectEntry {
    pub key: String,
    #[serde(default)]
    pub size: i64,
    #[serde(default)]
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(rename = "ETag", default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_class: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CommonPrefix {
    pub prefix: String,
}

/// One page of a ListObjectsV2 call, serialised with the S3 field names.
///
/// An absent `next_continuation_token` means the listing is complete for the
/// bucket, prefix and delimiter it was requested with.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListingPage {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,
    #[serde(default)]
    pub max_keys: i32,
    #[serde(default)]
    pub key_count: i32,
    #[serde(default)]
    pub is_truncated: bool,
    #[serde(default)]
    pub contents: Vec<ObjectEntry>,
    #[serde(default)]
    pub common_prefixes: Vec<CommonPrefix>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continuation_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_continuation_token: Option<String>,
}

/// Typed options for a single listing request.
///
/// Defaults are fixed here: delimiter `/`, page size [`MAX_KEYS`], no prefix
/// and no cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListObjectsOptions {
    pub prefix: Option<String>,
    pub delimiter: String,
    pub continuation_token: Option<String>,
    pub max_keys: i32,
}

impl Default for ListObjectsOptions {
    fn default() -> Self {
        Self {
            prefix: None,
            delimiter: DEFAULT_DELIMITER.to_string(),
            continuation_token: None,
            max_keys: MAX_KEYS,
        }
    }
}

impl ListObjectsOptions {
    /// Build options from loosely-typed request parameters. Blank values are
    /// treated as absent.
    pub fn from_query(
        prefix: Option<String>,
        delimiter: Option<String>,
        continuation_token: Option<String>,
    ) -> Self {
        Self {
            prefix: non_empty(prefix),
            delimiter: non_empty(delimiter).unwrap_or_else(|| DEFAULT_DELIMITER.to_string()),
            continuation_token: non_empty(continuation_token),
            max_keys: MAX_KEYS,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = non_empty(Some(prefix.into()));
        self
    }

    pub fn with_continuation_token(mut self, token: Option<String>) -> Self {
        self.continuation_token = non_empty(token);
        self
    }

    pub fn with_max_keys(mut self, max_keys: i32) -> Self {
        self.max_keys = max_keys;
        self
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
