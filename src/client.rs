//! Browser-side access to the HTTP API

use crate::store::{Bucket, ListObjectsOptions, ListingPage};
use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{message}")]
    Status { status: u16, message: String },
}

pub type ClientResult<T> = Result<T, ClientError>;

/// The four endpoints the views call
#[async_trait]
pub trait BrowserApi: Send + Sync {
    async fn list_buckets(&self) -> ClientResult<Vec<Bucket>>;

    /// Returns the server's confirmation message
    async fn create_bucket(&self, name: &str) -> ClientResult<String>;

    async fn list_objects(
        &self,
        bucket: &str,
        options: &ListObjectsOptions,
    ) -> ClientResult<ListingPage>;

    async fn download_url(&self, bucket: &str, key: &str) -> ClientResult<String>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateBucketBody<'a> {
    bucket_name: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessageBody {
    message: String,
}

#[derive(Debug, Deserialize)]
struct UrlBody {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// [`BrowserApi`] over HTTP using `reqwest`
#[derive(Debug, Clone)]
pub struct HttpBrowserApi {
    client: Client,
    base_url: Url,
}

impl HttpBrowserApi {
    pub fn new(base_url: &str) -> ClientResult<Self> {
        Self::with_client(Client::new(), base_url)
    }

    /// `base_url` may carry a path (`http://host/browser`); endpoints are
    /// resolved beneath it.
    pub fn with_client(client: Client, base_url: &str) -> ClientResult<Self> {
        let mut base_url = Url::parse(base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self { client, base_url })
    }

    /// `path` is relative to the base URL
    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> ClientResult<Url> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }
        Ok(url)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let reason = status.canonical_reason().unwrap_or("Unknown");
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.error)
        .unwrap_or_else(|| format!("Error: {} {}", status.as_u16(), reason));
    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl BrowserApi for HttpBrowserApi {
    async fn list_buckets(&self) -> ClientResult<Vec<Bucket>> {
        let url = self.endpoint("api/buckets", &[])?;
        decode(self.client.get(url).send().await?).await
    }

    async fn create_bucket(&self, name: &str) -> ClientResult<String> {
        let url = self.endpoint("api/buckets", &[])?;
        let response = self
            .client
            .post(url)
            .json(&CreateBucketBody { bucket_name: name })
            .send()
            .await?;
        let body: MessageBody = decode(response).await?;
        Ok(body.message)
    }

    async fn list_objects(
        &self,
        bucket: &str,
        options: &ListObjectsOptions,
    ) -> ClientResult<ListingPage> {
        let mut params = vec![("bucketName", bucket)];
        if let Some(prefix) = options.prefix.as_deref() {
            params.push(("prefix", prefix));
        }
        params.push(("delimiter", options.delimiter.as_str()));
        if let Some(token) = options.continuation_token.as_deref() {
            params.push(("continuationToken", token));
        }

        let url = self.endpoint("api/objects", &params)?;
        decode(self.client.get(url).send().await?).await
    }

    async fn download_url(&self, bucket: &str, key: &str) -> ClientResult<String> {
        let url = self.endpoint("api/download", &[("bucketName", bucket), ("objectKey", key)])?;
        let body: UrlBody = decode(self.client.get(url).send().await?).await?;
        Ok(body.url)
    }
}
