//! `/api/download`: presigned download links

use super::error::{ApiError, INVALID_QUERY};
use super::AppState;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Lifetime of a signed download link
pub const DOWNLOAD_URL_TTL: Duration = Duration::from_secs(300);

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadQuery {
    pub bucket_name: Option<String>,
    pub object_key: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DownloadResponse {
    pub url: String,
}

pub async fn sign(
    State(state): State<AppState>,
    query: Result<Query<DownloadQuery>, QueryRejection>,
) -> Result<Json<DownloadResponse>, ApiError> {
    let Query(query) = query.map_err(|e| {
        debug!("Rejected download query: {}", e);
        ApiError::Validation(INVALID_QUERY)
    })?;
    let (bucket, key) = match (query.bucket_name, query.object_key) {
        (Some(bucket), Some(key)) if !bucket.is_empty() && !key.is_empty() => (bucket, key),
        _ => {
            return Err(ApiError::Validation(
                "Bucket name and object key are required",
            ))
        }
    };

    let url = state
        .store
        .presign_download(&bucket, &key, DOWNLOAD_URL_TTL)
        .await?;
    debug!("Signed download link for {}/{}", bucket, key);

    Ok(Json(DownloadResponse { url }))
}
