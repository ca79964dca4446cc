//! `/api/buckets`: list and create buckets

use super::error::ApiError;
use super::AppState;
use crate::store::Bucket;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use log::{debug, info};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBucketRequest {
    pub bucket_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateBucketResponse {
    pub message: String,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Bucket>>, ApiError> {
    let buckets = state.store.list_buckets().await?;
    debug!("Listed {} buckets", buckets.len());
    Ok(Json(buckets))
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateBucketRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateBucketResponse>), ApiError> {
    let name = payload
        .ok()
        .and_then(|Json(body)| body.bucket_name)
        .filter(|name| !name.is_empty())
        .ok_or(ApiError::Validation("Bucket name is required"))?;

    state.store.create_bucket(&name).await?;
    info!("Created bucket {}", name);

    Ok((
        StatusCode::CREATED,
        Json(CreateBucketResponse {
            message: format!("Bucket {} created successfully", name),
        }),
    ))
}
