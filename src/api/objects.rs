//! `/api/objects`: one page of a prefix listing

use super::error::{ApiError, INVALID_QUERY};
use super::AppState;
use crate::store::{ListObjectsOptions, ListingPage};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use log::debug;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListObjectsQuery {
    pub bucket_name: Option<String>,
    pub prefix: Option<String>,
    pub delimiter: Option<String>,
    pub continuation_token: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<ListObjectsQuery>, QueryRejection>,
) -> Result<Json<ListingPage>, ApiError> {
    let Query(query) = query.map_err(|e| {
        debug!("Rejected object listing query: {}", e);
        ApiError::Validation(INVALID_QUERY)
    })?;
    let bucket = query
        .bucket_name
        .filter(|name| !name.is_empty())
        .ok_or(ApiError::Validation("Bucket name is required"))?;
    let options =
        ListObjectsOptions::from_query(query.prefix, query.delimiter, query.continuation_token);

    let page = state.store.list_objects(&bucket, &options).await?;
    debug!(
        "Listed {}/{}: {} objects, {} prefixes, truncated={}",
        bucket,
        options.prefix.as_deref().unwrap_or(""),
        page.contents.len(),
        page.common_prefixes.len(),
        page.is_truncated
    );

    Ok(Json(page))
}
