//! HTTP API
//!
//! JSON endpoints proxying bucket and object operations to the configured
//! [`ObjectStore`].

mod buckets;
mod download;
mod error;
mod objects;

use crate::store::ObjectStore;
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

pub use buckets::{CreateBucketRequest, CreateBucketResponse};
pub use download::{DownloadResponse, DOWNLOAD_URL_TTL};
pub use error::{ApiError, ErrorBody, GENERIC_ERROR, INVALID_QUERY};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ObjectStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }
}

/// Create the router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/buckets",
            get(buckets::list)
                .post(buckets::create)
                .fallback(|method: Method| async move {
                    method_not_allowed(method, "GET, POST")
                }),
        )
        .route(
            "/api/objects",
            get(objects::list)
                .fallback(|method: Method| async move { method_not_allowed(method, "GET") }),
        )
        .route(
            "/api/download",
            get(download::sign)
                .fallback(|method: Method| async move { method_not_allowed(method, "GET") }),
        )
        .with_state(state)
}

fn method_not_allowed(method: Method, allow: &'static str) -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, allow)],
        format!("Method {} Not Allowed", method),
    )
        .into_response()
}
