use crate::store::StoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use serde::Serialize;
use thiserror::Error;

/// Body returned for every 5xx; details stay in the server log
pub const GENERIC_ERROR: &str = "Error processing your request";

/// Body returned when the query string cannot be parsed
pub const INVALID_QUERY: &str = "Invalid query parameters";

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Error, Debug)]
pub enum ApiError {
    /// A required input is missing
    #[error("{0}")]
    Validation(&'static str),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Validation(message) => (StatusCode::BAD_REQUEST, message.to_string()),
            ApiError::Store(err) => {
                error!("Storage operation failed: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_ERROR.to_string())
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
