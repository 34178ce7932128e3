//! HTTP error responses.
//!
//! Client errors expose their message. Internal errors are logged in full
//! and answered with a generic body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::usecase::SendMessageError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Unparseable or aborted submission
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadRequest(m) => {
                tracing::warn!("Rejected submission: {}", m);
                (StatusCode::BAD_REQUEST, m.clone())
            }
            ApiError::Internal(m) => {
                tracing::error!("Internal server error: {}", m);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl From<SendMessageError> for ApiError {
    fn from(e: SendMessageError) -> Self {
        if e.is_client_error() {
            ApiError::BadRequest(e.to_string())
        } else {
            ApiError::Internal(e.to_string())
        }
    }
}
