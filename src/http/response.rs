//! Response mapping.
//!
//! # Responsibilities
//! - Map accessor results and errors to HTTP status codes
//! - Render every error as a `{"error": "<message>"}` JSON envelope
//! - Render successes as bare JSON bodies (no envelope)
//!
//! # Design Decisions
//! - Handlers return `Result<_, ApiError>`; nothing escapes unhandled
//! - Storage failures carry the driver's message to the client
//! - A failed delete answers 400, unlike the other operations

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Result type for product handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced to HTTP clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// `{id}` path segment is not an integer.
    #[error("invalid product ID")]
    InvalidId,

    /// Request body is not a valid product JSON document.
    #[error("Invalid request payload")]
    InvalidPayload,

    /// No product has the requested id.
    #[error("Product not found")]
    NotFound,

    /// The database rejected or failed the statement.
    #[error("{0}")]
    Storage(String),

    /// The delete statement failed.
    #[error("{0}")]
    DeleteFailed(String),

    /// No route matches the request path.
    #[error("not found")]
    RouteNotFound,

    /// The path matches but the method does not.
    #[error("method not allowed")]
    MethodNotAllowed,
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidId | ApiError::InvalidPayload | ApiError::DeleteFailed(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound,
            other => ApiError::Storage(other.to_string()),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "Request failed");
        } else {
            tracing::debug!(status = %status, error = %self, "Request rejected");
        }

        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

/// Confirmation body returned by a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteResult {
    pub result: &'static str,
}

impl DeleteResult {
    pub fn deleted() -> Self {
        Self {
            result: "successful deleted",
        }
    }
}
