//! API error types with JSON responses.
//!
//! Every error path in every tier produces `{"error": "<message>"}` with an
//! appropriate status code; no other error shape ever crosses the wire.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use cascade_store::StoreError;

use crate::relay::RelayError;

/// API error that can be returned from handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Bad request (400).
    #[error("{0}")]
    BadRequest(String),

    /// Not found (404).
    #[error("{0}")]
    NotFound(String),

    /// Method not allowed (405).
    #[error("method not allowed")]
    MethodNotAllowed,

    /// Downstream tier unreachable or unreadable (502).
    #[error("{0}")]
    Upstream(String),

    /// Internal server error (500).
    #[error("{0}")]
    Internal(String),

    /// Persistence failure (500). The detail is logged, not exposed.
    #[error("internal storage error")]
    Store(#[source] StoreError),
}

impl ApiError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        if error.is_not_found() {
            Self::NotFound(error.to_string())
        } else {
            Self::Store(error)
        }
    }
}

impl From<RelayError> for ApiError {
    fn from(error: RelayError) -> Self {
        Self::Upstream(error.to_string())
    }
}

/// JSON error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Store(source) = &self {
            tracing::error!(error = %source, "storage operation failed");
        }

        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Fallback handler for paths with no route. Keeps 404s on the JSON contract.
pub async fn not_found() -> ApiError {
    ApiError::NotFound("not found".to_string())
}

/// Fallback handler for known paths hit with a disallowed method.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
