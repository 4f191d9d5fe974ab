//! HTTP error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

/// Body returned for every 500, whatever went wrong. Unexpected failures
/// surface as handler panics and are converted by the router's
/// `CatchPanicLayer`.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body was rejected before reaching the assistant.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::Validation(msg) => {
                tracing::debug!(error = %msg, "rejected request");
                api_error(status, msg)
            }
        }
    }
}

/// Build a standardized JSON error response: `{ "error": "<message>" }`.
pub fn api_error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(serde_json::json!({ "error": message.into() }))).into_response()
}
