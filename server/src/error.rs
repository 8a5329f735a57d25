//! Mapping from handler failures to JSON error responses.
//!
//! # Design
//! Every failure becomes `{"error": <message>}`; the status code is the only
//! other signal a client gets. Storage failures answer 400 on every route
//! except list, which answers 500 with a fixed message.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use todo_core::{StoreError, ValidationError};

/// Message used when a failure carries no message of its own.
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

/// Errors a handler can return.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request body could not be read or decoded.
    #[error("{0}")]
    InvalidBody(String),

    #[error("Todo not found")]
    NotFound,

    #[error(transparent)]
    Store(#[from] StoreError),

    /// Listing failed; the cause is logged, not returned.
    #[error("Failed to fetch todos")]
    FetchFailed,

    #[error("An unexpected error occurred")]
    Unexpected,
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::FetchFailed => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Validation(_)
            | ApiError::InvalidBody(_)
            | ApiError::Store(_)
            | ApiError::Unexpected => StatusCode::BAD_REQUEST,
        }
    }

    /// The client-facing message, falling back to [`UNEXPECTED_ERROR`].
    pub fn message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            UNEXPECTED_ERROR.to_string()
        } else {
            message
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "request rejected");
        }
        (status, Json(ErrorBody { error: self.message() })).into_response()
    }
}

/// Response for a panic caught inside a handler.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_default();
    tracing::error!(panic = %detail, "handler panicked");
    ApiError::Unexpected.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn status_codes_follow_error_kind() {
        assert_eq!(
            ApiError::Validation(ValidationError::InvalidTitle).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::InvalidBody("bad".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::FetchFailed.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ApiError::Unexpected.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn validation_messages_pass_through() {
        assert_eq!(
            ApiError::from(ValidationError::TitleTooLong).message(),
            "Title must be less than 50 characters"
        );
    }

    #[test]
    fn empty_message_falls_back_to_generic() {
        assert_eq!(ApiError::InvalidBody(String::new()).message(), UNEXPECTED_ERROR);
        assert_eq!(ApiError::InvalidBody("  ".into()).message(), UNEXPECTED_ERROR);
    }

    #[tokio::test]
    async fn not_found_renders_json_body() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, serde_json::json!({"error": "Todo not found"}));
    }

    #[tokio::test]
    async fn panic_renders_generic_400() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, serde_json::json!({"error": UNEXPECTED_ERROR}));
    }
}
