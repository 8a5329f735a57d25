//! JSON request body extractor.
//!
//! Unlike `axum::Json`, the body is decoded regardless of `Content-Type` and
//! must be a JSON object. Every read or decode failure becomes a 400
//! `ApiError::InvalidBody` carrying the decoder's message.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

pub const NOT_AN_OBJECT: &str = "Request body must be a JSON object";

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))?;
        let value: Value =
            serde_json::from_slice(&bytes).map_err(|e| ApiError::InvalidBody(e.to_string()))?;
        // Derived struct deserializers also accept sequences; bodies must be objects.
        if !value.is_object() {
            return Err(ApiError::InvalidBody(NOT_AN_OBJECT.to_string()));
        }
        serde_json::from_value(value)
            .map(JsonBody)
            .map_err(|e| ApiError::InvalidBody(e.to_string()))
    }
}
