//! Request handlers

pub mod health;
pub mod question;
pub mod answer;

use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Handles `/question/` and `/answer/` with nothing after the slash
pub async fn missing_id() -> ApiError {
    ApiError::BadRequest("id is required".to_string())
}

/// Decodes a JSON request body regardless of its `Content-Type` header
pub(crate) fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    Ok(serde_json::from_slice(body)?)
}
