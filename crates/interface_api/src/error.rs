//! API error handling
//!
//! Every failure is rendered as `{"message": ..., "time": ...}`. Status codes
//! follow the long-standing contract of this API: client-visible failures,
//! including missing rows and store errors on single-item routes, are 400;
//! only list routes report store failures as 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

use core_kernel::IdParseError;
use domain_answer::AnswerError;
use domain_question::QuestionError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    /// Path or body could not be decoded
    #[error("{0}")]
    BadRequest(String),

    /// Text failed length validation
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    /// An answer referenced a question that does not exist
    #[error("{0}")]
    ParentNotFound(String),

    /// The store failed on a single-item route
    #[error("{0}")]
    Storage(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadRequest(_)
            | ApiError::Validation(_)
            | ApiError::NotFound(_)
            | ApiError::ParentNotFound(_)
            | ApiError::Storage(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    pub time: DateTime<Utc>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Storage(msg) | ApiError::Internal(msg) => {
                error!(status = status.as_u16(), error = %msg, "request failed")
            }
            other => warn!(status = status.as_u16(), error = %other, "request rejected"),
        }

        let body = ErrorResponse {
            message: self.to_string(),
            time: Utc::now(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<QuestionError> for ApiError {
    fn from(err: QuestionError) -> Self {
        match err {
            QuestionError::TextTooShort { .. } | QuestionError::TextTooLong { .. } => {
                ApiError::Validation(err.to_string())
            }
            QuestionError::NotFound(_) => ApiError::NotFound(err.to_string()),
            QuestionError::Storage(_) => ApiError::Storage(err.to_string()),
        }
    }
}

impl From<AnswerError> for ApiError {
    fn from(err: AnswerError) -> Self {
        match err {
            AnswerError::TextTooShort { .. } | AnswerError::TextTooLong { .. } => {
                ApiError::Validation(err.to_string())
            }
            AnswerError::QuestionNotFound(_) => ApiError::ParentNotFound(err.to_string()),
            AnswerError::NotFound(_) => ApiError::NotFound(err.to_string()),
            AnswerError::Storage(_) => ApiError::Storage(err.to_string()),
        }
    }
}

impl From<IdParseError> for ApiError {
    fn from(err: IdParseError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(format!("invalid request body: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{PortError, QuestionId};

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::BadRequest("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::ParentNotFound("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::Storage("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::Internal("x".into()).status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_answer_error_kinds_stay_distinct() {
        let parent: ApiError = AnswerError::QuestionNotFound(QuestionId::new(999)).into();
        let short: ApiError = AnswerError::TextTooShort { min: 5, actual: 2 }.into();

        assert!(matches!(parent, ApiError::ParentNotFound(ref m) if m.contains("999")));
        assert!(matches!(short, ApiError::Validation(_)));
    }

    #[test]
    fn test_question_storage_error() {
        let err: ApiError = QuestionError::Storage(PortError::connection("down")).into();
        assert!(matches!(err, ApiError::Storage(_)));
    }

    #[test]
    fn test_id_parse_error_is_bad_request() {
        let err: ApiError = "abc".parse::<QuestionId>().unwrap_err().into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
