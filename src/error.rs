use std::time::Duration;

use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

use crate::dao::storage::StorageError;

/// Errors that can occur in service layer operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage backend failed to serve the request.
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// Operation exceeded its timeout limit.
    #[error("storage operation timed out after {0:?}")]
    Timeout(Duration),
}

/// Application-level errors that are converted to HTTP responses.
///
/// Responses carry the error message as a plain-text body.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request body could not be decoded.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// Internal server error.
    #[error("{0}")]
    Internal(String),
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::http::header::CONTENT_TYPE;

    use super::*;

    #[test]
    fn internal_errors_map_to_500_plain_text() {
        let response = AppError::Internal("boom".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers()[CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
    }

    #[test]
    fn bad_requests_map_to_400() {
        let response = AppError::BadRequest("nope".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn timeout_message_mentions_duration() {
        let err: AppError = ServiceError::Timeout(Duration::from_millis(1500)).into();
        assert_eq!(err.to_string(), "storage operation timed out after 1.5s");
    }
}
