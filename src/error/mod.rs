//! Error handling module.
//!
//! Maps application errors to the fixed HTTP error contract: processing
//! faults surface as 400 with a JSON `detail` field.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Invalid request body or parameters.
    #[error("Error processing data: {0}")]
    BadRequest(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        tracing::error!(
            status = %status,
            message = %message,
            "Request failed"
        );

        let body = Json(json!({
            "detail": message
        }));

        (status, body).into_response()
    }
}

/// Result type alias using `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::BadRequest("test".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_error_message_prefix() {
        let err = AppError::BadRequest("data field missing".to_string());
        assert_eq!(
            err.to_string(),
            "Error processing data: data field missing"
        );
    }
}
