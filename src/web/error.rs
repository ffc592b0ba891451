//! API error handling.
//!
//! Password mismatches and report misses are not errors; they are plain
//! 200 outcomes produced by the handlers. ApiError covers everything else,
//! with storage faults surfaced as 400 and the raw message in the body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::BoardError;

/// API error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Bad request (400) - also the catch-all for storage faults.
    BadRequest,
    /// Not found (404).
    NotFound,
    /// Internal server error (500).
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorCode::BadRequest => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// API error type.
#[derive(Debug)]
pub struct ApiError {
    code: ErrorCode,
    message: String,
}

impl ApiError {
    /// Create a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Create a bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadRequest, message)
    }

    /// Create a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Create an internal server error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code.status_code(), self.message).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<BoardError> for ApiError {
    fn from(err: BoardError) -> Self {
        match &err {
            // The original contract: storage faults become a 400 with the
            // raw error in the body, uncategorized.
            BoardError::Database(msg) => {
                tracing::error!("Storage error: {}", msg);
                ApiError::bad_request(msg.clone())
            }
            BoardError::NotFound(what) => ApiError::not_found(format!("{what} not found")),
            BoardError::Validation(msg) => ApiError::bad_request(msg.clone()),
            _ => {
                tracing::error!("Internal error: {}", err);
                ApiError::internal("An internal error occurred")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_status() {
        assert_eq!(ErrorCode::BadRequest.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::InternalError.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_storage_error_maps_to_bad_request_with_raw_body() {
        let err: ApiError = BoardError::Database("disk I/O error".to_string()).into();
        assert_eq!(err.code, ErrorCode::BadRequest);
        assert_eq!(err.message, "disk I/O error");
    }

    #[test]
    fn test_not_found_mapping() {
        let err: ApiError = BoardError::NotFound("thread".to_string()).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "thread not found");
    }

    #[test]
    fn test_io_error_maps_to_internal() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err: ApiError = BoardError::Io(io).into();
        assert_eq!(err.code, ErrorCode::InternalError);
    }
}
