//! API error types
//!
//! Only malformed requests produce errors here: invalid JSON, an unknown
//! operation name, or a missing/mistyped required argument. Resolvers
//! themselves never fail; "not found" and "nothing to add" are absent
//! result values, not errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response as AxumResponse};
use axum::Json;
use thiserror::Error;

use super::response::ErrorResponse;

/// Result type for request parsing
pub type ApiResult<T> = Result<T, ApiError>;

/// Stable error codes surfaced on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCode {
    /// Invalid request format or arguments
    InvalidRequest,
    /// Unknown operation name
    UnknownOperation,
}

impl ApiErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            ApiErrorCode::InvalidRequest => "COURSEDB_INVALID_REQUEST",
            ApiErrorCode::UnknownOperation => "COURSEDB_UNKNOWN_OPERATION",
        }
    }
}

/// Errors produced before any resolver runs
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Invalid JSON, missing required argument, or wrong argument type
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Operation name not in the resolver table
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
}

impl ApiError {
    /// Create an invalid request error
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        ApiError::InvalidRequest(reason.into())
    }

    /// Create an unknown operation error
    pub fn unknown_operation(op: impl Into<String>) -> Self {
        ApiError::UnknownOperation(op.into())
    }

    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidRequest(_) => ApiErrorCode::InvalidRequest.code(),
            ApiError::UnknownOperation(_) => ApiErrorCode::UnknownOperation.code(),
        }
    }

    /// HTTP status for this error. Every parse failure is the client's.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::UnknownOperation(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> AxumResponse {
        let status = self.status_code();
        let body = Json(ErrorResponse::from_error(&self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_error() {
        let err = ApiError::invalid_request("Missing id");
        assert_eq!(err.code(), "COURSEDB_INVALID_REQUEST");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("Missing id"));
    }

    #[test]
    fn test_unknown_operation_error() {
        let err = ApiError::unknown_operation("dropCourses");
        assert_eq!(err.code(), "COURSEDB_UNKNOWN_OPERATION");
        assert!(err.to_string().contains("dropCourses"));
    }
}
