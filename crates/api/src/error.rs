//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::DomainError;

/// API-level error type that maps to HTTP responses.
///
/// Each variant has a fixed status code and message; causes are logged but
/// never returned to the caller.
#[derive(Debug)]
pub enum ApiError {
    /// The `StudentID` query parameter is absent or empty.
    MissingParameter,
    /// The database could not be reached or queried. Holds the cause for logging.
    ConnectionFailure(String),
    /// No record exists for the requested student.
    NotFound,
}

impl ApiError {
    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingParameter => StatusCode::BAD_REQUEST,
            ApiError::ConnectionFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    /// Returns the message placed in the `error` field of the body.
    pub fn message(&self) -> &'static str {
        match self {
            ApiError::MissingParameter => "StudentID is required",
            ApiError::ConnectionFailure(_) => "Database connection failed",
            ApiError::NotFound => "Student not found",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::ConnectionFailure(cause) = &self {
            tracing::error!(error = %cause, "fee store request failed");
        }

        let body = serde_json::json!({ "error": self.message() });
        (self.status_code(), axum::Json(body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::StudentNotFound(_) => ApiError::NotFound,
            DomainError::Store(store_err) => ApiError::ConnectionFailure(store_err.to_string()),
        }
    }
}
