//! API error handling for the doorman Web API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::auth::AuthError;
use crate::web::dto::FailureResponse;

/// API error carrying an HTTP status and a user-facing message.
///
/// Serializes as `{"success": false, "message": ...}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Create a new API error.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Create a bad request error (400).
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Create an unauthorized error (401).
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    /// Create an internal server error (500).
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// The HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The user-facing message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(FailureResponse::new(self.message))).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl std::error::Error for ApiError {}

// Validation-class failures are user-correctable (400), credential
// failures are 401, and hashing/storage failures are opaque 500s whose
// causes were already logged at the orchestrator.
impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match &err {
            AuthError::Validation(_) | AuthError::EmailTaken => {
                ApiError::bad_request(err.to_string())
            }
            AuthError::InvalidCredentials => ApiError::unauthorized(err.to_string()),
            AuthError::HashingUnavailable(_)
            | AuthError::CreateFailed
            | AuthError::RetrieveFailed => ApiError::internal(err.to_string()),
        }
    }
}
