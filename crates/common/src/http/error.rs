use crate::domain::DomainError;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;

/// `{ "message": ... }` body used by every mutation and every failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// HTTP-facing error: a status code plus the message returned to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }

    /// Map a domain error to its HTTP equivalent.
    ///
    /// Repository errors are logged with full detail and replaced by
    /// `failure_message`, so nothing about the store reaches the caller.
    pub fn from_domain(error: DomainError, failure_message: &str) -> Self {
        match error {
            DomainError::ValidationError(msg) => Self::bad_request(msg),
            DomainError::BinNotFound(_) => Self::not_found("Bin not found"),
            DomainError::RepositoryError(err) => {
                error!(error = ?err, "{}", failure_message);
                Self::internal(failure_message)
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(_: PathRejection) -> Self {
        Self::bad_request("Invalid bin id")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(MessageResponse::new(self.message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_is_bad_request() {
        let err = ApiError::from_domain(
            DomainError::ValidationError("fill_level: greater than 100".to_string()),
            "Failed to update fill level",
        );
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "fill_level: greater than 100");
    }

    #[test]
    fn test_bin_not_found_is_404() {
        let err = ApiError::from_domain(DomainError::BinNotFound(42), "Failed to delete bin");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "Bin not found");
    }

    #[test]
    fn test_repository_error_hides_detail() {
        let err = ApiError::from_domain(
            DomainError::RepositoryError(anyhow::anyhow!("connection refused on 10.0.0.3:5432")),
            "Failed to fetch bins",
        );
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Failed to fetch bins");
    }

    #[test]
    fn test_into_response_keeps_status() {
        let response = ApiError::not_found("Bin not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
