use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::Display;
use serde_json::json;

/// Error taxonomy surfaced to API callers.
///
/// Every service operation returns one of these four; the transport layer
/// maps them onto HTTP statuses without further interpretation.
#[derive(Debug, Display)]
pub enum ApiError {
    /// Missing or malformed input. The caller must fix the request.
    #[display(fmt = "{}", _0)]
    InvalidArgument(String),

    /// A referenced entity does not exist.
    #[display(fmt = "{}", _0)]
    NotFound(String),

    /// The operation would violate a state invariant (double clock-in,
    /// double clock-out, re-transition out of a terminal leave status).
    #[display(fmt = "{}", _0)]
    Conflict(String),

    /// Storage layer failure. Safe to retry.
    #[display(fmt = "{}", _0)]
    Unavailable(String),
}

impl ApiError {
    /// Machine-readable reason string carried in error responses.
    pub fn reason(&self) -> &'static str {
        match self {
            ApiError::InvalidArgument(_) => "invalid_argument",
            ApiError::NotFound(_) => "not_found",
            ApiError::Conflict(_) => "conflict",
            ApiError::Unavailable(_) => "unavailable",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Unavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "error": self.reason(),
            "message": self.to_string(),
        }))
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = %e, "Database operation failed");
        ApiError::Unavailable("Storage unavailable".to_string())
    }
}
