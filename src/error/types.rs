//! Backend error types.
//!
//! One closed enumeration covers every failure a handler can surface, with
//! an explicit mapping to HTTP status codes. Handlers return `ApiError`
//! directly; the `IntoResponse` conversion lives in
//! [`conversion`](super::conversion).

use axum::http::StatusCode;
use thiserror::Error;

use crate::domain::ValidationError;

/// Every error the HTTP surface can report.
#[derive(Debug, Error)]
pub enum ApiError {
    /// An input entity rejected its payload.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A request was well-formed but violates an application rule
    /// (e.g. registering a username that is already taken).
    #[error("{0}")]
    BadRequest(String),

    /// A referenced thread or comment does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The acting user is not the owner of the resource.
    #[error("{0}")]
    Forbidden(String),

    /// Missing, invalid, or expired credentials.
    #[error("{0}")]
    Unauthenticated(String),

    /// A persistence call failed.
    #[error("database failure: {0}")]
    Database(#[from] sqlx::Error),

    /// Anything else that should never happen.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// The HTTP status code this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message carried in the response body.
    ///
    /// Server-side failures collapse to a generic message; their details
    /// are logged at conversion time, never sent to the client.
    pub fn message(&self) -> String {
        match self {
            Self::Database(_) | Self::Internal(_) => {
                "an internal server error occurred".to_string()
            }
            other => other.to_string(),
        }
    }
}
