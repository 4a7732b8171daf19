//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Every variant renders as an error [`Envelope`] with a fixed HTTP status and
//! machine-readable code. Internal error details are logged, never returned.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use polis_core::ProviderError;
use thiserror::Error;

use crate::envelope::Envelope;

/// Generic message returned for every internal failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// Request body is missing required fields or has the wrong shape (400).
    #[error("{0}")]
    Validation(String),

    /// No `X-API-Key` header on a protected route (401).
    #[error("API Key is required")]
    MissingApiKey,

    /// `X-API-Key` header present but wrong (403).
    #[error("Invalid API Key")]
    InvalidApiKey,

    /// No route matches the request path (404).
    #[error("Endpoint not found")]
    NotFound,

    /// Path exists but not for this method (405).
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Internal server error (500). Message is logged but not returned to client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Return the HTTP status code and machine-readable error code for this error.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            Self::MissingApiKey => (StatusCode::UNAUTHORIZED, "MISSING_API_KEY"),
            Self::InvalidApiKey => (StatusCode::FORBIDDEN, "INVALID_API_KEY"),
            Self::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Self::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "METHOD_NOT_ALLOWED"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        // Never expose internal error messages to clients.
        let message = match &self {
            Self::Internal(detail) => {
                tracing::error!(error = %detail, "internal server error");
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            other => other.to_string(),
        };

        Envelope::error(message, code)
            .with_status(status)
            .into_response()
    }
}

/// Provider failures are never shown to callers; they become internal errors.
impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        Self::Internal(err.to_string())
    }
}
