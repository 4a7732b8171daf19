//! # API Key Guard
//!
//! Middleware wrapping every protected route. The caller's credential is the
//! `X-API-Key` header, compared against the configured key:
//!
//! 1. Header absent (or empty) → `401 MISSING_API_KEY`
//! 2. Header differs from the configured key → `403 INVALID_API_KEY`
//! 3. Otherwise the request reaches the handler unchanged.
//!
//! Both rejections are logged at warn level. The submitted key itself is never
//! logged; only a salted SHA-256 fingerprint is, so repeated attempts with the
//! same key can be correlated without disclosing it.

use axum::extract::{Request, State};
use axum::http::HeaderName;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::error::AppError;
use crate::state::AppState;

/// Header carrying the caller's API key.
pub const API_KEY_HEADER: HeaderName = HeaderName::from_static("x-api-key");

/// Number of hex characters of the fingerprint written to logs.
const FINGERPRINT_HEX_LEN: usize = 12;

/// Constant-time comparison of API keys.
///
/// When lengths differ, performs a dummy comparison to avoid leaking length
/// information through timing variance.
fn constant_time_key_eq(provided: &[u8], expected: &[u8]) -> bool {
    if provided.len() != expected.len() {
        let _ = expected.ct_eq(expected);
        return false;
    }
    provided.ct_eq(expected).into()
}

/// Short salted digest of a submitted key, safe to log.
pub fn key_fingerprint(salt: &str, provided: &[u8]) -> String {
    let digest = Sha256::new()
        .chain_update(salt.as_bytes())
        .chain_update(b":")
        .chain_update(provided)
        .finalize();
    let mut hex = String::with_capacity(FINGERPRINT_HEX_LEN);
    for byte in digest.iter().take(FINGERPRINT_HEX_LEN / 2) {
        hex.push_str(&format!("{byte:02x}"));
    }
    hex
}

/// Reject requests that do not carry the configured API key.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_owned();

    let provided = match request.headers().get(&API_KEY_HEADER) {
        Some(value) if !value.is_empty() => value.as_bytes(),
        _ => {
            tracing::warn!(%path, "request received without API key");
            return AppError::MissingApiKey.into_response();
        }
    };

    if !constant_time_key_eq(provided, state.config.api_key.as_bytes()) {
        tracing::warn!(
            %path,
            key_fingerprint = %key_fingerprint(&state.config.secret_key, provided),
            "invalid API key attempt"
        );
        return AppError::InvalidApiKey.into_response();
    }

    next.run(request).await
}
