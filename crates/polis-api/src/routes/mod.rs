//! # API Route Modules
//!
//! - `meta`: unauthenticated service metadata: `/`, `/health`, `/metrics`.
//! - `policy`: the seven API-key protected policy lookups under
//!   `/api/v1/policy/*`.
//!
//! The two fallbacks below give unknown paths and unsupported methods the
//! same error envelope as every other failure.

pub mod meta;
pub mod policy;

use crate::error::AppError;

/// Fallback for paths no route matches.
pub async fn not_found() -> AppError {
    AppError::NotFound
}

/// Fallback for known paths called with an unsupported method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
