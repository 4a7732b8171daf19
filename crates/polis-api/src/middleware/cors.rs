//! CORS policy for the `/api/*` routes: any origin, `POST` and `OPTIONS`,
//! `Content-Type` and `X-API-Key` request headers.

use axum::http::header::CONTENT_TYPE;
use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

use crate::auth::API_KEY_HEADER;

/// Build the CORS layer for the policy routes.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, API_KEY_HEADER])
}
