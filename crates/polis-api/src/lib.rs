//! # polis-api: Axum API Service for Insurance Policy Lookups
//!
//! A stateless request/response service: callers present a shared API key
//! and a policy identifier, and receive one category of policy information
//! (or all of them) in a uniform JSON envelope.
//!
//! ## API Surface
//!
//! | Path                  | Module                 | Auth     |
//! |-----------------------|------------------------|----------|
//! | `/`, `/health`        | [`routes::meta`]       | none     |
//! | `/metrics`            | [`routes::meta`]       | none     |
//! | `/openapi.json`       | [`openapi`]            | none     |
//! | `/api/v1/policy/*`    | [`routes::policy`]     | API key  |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → MetricsMiddleware → CatchPanic → [CORS → ApiKeyGuard] → Handler
//! ```
//!
//! The bracketed layers apply to the policy routes only.

pub mod auth;
pub mod config;
pub mod envelope;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::middleware::{from_fn, from_fn_with_state};
use axum::Router;

use crate::state::AppState;

/// Assemble the full application router with all routes and middleware.
///
/// The guard is a route layer on the policy router, so unknown paths under
/// `/api/` get `404` without a credential check. The policy routes get their
/// 405 fallback before the CORS layer wraps them; setting it afterwards would
/// replace the layered fallback and preflight `OPTIONS` would never reach CORS.
pub fn app(state: AppState) -> Router {
    let policy = routes::policy::router()
        .route_layer(from_fn_with_state(state.clone(), auth::require_api_key))
        .method_not_allowed_fallback(routes::method_not_allowed)
        .layer(middleware::cors::layer());

    Router::new()
        .merge(routes::meta::router(&state))
        .merge(openapi::router())
        .merge(policy)
        .method_not_allowed_fallback(routes::method_not_allowed)
        .fallback(routes::not_found)
        .layer(middleware::panic::layer())
        .layer(from_fn(middleware::metrics::metrics_middleware))
        .layer(middleware::tracing_layer::layer())
        .with_state(state)
}
