//! # Service Metadata
//!
//! Unauthenticated endpoints describing the running service.

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde::Serialize;
use utoipa::ToSchema;

use crate::envelope::{success, Envelope, Reply};
use crate::error::AppError;
use crate::state::AppState;

/// Service name reported by `/` and `/health`.
pub const SERVICE_NAME: &str = "Insurance API";
/// Crate version reported by `/` and `/health`.
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Paths of the public endpoints, keyed by operation.
#[derive(Debug, Serialize, ToSchema)]
pub struct EndpointMap {
    pub health: &'static str,
    pub policy_status: &'static str,
    pub claims_balance: &'static str,
    pub premium_info: &'static str,
    pub coverage_details: &'static str,
    pub beneficiaries: &'static str,
    pub medical_history: &'static str,
    pub complete_info: &'static str,
}

impl EndpointMap {
    const fn current() -> Self {
        use crate::routes::policy::paths;
        Self {
            health: "/health",
            policy_status: paths::STATUS,
            claims_balance: paths::CLAIMS_BALANCE,
            premium_info: paths::PREMIUM,
            coverage_details: paths::COVERAGE,
            beneficiaries: paths::BENEFICIARIES,
            medical_history: paths::MEDICAL_HISTORY,
            complete_info: paths::COMPLETE_INFO,
        }
    }
}

/// Payload of `GET /`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub version: &'static str,
    pub status: &'static str,
    pub endpoints: EndpointMap,
    pub note: &'static str,
}

/// Payload of `GET /health`.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthStatus {
    pub service: &'static str,
    pub status: &'static str,
    pub version: &'static str,
}

/// Build the metadata router. `/metrics` is mounted only when the state
/// carries a Prometheus handle.
pub fn router(state: &AppState) -> Router<AppState> {
    let router = Router::new()
        .route("/", get(root))
        .route("/health", get(health));
    if state.metrics.is_some() {
        router.route("/metrics", get(metrics))
    } else {
        router
    }
}

/// GET /: Service metadata and endpoint map.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service metadata", body = Envelope),
    ),
    tag = "meta"
)]
pub async fn root() -> Result<Reply, AppError> {
    success(
        ServiceInfo {
            service: SERVICE_NAME,
            version: SERVICE_VERSION,
            status: "running",
            endpoints: EndpointMap::current(),
            note: "All /api/v1/* endpoints require X-API-Key header",
        },
        "Insurance API is running",
    )
}

/// GET /health: Liveness check.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = Envelope),
    ),
    tag = "meta"
)]
pub async fn health() -> Result<Reply, AppError> {
    success(
        HealthStatus {
            service: SERVICE_NAME,
            status: "healthy",
            version: SERVICE_VERSION,
        },
        "Health check passed",
    )
}

/// GET /metrics: Prometheus text exposition.
async fn metrics(State(state): State<AppState>) -> Response {
    match &state.metrics {
        Some(handle) => (
            [(CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => AppError::NotFound.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let state = AppState::new();
        let app = router(&state).with_state(state);
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap_or_default())
    }

    #[tokio::test]
    async fn root_lists_every_endpoint() {
        let (status, body) = get_json("/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Insurance API is running");
        assert_eq!(body["data"]["status"], "running");
        assert_eq!(body["data"]["endpoints"].as_object().unwrap().len(), 8);
        assert_eq!(
            body["data"]["endpoints"]["claims_balance"],
            "/api/v1/policy/claims-balance"
        );
    }

    #[tokio::test]
    async fn health_reports_version() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["status"], "healthy");
        assert_eq!(body["data"]["version"], SERVICE_VERSION);
    }

    #[tokio::test]
    async fn metrics_not_mounted_without_recorder() {
        let (status, _) = get_json("/metrics").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
