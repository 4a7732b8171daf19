//! # OpenAPI Specification Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI 3.1 spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::state::AppState;

/// Adds the `X-API-Key` header scheme to the OpenAPI spec.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "api_key",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                    "X-API-Key",
                    "Shared API key. Set via the API_KEY env var.",
                ))),
            );
        }
    }
}

/// Assembled OpenAPI spec for the entire API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Polis Insurance API",
        description = "Read-only lookups of insurance policy information: status, claims balance, premium, coverage, beneficiaries, medical history, and a composite view.\n\nAll `/api/v1/*` endpoints require the `X-API-Key` header. Every response body uses the same envelope: `status`, `message`, `data` (success) or `code` (error), and `timestamp`.",
        license(name = "AGPL-3.0-or-later")
    ),
    paths(
        crate::routes::meta::root,
        crate::routes::meta::health,
        crate::routes::policy::policy_status,
        crate::routes::policy::claims_balance,
        crate::routes::policy::premium_info,
        crate::routes::policy::coverage_details,
        crate::routes::policy::beneficiaries,
        crate::routes::policy::medical_history,
        crate::routes::policy::complete_info,
    ),
    components(schemas(
        crate::envelope::Envelope,
        crate::envelope::EnvelopeStatus,
        crate::extractors::PolicyRequest,
        crate::routes::meta::ServiceInfo,
        crate::routes::meta::EndpointMap,
        crate::routes::meta::HealthStatus,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "meta", description = "Service metadata and health"),
        (name = "policy", description = "Policy information lookups"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json: Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
