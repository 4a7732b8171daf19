//! # Policy Lookup API
//!
//! Seven `POST` endpoints, all taking `{"policy_id": "..."}`:
//!
//! | Path                               | Provider call        |
//! |------------------------------------|----------------------|
//! | `/api/v1/policy/status`            | `policy_status`      |
//! | `/api/v1/policy/claims-balance`    | `claims_balance`     |
//! | `/api/v1/policy/premium`           | `premium_info`       |
//! | `/api/v1/policy/coverage`          | `coverage_details`   |
//! | `/api/v1/policy/beneficiaries`     | `beneficiaries`      |
//! | `/api/v1/policy/medical-history`   | `medical_history`    |
//! | `/api/v1/policy/complete-info`     | `complete_info`      |
//!
//! Every handler runs the same steps: extract and validate `policy_id`, call
//! the provider, wrap the result in a success envelope. The API key guard is
//! applied by the caller of [`router`].

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use polis_core::{PolicyCategory, PolicyId, ProviderError};
use serde::Serialize;
use serde_json::Value;

use crate::envelope::{success, Envelope, Reply};
use crate::error::AppError;
use crate::extractors::{extract_policy_id, PolicyRequest};
use crate::state::AppState;

/// Route paths.
pub mod paths {
    pub const STATUS: &str = "/api/v1/policy/status";
    pub const CLAIMS_BALANCE: &str = "/api/v1/policy/claims-balance";
    pub const PREMIUM: &str = "/api/v1/policy/premium";
    pub const COVERAGE: &str = "/api/v1/policy/coverage";
    pub const BENEFICIARIES: &str = "/api/v1/policy/beneficiaries";
    pub const MEDICAL_HISTORY: &str = "/api/v1/policy/medical-history";
    pub const COMPLETE_INFO: &str = "/api/v1/policy/complete-info";
}

/// Log label of the composite lookup.
const COMPLETE_INFO_LABEL: &str = "complete_info";

/// Success message for a single-category lookup.
fn category_message(category: PolicyCategory) -> &'static str {
    match category {
        PolicyCategory::Status => "Policy status retrieved successfully",
        PolicyCategory::Claims => "Claims balance retrieved successfully",
        PolicyCategory::Premium => "Premium information retrieved successfully",
        PolicyCategory::Coverage => "Coverage details retrieved successfully",
        PolicyCategory::Beneficiaries => "Beneficiary information retrieved successfully",
        PolicyCategory::MedicalHistory => "Medical history retrieved successfully",
    }
}

const COMPLETE_INFO_MESSAGE: &str = "Complete policy information retrieved successfully";

/// Build the policy router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(paths::STATUS, post(policy_status))
        .route(paths::CLAIMS_BALANCE, post(claims_balance))
        .route(paths::PREMIUM, post(premium_info))
        .route(paths::COVERAGE, post(coverage_details))
        .route(paths::BENEFICIARIES, post(beneficiaries))
        .route(paths::MEDICAL_HISTORY, post(medical_history))
        .route(paths::COMPLETE_INFO, post(complete_info))
}

/// Shared body of every lookup handler.
fn lookup<T, F>(
    label: &str,
    message: &str,
    body: Result<Json<Value>, JsonRejection>,
    fetch: F,
) -> Result<Reply, AppError>
where
    T: Serialize,
    F: FnOnce(&PolicyId) -> Result<T, ProviderError>,
{
    let policy_id = extract_policy_id(body)?;
    tracing::info!(category = label, ?policy_id, "policy lookup");
    let data = fetch(&policy_id)?;
    success(data, message)
}

fn category_lookup<T, F>(
    category: PolicyCategory,
    body: Result<Json<Value>, JsonRejection>,
    fetch: F,
) -> Result<Reply, AppError>
where
    T: Serialize,
    F: FnOnce(&PolicyId) -> Result<T, ProviderError>,
{
    lookup(category.as_str(), category_message(category), body, fetch)
}

/// POST /api/v1/policy/status: Policy state and days remaining.
#[utoipa::path(
    post,
    path = "/api/v1/policy/status",
    request_body = PolicyRequest,
    responses(
        (status = 200, description = "Policy status", body = Envelope),
        (status = 400, description = "Missing or malformed policy_id", body = Envelope),
        (status = 401, description = "API key missing", body = Envelope),
        (status = 403, description = "API key invalid", body = Envelope),
        (status = 500, description = "Internal error", body = Envelope),
    ),
    security(("api_key" = [])),
    tag = "policy"
)]
pub async fn policy_status(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Reply, AppError> {
    category_lookup(PolicyCategory::Status, body, |id| {
        state.provider.policy_status(id)
    })
}

/// POST /api/v1/policy/claims-balance: Claims paid against total benefits.
#[utoipa::path(
    post,
    path = "/api/v1/policy/claims-balance",
    request_body = PolicyRequest,
    responses(
        (status = 200, description = "Claims balance", body = Envelope),
        (status = 400, description = "Missing or malformed policy_id", body = Envelope),
        (status = 401, description = "API key missing", body = Envelope),
        (status = 403, description = "API key invalid", body = Envelope),
        (status = 500, description = "Internal error", body = Envelope),
    ),
    security(("api_key" = [])),
    tag = "policy"
)]
pub async fn claims_balance(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Reply, AppError> {
    category_lookup(PolicyCategory::Claims, body, |id| {
        state.provider.claims_balance(id)
    })
}

/// POST /api/v1/policy/premium: Premium amounts and payment state.
#[utoipa::path(
    post,
    path = "/api/v1/policy/premium",
    request_body = PolicyRequest,
    responses(
        (status = 200, description = "Premium information", body = Envelope),
        (status = 400, description = "Missing or malformed policy_id", body = Envelope),
        (status = 401, description = "API key missing", body = Envelope),
        (status = 403, description = "API key invalid", body = Envelope),
        (status = 500, description = "Internal error", body = Envelope),
    ),
    security(("api_key" = [])),
    tag = "policy"
)]
pub async fn premium_info(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Reply, AppError> {
    category_lookup(PolicyCategory::Premium, body, |id| {
        state.provider.premium_info(id)
    })
}

/// POST /api/v1/policy/coverage: Coverage lines with limits and usage.
#[utoipa::path(
    post,
    path = "/api/v1/policy/coverage",
    request_body = PolicyRequest,
    responses(
        (status = 200, description = "Coverage details", body = Envelope),
        (status = 400, description = "Missing or malformed policy_id", body = Envelope),
        (status = 401, description = "API key missing", body = Envelope),
        (status = 403, description = "API key invalid", body = Envelope),
        (status = 500, description = "Internal error", body = Envelope),
    ),
    security(("api_key" = [])),
    tag = "policy"
)]
pub async fn coverage_details(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Reply, AppError> {
    category_lookup(PolicyCategory::Coverage, body, |id| {
        state.provider.coverage_details(id)
    })
}

/// POST /api/v1/policy/beneficiaries: Named beneficiaries and shares.
#[utoipa::path(
    post,
    path = "/api/v1/policy/beneficiaries",
    request_body = PolicyRequest,
    responses(
        (status = 200, description = "Beneficiary information", body = Envelope),
        (status = 400, description = "Missing or malformed policy_id", body = Envelope),
        (status = 401, description = "API key missing", body = Envelope),
        (status = 403, description = "API key invalid", body = Envelope),
        (status = 500, description = "Internal error", body = Envelope),
    ),
    security(("api_key" = [])),
    tag = "policy"
)]
pub async fn beneficiaries(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Reply, AppError> {
    category_lookup(PolicyCategory::Beneficiaries, body, |id| {
        state.provider.beneficiaries(id)
    })
}

/// POST /api/v1/policy/medical-history: Declared conditions and waiting period.
#[utoipa::path(
    post,
    path = "/api/v1/policy/medical-history",
    request_body = PolicyRequest,
    responses(
        (status = 200, description = "Medical history", body = Envelope),
        (status = 400, description = "Missing or malformed policy_id", body = Envelope),
        (status = 401, description = "API key missing", body = Envelope),
        (status = 403, description = "API key invalid", body = Envelope),
        (status = 500, description = "Internal error", body = Envelope),
    ),
    security(("api_key" = [])),
    tag = "policy"
)]
pub async fn medical_history(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Reply, AppError> {
    category_lookup(PolicyCategory::MedicalHistory, body, |id| {
        state.provider.medical_history(id)
    })
}

/// POST /api/v1/policy/complete-info: All six categories in one payload.
///
/// All-or-nothing: a failure in any category fails the whole request.
#[utoipa::path(
    post,
    path = "/api/v1/policy/complete-info",
    request_body = PolicyRequest,
    responses(
        (status = 200, description = "Complete policy information", body = Envelope),
        (status = 400, description = "Missing or malformed policy_id", body = Envelope),
        (status = 401, description = "API key missing", body = Envelope),
        (status = 403, description = "API key invalid", body = Envelope),
        (status = 500, description = "Internal error", body = Envelope),
    ),
    security(("api_key" = [])),
    tag = "policy"
)]
pub async fn complete_info(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Reply, AppError> {
    lookup(COMPLETE_INFO_LABEL, COMPLETE_INFO_MESSAGE, body, |id| {
        state.provider.complete_info(id)
    })
}
