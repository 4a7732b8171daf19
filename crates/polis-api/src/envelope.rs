//! # Response Envelope
//!
//! Every response body, success or error, uses one JSON shape:
//!
//! ```json
//! { "status": "success", "message": "...", "data": { ... }, "timestamp": "..." }
//! { "status": "error",   "message": "...", "code": "VALIDATION_ERROR", "timestamp": "..." }
//! ```
//!
//! `data` appears only on success and `code` only on error. The HTTP status
//! code is chosen by the call site, not derived from the envelope.

use axum::http::StatusCode;
use axum::Json;
use polis_core::Timestamp;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;

/// Message used when a success reply does not name one.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Success";

/// Outcome discriminator of an [`Envelope`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    Success,
    Error,
}

/// Uniform JSON response body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Envelope {
    /// `success` or `error`.
    pub status: EnvelopeStatus,
    /// Human-readable summary.
    pub message: String,
    /// Payload, present only on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<serde_json::Value>,
    /// Machine-readable error code, present only on error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// UTC time the envelope was built, ISO 8601.
    #[schema(value_type = String, format = DateTime)]
    pub timestamp: Timestamp,
}

impl Envelope {
    /// Success envelope wrapping `data`.
    ///
    /// Fails only if `data` cannot be represented as JSON, which surfaces to
    /// the caller as an internal error.
    pub fn success<T: Serialize>(data: T, message: impl Into<String>) -> Result<Self, AppError> {
        let data = serde_json::to_value(data)
            .map_err(|e| AppError::Internal(format!("failed to serialize response data: {e}")))?;
        Ok(Self {
            status: EnvelopeStatus::Success,
            message: message.into(),
            data: Some(data),
            code: None,
            timestamp: Timestamp::now(),
        })
    }

    /// Error envelope carrying a machine-readable `code`.
    pub fn error(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            status: EnvelopeStatus::Error,
            message: message.into(),
            data: None,
            code: Some(code.into()),
            timestamp: Timestamp::now(),
        }
    }

    /// Pair the envelope with an HTTP status code.
    pub fn with_status(self, status: StatusCode) -> Reply {
        (status, Json(self))
    }
}

/// Status code plus envelope body, the return type of every handler.
pub type Reply = (StatusCode, Json<Envelope>);

/// `200 OK` success reply.
pub fn success<T: Serialize>(data: T, message: &str) -> Result<Reply, AppError> {
    success_with_status(data, message, StatusCode::OK)
}

/// Success reply with an explicit status code.
pub fn success_with_status<T: Serialize>(
    data: T,
    message: &str,
    status: StatusCode,
) -> Result<Reply, AppError> {
    Ok(Envelope::success(data, message)?.with_status(status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;
    use serde_json::json;

    #[test]
    fn success_envelope_has_data_and_no_code() {
        let env = Envelope::success(json!({"policy_id": "SH-1"}), DEFAULT_SUCCESS_MESSAGE).unwrap();
        let value = serde_json::to_value(&env).unwrap();
        assert_eq!(value["status"], "success");
        assert_eq!(value["message"], "Success");
        assert_eq!(value["data"]["policy_id"], "SH-1");
        assert!(value.get("code").is_none());
        assert!(value["timestamp"].as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn error_envelope_has_code_and_no_data() {
        let env = Envelope::error("Invalid API Key", "INVALID_API_KEY");
        let value = serde_json::to_value(&env).unwrap();
        assert_eq!(value["status"], "error");
        assert_eq!(value["code"], "INVALID_API_KEY");
        assert!(value.get("data").is_none());
    }

    #[test]
    fn success_keeps_null_fields_inside_data() {
        let env = Envelope::success(json!({"end": null}), "ok").unwrap();
        let value = serde_json::to_value(&env).unwrap();
        assert!(value["data"]["end"].is_null());
    }

    #[test]
    fn status_code_is_caller_supplied() {
        let (status, Json(env)) =
            success_with_status(json!([]), "created", StatusCode::CREATED).unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(env.status, EnvelopeStatus::Success);

        let resp = Envelope::error("gone", "GONE")
            .with_status(StatusCode::GONE)
            .into_response();
        assert_eq!(resp.status(), StatusCode::GONE);
    }

    #[test]
    fn envelope_deserializes_from_wire_shape() {
        let env: Envelope = serde_json::from_str(
            r#"{"status":"error","message":"m","code":"NOT_FOUND","timestamp":"2026-01-15T12:00:00.000000Z"}"#,
        )
        .unwrap();
        assert_eq!(env.status, EnvelopeStatus::Error);
        assert_eq!(env.code.as_deref(), Some("NOT_FOUND"));
        assert!(env.data.is_none());
    }
}
