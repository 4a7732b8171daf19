//! # Request Body Extraction & Validation
//!
//! Handlers accept `Result<Json<Value>, JsonRejection>` so that a missing,
//! mistyped, or unparseable body never short-circuits into Axum's default
//! rejection. Instead the body is treated as having no fields and the
//! required-field check reports what is missing.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use polis_core::PolicyId;
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::error::AppError;

/// Name of the field every policy lookup requires.
pub const POLICY_ID_FIELD: &str = "policy_id";

/// Request body accepted by every policy endpoint. Extra fields are ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct PolicyRequest {
    /// Opaque policy identifier, e.g. `SH-2024-987654`.
    #[schema(example = "SH-2024-987654")]
    pub policy_id: String,
}

/// Check that every field in `required` exists in `body` and is not null.
///
/// Missing fields are reported together, in the order given by `required`.
/// A body that is not a JSON object has no fields.
pub fn validate_required_fields(body: &Value, required: &[&str]) -> Result<(), String> {
    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|field| body.get(*field).map_or(true, Value::is_null))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(format!("Missing required fields: {}", missing.join(", ")))
    }
}

/// Unwrap a JSON body, treating any rejection as an empty body.
pub fn body_or_empty(result: Result<Json<Value>, JsonRejection>) -> Value {
    match result {
        Ok(Json(value)) => value,
        Err(rejection) => {
            tracing::debug!(reason = %rejection.body_text(), "request body is not JSON");
            Value::Null
        }
    }
}

/// Extract the `policy_id` of a policy lookup request.
///
/// Only presence is checked. A string is taken as-is; any other non-null
/// value is used in its compact JSON form.
pub fn extract_policy_id(
    result: Result<Json<Value>, JsonRejection>,
) -> Result<PolicyId, AppError> {
    let body = body_or_empty(result);
    validate_required_fields(&body, &[POLICY_ID_FIELD]).map_err(AppError::Validation)?;

    Ok(match &body[POLICY_ID_FIELD] {
        Value::String(id) => PolicyId::new(id.as_str()),
        other => PolicyId::new(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn all_present_is_ok() {
        let body = json!({"policy_id": "SH-1", "extra": 1});
        assert!(validate_required_fields(&body, &["policy_id"]).is_ok());
    }

    #[test]
    fn absent_field_is_reported() {
        let err = validate_required_fields(&json!({}), &["policy_id"]).unwrap_err();
        assert_eq!(err, "Missing required fields: policy_id");
    }

    #[test]
    fn null_field_counts_as_missing() {
        let err =
            validate_required_fields(&json!({"policy_id": null}), &["policy_id"]).unwrap_err();
        assert!(err.contains("policy_id"));
    }

    #[test]
    fn missing_fields_keep_caller_order() {
        let body = json!({"b": 1});
        let err = validate_required_fields(&body, &["c", "a", "b", "d"]).unwrap_err();
        assert_eq!(err, "Missing required fields: c, a, d");
    }

    #[test]
    fn falsy_but_present_values_pass() {
        let body = json!({"a": "", "b": 0, "c": false, "d": []});
        assert!(validate_required_fields(&body, &["a", "b", "c", "d"]).is_ok());
    }

    #[test]
    fn non_object_body_has_no_fields() {
        for body in [json!(null), json!([1, 2]), json!("policy_id"), json!(42)] {
            assert!(validate_required_fields(&body, &["policy_id"]).is_err());
        }
    }

    #[test]
    fn extract_policy_id_accepts_string() {
        let id = extract_policy_id(Ok(Json(json!({"policy_id": "SH-2024-987654"})))).unwrap();
        assert_eq!(id.as_str(), "SH-2024-987654");
    }

    #[test]
    fn extract_policy_id_accepts_non_string_values() {
        let cases = [
            (json!({"policy_id": 12345}), "12345"),
            (json!({"policy_id": false}), "false"),
            (json!({"policy_id": {"a": 1}}), r#"{"a":1}"#),
            (json!({"policy_id": [1, 2]}), "[1,2]"),
        ];
        for (body, expected) in cases {
            let id = extract_policy_id(Ok(Json(body))).unwrap();
            assert_eq!(id.as_str(), expected);
        }
    }

    #[test]
    fn extract_policy_id_reports_missing_field() {
        let err = extract_policy_id(Ok(Json(json!({"policy": "SH-1"})))).unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m.contains("policy_id")));
    }
}
