//! # Error Hierarchy
//!
//! Structured errors for policy data lookups, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.

use thiserror::Error;

use crate::policy::PolicyCategory;

/// Failure reported by a [`PolicyDataProvider`](crate::PolicyDataProvider).
///
/// The API layer maps every variant to a generic internal error; the detail
/// carried here is for operator logs only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The backing data source could not be reached.
    #[error("policy data source unavailable: {0}")]
    Unavailable(String),

    /// The provider could not produce a payload for the requested category.
    #[error("failed to produce {category} data for policy {policy_id}: {reason}")]
    Generation {
        /// Category being produced when the failure occurred.
        category: PolicyCategory,
        /// Policy the payload was requested for.
        policy_id: String,
        /// Human-readable cause.
        reason: String,
    },
}
