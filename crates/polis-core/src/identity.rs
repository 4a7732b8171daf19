//! # Identity Newtypes
//!
//! Policy identifiers are opaque tokens issued by the insurer (for example
//! `SH-2024-987654`). The API performs no format validation beyond presence,
//! so construction is infallible; the newtype exists so a policy identifier
//! cannot be confused with any other string flowing through a handler.

use serde::{Deserialize, Serialize};

/// Opaque identifier of an insurance policy.
///
/// Serializes as a bare JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolicyId(String);

impl PolicyId {
    /// Wrap a policy identifier token.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Access the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PolicyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PolicyId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
