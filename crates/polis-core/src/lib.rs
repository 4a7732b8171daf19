#![deny(missing_docs)]

//! # polis-core: Foundational Types for the Polis Insurance API
//!
//! This crate defines the domain types every other crate in the workspace
//! depends on. It has no internal crate dependencies and knows nothing about
//! HTTP: only `serde`, `thiserror`, `chrono`, and `rand` from the external
//! ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** A policy identifier is a
//!    [`PolicyId`], not a bare `String`. Timestamps are UTC-only [`Timestamp`]s.
//!
//! 2. **One payload type per policy category.** The six categories served by
//!    the API are enumerated once in [`PolicyCategory`]; each has a typed
//!    payload in [`policy`], and [`CompletePolicyInfo`] aggregates all six.
//!
//! 3. **Pluggable data source.** Handlers only see the [`PolicyDataProvider`]
//!    trait. [`SyntheticProvider`] is the bundled implementation and generates
//!    placeholder data with `rand`; nothing is persisted.
//!
//! 4. **[`ProviderError`] instead of panics.** Provider failures are values
//!    that callers propagate with `?`.

pub mod error;
pub mod identity;
pub mod policy;
pub mod provider;
pub mod synthetic;
pub mod temporal;

// Re-export primary types at crate root for ergonomic imports.
pub use error::ProviderError;
pub use identity::PolicyId;
pub use policy::{
    Beneficiary, BeneficiaryInfo, ClaimsBalance, CompletePolicyInfo, CoverageDetails,
    CoverageLine, MedicalHistory, PaymentMethod, PaymentStatus, PolicyCategory, PolicyState,
    PolicyStatus, PremiumInfo, ScreeningRequirement,
};
pub use provider::PolicyDataProvider;
pub use synthetic::SyntheticProvider;
pub use temporal::Timestamp;
