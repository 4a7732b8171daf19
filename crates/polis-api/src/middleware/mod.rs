//! # HTTP Middleware
//!
//! Cross-cutting layers applied in [`crate::app`]:
//!
//! - `tracing_layer`: per-request tracing spans via `tower_http::trace`.
//! - `metrics`: request counters and latency histograms for Prometheus.
//! - `panic`: converts handler panics into the `INTERNAL_ERROR` envelope.
//! - `cors`: cross-origin policy for the `/api/*` routes.

pub mod cors;
pub mod metrics;
pub mod panic;
pub mod tracing_layer;
