//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor.
//!
//! Everything in here is immutable after startup: the configuration, the
//! policy data provider, and the optional Prometheus handle. Cloning the state
//! clones `Arc`s, so requests run concurrently without locks.

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use polis_core::{PolicyDataProvider, SyntheticProvider};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Startup configuration.
    pub config: Arc<AppConfig>,
    /// Source of policy data.
    pub provider: Arc<dyn PolicyDataProvider>,
    /// Render handle of the installed Prometheus recorder, if any.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Default configuration with the synthetic provider and no metrics.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Given configuration with the synthetic provider and no metrics.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
            provider: Arc::new(SyntheticProvider::new()),
            metrics: None,
        }
    }

    /// Replace the policy data provider.
    pub fn with_provider(mut self, provider: Arc<dyn PolicyDataProvider>) -> Self {
        self.provider = provider;
        self
    }

    /// Attach a Prometheus handle; enables `/metrics`.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("metrics_enabled", &self.metrics.is_some())
            .finish_non_exhaustive()
    }
}
