//! Application state
//!
//! Holds the shared state for the Axum application including the service
//! context, the upstream readiness probe, and configuration.

use std::sync::Arc;

use vitrine_common::AppConfig;
use vitrine_core::UpstreamProbe;
use vitrine_service::ServiceContext;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    /// Upstream reachability probe for readiness checks
    probe: Arc<dyn UpstreamProbe>,
    /// Application configuration
    config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(
        service_context: ServiceContext,
        probe: Arc<dyn UpstreamProbe>,
        config: AppConfig,
    ) -> Self {
        Self {
            service_context: Arc::new(service_context),
            probe,
            config: Arc::new(config),
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the upstream readiness probe
    pub fn probe(&self) -> &dyn UpstreamProbe {
        self.probe.as_ref()
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("probe", &"dyn UpstreamProbe")
            .field("config", &"AppConfig")
            .finish()
    }
}
