//! Shared application state for the HTTP adapter.

use std::sync::Arc;

use sensorport_core::SensorService;
use sensorport_core::config::SensorportConfig;
use sensorport_core::platform::DeviceInfo;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor. The
/// service is immutable apart from its internally locked value
/// simulator, so no outer lock is needed.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The request core.
    pub service: Arc<SensorService>,
}

impl AppState {
    /// Wrap an already assembled service.
    pub const fn new(service: Arc<SensorService>) -> Self {
        Self { service }
    }

    /// Build the service from configuration and a platform.
    pub fn from_config(config: &SensorportConfig, device: Arc<dyn DeviceInfo>) -> Self {
        Self::new(Arc::new(SensorService::from_config(config, device)))
    }
}
