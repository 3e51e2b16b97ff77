//! Sensorport device binary.
//!
//! Serves the sensor API of a four-port device from a host process.
//!
//! # Startup Sequence
//!
//! 1. Load configuration (`SENSORPORT_CONFIG`, else `sensorport.yaml`,
//!    else defaults; env overrides apply in every case)
//! 2. Initialize structured logging from the `logging` section
//! 3. Start the platform clock and build the request service
//! 4. Log the startup banner
//! 5. Serve until `Ctrl-C`

mod banner;
mod error;
mod logging;

use std::path::PathBuf;
use std::sync::Arc;

use sensorport_core::config::SensorportConfig;
use sensorport_core::platform::{DeviceInfo, HostPlatform};
use sensorport_http::{AppState, ServerConfig};
use tracing::info;

use crate::error::DeviceError;

/// Default config file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "sensorport.yaml";

#[tokio::main]
async fn main() -> Result<(), DeviceError> {
    // 1. Configuration comes first; it decides the log level and format.
    let (config, source) = load_config()?;

    // 2. Logging.
    logging::init(&config.logging)?;
    match &source {
        Some(path) => info!(path = %path.display(), "Configuration loaded"),
        None => info!("Config file not found, using defaults"),
    }

    // 3. Platform and request service.
    let device: Arc<dyn DeviceInfo> = Arc::new(HostPlatform::from_config(&config));
    let state = Arc::new(AppState::from_config(&config, Arc::clone(&device)));
    info!(
        seeded = config.sensors.seed.is_some(),
        port_parse_policy = ?config.sensors.port_parse_policy,
        "Sensor service ready"
    );

    // 4. Banner.
    banner::log(&config, device.as_ref());

    // 5. Serve.
    let server_config = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        max_in_flight: config.server.max_in_flight,
    };
    sensorport_http::start_server(&server_config, state).await?;

    info!("sensorport-device shutdown complete");
    Ok(())
}

/// Resolve and load the configuration file.
///
/// Returns the path it was read from, or `None` when defaults were used.
fn load_config() -> Result<(SensorportConfig, Option<PathBuf>), DeviceError> {
    let path = std::env::var_os("SENSORPORT_CONFIG")
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);

    if path.exists() {
        let config = SensorportConfig::from_file(&path)?;
        Ok((config, Some(path)))
    } else {
        // Empty YAML still picks up env overrides and validation.
        let config = SensorportConfig::parse("")?;
        Ok((config, None))
    }
}
