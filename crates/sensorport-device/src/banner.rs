//! Startup banner.
//!
//! Logged once the listener is about to start so an operator can see the
//! device identity, where to reach it and which sensor sits on which port.

use std::net::IpAddr;

use sensorport_core::config::SensorportConfig;
use sensorport_core::platform::DeviceInfo;
use sensorport_types::PortAssignment;
use tracing::info;

/// Human-readable endpoint list, in the order the banner prints it.
pub const ENDPOINT_SUMMARY: [&str; 4] = [
    "GET  /                    - API documentation",
    "GET  /status              - Device status",
    "GET  /ports               - Port assignments",
    "GET  /{port}/{sensor}     - Sensor readings",
];

/// Base URL the device is reachable at. Port 80 is left implicit.
pub fn base_url(ip: IpAddr, http_port: u16) -> String {
    let host = match ip {
        IpAddr::V4(v4) => v4.to_string(),
        IpAddr::V6(v6) => format!("[{v6}]"),
    };
    if http_port == 80 {
        format!("http://{host}")
    } else {
        format!("http://{host}:{http_port}")
    }
}

/// One reading URL per port, each naming the sensor wired to it.
pub fn example_urls(base: &str, ports: PortAssignment) -> Vec<String> {
    ports
        .iter()
        .map(|(port, kind)| format!("{base}/{port}/{kind}"))
        .collect()
}

/// Log the banner.
pub fn log(config: &SensorportConfig, device: &dyn DeviceInfo) {
    let network = &config.network;
    info!(
        device = %config.device.api_name,
        version = %config.device.version,
        mac_address = %device.mac_address(),
        "=== Sensor API server ==="
    );
    info!(
        ip_address = %device.ip_address(),
        gateway = %network.gateway,
        subnet = %network.subnet,
        primary_dns = %network.primary_dns,
        secondary_dns = %network.secondary_dns,
        "Network configured"
    );

    for endpoint in ENDPOINT_SUMMARY {
        info!("{endpoint}");
    }

    let ports = config.port_assignment();
    for (port, kind) in ports.iter() {
        info!(port = port.get(), sensor = %kind, unit = kind.unit(), "Port assignment");
    }

    let base = base_url(device.ip_address(), config.server.port);
    for url in example_urls(&base, ports) {
        info!(%url, "Example");
    }
}
