//! Response document construction.
//!
//! The builder owns everything that is fixed at startup (device identity
//! and the port table) and reads live figures from a [`DeviceInfo`] each
//! time a document is built.

use sensorport_types::{
    ErrorDocument, ParsedRequest, PortAssignment, PortsDocument, RootDocument, SensorDocument,
    SensorReading, StatusDocument,
};

use crate::config::DeviceConfig;
use crate::parser::ParseError;
use crate::platform::DeviceInfo;
use crate::response::ApiResponse;

/// Endpoint templates listed by `GET /`.
pub const ENDPOINTS: [&str; 3] = [
    "GET /{port}/{sensor_type} - Get sensor reading",
    "GET /status - Get device status",
    "GET /ports - Get port assignments",
];

/// Where the empty-path redirect points.
pub const REDIRECT_LOCATION: &str = "/";

/// Names and version the device reports about itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceIdentity {
    /// Short device name (status and reading documents).
    pub name: String,
    /// API name (root document).
    pub api_name: String,
    /// API protocol version (root document).
    pub version: String,
}

impl DeviceIdentity {
    /// Take the identity fields from the `device` config section.
    pub fn from_config(device: &DeviceConfig) -> Self {
        Self {
            name: device.name.clone(),
            api_name: device.api_name.clone(),
            version: device.version.clone(),
        }
    }
}

impl Default for DeviceIdentity {
    fn default() -> Self {
        Self::from_config(&DeviceConfig::default())
    }
}

/// Builds every response document the device can send.
#[derive(Debug, Clone)]
pub struct ResponseBuilder {
    identity: DeviceIdentity,
    ports: PortAssignment,
}

impl ResponseBuilder {
    /// Create a builder for a fixed identity and port table.
    pub const fn new(identity: DeviceIdentity, ports: PortAssignment) -> Self {
        Self { identity, ports }
    }

    /// The port table this builder reports.
    pub const fn ports(&self) -> &PortAssignment {
        &self.ports
    }

    /// `GET /` document.
    pub fn build_root(&self, device: &dyn DeviceInfo) -> ApiResponse {
        ApiResponse::Root(RootDocument {
            device: self.identity.api_name.clone(),
            version: self.identity.version.clone(),
            mac_address: device.mac_address(),
            ip_address: device.ip_address(),
            endpoints: ENDPOINTS.to_vec(),
            port_assignments: self.ports,
        })
    }

    /// `GET /status` document.
    pub fn build_status(&self, device: &dyn DeviceInfo) -> ApiResponse {
        ApiResponse::Status(StatusDocument {
            device: self.identity.name.clone(),
            status: "online",
            uptime_ms: device.uptime_ms(),
            free_heap: device.free_heap(),
            wifi_rssi: device.rssi(),
            mac_address: device.mac_address(),
            ip_address: device.ip_address(),
        })
    }

    /// `GET /ports` document.
    pub const fn build_ports(&self) -> ApiResponse {
        ApiResponse::Ports(PortsDocument {
            port_assignments: self.ports,
        })
    }

    /// Sensor reading document for a validated request.
    pub fn build_sensor_response(
        &self,
        device: &dyn DeviceInfo,
        parsed: ParsedRequest,
        reading: &SensorReading,
    ) -> ApiResponse {
        ApiResponse::Reading(SensorDocument {
            device: self.identity.name.clone(),
            mac_address: device.mac_address(),
            timestamp: device.uptime_ms(),
            sensor: reading.kind,
            port: parsed.port,
            assigned_sensor: self.ports.assignment_for(parsed.port),
            status: reading.status(),
            value: round_to_hundredths(reading.value),
            unit: reading.unit,
        })
    }

    /// Error document with an explicit status code.
    pub fn build_error(status_code: u16, message: impl Into<String>) -> ApiResponse {
        ApiResponse::Error(ErrorDocument {
            error: message.into(),
            status_code,
        })
    }

    /// Error document for a rejected sensor path.
    pub fn build_parse_error(err: &ParseError) -> ApiResponse {
        Self::build_error(err.status_code(), err.to_string())
    }

    /// Redirect to the root document.
    pub const fn build_redirect() -> ApiResponse {
        ApiResponse::Redirect {
            location: REDIRECT_LOCATION,
        }
    }
}

/// Round half away from zero to two decimal places.
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::net::{IpAddr, Ipv4Addr};

    use sensorport_types::{PortIndex, ReadingStatus, SensorKind};

    use super::*;
    use crate::platform::StaticDeviceInfo;

    fn device() -> StaticDeviceInfo {
        StaticDeviceInfo {
            mac_address: String::from("24:0A:C4:00:00:01"),
            ip_address: IpAddr::V4(Ipv4Addr::new(192, 168, 1, 171)),
            uptime_ms: 1_234,
            free_heap: 200_000,
            rssi: -61,
        }
    }

    fn builder() -> ResponseBuilder {
        ResponseBuilder::new(DeviceIdentity::default(), PortAssignment::default())
    }

    fn body(resp: &ApiResponse) -> serde_json::Value {
        resp.body_json()
            .ok()
            .flatten()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    }

    #[test]
    fn root_document() {
        let resp = builder().build_root(&device());
        assert_eq!(resp.status_code(), 200);
        let json = body(&resp);
        assert_eq!(json["device"], "ESP32 Sensor API");
        assert_eq!(json["version"], "1.0");
        assert_eq!(json["mac_address"], "24:0A:C4:00:00:01");
        assert_eq!(json["ip_address"], "192.168.1.171");
        assert_eq!(json["endpoints"].as_array().map(Vec::len), Some(3));
        assert_eq!(json["port_assignments"]["2"], "vibration");
    }

    #[test]
    fn status_document() {
        let resp = builder().build_status(&device());
        assert_eq!(resp.status_code(), 200);
        let json = body(&resp);
        assert_eq!(json["device"], "ESP32");
        assert_eq!(json["status"], "online");
        assert_eq!(json["uptime_ms"], 1_234);
        assert_eq!(json["free_heap"], 200_000);
        assert_eq!(json["wifi_rssi"], -61);
    }

    #[test]
    fn ports_document() {
        let json = body(&builder().build_ports());
        let map = json["port_assignments"].as_object().cloned().unwrap_or_default();
        assert_eq!(map.len(), 4);
        assert_eq!(map.get("3").and_then(|v| v.as_str()), Some("temperature"));
    }

    #[test]
    fn sensor_document_rounds_value() {
        let Ok(port) = PortIndex::new(0) else {
            panic!("port 0 is valid");
        };
        let parsed = ParsedRequest {
            port,
            requested_kind: SensorKind::Temperature,
        };
        let reading = SensorReading::active(SensorKind::Temperature, 24.126_7);
        let resp = builder().build_sensor_response(&device(), parsed, &reading);
        let ApiResponse::Reading(doc) = resp else {
            panic!("expected a reading");
        };
        assert!((doc.value - 24.13).abs() < 1e-9);
        assert_eq!(doc.sensor, reading.kind);
        assert_eq!(doc.status, ReadingStatus::Active);
        assert_eq!(doc.assigned_sensor, SensorKind::Temperature);
        assert_eq!(doc.timestamp, 1_234);
        assert_eq!(doc.unit, "°C");
    }

    #[test]
    fn not_assigned_document_keeps_requested_unit() {
        let Ok(port) = PortIndex::new(1) else {
            panic!("port 1 is valid");
        };
        let parsed = ParsedRequest {
            port,
            requested_kind: SensorKind::Vibration,
        };
        let reading = SensorReading::not_assigned(SensorKind::Vibration);
        let json = body(&builder().build_sensor_response(&device(), parsed, &reading));
        assert_eq!(json["status"], "not_assigned");
        assert_eq!(json["assigned_sensor"], "humidity");
        assert_eq!(json["value"], 0.0);
        assert_eq!(json["unit"], "mm/s");
    }

    #[test]
    fn error_and_redirect() {
        let err = ResponseBuilder::build_parse_error(&ParseError::MalformedPath);
        assert_eq!(err.status_code(), 400);
        let json = body(&err);
        assert_eq!(json["status_code"], 400);
        assert_eq!(json["error"], "Invalid URL format. Use: /{port}/{sensor_type}");

        let redirect = ResponseBuilder::build_redirect();
        assert_eq!(redirect.status_code(), 302);
        assert_eq!(redirect.location(), Some("/"));
        assert_eq!(redirect.body_json().ok(), Some(None));
    }

    #[test]
    fn rounding() {
        assert!((round_to_hundredths(0.6049) - 0.6).abs() < 1e-9);
        assert!((round_to_hundredths(-1.005_1) + 1.01).abs() < 1e-9);
        assert!(round_to_hundredths(0.0).abs() < f64::EPSILON);
    }
}
