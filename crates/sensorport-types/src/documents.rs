//! Serializable response documents.
//!
//! Field declaration order is the order keys appear on the wire.

use std::net::IpAddr;

use serde::Serialize;

use crate::port::{PortAssignment, PortIndex};
use crate::reading::ReadingStatus;
use crate::sensor::SensorKind;

/// `GET /` -- device identity, endpoint list and the port table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootDocument {
    /// Human-readable API name.
    pub device: String,
    /// API protocol version.
    pub version: String,
    /// Hardware identifier of the device.
    pub mac_address: String,
    /// Address the device is reachable on.
    pub ip_address: IpAddr,
    /// Documented endpoint templates.
    pub endpoints: Vec<&'static str>,
    /// The full port assignment table.
    pub port_assignments: PortAssignment,
}

/// `GET /status` -- liveness and resource figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusDocument {
    /// Short device name.
    pub device: String,
    /// Always `"online"` while the device answers.
    pub status: &'static str,
    /// Milliseconds since the process started.
    pub uptime_ms: u64,
    /// Free heap in bytes.
    pub free_heap: u64,
    /// Link signal strength in dBm.
    pub wifi_rssi: i32,
    /// Hardware identifier of the device.
    pub mac_address: String,
    /// Address the device is reachable on.
    pub ip_address: IpAddr,
}

/// `GET /ports` -- just the port table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortsDocument {
    /// The full port assignment table.
    pub port_assignments: PortAssignment,
}

/// `GET /{port}/{sensor}` -- one sensor reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorDocument {
    /// Short device name.
    pub device: String,
    /// Hardware identifier of the device.
    pub mac_address: String,
    /// Monotonic milliseconds at which the reading was taken.
    pub timestamp: u64,
    /// The requested sensor kind.
    pub sensor: SensorKind,
    /// The requested port.
    pub port: PortIndex,
    /// The kind actually wired to `port`.
    pub assigned_sensor: SensorKind,
    /// `active` or `not_assigned`.
    pub status: ReadingStatus,
    /// Reading rounded to two decimals; `0.0` when not assigned.
    pub value: f64,
    /// Unit of the requested kind.
    pub unit: &'static str,
}

/// Body of every 4xx/5xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDocument {
    /// Human-readable message.
    pub error: String,
    /// Mirrors the HTTP status code.
    pub status_code: u16,
}
