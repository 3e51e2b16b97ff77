//! Platform collaborators the request core reads from.
//!
//! The core never talks to hardware or the network stack directly. It
//! asks a [`DeviceInfo`] for the figures that appear in responses. Two
//! implementations ship here:
//!
//! - [`HostPlatform`] -- a monotonic clock started at construction plus
//!   configured identity and link figures, used by the device binary.
//! - [`StaticDeviceInfo`] -- fixed values, for tests and embedding.

use std::net::IpAddr;
use std::time::Instant;

use crate::config::SensorportConfig;

/// Source of device identity and health figures.
pub trait DeviceInfo: Send + Sync {
    /// Hardware identifier, `AA:BB:CC:DD:EE:FF` form.
    fn mac_address(&self) -> String;

    /// Address the device is reachable on.
    fn ip_address(&self) -> IpAddr;

    /// Milliseconds since start. Never decreases.
    fn uptime_ms(&self) -> u64;

    /// Free heap in bytes.
    fn free_heap(&self) -> u64;

    /// Link signal strength in dBm.
    fn rssi(&self) -> i32;
}

/// Device figures for a process running on a host machine.
#[derive(Debug, Clone)]
pub struct HostPlatform {
    started: Instant,
    mac_address: String,
    ip_address: IpAddr,
    free_heap: u64,
    rssi: i32,
}

impl HostPlatform {
    /// Start the uptime clock now.
    pub fn new(mac_address: String, ip_address: IpAddr, free_heap: u64, rssi: i32) -> Self {
        Self {
            started: Instant::now(),
            mac_address,
            ip_address,
            free_heap,
            rssi,
        }
    }

    /// Build from the `device` and `network` config sections.
    pub fn from_config(config: &SensorportConfig) -> Self {
        Self::new(
            config.device.mac_address.clone(),
            IpAddr::V4(config.network.local_ip),
            config.device.free_heap,
            config.device.rssi,
        )
    }
}

impl DeviceInfo for HostPlatform {
    fn mac_address(&self) -> String {
        self.mac_address.clone()
    }

    fn ip_address(&self) -> IpAddr {
        self.ip_address
    }

    fn uptime_ms(&self) -> u64 {
        u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    fn free_heap(&self) -> u64 {
        self.free_heap
    }

    fn rssi(&self) -> i32 {
        self.rssi
    }
}

/// Fixed device figures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticDeviceInfo {
    /// Reported hardware identifier.
    pub mac_address: String,
    /// Reported address.
    pub ip_address: IpAddr,
    /// Reported uptime.
    pub uptime_ms: u64,
    /// Reported free heap.
    pub free_heap: u64,
    /// Reported signal strength.
    pub rssi: i32,
}

impl DeviceInfo for StaticDeviceInfo {
    fn mac_address(&self) -> String {
        self.mac_address.clone()
    }

    fn ip_address(&self) -> IpAddr {
        self.ip_address
    }

    fn uptime_ms(&self) -> u64 {
        self.uptime_ms
    }

    fn free_heap(&self) -> u64 {
        self.free_heap
    }

    fn rssi(&self) -> i32 {
        self.rssi
    }
}
