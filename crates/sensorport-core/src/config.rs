//! Configuration loading and typed config structures for the device API.
//!
//! The configuration lives in `sensorport.yaml`. This module defines
//! strongly-typed structs that mirror the YAML structure and a loader that
//! reads, overrides and validates the file. Every field has a default, so
//! an empty file (or no file at all) yields a working device.

use std::net::Ipv4Addr;
use std::path::Path;

use sensorport_types::{NUM_PORTS, PortAssignment, SensorKind};
use serde::Deserialize;

use crate::parser::PortParsePolicy;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A value parsed but cannot be used.
    #[error("invalid config value for {field}: {reason}")]
    Invalid {
        /// Dotted path of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level device configuration.
///
/// Mirrors the structure of `sensorport.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SensorportConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerSettings,

    /// Device identity and simulated platform figures.
    #[serde(default)]
    pub device: DeviceConfig,

    /// Static network addressing.
    #[serde(default)]
    pub network: NetworkConfig,

    /// Port table and reading behavior.
    #[serde(default)]
    pub sensors: SensorsConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SensorportConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values for the listener:
    /// - `SENSORPORT_HOST` overrides `server.host`
    /// - `SENSORPORT_PORT` overrides `server.port`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value fails validation.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value fails validation.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // serde_yml maps an empty document to unit, not to an empty mapping.
        let mut config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yml::from_str(yaml)?
        };
        config.server.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that deserialize fine but are unusable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_mac_address(&self.device.mac_address) {
            return Err(ConfigError::Invalid {
                field: "device.mac_address",
                reason: format!(
                    "expected six colon-separated hex octets, got {:?}",
                    self.device.mac_address
                ),
            });
        }
        if self.server.max_in_flight == 0 {
            return Err(ConfigError::Invalid {
                field: "server.max_in_flight",
                reason: String::from("must be at least 1"),
            });
        }
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "server.host",
                reason: String::from("must not be empty"),
            });
        }
        Ok(())
    }

    /// The port assignment table described by this config.
    pub const fn port_assignment(&self) -> PortAssignment {
        PortAssignment::new(self.sensors.port_assignments)
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSettings {
    /// Address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to listen on.
    #[serde(default = "default_http_port")]
    pub port: u16,

    /// Requests processed at once. The device answers one at a time.
    #[serde(default = "default_max_in_flight")]
    pub max_in_flight: usize,
}

impl ServerSettings {
    /// Override listener settings with environment variables when set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `SENSORPORT_PORT` is not a
    /// valid TCP port number.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("SENSORPORT_HOST") {
            self.host = val;
        }
        if let Ok(val) = std::env::var("SENSORPORT_PORT") {
            self.port = val.parse().map_err(|e| ConfigError::Invalid {
                field: "server.port",
                reason: format!("SENSORPORT_PORT={val}: {e}"),
            })?;
        }
        Ok(())
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_http_port(),
            max_in_flight: default_max_in_flight(),
        }
    }
}

/// Device identity and the platform figures reported by `/status`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeviceConfig {
    /// Short device name reported by `/status` and readings.
    #[serde(default = "default_device_name")]
    pub name: String,

    /// API name reported by `/`.
    #[serde(default = "default_api_name")]
    pub api_name: String,

    /// API protocol version reported by `/`.
    #[serde(default = "default_api_version")]
    pub version: String,

    /// Hardware identifier, `AA:BB:CC:DD:EE:FF` form.
    #[serde(default = "default_mac_address")]
    pub mac_address: String,

    /// Free heap in bytes reported by `/status`.
    #[serde(default = "default_free_heap")]
    pub free_heap: u64,

    /// Link signal strength in dBm reported by `/status`.
    #[serde(default = "default_rssi")]
    pub rssi: i32,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            name: default_device_name(),
            api_name: default_api_name(),
            version: default_api_version(),
            mac_address: default_mac_address(),
            free_heap: default_free_heap(),
            rssi: default_rssi(),
        }
    }
}

/// Static IPv4 addressing of the device.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NetworkConfig {
    /// Address the device reports and is reachable on.
    #[serde(default = "default_local_ip")]
    pub local_ip: Ipv4Addr,

    /// Default gateway.
    #[serde(default = "default_gateway")]
    pub gateway: Ipv4Addr,

    /// Subnet mask.
    #[serde(default = "default_subnet")]
    pub subnet: Ipv4Addr,

    /// Primary DNS resolver.
    #[serde(default = "default_primary_dns")]
    pub primary_dns: Ipv4Addr,

    /// Secondary DNS resolver.
    #[serde(default = "default_secondary_dns")]
    pub secondary_dns: Ipv4Addr,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            local_ip: default_local_ip(),
            gateway: default_gateway(),
            subnet: default_subnet(),
            primary_dns: default_primary_dns(),
            secondary_dns: default_secondary_dns(),
        }
    }
}

/// Port table and reading behavior.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SensorsConfig {
    /// One sensor kind per port, in port order. Exactly `NUM_PORTS` long.
    #[serde(default = "default_port_assignments")]
    pub port_assignments: [SensorKind; NUM_PORTS],

    /// Fixed seed for the value simulator. Unset seeds from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// How the port segment of a sensor path is turned into a number.
    #[serde(default)]
    pub port_parse_policy: PortParsePolicy,
}

impl Default for SensorsConfig {
    fn default() -> Self {
        Self {
            port_assignments: default_port_assignments(),
            seed: None,
            port_parse_policy: PortParsePolicy::default(),
        }
    }
}

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level used when `RUST_LOG` is unset (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn is_mac_address(s: &str) -> bool {
    let octets: Vec<&str> = s.split(':').collect();
    octets.len() == 6
        && octets
            .iter()
            .all(|o| o.len() == 2 && o.bytes().all(|b| b.is_ascii_hexdigit()))
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

const fn default_http_port() -> u16 {
    8080
}

const fn default_max_in_flight() -> usize {
    1
}

fn default_device_name() -> String {
    "ESP32".to_owned()
}

fn default_api_name() -> String {
    "ESP32 Sensor API".to_owned()
}

fn default_api_version() -> String {
    "1.0".to_owned()
}

fn default_mac_address() -> String {
    "24:0A:C4:00:00:01".to_owned()
}

const fn default_free_heap() -> u64 {
    237_568
}

const fn default_rssi() -> i32 {
    -55
}

const fn default_local_ip() -> Ipv4Addr {
    Ipv4Addr::new(192, 168, 1, 171)
}

const fn default_gateway() -> Ipv4Addr {
    Ipv4Addr::new(192, 168, 1, 254)
}

const fn default_subnet() -> Ipv4Addr {
    Ipv4Addr::new(255, 255, 255, 0)
}

const fn default_primary_dns() -> Ipv4Addr {
    Ipv4Addr::new(8, 8, 8, 8)
}

const fn default_secondary_dns() -> Ipv4Addr {
    Ipv4Addr::new(1, 1, 1, 1)
}

fn default_port_assignments() -> [SensorKind; NUM_PORTS] {
    PortAssignment::default().kinds()
}

fn default_log_level() -> String {
    "info".to_owned()
}
