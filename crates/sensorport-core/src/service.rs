//! The request core: one call in, one [`ApiResponse`] out.
//!
//! [`SensorService`] ties the router, path parser, port table, value
//! simulator and response builder together. It holds no per-request
//! state, so a single instance is shared by every connection.

use std::sync::Arc;

use sensorport_types::{ParsedRequest, PortAssignment, SensorReading};
use tracing::debug;

use crate::builder::{DeviceIdentity, ResponseBuilder};
use crate::config::SensorportConfig;
use crate::parser::{self, PathOutcome, PortParsePolicy};
use crate::platform::DeviceInfo;
use crate::response::ApiResponse;
use crate::router::Route;
use crate::simulator::ValueSimulator;

/// Answers device API requests.
pub struct SensorService {
    builder: ResponseBuilder,
    simulator: ValueSimulator,
    policy: PortParsePolicy,
    device: Arc<dyn DeviceInfo>,
}

impl SensorService {
    /// Assemble a service from its parts.
    pub fn new(
        builder: ResponseBuilder,
        simulator: ValueSimulator,
        policy: PortParsePolicy,
        device: Arc<dyn DeviceInfo>,
    ) -> Self {
        Self {
            builder,
            simulator,
            policy,
            device,
        }
    }

    /// Build a service from configuration, seeding the simulator once.
    pub fn from_config(config: &SensorportConfig, device: Arc<dyn DeviceInfo>) -> Self {
        Self::new(
            ResponseBuilder::new(
                DeviceIdentity::from_config(&config.device),
                config.port_assignment(),
            ),
            ValueSimulator::new(config.sensors.seed),
            config.sensors.port_parse_policy,
            device,
        )
    }

    /// The fixed port table.
    pub const fn port_assignment(&self) -> &PortAssignment {
        self.builder.ports()
    }

    /// Answer one request.
    pub fn handle(&self, method: &str, path: &str) -> ApiResponse {
        let device = self.device.as_ref();
        match Route::resolve(method, path) {
            Route::Root => self.builder.build_root(device),
            Route::Status => self.builder.build_status(device),
            Route::Ports => self.builder.build_ports(),
            Route::Sensor(path) => self.handle_sensor_path(path),
        }
    }

    /// Answer a request that matched no fixed route.
    pub fn handle_sensor_path(&self, path: &str) -> ApiResponse {
        match parser::parse(path, self.policy) {
            Ok(PathOutcome::Redirect) => {
                debug!(path, "empty sensor path, redirecting to root");
                ResponseBuilder::build_redirect()
            }
            Ok(PathOutcome::Reading(parsed)) => {
                let reading = self.read(parsed);
                debug!(
                    port = %parsed.port,
                    sensor = %parsed.requested_kind,
                    assigned = reading.is_assigned,
                    "sensor request"
                );
                self.builder
                    .build_sensor_response(self.device.as_ref(), parsed, &reading)
            }
            Err(err) => {
                debug!(path, error = ?err, "rejected sensor path");
                ResponseBuilder::build_parse_error(&err)
            }
        }
    }

    /// Sample the requested port. The simulator is only consulted when
    /// the port carries the requested kind.
    pub fn read(&self, parsed: ParsedRequest) -> SensorReading {
        let kind = parsed.requested_kind;
        if self.port_assignment().is_assigned(parsed.port, kind) {
            SensorReading::active(kind, self.simulator.simulate(kind))
        } else {
            SensorReading::not_assigned(kind)
        }
    }
}

impl std::fmt::Debug for SensorService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SensorService")
            .field("builder", &self.builder)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::net::{IpAddr, Ipv4Addr};

    use sensorport_types::{PortIndex, SensorKind};

    use super::*;
    use crate::platform::StaticDeviceInfo;

    fn service(seed: u64) -> SensorService {
        let config = SensorportConfig::default();
        let device = Arc::new(StaticDeviceInfo {
            mac_address: config.device.mac_address.clone(),
            ip_address: IpAddr::V4(Ipv4Addr::LOCALHOST),
            uptime_ms: 10,
            free_heap: 1,
            rssi: -40,
        });
        SensorService::new(
            ResponseBuilder::new(DeviceIdentity::default(), PortAssignment::default()),
            ValueSimulator::seeded(seed),
            PortParsePolicy::Lenient,
            device,
        )
    }

    fn reading_doc(resp: ApiResponse) -> sensorport_types::SensorDocument {
        match resp {
            ApiResponse::Reading(doc) => doc,
            other => panic!("expected a reading, got {other:?}"),
        }
    }

    #[test]
    fn every_port_and_kind_reports_assignment() {
        let svc = service(1);
        for port in PortIndex::all() {
            for kind in SensorKind::ALL {
                let path = format!("/{port}/{kind}");
                let resp = svc.handle("GET", &path);
                assert_eq!(resp.status_code(), 200);
                let doc = reading_doc(resp);
                assert_eq!(doc.port, port);
                assert_eq!(doc.sensor, kind);
                assert_eq!(
                    doc.status == sensorport_types::ReadingStatus::Active,
                    svc.port_assignment().assignment_for(port) == kind
                );
            }
        }
    }

    #[test]
    fn assigned_temperature_is_in_range() {
        let svc = service(2);
        for _ in 0..200 {
            let doc = reading_doc(svc.handle("GET", "/0/temperature"));
            assert!((23.0..=27.0).contains(&doc.value), "{}", doc.value);
            assert_eq!(doc.unit, "°C");
        }
    }

    #[test]
    fn unassigned_port_does_not_consume_randomness() {
        let a = service(99);
        let b = service(99);

        let skipped = reading_doc(a.handle("GET", "/1/temperature"));
        assert!(skipped.value.abs() < f64::EPSILON);

        let from_a = reading_doc(a.handle("GET", "/0/temperature"));
        let from_b = reading_doc(b.handle("GET", "/0/temperature"));
        assert!((from_a.value - from_b.value).abs() < f64::EPSILON);
    }

    #[test]
    fn fixed_routes_dispatch() {
        let svc = service(3);
        assert!(matches!(svc.handle("GET", "/"), ApiResponse::Root(_)));
        assert!(matches!(svc.handle("GET", "/status"), ApiResponse::Status(_)));
        assert!(matches!(svc.handle("GET", "/ports"), ApiResponse::Ports(_)));
    }

    #[test]
    fn non_get_root_redirects() {
        let svc = service(4);
        let resp = svc.handle("POST", "/");
        assert_eq!(resp.status_code(), 302);
        assert_eq!(resp.location(), Some("/"));
    }

    #[test]
    fn errors_are_400() {
        let svc = service(5);
        for path in ["/5/temperature", "/0/pressure", "/0/temperature/extra", "/nope"] {
            let resp = svc.handle("GET", path);
            assert_eq!(resp.status_code(), 400, "{path}");
            assert!(matches!(resp, ApiResponse::Error(_)));
        }
    }
}
