//! Request core for the Sensorport device API.
//!
//! Maps an incoming `(method, path)` to exactly one [`ApiResponse`]. The
//! crate has no knowledge of sockets or HTTP framing; the host adapter
//! feeds it requests and writes out whatever it returns.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `sensorport.yaml`.
//! - [`router`] -- Pure `(method, path)` → [`Route`] resolution.
//! - [`parser`] -- `/{port}/{sensor}` parsing and validation.
//! - [`simulator`] -- Seeded pseudo-random sensor values.
//! - [`builder`] -- Response document construction.
//! - [`response`] -- The transport-agnostic [`ApiResponse`].
//! - [`platform`] -- The [`DeviceInfo`] collaborator trait.
//! - [`service`] -- [`SensorService`], which ties the above together.
//!
//! [`Route`]: router::Route
//! [`ApiResponse`]: response::ApiResponse
//! [`DeviceInfo`]: platform::DeviceInfo
//! [`SensorService`]: service::SensorService

pub mod builder;
pub mod config;
pub mod parser;
pub mod platform;
pub mod response;
pub mod router;
pub mod service;
pub mod simulator;

pub use response::ApiResponse;
pub use service::SensorService;
