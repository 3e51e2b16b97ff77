//! Shared type definitions for the Sensorport device API.
//!
//! This crate is the single source of truth for the values that flow
//! between the request core and the HTTP adapter.
//!
//! # Modules
//!
//! - [`sensor`] -- Sensor kinds, their wire tokens and physical units
//! - [`port`] -- Port indices and the fixed port assignment table
//! - [`reading`] -- Per-request values (parsed path, sensor reading)
//! - [`documents`] -- Serializable response documents

pub mod documents;
pub mod port;
pub mod reading;
pub mod sensor;

// Re-export all public types at crate root for convenience.
pub use documents::{ErrorDocument, PortsDocument, RootDocument, SensorDocument, StatusDocument};
pub use port::{NUM_PORTS, PortAssignment, PortIndex, PortOutOfRange};
pub use reading::{ParsedRequest, ReadingStatus, SensorReading};
pub use sensor::SensorKind;
