//! Transient per-request values.

use serde::Serialize;

use crate::port::PortIndex;
use crate::sensor::SensorKind;

/// A successfully validated `/{port}/{sensor}` path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedRequest {
    /// The requested port, already range-checked.
    pub port: PortIndex,
    /// The sensor kind named in the path.
    pub requested_kind: SensorKind,
}

/// Whether the requested kind is the one wired to the port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingStatus {
    /// The port carries the requested kind and a reading was taken.
    Active,
    /// The port carries a different kind; no reading was taken.
    NotAssigned,
}

/// The outcome of sampling (or declining to sample) one port.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorReading {
    /// The requested sensor kind.
    pub kind: SensorKind,
    /// The simulated value, or `0.0` when the port is not assigned.
    pub value: f64,
    /// Unit of `kind`; reported even when no reading was taken.
    pub unit: &'static str,
    /// True iff the port is assigned `kind`.
    pub is_assigned: bool,
}

impl SensorReading {
    /// A reading taken from an assigned port.
    pub const fn active(kind: SensorKind, value: f64) -> Self {
        Self {
            kind,
            value,
            unit: kind.unit(),
            is_assigned: true,
        }
    }

    /// Placeholder for a port that carries a different kind.
    pub const fn not_assigned(kind: SensorKind) -> Self {
        Self {
            kind,
            value: 0.0,
            unit: kind.unit(),
            is_assigned: false,
        }
    }

    /// Status tag reported alongside the value.
    pub const fn status(&self) -> ReadingStatus {
        if self.is_assigned {
            ReadingStatus::Active
        } else {
            ReadingStatus::NotAssigned
        }
    }
}
