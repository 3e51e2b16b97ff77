//! Port indices and the port assignment table.
//!
//! The device exposes [`NUM_PORTS`] physical ports. Each port has exactly
//! one [`SensorKind`] assigned at startup; the same kind may be assigned
//! to several ports. The table is never edited while the device serves
//! requests.

use core::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::sensor::SensorKind;

/// Number of sensor ports on the device.
pub const NUM_PORTS: usize = 4;

/// A port index known to be in `[0, NUM_PORTS)`.
///
/// The only way to obtain one is through [`PortIndex::new`], so every
/// lookup into a [`PortAssignment`] is in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PortIndex(usize);

/// Returned when a port number falls outside `[0, NUM_PORTS)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("port {0} is outside 0..{NUM_PORTS}")]
pub struct PortOutOfRange(pub i64);

impl PortIndex {
    /// The highest valid port index.
    pub const MAX: Self = Self(NUM_PORTS - 1);

    /// Validate a raw port number.
    ///
    /// Negative numbers are accepted as input so callers can hand over
    /// the result of a signed parse unchanged.
    pub fn new(raw: i64) -> Result<Self, PortOutOfRange> {
        usize::try_from(raw)
            .ok()
            .filter(|index| *index < NUM_PORTS)
            .map(Self)
            .ok_or(PortOutOfRange(raw))
    }

    /// The index as a plain `usize`.
    pub const fn get(self) -> usize {
        self.0
    }

    /// Iterate over every valid port index in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..NUM_PORTS).map(Self)
    }
}

impl fmt::Display for PortIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The fixed port → sensor kind table.
///
/// Serializes as a JSON object keyed by the decimal port index, e.g.
/// `{"0":"temperature","1":"humidity",...}`, in ascending index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortAssignment {
    kinds: [SensorKind; NUM_PORTS],
}

impl PortAssignment {
    /// Build a table from one kind per port.
    pub const fn new(kinds: [SensorKind; NUM_PORTS]) -> Self {
        Self { kinds }
    }

    /// The kind assigned to `port`.
    #[allow(clippy::indexing_slicing)] // PortIndex is range-checked on construction.
    pub const fn assignment_for(self, port: PortIndex) -> SensorKind {
        self.kinds[port.0]
    }

    /// Whether `port` is assigned `kind`.
    pub fn is_assigned(self, port: PortIndex, kind: SensorKind) -> bool {
        self.assignment_for(port) == kind
    }

    /// Iterate over `(port, kind)` pairs in ascending port order.
    pub fn iter(self) -> impl Iterator<Item = (PortIndex, SensorKind)> {
        PortIndex::all().zip(self.kinds)
    }

    /// The raw table, one entry per port.
    pub const fn kinds(self) -> [SensorKind; NUM_PORTS] {
        self.kinds
    }
}

impl Default for PortAssignment {
    fn default() -> Self {
        Self::new([
            SensorKind::Temperature,
            SensorKind::Humidity,
            SensorKind::Vibration,
            SensorKind::Temperature,
        ])
    }
}

impl Serialize for PortAssignment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(NUM_PORTS))?;
        for (port, kind) in self.iter() {
            map.serialize_entry(&port.to_string(), &kind)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_index_accepts_only_valid_range() {
        assert_eq!(PortIndex::new(0).map(PortIndex::get), Ok(0));
        assert_eq!(PortIndex::new(3).map(PortIndex::get), Ok(3));
        assert_eq!(PortIndex::new(4), Err(PortOutOfRange(4)));
        assert_eq!(PortIndex::new(-1), Err(PortOutOfRange(-1)));
        assert_eq!(PortIndex::MAX.get(), NUM_PORTS - 1);
    }

    #[test]
    fn default_table_allows_duplicates() {
        let table = PortAssignment::default();
        let kinds: Vec<SensorKind> = table.iter().map(|(_, kind)| kind).collect();
        assert_eq!(
            kinds,
            vec![
                SensorKind::Temperature,
                SensorKind::Humidity,
                SensorKind::Vibration,
                SensorKind::Temperature,
            ]
        );
    }

    #[test]
    fn assignment_lookup() {
        let table = PortAssignment::default();
        let port1 = PortIndex::new(1).ok();
        assert_eq!(
            port1.map(|p| table.assignment_for(p)),
            Some(SensorKind::Humidity)
        );
        assert_eq!(
            port1.map(|p| table.is_assigned(p, SensorKind::Temperature)),
            Some(false)
        );
    }

    #[test]
    fn serializes_as_index_keyed_map() {
        let json = serde_json::to_string(&PortAssignment::default()).ok();
        assert_eq!(
            json.as_deref(),
            Some(r#"{"0":"temperature","1":"humidity","2":"vibration","3":"temperature"}"#)
        );
    }
}
