//! Sensor kinds supported by the device.
//!
//! Every kind has a lowercase wire token (used in URL paths, JSON bodies
//! and the YAML config) and a physical unit reported alongside readings.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A kind of sensor that can be attached to a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorKind {
    /// Ambient temperature, reported in degrees Celsius.
    Temperature,
    /// Relative humidity, reported in percent.
    Humidity,
    /// Vibration velocity, reported in millimetres per second.
    Vibration,
}

impl SensorKind {
    /// All sensor kinds in declaration order.
    pub const ALL: [Self; 3] = [Self::Temperature, Self::Humidity, Self::Vibration];

    /// The case-sensitive token used on the wire.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Humidity => "humidity",
            Self::Vibration => "vibration",
        }
    }

    /// The physical unit a reading of this kind is reported in.
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Temperature => "°C",
            Self::Humidity => "%",
            Self::Vibration => "mm/s",
        }
    }

    /// Match a wire token exactly. No case folding or trimming is applied.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.token() == token)
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
