//! Sensor path parsing and validation.
//!
//! Turns the raw path of a request that matched none of the fixed routes
//! into either a redirect, a validated [`ParsedRequest`], or a
//! [`ParseError`] whose message is sent back to the client verbatim.
//!
//! Accepted shape: `/{port}/{sensor}` with exactly two non-empty
//! segments. Extra or trailing slashes are rejected, not ignored.

use sensorport_types::{ParsedRequest, PortIndex, SensorKind};
use serde::Deserialize;

/// A path that is not a sensor request but still has a normal answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathOutcome {
    /// The path was empty after stripping the leading slash.
    Redirect,
    /// A valid `/{port}/{sensor}` request.
    Reading(ParsedRequest),
}

/// Why a sensor path was rejected. All variants map to HTTP 400.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Not exactly two non-empty segments.
    #[error("Invalid URL format. Use: /{{port}}/{{sensor_type}}")]
    MalformedPath,

    /// The port segment is not a number in `[0, NUM_PORTS)`.
    #[error("Invalid port number (0-{max} allowed)", max = PortIndex::MAX)]
    InvalidPort {
        /// The rejected port segment.
        segment: String,
    },

    /// The sensor segment is not one of the known tokens.
    #[error("Unsupported sensor type. Use: temperature, humidity, or vibration")]
    UnsupportedSensorType {
        /// The rejected sensor segment.
        segment: String,
    },
}

impl ParseError {
    /// HTTP status code reported for this error.
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::MalformedPath
            | Self::InvalidPort { .. }
            | Self::UnsupportedSensorType { .. } => 400,
        }
    }
}

/// How the port segment is turned into a number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortParsePolicy {
    /// C-style integer coercion: leading whitespace and sign, then as many
    /// digits as are present. `"abc"` reads as 0 and `"2x"` as 2.
    #[default]
    Lenient,
    /// Only plain ASCII digits are accepted; anything else is an invalid port.
    Strict,
}

impl PortParsePolicy {
    /// Parse a port segment under this policy.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidPort`] if the segment does not name a
    /// port in `[0, NUM_PORTS)`.
    pub fn parse_port(self, segment: &str) -> Result<PortIndex, ParseError> {
        let raw = match self {
            Self::Lenient => Some(coerce_int(segment)),
            Self::Strict => strict_int(segment),
        };
        raw.and_then(|n| PortIndex::new(n).ok())
            .ok_or_else(|| ParseError::InvalidPort {
                segment: segment.to_owned(),
            })
    }
}

/// Parse the path of a request that matched no fixed route.
///
/// # Errors
///
/// Returns the first [`ParseError`] hit, checked in this order: path
/// shape, port, sensor kind.
pub fn parse(path: &str, policy: PortParsePolicy) -> Result<PathOutcome, ParseError> {
    let rest = path.strip_prefix('/').unwrap_or(path);
    if rest.is_empty() {
        return Ok(PathOutcome::Redirect);
    }

    let (port_segment, sensor_segment) = rest.split_once('/').ok_or(ParseError::MalformedPath)?;
    if sensor_segment.contains('/') || port_segment.is_empty() || sensor_segment.is_empty() {
        return Err(ParseError::MalformedPath);
    }

    let port = policy.parse_port(port_segment)?;
    let requested_kind =
        SensorKind::from_token(sensor_segment).ok_or_else(|| ParseError::UnsupportedSensorType {
            segment: sensor_segment.to_owned(),
        })?;

    Ok(PathOutcome::Reading(ParsedRequest {
        port,
        requested_kind,
    }))
}

/// `atol`-style coercion. Saturates instead of overflowing.
fn coerce_int(segment: &str) -> i64 {
    let trimmed = segment.trim_start();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let magnitude = digits
        .chars()
        .map_while(|c| c.to_digit(10))
        .fold(0_i64, |acc, d| acc.saturating_mul(10).saturating_add(i64::from(d)));
    if negative {
        magnitude.saturating_neg()
    } else {
        magnitude
    }
}

fn strict_int(segment: &str) -> Option<i64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}
