//! Route resolution.
//!
//! A pure mapping from `(method, path)` to a [`Route`]. Only `GET` on one
//! of the three fixed paths selects a fixed route; everything else,
//! including other methods on fixed paths, falls through to the sensor
//! path handler. There is no "not found" outcome.

/// Which handler answers a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    /// API documentation and port table.
    Root,
    /// Device status.
    Status,
    /// Port table only.
    Ports,
    /// Everything else, handed to the sensor path parser unchanged.
    Sensor(&'a str),
}

impl<'a> Route<'a> {
    /// Resolve a request line to a route. Method names are case-sensitive.
    pub fn resolve(method: &str, path: &'a str) -> Self {
        if method != "GET" {
            return Self::Sensor(path);
        }
        match path {
            "/" => Self::Root,
            "/status" => Self::Status,
            "/ports" => Self::Ports,
            other => Self::Sensor(other),
        }
    }
}
