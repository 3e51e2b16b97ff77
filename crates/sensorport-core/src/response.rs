//! The outbound response of the request core.
//!
//! [`ApiResponse`] is transport-agnostic: it carries the document to send
//! and knows its HTTP status code, but framing (headers, bytes on the
//! wire) is left to the host adapter.

use sensorport_types::{
    ErrorDocument, PortsDocument, RootDocument, SensorDocument, StatusDocument,
};
use serde::Serialize;

/// Content type of every response body.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// One complete answer to one request.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// `GET /`.
    Root(RootDocument),
    /// `GET /status`.
    Status(StatusDocument),
    /// `GET /ports`.
    Ports(PortsDocument),
    /// A sensor reading.
    Reading(SensorDocument),
    /// Redirect with an empty body.
    Redirect {
        /// Target of the `Location` header.
        location: &'static str,
    },
    /// A client or server error.
    Error(ErrorDocument),
}

impl ApiResponse {
    /// HTTP status code for this response.
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Root(_) | Self::Status(_) | Self::Ports(_) | Self::Reading(_) => 200,
            Self::Redirect { .. } => 302,
            Self::Error(doc) => doc.status_code,
        }
    }

    /// Serialize the body to JSON text. Redirects have no body.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if a document cannot be encoded.
    pub fn body_json(&self) -> Result<Option<String>, serde_json::Error> {
        match self {
            Self::Root(doc) => to_json(doc),
            Self::Status(doc) => to_json(doc),
            Self::Ports(doc) => to_json(doc),
            Self::Reading(doc) => to_json(doc),
            Self::Error(doc) => to_json(doc),
            Self::Redirect { .. } => Ok(None),
        }
    }

    /// Target of the `Location` header, for redirects.
    pub const fn location(&self) -> Option<&'static str> {
        match self {
            Self::Redirect { location } => Some(*location),
            _ => None,
        }
    }
}

fn to_json<T: Serialize>(doc: &T) -> Result<Option<String>, serde_json::Error> {
    serde_json::to_string(doc).map(Some)
}
