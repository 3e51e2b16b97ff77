//! Error types for the HTTP adapter.
//!
//! Request-level failures (bad paths, bad ports) are not errors here: the
//! core answers them with a 400 document. [`HttpError`] covers the rare
//! case where a core response cannot be framed, and converts into a 500
//! JSON response via its [`IntoResponse`] implementation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sensorport_types::ErrorDocument;

/// Errors that can occur while framing a response.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// A document could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The core produced a status code HTTP cannot carry.
    #[error("invalid status code: {0}")]
    InvalidStatus(String),

    /// A header value could not be encoded.
    #[error("invalid header value: {0}")]
    InvalidHeader(String),
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "failed to frame response");

        let status = StatusCode::INTERNAL_SERVER_ERROR;
        let body = ErrorDocument {
            error: self.to_string(),
            status_code: status.as_u16(),
        };

        (status, axum::Json(body)).into_response()
    }
}
