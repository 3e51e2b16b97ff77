//! Request handler and response framing.
//!
//! Routing happens in the core: every request, whatever its method or
//! path, reaches [`dispatch`], which hands `(method, path)` to the
//! [`SensorService`](sensorport_core::SensorService) and frames the
//! returned [`ApiResponse`].
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | API documentation and port table |
//! | `GET` | `/status` | Device status |
//! | `GET` | `/ports` | Port assignments |
//! | any | `/{port}/{sensor}` | Sensor reading, 400 error, or 302 to `/` |

use std::sync::Arc;

use axum::extract::State;
use axum::http::header::{CONTENT_TYPE, LOCATION};
use axum::http::{HeaderValue, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use sensorport_core::ApiResponse;
use sensorport_core::response::JSON_CONTENT_TYPE;

use crate::error::HttpError;
use crate::state::AppState;

/// Answer any request through the core.
pub async fn dispatch(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
) -> HttpResponse {
    HttpResponse(state.service.handle(method.as_str(), uri.path()))
}

/// An [`ApiResponse`] framed for Axum.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse(pub ApiResponse);

impl HttpResponse {
    fn try_into_response(self) -> Result<Response, HttpError> {
        let code = self.0.status_code();
        let status = StatusCode::from_u16(code)
            .map_err(|e| HttpError::InvalidStatus(format!("{code}: {e}")))?;

        if let Some(location) = self.0.location() {
            let value = HeaderValue::from_str(location)
                .map_err(|e| HttpError::InvalidHeader(format!("{location}: {e}")))?;
            return Ok((status, [(LOCATION, value)]).into_response());
        }

        let body = self.0.body_json()?.unwrap_or_default();
        Ok((
            status,
            [(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))],
            body,
        )
            .into_response())
    }
}

impl IntoResponse for HttpResponse {
    fn into_response(self) -> Response {
        self.try_into_response()
            .unwrap_or_else(IntoResponse::into_response)
    }
}
