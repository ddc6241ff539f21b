//! Wire request and response envelope types.
//!
//! Defines the HTTP message format between the client and the Appium
//! server: a rendered method/path pair with an optional JSON body going
//! out, and the W3C `{"value": ...}` envelope coming back.

// ============================================================================
// Imports
// ============================================================================

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::identifiers::RequestId;

use super::HttpMethod;

// ============================================================================
// WireRequest
// ============================================================================

/// A single HTTP request ready for the transport.
///
/// The path is already rendered (placeholders substituted); the id never
/// goes on the wire, it only correlates log lines.
#[derive(Debug, Clone)]
pub struct WireRequest {
    /// Client-side trace identifier.
    pub id: RequestId,

    /// HTTP method of the endpoint.
    pub method: HttpMethod,

    /// Rendered URL path, relative to the server root.
    pub path: String,

    /// JSON body, present on POST requests.
    pub body: Option<Value>,
}

impl WireRequest {
    /// Creates a request with a fresh trace id and no body.
    #[inline]
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            id: RequestId::generate(),
            method,
            path: path.into(),
            body: None,
        }
    }

    /// Attaches a JSON body.
    #[inline]
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

// ============================================================================
// WireResponse
// ============================================================================

/// A parsed HTTP response from the Appium server.
///
/// # Format
///
/// Success:
/// ```json
/// { "value": { ... } }
/// ```
///
/// Error (with a non-2xx status):
/// ```json
/// { "value": { "error": "no such element", "message": "...", "stacktrace": "..." } }
/// ```
#[derive(Debug, Clone)]
pub struct WireResponse {
    /// HTTP status code.
    pub status: u16,

    /// Parsed JSON body.
    pub body: Value,
}

/// Error payload inside the `value` field of a failed response.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: String,
    #[serde(default)]
    message: String,
}

impl WireResponse {
    /// Creates a response from a status code and parsed body.
    #[inline]
    #[must_use]
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// Returns `true` if the HTTP status is 2xx.
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Extracts the `value` field, surfacing server errors verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Server`] with the server's own error code and
    /// message when the response is an error envelope, and
    /// [`Error::Protocol`] when a success response has no `value` field.
    pub fn into_value(self) -> Result<Value> {
        let status = self.status;
        let success = self.is_success();
        let value = match self.body {
            Value::Object(mut map) => map.remove("value"),
            _ => None,
        };

        if success {
            return value.ok_or_else(|| Error::protocol("response missing value field"));
        }

        match value.and_then(|v| serde_json::from_value::<ErrorEnvelope>(v).ok()) {
            Some(envelope) => {
                let message = if envelope.message.is_empty() {
                    envelope.error.clone()
                } else {
                    envelope.message
                };
                Err(Error::server(envelope.error, message))
            }
            None => Err(Error::server(
                format!("http status {status}"),
                "server returned an error without a W3C envelope",
            )),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
