//! Builder pattern for driver configuration.
//!
//! Provides a fluent API for configuring and creating [`Driver`] sessions.
//!
//! # Example
//!
//! ```no_run
//! use appium_webdriver::{Capabilities, Driver};
//!
//! # async fn example() -> appium_webdriver::Result<()> {
//! let driver = Driver::builder()
//!     .server_url("http://127.0.0.1:4723")
//!     .capabilities(Capabilities::android().with_device_name("emulator-5554"))
//!     .connect()
//!     .await?;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, info};
use url::Url;

use crate::error::{Error, Result};
use crate::identifiers::SessionId;
use crate::protocol::{CommandId, CommandTable, WireRequest};
use crate::transport::{Executor, HttpExecutor};

use super::capabilities::Capabilities;
use super::core::Driver;

// ============================================================================
// Constants
// ============================================================================

/// Default timeout for a single HTTP request.
///
/// Session creation can take a while on a cold emulator, so this is
/// deliberately generous.
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(120);

// ============================================================================
// DriverBuilder
// ============================================================================

/// Builder for configuring a [`Driver`] session.
///
/// Use [`Driver::builder()`] to create a new builder.
#[derive(Debug, Clone)]
pub struct DriverBuilder {
    /// Appium server root, e.g. `http://127.0.0.1:4723`.
    server_url: Option<String>,
    /// Desired capabilities for session creation.
    capabilities: Capabilities,
    /// Per-request HTTP timeout.
    http_timeout: Duration,
}

impl Default for DriverBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// DriverBuilder Implementation
// ============================================================================

impl DriverBuilder {
    /// Creates a new driver builder with no server configured.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            server_url: None,
            capabilities: Capabilities::new(),
            http_timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }

    /// Sets the Appium server root URL.
    ///
    /// A path prefix such as `/wd/hub` is kept and prepended to every
    /// command path.
    #[inline]
    #[must_use]
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Sets the desired capabilities for session creation.
    #[inline]
    #[must_use]
    pub fn capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Sets the per-request HTTP timeout.
    #[inline]
    #[must_use]
    pub fn http_timeout(mut self, timeout: Duration) -> Self {
        self.http_timeout = timeout;
        self
    }

    /// Creates a new session on the server and returns its driver.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`] if the server URL is missing or not HTTP(S)
    /// - [`Error::Server`] if the server refuses the session
    /// - [`Error::Protocol`] if the response carries no session id
    pub async fn connect(self) -> Result<Driver> {
        let url = self.validate_server_url()?;
        let executor = Arc::new(HttpExecutor::with_timeout(url, self.http_timeout)?);

        let table = CommandTable::builtin();
        let spec = table
            .lookup(&CommandId::NEW_SESSION)
            .ok_or_else(|| Error::unknown_command(CommandId::NEW_SESSION.as_str()))?;
        let path = spec.path().render(&mut serde_json::Map::new())?;

        info!(server = %executor.base_url(), "Creating session");
        let request =
            WireRequest::new(spec.method(), path).with_body(self.capabilities.to_wire());
        let value = executor.call(request).await?.into_value()?;

        let session_id = parse_session_id(&value)?;
        info!(session_id = %session_id, "Session created");

        Ok(Driver::with_executor(executor, session_id))
    }

    /// Binds to an already-running session without any HTTP traffic.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the server URL is missing or invalid.
    pub fn attach(self, session_id: impl Into<SessionId>) -> Result<Driver> {
        let url = self.validate_server_url()?;
        let executor = Arc::new(HttpExecutor::with_timeout(url, self.http_timeout)?);

        let session_id = session_id.into();
        debug!(session_id = %session_id, "Attached to existing session");

        Ok(Driver::with_executor(executor, session_id))
    }
}

// ============================================================================
// Validation
// ============================================================================

impl DriverBuilder {
    /// Validates the server URL configuration.
    fn validate_server_url(&self) -> Result<Url> {
        let raw = self.server_url.clone().ok_or_else(|| {
            Error::config(
                "Appium server URL is required. Use .server_url() to set it.\n\
                 Example: Driver::builder().server_url(\"http://127.0.0.1:4723\")",
            )
        })?;

        let url = Url::parse(&raw)
            .map_err(|e| Error::config(format!("Invalid server URL {raw:?}: {e}")))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "Server URL must use http or https, got: {}",
                url.scheme()
            )));
        }

        Ok(url)
    }
}

/// Extracts the session id from a new-session response value.
fn parse_session_id(value: &Value) -> Result<SessionId> {
    value
        .get("sessionId")
        .and_then(Value::as_str)
        .map(SessionId::from)
        .ok_or_else(|| Error::protocol("new session response missing sessionId"))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    #[test]
    fn test_new_creates_empty_builder() {
        let builder = DriverBuilder::new();
        assert!(builder.server_url.is_none());
        assert!(builder.capabilities.is_empty());
        assert_eq!(builder.http_timeout, DEFAULT_HTTP_TIMEOUT);
    }

    #[test]
    fn test_server_url_sets_value() {
        let builder = DriverBuilder::new().server_url("http://127.0.0.1:4723");
        assert_eq!(
            builder.server_url,
            Some("http://127.0.0.1:4723".to_string())
        );
    }

    #[test]
    fn test_capabilities_set() {
        let builder = DriverBuilder::new().capabilities(Capabilities::android());
        assert!(builder.capabilities.get("platformName").is_some());
    }

    #[test]
    fn test_http_timeout_set() {
        let builder = DriverBuilder::new().http_timeout(Duration::from_secs(5));
        assert_eq!(builder.http_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_validate_fails_without_url() {
        let err = DriverBuilder::new()
            .validate_server_url()
            .expect_err("missing url");
        assert!(err.to_string().contains("server URL"));
    }

    #[test]
    fn test_validate_rejects_non_http_scheme() {
        let err = DriverBuilder::new()
            .server_url("ftp://127.0.0.1:4723")
            .validate_server_url()
            .expect_err("bad scheme");
        assert!(err.to_string().contains("http"));
    }

    #[test]
    fn test_validate_rejects_garbage() {
        let err = DriverBuilder::new()
            .server_url("not a url")
            .validate_server_url()
            .expect_err("unparsable");
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_attach_binds_session() {
        let driver = DriverBuilder::new()
            .server_url("http://127.0.0.1:4723")
            .attach("existing-session")
            .expect("attach");

        assert_eq!(driver.session_id().as_str(), "existing-session");
    }

    #[test]
    fn test_parse_session_id() {
        let value = json!({ "sessionId": "abc", "capabilities": {} });
        let id = parse_session_id(&value).expect("session id");
        assert_eq!(id.as_str(), "abc");

        let missing = json!({ "capabilities": {} });
        assert!(parse_session_id(&missing).is_err());
    }

    #[test]
    fn test_builder_is_clone() {
        let builder = DriverBuilder::new().server_url("http://127.0.0.1:4723");
        let cloned = builder.clone();
        assert_eq!(builder.server_url, cloned.server_url);
    }
}
