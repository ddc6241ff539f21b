//! Appium session handle and command dispatch.
//!
//! The [`Driver`] struct is the central handle for one automation session.
//! Every operation in the crate, from clipboard access to multi-touch
//! batches, funnels through [`Driver::execute`]: command id to endpoint
//! lookup, path rendering, HTTP call, envelope unwrapping.
//!
//! # Example
//!
//! ```no_run
//! use appium_webdriver::{Capabilities, Driver};
//!
//! # async fn example() -> appium_webdriver::Result<()> {
//! let driver = Driver::builder()
//!     .server_url("http://127.0.0.1:4723")
//!     .capabilities(Capabilities::android().with_automation_name("UiAutomator2"))
//!     .connect()
//!     .await?;
//!
//! driver.set_clipboard_text("hello", None).await?;
//! driver.quit().await?;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::identifiers::SessionId;
use crate::protocol::{CommandId, CommandSpec, CommandTable, HttpMethod, WireRequest};
use crate::transport::Executor;

use super::builder::DriverBuilder;

// ============================================================================
// Types
// ============================================================================

/// Internal shared state for the driver.
pub(crate) struct DriverInner {
    /// Transport performing the HTTP calls.
    pub executor: Arc<dyn Executor>,

    /// Identifier of the remote session.
    pub session_id: SessionId,

    /// Command id to endpoint registry.
    pub commands: RwLock<CommandTable>,
}

/// Readiness report from the `/status` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerStatus {
    /// Whether the server can accept new sessions.
    #[serde(default)]
    pub ready: bool,

    /// Human-readable status description.
    #[serde(default)]
    pub message: String,
}

// ============================================================================
// Driver
// ============================================================================

/// Handle to one remote automation session.
///
/// The driver is responsible for:
/// - Mapping command ids to HTTP endpoints
/// - Injecting the session id into rendered paths
/// - Unwrapping the W3C response envelope
///
/// Clones share the same session and command table.
#[derive(Clone)]
pub struct Driver {
    /// Shared inner state.
    pub(crate) inner: Arc<DriverInner>,
}

// ============================================================================
// Driver - Display
// ============================================================================

impl fmt::Debug for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Driver")
            .field("session_id", &self.inner.session_id)
            .field("command_count", &self.command_count())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Driver - Public API
// ============================================================================

impl Driver {
    /// Creates a configuration builder for the driver.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use appium_webdriver::Driver;
    ///
    /// # async fn example() -> appium_webdriver::Result<()> {
    /// let driver = Driver::builder()
    ///     .server_url("http://127.0.0.1:4723")
    ///     .connect()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    #[inline]
    #[must_use]
    pub fn builder() -> DriverBuilder {
        DriverBuilder::new()
    }

    /// Creates a driver over a custom transport, bound to an existing
    /// session.
    ///
    /// This is the seam for alternative transports; no HTTP happens here.
    #[must_use]
    pub fn with_executor(executor: Arc<dyn Executor>, session_id: SessionId) -> Self {
        Self {
            inner: Arc::new(DriverInner {
                executor,
                session_id,
                commands: RwLock::new(CommandTable::builtin()),
            }),
        }
    }

    /// Returns the identifier of the remote session.
    #[inline]
    #[must_use]
    pub fn session_id(&self) -> &SessionId {
        &self.inner.session_id
    }

    /// Returns the number of registered commands.
    #[inline]
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.inner.commands.read().len()
    }

    /// Returns `true` if a command id is registered.
    #[inline]
    #[must_use]
    pub fn has_command(&self, command: &CommandId) -> bool {
        self.inner.commands.read().contains(command)
    }

    /// Registers an endpoint under a command id, replacing any previous
    /// registration.
    ///
    /// Returns the spec the id previously mapped to. Subsequent
    /// [`Driver::execute`] calls with this id use the new endpoint.
    pub fn register_command(
        &self,
        command: CommandId,
        method: HttpMethod,
        path: impl Into<String>,
    ) -> Option<CommandSpec> {
        let path = path.into();
        debug!(command = %command, %method, %path, "Registering command");
        self.inner.commands.write().register(command, method, path)
    }

    /// Executes a registered command and returns the response `value`.
    ///
    /// Parameters must be a JSON object (or `null` for none). The session
    /// id is injected automatically; parameters consumed by the path
    /// template are removed from the request body.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownCommand`] if the id was never registered
    /// - [`Error::InvalidArgument`] if params are not an object or a path
    ///   placeholder has no matching parameter
    /// - [`Error::Server`] for error envelopes from the server
    /// - [`Error::Http`] for transport failures
    pub async fn execute(&self, command: &CommandId, params: Value) -> Result<Value> {
        let spec = self
            .inner
            .commands
            .read()
            .lookup(command)
            .cloned()
            .ok_or_else(|| Error::unknown_command(command.as_str()))?;

        let mut params = match params {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                return Err(Error::invalid_argument(format!(
                    "params must be a JSON object, got: {other}"
                )));
            }
        };

        // Make the session available to the path template without callers
        // passing it; only remove it again if the template did not use it.
        let injected = !params.contains_key("sessionId");
        if injected {
            params.insert(
                "sessionId".to_owned(),
                Value::String(self.inner.session_id.to_string()),
            );
        }
        let path = spec.path().render(&mut params)?;
        if injected {
            params.remove("sessionId");
        }

        let mut request = WireRequest::new(spec.method(), path);
        if spec.method().has_body() {
            request = request.with_body(Value::Object(params));
        }

        debug!(
            command = %command,
            id = %request.id,
            session_id = %self.inner.session_id,
            "Executing command"
        );

        let response = self.inner.executor.call(request).await?;
        response.into_value()
    }

    /// Queries the server's readiness.
    pub async fn status(&self) -> Result<ServerStatus> {
        let value = self.execute(&CommandId::STATUS, Value::Null).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Ends the remote session.
    ///
    /// The driver handle is unusable for session-scoped commands after
    /// this returns; the server frees the device.
    pub async fn quit(&self) -> Result<()> {
        self.execute(&CommandId::QUIT, Value::Null).await?;
        info!(session_id = %self.inner.session_id, "Session ended");
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    use crate::transport::recording::RecordingExecutor;

    fn test_driver() -> (Arc<RecordingExecutor>, Driver) {
        let exec = Arc::new(RecordingExecutor::new());
        let driver = Driver::with_executor(Arc::clone(&exec) as Arc<dyn Executor>, "sess-1".into());
        (exec, driver)
    }

    #[test]
    fn test_builder_returns_driver_builder() {
        let _builder = Driver::builder();
    }

    #[test]
    fn test_driver_is_clone_and_debug() {
        fn assert_clone<T: Clone>() {}
        fn assert_debug<T: std::fmt::Debug>() {}
        assert_clone::<Driver>();
        assert_debug::<Driver>();
    }

    #[tokio::test]
    async fn test_execute_renders_session_into_path() {
        let (exec, driver) = test_driver();

        driver
            .execute(&CommandId::SCREENSHOT, Value::Null)
            .await
            .expect("execute");

        let request = exec.last_request().expect("request sent");
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path, "/session/sess-1/screenshot");
        assert_eq!(request.body, None);
    }

    #[tokio::test]
    async fn test_execute_sends_remaining_params_as_body() {
        let (exec, driver) = test_driver();

        driver
            .execute(
                &CommandId::SET_CLIPBOARD,
                json!({ "content": "aGk=", "contentType": "plaintext" }),
            )
            .await
            .expect("execute");

        let request = exec.last_request().expect("request sent");
        assert_eq!(request.path, "/session/sess-1/appium/device/set_clipboard");
        assert_eq!(
            request.body,
            Some(json!({ "content": "aGk=", "contentType": "plaintext" }))
        );
    }

    #[tokio::test]
    async fn test_execute_unknown_command() {
        let (exec, driver) = test_driver();

        let err = driver
            .execute(&CommandId::custom("mobile: shake"), Value::Null)
            .await
            .expect_err("unknown command");

        assert!(err.is_unknown_command());
        // Lookup failure happens before any request is dispatched.
        assert_eq!(exec.request_count(), 0);
    }

    #[tokio::test]
    async fn test_execute_rejects_non_object_params() {
        let (_exec, driver) = test_driver();

        let err = driver
            .execute(&CommandId::SET_CLIPBOARD, json!([1, 2]))
            .await
            .expect_err("bad params");
        assert!(matches!(err, Error::InvalidArgument { .. }));
    }

    #[tokio::test]
    async fn test_register_command_overrides() {
        let (exec, driver) = test_driver();
        let id = CommandId::custom("launchApp");

        assert!(!driver.has_command(&id));
        let previous = driver.register_command(
            id.clone(),
            HttpMethod::Post,
            "/session/{sessionId}/appium/app/launch",
        );
        assert!(previous.is_none());

        let replaced = driver.register_command(
            id.clone(),
            HttpMethod::Post,
            "/session/{sessionId}/appium/app/launch_v2",
        );
        assert_eq!(
            replaced.map(|s| s.path().as_str().to_owned()),
            Some("/session/{sessionId}/appium/app/launch".to_owned())
        );

        driver.execute(&id, Value::Null).await.expect("execute");
        let request = exec.last_request().expect("request sent");
        assert_eq!(request.path, "/session/sess-1/appium/app/launch_v2");
    }

    #[tokio::test]
    async fn test_registration_shared_across_clones() {
        let (_exec, driver) = test_driver();
        let clone = driver.clone();

        driver.register_command(
            CommandId::custom("hideKeyboard"),
            HttpMethod::Post,
            "/session/{sessionId}/appium/device/hide_keyboard",
        );

        assert!(clone.has_command(&CommandId::custom("hideKeyboard")));
    }

    #[tokio::test]
    async fn test_execute_surfaces_server_error() {
        let (exec, driver) = test_driver();
        exec.enqueue_error(404, "no such element", "not located");

        let err = driver
            .execute(&CommandId::FIND_ELEMENT, json!({ "using": "id", "value": "x" }))
            .await
            .expect_err("server error");

        assert!(err.is_server_error());
        assert_eq!(err.server_error_code(), Some("no such element"));
    }

    #[tokio::test]
    async fn test_status() {
        let (exec, driver) = test_driver();
        exec.enqueue_value(json!({ "ready": true, "message": "up" }));

        let status = driver.status().await.expect("status");
        assert!(status.ready);
        assert_eq!(status.message, "up");

        let request = exec.last_request().expect("request sent");
        assert_eq!(request.path, "/status");
    }

    #[tokio::test]
    async fn test_quit_deletes_session() {
        let (exec, driver) = test_driver();

        driver.quit().await.expect("quit");

        let request = exec.last_request().expect("request sent");
        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(request.path, "/session/sess-1");
    }
}
