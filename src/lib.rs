//! Appium WebDriver - Mobile automation client library.
//!
//! This library is a client binding for the Appium automation server,
//! extending the W3C WebDriver wire protocol with mobile-specific commands
//! such as clipboard access and multi-touch gestures.
//!
//! # Architecture
//!
//! The client follows the WebDriver local-end model:
//!
//! - **Local End (Rust)**: Maps method calls onto named commands and sends
//!   them to the server as JSON over HTTP
//! - **Remote End (Appium)**: Executes commands against the device and
//!   answers with a `{"value": ...}` envelope
//!
//! Key design principles:
//!
//! - Every operation is a single request/response exchange; the client
//!   never schedules, retries, or reorders anything
//! - Commands are looked up in a per-session [`CommandTable`] that callers
//!   can extend with vendor endpoints at runtime
//! - Gestures are scripted client-side and executed server-side in a
//!   single combined request
//!
//! # Quick Start
//!
//! ```no_run
//! use appium_webdriver::{Capabilities, Driver, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // Describe the app under test
//!     let caps = Capabilities::android()
//!         .with_automation_name("UiAutomator2")
//!         .with_app("/path/to/app.apk");
//!
//!     // Create a session against a running Appium server
//!     let driver = Driver::builder()
//!         .server_url("http://127.0.0.1:4723")
//!         .capabilities(caps)
//!         .connect()
//!         .await?;
//!
//!     // Drive the app
//!     driver.set_clipboard_text("pasted from the test", None).await?;
//!     let field = driver.find_element("Paste target").await?;
//!     field.click().await?;
//!
//!     driver.quit().await?;
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`device`] | Mobile device commands: clipboard, gestures, screenshots |
//! | [`driver`] | Session factory and command dispatch |
//! | [`element`] | Element lookup and interaction |
//! | [`error`] | Error types and [`Result`] alias |
//! | [`identifiers`] | Type-safe ID wrappers |
//! | [`protocol`] | Command table and wire types |
//! | [`touch`] | Touch action scripting |
//! | [`transport`] | HTTP transport layer |
//!
//! # Features
//!
//! - **W3C + vendor protocol**: standard WebDriver commands plus the
//!   `appium/device/...` extension endpoints
//! - **Extensible command table**: register new endpoints without forking
//!   the client
//! - **Chainable device calls**: clipboard and gesture helpers return the
//!   driver for fluent composition
//! - **Scripted gestures**: press/move/wait/release sequences batched into
//!   one request, including concurrent multi-finger execution

// ============================================================================
// Modules
// ============================================================================

/// Mobile device commands.
///
/// Clipboard access, gesture shortcuts, and screen capture, all exposed
/// as methods on [`Driver`].
pub mod device;

/// Session factory and command dispatch.
///
/// Use [`Driver::builder()`] to create a session against a server.
pub mod driver;

/// Element lookup and interaction.
///
/// Locate elements with [`By`] strategies and drive them through
/// [`Element`] handles.
pub mod element;

/// Error types and result aliases.
///
/// All fallible operations return [`Result<T>`] which uses [`Error`].
pub mod error;

/// Type-safe identifiers for protocol entities.
///
/// Newtype wrappers prevent mixing incompatible IDs at compile time.
pub mod identifiers;

/// Command table and wire types.
///
/// Maps symbolic command ids to HTTP endpoints and carries the request
/// and response envelopes.
pub mod protocol;

/// Touch action scripting.
///
/// Single-finger scripts and concurrent multi-finger batches.
pub mod touch;

/// HTTP transport layer.
///
/// The [`Executor`] seam and its [`HttpExecutor`] implementation.
pub mod transport;

// ============================================================================
// Re-exports
// ============================================================================

// Device types
pub use device::ClipboardContentType;

// Driver types
pub use driver::{Capabilities, Driver, DriverBuilder, ServerStatus};

// Element types
pub use element::{By, Element, Rect};

// Error types
pub use error::{Error, Result};

// Identifier types
pub use identifiers::{ElementId, RequestId, SessionId};

// Protocol types
pub use protocol::{
    CommandId, CommandSpec, CommandTable, HttpMethod, PathTemplate, WireRequest, WireResponse,
};

// Touch types
pub use touch::{ActionStep, MultiAction, Target, TouchAction};

// Transport types
pub use transport::{Executor, HttpExecutor};
