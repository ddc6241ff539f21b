//! Error types for the Appium WebDriver client.
//!
//! This module defines all error types used throughout the crate.
//!
//! # Usage
//!
//! All fallible operations return [`Result<T>`] which uses [`Error`]:
//!
//! ```ignore
//! use appium_webdriver::{Result, Error};
//!
//! async fn example(driver: &Driver) -> Result<()> {
//!     driver.set_clipboard_text("hello", None).await?;
//!     let text = driver.get_clipboard_text().await?;
//!     Ok(())
//! }
//! ```
//!
//! # Error Categories
//!
//! | Category | Variants |
//! |----------|----------|
//! | Configuration | [`Error::Config`] |
//! | Protocol | [`Error::UnknownCommand`], [`Error::InvalidArgument`], [`Error::Protocol`] |
//! | Remote | [`Error::Server`] |
//! | External | [`Error::Http`], [`Error::Json`], [`Error::Base64`], [`Error::Image`], [`Error::Url`], [`Error::Io`] |
//!
//! Remote failures are not translated into a client-side taxonomy. Whatever
//! error code and message the Appium server puts in its response envelope is
//! carried verbatim in [`Error::Server`]; transport failures stay inside
//! [`Error::Http`].

// ============================================================================
// Imports
// ============================================================================

use std::io::Error as IoError;
use std::result::Result as StdResult;

use thiserror::Error;

// ============================================================================
// Result Alias
// ============================================================================

/// Result type alias using crate [`enum@Error`].
///
/// All fallible operations in this crate return this type.
pub type Result<T> = StdResult<T, Error>;

// ============================================================================
// Error Enum
// ============================================================================

/// Main error type for the crate.
///
/// Each variant includes relevant context for debugging.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Configuration error.
    ///
    /// Returned when driver configuration is invalid.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    // ========================================================================
    // Protocol Errors
    // ========================================================================
    /// Command id not present in the command table.
    ///
    /// Returned when an invocation names a command that was never
    /// registered. This is a local lookup failure and never involves the
    /// network.
    #[error("Unknown command: {command}")]
    UnknownCommand {
        /// The unrecognized command id.
        command: String,
    },

    /// Invalid argument in command params.
    ///
    /// Returned when command parameters are invalid, for example when a
    /// path template placeholder has no matching parameter.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument.
        message: String,
    },

    /// Protocol violation or unexpected response.
    ///
    /// Returned when a response envelope is missing required fields or an
    /// element payload cannot be interpreted.
    #[error("Protocol error: {message}")]
    Protocol {
        /// Description of the protocol violation.
        message: String,
    },

    // ========================================================================
    // Remote Errors
    // ========================================================================
    /// Error reported by the Appium server.
    ///
    /// Carries the W3C error envelope's code and message verbatim. The
    /// client does not interpret or remap server error codes.
    #[error("Server error [{error}]: {message}")]
    Server {
        /// W3C error code, e.g. `no such element`.
        error: String,
        /// Human-readable message from the server.
        message: String,
    },

    // ========================================================================
    // External Errors
    // ========================================================================
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] IoError),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Base64 payload decode error.
    #[error("Base64 error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Image decode error.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// URL parse error.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

// ============================================================================
// Error Constructors
// ============================================================================

impl Error {
    /// Creates a configuration error.
    #[inline]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates an unknown command error.
    #[inline]
    pub fn unknown_command(command: impl Into<String>) -> Self {
        Self::UnknownCommand {
            command: command.into(),
        }
    }

    /// Creates an invalid argument error.
    #[inline]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Creates a protocol error.
    #[inline]
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    /// Creates a server error from an error envelope.
    #[inline]
    pub fn server(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Server {
            error: error.into(),
            message: message.into(),
        }
    }
}

// ============================================================================
// Error Predicates
// ============================================================================

impl Error {
    /// Returns `true` if this is an unknown command error.
    #[inline]
    #[must_use]
    pub fn is_unknown_command(&self) -> bool {
        matches!(self, Self::UnknownCommand { .. })
    }

    /// Returns `true` if the Appium server reported this error.
    #[inline]
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Server { .. })
    }

    /// Returns `true` if this is an HTTP transport error.
    #[inline]
    #[must_use]
    pub fn is_transport_error(&self) -> bool {
        matches!(self, Self::Http(_))
    }

    /// Returns the server's error code, if this is a server error.
    #[inline]
    #[must_use]
    pub fn server_error_code(&self) -> Option<&str> {
        match self {
            Self::Server { error, .. } => Some(error),
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::ErrorKind;

    #[test]
    fn test_error_display() {
        let err = Error::unknown_command("mobile: shake");
        assert_eq!(err.to_string(), "Unknown command: mobile: shake");
    }

    #[test]
    fn test_config_error() {
        let err = Error::config("missing server URL");
        assert_eq!(err.to_string(), "Configuration error: missing server URL");
    }

    #[test]
    fn test_server_error_display() {
        let err = Error::server("no such element", "element not found");
        assert_eq!(
            err.to_string(),
            "Server error [no such element]: element not found"
        );
    }

    #[test]
    fn test_is_unknown_command() {
        let unknown = Error::unknown_command("bogus");
        let other = Error::config("test");

        assert!(unknown.is_unknown_command());
        assert!(!other.is_unknown_command());
    }

    #[test]
    fn test_is_server_error() {
        let server = Error::server("invalid element state", "busy");
        let other = Error::invalid_argument("test");

        assert!(server.is_server_error());
        assert!(!other.is_server_error());
        assert_eq!(server.server_error_code(), Some("invalid element state"));
        assert_eq!(other.server_error_code(), None);
    }

    #[test]
    fn test_from_io_error() {
        let io_err = IoError::new(ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<String>("invalid").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_from_base64_error() {
        let b64_err = match base64::Engine::decode(
            &base64::engine::general_purpose::STANDARD,
            "not base64!!!",
        ) {
            Err(e) => e,
            Ok(_) => panic!("decode should fail"),
        };
        let err: Error = b64_err.into();
        assert!(matches!(err, Error::Base64(_)));
    }
}
