//! Appium driver module.
//!
//! This module provides the main entry point for mobile automation.
//!
//! # Components
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Driver`] | Handle to one remote automation session |
//! | [`DriverBuilder`] | Fluent configuration builder |
//! | [`Capabilities`] | Desired capabilities for session creation |
//! | [`ServerStatus`] | Readiness report from the server |
//!
//! # Example
//!
//! ```no_run
//! use appium_webdriver::{Capabilities, Driver, Result};
//!
//! # async fn example() -> Result<()> {
//! let driver = Driver::builder()
//!     .server_url("http://127.0.0.1:4723")
//!     .capabilities(Capabilities::android().with_automation_name("UiAutomator2"))
//!     .connect()
//!     .await?;
//!
//! driver.set_clipboard_text("copied from the test", None).await?;
//! driver.quit().await?;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Submodules
// ============================================================================

/// Fluent builder pattern for driver configuration.
pub mod builder;

/// Session capabilities and W3C envelope construction.
pub mod capabilities;

/// Core driver implementation.
pub mod core;

// ============================================================================
// Re-exports
// ============================================================================

pub use builder::DriverBuilder;
pub use capabilities::Capabilities;
pub use core::{Driver, ServerStatus};
