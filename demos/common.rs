//! Shared utilities for the demo scripts.
//!
//! Provides common functionality used across all demos:
//! - Command-line argument parsing
//! - Logging initialization
//! - Server URL and capability defaults

#![allow(dead_code)]

// ============================================================================
// Imports
// ============================================================================

use tracing_subscriber::EnvFilter;

use appium_webdriver::Capabilities;

// ============================================================================
// Constants
// ============================================================================

/// Appium server used when `APPIUM_SERVER_URL` is not set.
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:4723";

/// Device name used when `ANDROID_DEVICE_NAME` is not set.
const DEFAULT_DEVICE_NAME: &str = "Android Emulator";

// ============================================================================
// Types
// ============================================================================

/// Command-line arguments for demos.
#[derive(Debug, Clone)]
pub struct Args {
    pub debug: bool,
    pub no_quit: bool,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse() -> Self {
        let args: Vec<String> = std::env::args().collect();
        Self {
            debug: args.iter().any(|a| a == "--debug"),
            no_quit: args.iter().any(|a| a == "--no-quit"),
        }
    }
}

// ============================================================================
// Functions
// ============================================================================

/// Initialize tracing/logging.
pub fn init_logging(debug: bool) {
    let filter = if debug {
        "appium_webdriver=debug"
    } else {
        "appium_webdriver=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();
}

/// The Appium server URL, from `APPIUM_SERVER_URL` or the local default.
pub fn server_url() -> String {
    std::env::var("APPIUM_SERVER_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string())
}

/// Android capabilities for the demos.
///
/// Reads `ANDROID_DEVICE_NAME` and `ANDROID_APP` from the environment so
/// the demos can target a real device or a specific APK without edits.
pub fn android_caps() -> Capabilities {
    let device = std::env::var("ANDROID_DEVICE_NAME")
        .unwrap_or_else(|_| DEFAULT_DEVICE_NAME.to_string());

    let mut caps = Capabilities::android()
        .with_automation_name("UiAutomator2")
        .with_device_name(device);

    if let Ok(app) = std::env::var("ANDROID_APP") {
        caps = caps.with_app(app);
    }

    caps
}
