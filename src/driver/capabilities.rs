//! Session capabilities and W3C envelope construction.
//!
//! Capabilities describe the device and automation backend a session
//! should run against. Non-standard names are stored with the vendor
//! `appium:` prefix the W3C protocol requires.
//!
//! # Example
//!
//! ```
//! use appium_webdriver::Capabilities;
//!
//! let caps = Capabilities::android()
//!     .with_automation_name("UiAutomator2")
//!     .with_device_name("emulator-5554")
//!     .with_app("/apps/demo.apk");
//!
//! assert_eq!(caps.get("appium:automationName").and_then(|v| v.as_str()),
//!            Some("UiAutomator2"));
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::collections::BTreeMap;

use serde_json::{Value, json};

// ============================================================================
// Constants
// ============================================================================

/// Capability names defined by the W3C WebDriver standard.
///
/// Anything else must be vendor-prefixed before it goes on the wire.
const W3C_CAPABILITY_NAMES: &[&str] = &[
    "acceptInsecureCerts",
    "browserName",
    "browserVersion",
    "pageLoadStrategy",
    "platformName",
    "proxy",
    "setWindowRect",
    "strictFileInteractability",
    "timeouts",
    "unhandledPromptBehavior",
    "webSocketUrl",
];

/// Vendor prefix for Appium-specific capabilities.
const APPIUM_PREFIX: &str = "appium:";

// ============================================================================
// Capabilities
// ============================================================================

/// Desired capabilities for a new session.
///
/// Keys are kept sorted so the serialized envelope is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Capabilities {
    entries: BTreeMap<String, Value>,
}

// ============================================================================
// Constructors
// ============================================================================

impl Capabilities {
    /// Creates an empty capability set.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates capabilities targeting Android.
    #[must_use]
    pub fn android() -> Self {
        Self::new().with_platform_name("Android")
    }

    /// Creates capabilities targeting iOS.
    #[must_use]
    pub fn ios() -> Self {
        Self::new().with_platform_name("iOS")
    }
}

// ============================================================================
// Builder Methods
// ============================================================================

impl Capabilities {
    /// Sets the `platformName` capability.
    #[inline]
    #[must_use]
    pub fn with_platform_name(self, name: impl Into<String>) -> Self {
        self.with_capability("platformName", Value::String(name.into()))
    }

    /// Sets the automation backend, e.g. `UiAutomator2` or `XCUITest`.
    #[inline]
    #[must_use]
    pub fn with_automation_name(self, name: impl Into<String>) -> Self {
        self.with_capability("automationName", Value::String(name.into()))
    }

    /// Sets the device name or emulator id.
    #[inline]
    #[must_use]
    pub fn with_device_name(self, name: impl Into<String>) -> Self {
        self.with_capability("deviceName", Value::String(name.into()))
    }

    /// Sets the application path or bundle to install.
    #[inline]
    #[must_use]
    pub fn with_app(self, app: impl Into<String>) -> Self {
        self.with_capability("app", Value::String(app.into()))
    }

    /// Sets the UDID of a physical device.
    #[inline]
    #[must_use]
    pub fn with_udid(self, udid: impl Into<String>) -> Self {
        self.with_capability("udid", Value::String(udid.into()))
    }

    /// Sets an arbitrary capability.
    ///
    /// Names outside the W3C standard set are stored under the `appium:`
    /// prefix unless they already carry a vendor prefix.
    #[must_use]
    pub fn with_capability(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.insert(normalize_name(name.into()), value.into());
        self
    }
}

// ============================================================================
// Accessors
// ============================================================================

impl Capabilities {
    /// Looks up a capability by its normalized name.
    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(&normalize_name(name.to_owned()))
    }

    /// Returns the number of set capabilities.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no capabilities are set.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// Conversion Methods
// ============================================================================

impl Capabilities {
    /// Builds the W3C new-session request body.
    #[must_use]
    pub fn to_wire(&self) -> Value {
        json!({
            "capabilities": {
                "alwaysMatch": self.entries,
                "firstMatch": [{}],
            }
        })
    }
}

/// Applies the `appium:` prefix to non-standard, unprefixed names.
fn normalize_name(name: String) -> String {
    if W3C_CAPABILITY_NAMES.contains(&name.as_str()) || name.contains(':') {
        name
    } else {
        format!("{APPIUM_PREFIX}{name}")
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_android_sets_platform() {
        let caps = Capabilities::android();
        assert_eq!(
            caps.get("platformName").and_then(Value::as_str),
            Some("Android")
        );
    }

    #[test]
    fn test_vendor_prefix_applied() {
        let caps = Capabilities::new().with_capability("newCommandTimeout", 120);

        assert_eq!(
            caps.get("appium:newCommandTimeout").and_then(Value::as_u64),
            Some(120)
        );
        // Lookup by bare name normalizes the same way.
        assert_eq!(
            caps.get("newCommandTimeout").and_then(Value::as_u64),
            Some(120)
        );
    }

    #[test]
    fn test_standard_names_unprefixed() {
        let caps = Capabilities::new().with_capability("platformName", "iOS");
        assert!(caps.get("platformName").is_some());

        let wire = caps.to_wire();
        let always_match = &wire["capabilities"]["alwaysMatch"];
        assert!(always_match.get("platformName").is_some());
        assert!(always_match.get("appium:platformName").is_none());
    }

    #[test]
    fn test_existing_prefix_untouched() {
        let caps = Capabilities::new().with_capability("appium:options", json!({}));
        assert!(caps.get("appium:options").is_some());

        let wire = caps.to_wire();
        assert!(wire["capabilities"]["alwaysMatch"]["appium:options"].is_object());
    }

    #[test]
    fn test_wire_envelope_shape() {
        let caps = Capabilities::android()
            .with_automation_name("UiAutomator2")
            .with_device_name("emulator-5554");

        let wire = caps.to_wire();
        assert!(wire["capabilities"]["alwaysMatch"].is_object());
        assert_eq!(wire["capabilities"]["firstMatch"], json!([{}]));
        assert_eq!(
            wire["capabilities"]["alwaysMatch"]["appium:automationName"],
            json!("UiAutomator2")
        );
    }

    #[test]
    fn test_later_value_wins() {
        let caps = Capabilities::new()
            .with_device_name("emulator-5554")
            .with_device_name("pixel-7");

        assert_eq!(
            caps.get("deviceName").and_then(Value::as_str),
            Some("pixel-7")
        );
        assert_eq!(caps.len(), 1);
    }
}
