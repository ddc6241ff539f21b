//! Element locator strategies.
//!
//! Provides Appium locator strategies for finding elements in the native
//! UI hierarchy. Each variant maps to a `using` value on the wire.
//!
//! # Example
//!
//! ```ignore
//! use appium_webdriver::By;
//!
//! // Accessibility id (cross-platform, preferred)
//! let btn = driver.find_element(By::accessibility_id("Save")).await?;
//!
//! // Class name of the native widget
//! let list = driver.find_element(By::class_name("android.widget.ListView")).await?;
//!
//! // Resource id / element id
//! let field = driver.find_element(By::id("com.example:id/user")).await?;
//!
//! // XPath over the UI hierarchy
//! let cell = driver.find_element(By::xpath("//android.widget.TextView[@text='Go']")).await?;
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

// ============================================================================
// By Enum
// ============================================================================

/// Element locator strategy.
///
/// Wire values follow the Appium extensions of the WebDriver locator
/// vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "using", content = "value")]
pub enum By {
    /// Accessibility id: content description on Android, accessibility
    /// identifier on iOS.
    ///
    /// # Example
    /// ```ignore
    /// By::AccessibilityId("Save".into())
    /// ```
    #[serde(rename = "accessibility id")]
    AccessibilityId(String),

    /// Native widget class name.
    ///
    /// # Example
    /// ```ignore
    /// By::ClassName("android.widget.ListView".into())
    /// ```
    #[serde(rename = "class name")]
    ClassName(String),

    /// Element id / Android resource id.
    ///
    /// # Example
    /// ```ignore
    /// By::Id("com.example:id/username".into())
    /// ```
    #[serde(rename = "id")]
    Id(String),

    /// Name attribute.
    #[serde(rename = "name")]
    Name(String),

    /// XPath over the UI hierarchy.
    ///
    /// # Example
    /// ```ignore
    /// By::XPath("//android.widget.TextView[@text='Go']".into())
    /// ```
    #[serde(rename = "xpath")]
    XPath(String),

    /// UiAutomator selector expression (Android only).
    ///
    /// # Example
    /// ```ignore
    /// By::AndroidUiAutomator("new UiSelector().text(\"Animation\")".into())
    /// ```
    #[serde(rename = "-android uiautomator")]
    AndroidUiAutomator(String),

    /// NSPredicate expression (iOS only).
    #[serde(rename = "-ios predicate string")]
    IosPredicate(String),
}

impl By {
    /// Creates an accessibility id locator.
    #[inline]
    pub fn accessibility_id(id: impl Into<String>) -> Self {
        Self::AccessibilityId(id.into())
    }

    /// Creates a class name locator.
    #[inline]
    pub fn class_name(name: impl Into<String>) -> Self {
        Self::ClassName(name.into())
    }

    /// Creates an id locator.
    #[inline]
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    /// Creates a name attribute locator.
    #[inline]
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// Creates an XPath locator.
    #[inline]
    pub fn xpath(expr: impl Into<String>) -> Self {
        Self::XPath(expr.into())
    }

    /// Creates a UiAutomator locator.
    #[inline]
    pub fn android_uiautomator(expr: impl Into<String>) -> Self {
        Self::AndroidUiAutomator(expr.into())
    }

    /// Creates an NSPredicate locator.
    #[inline]
    pub fn ios_predicate(expr: impl Into<String>) -> Self {
        Self::IosPredicate(expr.into())
    }

    /// Returns the `using` value for the protocol.
    #[must_use]
    pub fn strategy(&self) -> &'static str {
        match self {
            Self::AccessibilityId(_) => "accessibility id",
            Self::ClassName(_) => "class name",
            Self::Id(_) => "id",
            Self::Name(_) => "name",
            Self::XPath(_) => "xpath",
            Self::AndroidUiAutomator(_) => "-android uiautomator",
            Self::IosPredicate(_) => "-ios predicate string",
        }
    }

    /// Returns the selector value.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::AccessibilityId(v)
            | Self::ClassName(v)
            | Self::Id(v)
            | Self::Name(v)
            | Self::XPath(v)
            | Self::AndroidUiAutomator(v)
            | Self::IosPredicate(v) => v,
        }
    }

    /// Builds the find-element request parameters.
    #[must_use]
    pub fn to_params(&self) -> Value {
        json!({ "using": self.strategy(), "value": self.value() })
    }
}

// ============================================================================
// From implementations for ergonomics
// ============================================================================

impl From<&str> for By {
    /// Converts a string to an accessibility id locator (default).
    fn from(s: &str) -> Self {
        Self::AccessibilityId(s.to_string())
    }
}

impl From<String> for By {
    /// Converts a string to an accessibility id locator (default).
    fn from(s: String) -> Self {
        Self::AccessibilityId(s)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessibility_id() {
        let by = By::accessibility_id("Save");
        assert_eq!(by.strategy(), "accessibility id");
        assert_eq!(by.value(), "Save");
    }

    #[test]
    fn test_class_name() {
        let by = By::class_name("android.widget.ListView");
        assert_eq!(by.strategy(), "class name");
    }

    #[test]
    fn test_android_uiautomator() {
        let by = By::android_uiautomator("new UiSelector().text(\"Animation\")");
        assert_eq!(by.strategy(), "-android uiautomator");
    }

    #[test]
    fn test_to_params() {
        let by = By::id("com.example:id/user");
        assert_eq!(
            by.to_params(),
            serde_json::json!({ "using": "id", "value": "com.example:id/user" })
        );
    }

    #[test]
    fn test_from_str_defaults_to_accessibility_id() {
        let by: By = "Save".into();
        assert!(matches!(by, By::AccessibilityId(_)));
    }
}
