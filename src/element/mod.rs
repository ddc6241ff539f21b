//! Native UI element interaction.
//!
//! Elements are references minted by the Appium server; the client only
//! ever holds their opaque ids and issues element-scoped commands.
//!
//! # Example
//!
//! ```ignore
//! use appium_webdriver::By;
//!
//! let save = driver.find_element(By::accessibility_id("Save")).await?;
//!
//! // Read state
//! let label = save.text().await?;
//! let visible = save.is_displayed().await?;
//!
//! // Interact
//! save.click().await?;
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::driver::Driver;
use crate::error::{Error, Result};
use crate::identifiers::ElementId;
use crate::protocol::CommandId;

// ============================================================================
// Submodules
// ============================================================================

/// Element locator strategies.
pub mod locator;

pub use locator::By;

// ============================================================================
// Constants
// ============================================================================

/// W3C key under which element references travel.
pub(crate) const ELEMENT_KEY: &str = "element-6066-11e4-a52e-4f735466cecf";

/// Pre-W3C key some servers still emit.
pub(crate) const LEGACY_ELEMENT_KEY: &str = "ELEMENT";

// ============================================================================
// Types
// ============================================================================

/// Internal shared state for an element.
pub(crate) struct ElementInner {
    /// This element's server-issued id.
    pub id: ElementId,

    /// Driver owning the session this element lives in.
    pub driver: Driver,
}

/// Position and size of an element, in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Rect {
    /// Returns the center point, rounded to whole pixels.
    #[must_use]
    pub fn center(&self) -> (i64, i64) {
        (
            (self.x + self.width / 2.0).round() as i64,
            (self.y + self.height / 2.0).round() as i64,
        )
    }
}

// ============================================================================
// Element
// ============================================================================

/// A handle to a native UI element.
///
/// Handles stay valid as long as the element remains in the hierarchy;
/// a stale handle surfaces as a `stale element reference` server error.
///
/// # Example
///
/// ```ignore
/// let field = driver.find_element(By::id("com.example:id/email")).await?;
/// field.send_keys("user@example.com").await?;
/// ```
#[derive(Clone)]
pub struct Element {
    /// Shared inner state.
    pub(crate) inner: Arc<ElementInner>,
}

// ============================================================================
// Element - Display
// ============================================================================

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("id", &self.inner.id)
            .field("session_id", self.inner.driver.session_id())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Element - Constructor
// ============================================================================

impl Element {
    /// Creates a new element handle.
    pub(crate) fn new(id: ElementId, driver: Driver) -> Self {
        Self {
            inner: Arc::new(ElementInner { id, driver }),
        }
    }
}

// ============================================================================
// Element - Accessors
// ============================================================================

impl Element {
    /// Returns this element's server-issued id.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &ElementId {
        &self.inner.id
    }

    /// Base parameters carrying this element's id for the path template.
    fn params(&self) -> Value {
        json!({ "elementId": self.inner.id.as_str() })
    }
}

// ============================================================================
// Element - Actions
// ============================================================================

impl Element {
    /// Taps the element.
    pub async fn click(&self) -> Result<()> {
        debug!(element_id = %self.inner.id, "Clicking element");
        self.inner
            .driver
            .execute(&CommandId::CLICK_ELEMENT, self.params())
            .await?;
        Ok(())
    }

    /// Types text into the element.
    pub async fn send_keys(&self, text: &str) -> Result<()> {
        debug!(element_id = %self.inner.id, "Sending keys");
        let chars: Vec<String> = text.chars().map(String::from).collect();
        self.inner
            .driver
            .execute(
                &CommandId::SEND_KEYS_TO_ELEMENT,
                json!({
                    "elementId": self.inner.id.as_str(),
                    "text": text,
                    // Pre-W3C servers read the split form instead.
                    "value": chars,
                }),
            )
            .await?;
        Ok(())
    }
}

// ============================================================================
// Element - Properties
// ============================================================================

impl Element {
    /// Returns the element's visible text.
    pub async fn text(&self) -> Result<String> {
        let value = self
            .inner
            .driver
            .execute(&CommandId::GET_ELEMENT_TEXT, self.params())
            .await?;
        Ok(value.as_str().unwrap_or_default().to_string())
    }

    /// Returns an attribute value, or `None` if the attribute is unset.
    pub async fn attribute(&self, name: &str) -> Result<Option<String>> {
        let value = self
            .inner
            .driver
            .execute(
                &CommandId::GET_ELEMENT_ATTRIBUTE,
                json!({ "elementId": self.inner.id.as_str(), "name": name }),
            )
            .await?;
        Ok(value.as_str().map(ToString::to_string))
    }

    /// Returns the element's position and size.
    pub async fn rect(&self) -> Result<Rect> {
        let value = self
            .inner
            .driver
            .execute(&CommandId::GET_ELEMENT_RECT, self.params())
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Returns `true` if the element is rendered on screen.
    pub async fn is_displayed(&self) -> Result<bool> {
        let value = self
            .inner
            .driver
            .execute(&CommandId::IS_ELEMENT_DISPLAYED, self.params())
            .await?;
        Ok(value.as_bool().unwrap_or(false))
    }
}

// ============================================================================
// Element - Find
// ============================================================================

impl Element {
    /// Finds the first matching descendant of this element.
    pub async fn find_element(&self, by: impl Into<By>) -> Result<Element> {
        let by = by.into();
        let mut params = by.to_params();
        if let Value::Object(map) = &mut params {
            map.insert(
                "elementId".to_owned(),
                Value::String(self.inner.id.to_string()),
            );
        }

        let value = self
            .inner
            .driver
            .execute(&CommandId::FIND_CHILD_ELEMENT, params)
            .await?;
        let id = parse_element_id(&value)?;
        Ok(Element::new(id, self.inner.driver.clone()))
    }
}

// ============================================================================
// Driver - Find
// ============================================================================

impl Driver {
    /// Finds the first element matching a locator.
    ///
    /// # Errors
    ///
    /// Surfaces the server's `no such element` error when nothing matches.
    pub async fn find_element(&self, by: impl Into<By>) -> Result<Element> {
        let by = by.into();
        debug!(strategy = by.strategy(), value = by.value(), "Finding element");

        let value = self.execute(&CommandId::FIND_ELEMENT, by.to_params()).await?;
        let id = parse_element_id(&value)?;
        Ok(Element::new(id, self.clone()))
    }

    /// Finds all elements matching a locator.
    ///
    /// An empty result is success, not an error.
    pub async fn find_elements(&self, by: impl Into<By>) -> Result<Vec<Element>> {
        let by = by.into();
        debug!(strategy = by.strategy(), value = by.value(), "Finding elements");

        let value = self.execute(&CommandId::FIND_ELEMENTS, by.to_params()).await?;
        let refs = value
            .as_array()
            .ok_or_else(|| Error::protocol("find elements response is not an array"))?;

        refs.iter()
            .map(|r| Ok(Element::new(parse_element_id(r)?, self.clone())))
            .collect()
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Extracts an element id from a W3C or legacy element reference.
fn parse_element_id(value: &Value) -> Result<ElementId> {
    value
        .get(ELEMENT_KEY)
        .or_else(|| value.get(LEGACY_ELEMENT_KEY))
        .and_then(Value::as_str)
        .map(ElementId::from)
        .ok_or_else(|| Error::protocol("response value is not an element reference"))
}

// ============================================================================
// Tests
// ============================================================================
