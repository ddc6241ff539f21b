//! Multi-finger gesture batching.
//!
//! A [`MultiAction`] collects several [`TouchAction`] scripts under finger
//! labels and submits them as one request, asking the server to execute the
//! sequences concurrently. The client never schedules anything itself; how
//! the fingers interleave is entirely the server's business.
//!
//! # Example
//!
//! ```ignore
//! use appium_webdriver::{MultiAction, TouchAction};
//!
//! // Two-finger pinch towards the center of the screen.
//! MultiAction::new()
//!     .add(TouchAction::new().press((100, 800)).move_to((300, 500)).release())
//!     .add(TouchAction::new().press((500, 200)).move_to((300, 500)).release())
//!     .perform(&driver)
//!     .await?;
//! ```

// ============================================================================
// Imports
// ============================================================================

use serde_json::{Map, Value, json};
use tracing::debug;

use crate::driver::Driver;
use crate::element::Element;
use crate::error::Result;
use crate::identifiers::ElementId;
use crate::protocol::CommandId;
use crate::touch::action::{ActionStep, TouchAction};

// ============================================================================
// MultiAction
// ============================================================================

/// A batch of touch scripts executed concurrently by the server.
///
/// Scripts are keyed by a finger label. [`add`](MultiAction::add) assigns
/// `finger1`, `finger2`, ... automatically; [`add_named`](MultiAction::add_named)
/// picks the label and replaces any script already stored under it. Labels
/// organize the batch client-side only and never reach the wire.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiAction {
    /// Element the gesture is anchored to, if any.
    anchor: Option<ElementId>,

    /// Labeled scripts, in insertion order.
    fingers: Vec<(String, TouchAction)>,
}

// ============================================================================
// MultiAction - Constructors
// ============================================================================

impl MultiAction {
    /// Creates an empty batch.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty batch anchored to an element.
    ///
    /// The anchor travels with the request so the server can resolve
    /// element-relative coordinates in the scripts.
    #[must_use]
    pub fn anchored(element: &Element) -> Self {
        Self {
            anchor: Some(element.id().clone()),
            fingers: Vec::new(),
        }
    }
}

// ============================================================================
// MultiAction - Building
// ============================================================================

impl MultiAction {
    /// Adds a script under the next free `fingerN` label.
    #[must_use]
    pub fn add(self, action: TouchAction) -> Self {
        let mut n = self.fingers.len() + 1;
        while self.has_label(&format!("finger{n}")) {
            n += 1;
        }
        self.add_named(format!("finger{n}"), action)
    }

    /// Adds a script under a chosen label, replacing any existing script
    /// stored under the same label in place.
    #[must_use]
    pub fn add_named(mut self, label: impl Into<String>, action: TouchAction) -> Self {
        let label = label.into();
        match self.fingers.iter_mut().find(|(l, _)| *l == label) {
            Some(entry) => entry.1 = action,
            None => self.fingers.push((label, action)),
        }
        self
    }
}

// ============================================================================
// MultiAction - Accessors
// ============================================================================

impl MultiAction {
    /// Returns the number of scripts in the batch.
    #[inline]
    #[must_use]
    pub fn finger_count(&self) -> usize {
        self.fingers.len()
    }

    /// Returns `true` if the batch holds no scripts.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fingers.is_empty()
    }

    /// Returns the finger labels, in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.fingers.iter().map(|(label, _)| label.as_str())
    }

    /// Returns `true` if a script is stored under the label.
    #[must_use]
    pub fn has_label(&self, label: &str) -> bool {
        self.fingers.iter().any(|(l, _)| l == label)
    }
}

// ============================================================================
// MultiAction - Submission
// ============================================================================

impl MultiAction {
    /// Sends every script to the server in one combined request.
    ///
    /// # Errors
    ///
    /// Surfaces any server rejection of the gesture unchanged.
    pub async fn perform(self, driver: &Driver) -> Result<()> {
        debug!(fingers = self.fingers.len(), "Performing multi action");

        let scripts: Vec<Vec<ActionStep>> = self
            .fingers
            .into_iter()
            .map(|(_, action)| action.into_steps())
            .collect();

        let mut params = Map::new();
        if let Some(anchor) = &self.anchor {
            params.insert("elementId".to_owned(), json!(anchor));
        }
        params.insert("actions".to_owned(), json!(scripts));

        driver
            .execute(&CommandId::MULTI_ACTION, Value::Object(params))
            .await?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;
    use std::time::Duration;

    use crate::element::ELEMENT_KEY;
    use crate::transport::Executor;
    use crate::transport::recording::RecordingExecutor;

    fn test_driver() -> (Arc<RecordingExecutor>, Driver) {
        let exec = Arc::new(RecordingExecutor::new());
        let driver = Driver::with_executor(Arc::clone(&exec) as Arc<dyn Executor>, "sess-1".into());
        (exec, driver)
    }

    fn drag_down() -> TouchAction {
        TouchAction::new().press((50, 100)).move_to((50, 400)).release()
    }

    #[test]
    fn test_add_assigns_sequential_labels() {
        let batch = MultiAction::new().add(drag_down()).add(drag_down());
        let labels: Vec<&str> = batch.labels().collect();
        assert_eq!(labels, ["finger1", "finger2"]);
    }

    #[test]
    fn test_add_skips_taken_labels() {
        let batch = MultiAction::new()
            .add_named("finger2", drag_down())
            .add(drag_down())
            .add(drag_down());
        let labels: Vec<&str> = batch.labels().collect();
        assert_eq!(labels, ["finger2", "finger3", "finger4"]);
    }

    #[test]
    fn test_add_named_replaces_in_place() {
        let replacement = TouchAction::new().tap((1, 1));
        let batch = MultiAction::new()
            .add_named("thumb", drag_down())
            .add_named("index", drag_down())
            .add_named("thumb", replacement.clone());

        assert_eq!(batch.finger_count(), 2);
        let labels: Vec<&str> = batch.labels().collect();
        assert_eq!(labels, ["thumb", "index"]);
        assert_eq!(batch.fingers[0].1, replacement);
    }

    #[tokio::test]
    async fn test_perform_sends_one_combined_request() {
        let (exec, driver) = test_driver();

        let first = TouchAction::new()
            .press((10, 10))
            .move_to((10, 0))
            .move_to((10, -75))
            .release();
        let second = TouchAction::new().press((200, 10)).release();

        MultiAction::new()
            .add(first)
            .add(second)
            .perform(&driver)
            .await
            .expect("perform");

        assert_eq!(exec.request_count(), 1);
        let request = exec.last_request().expect("request sent");
        assert_eq!(request.path, "/session/sess-1/touch/multi/perform");

        let body = request.body.expect("body");
        let sequences = body["actions"].as_array().expect("actions array");
        assert_eq!(sequences.len(), 2);
        assert_eq!(sequences[0].as_array().expect("first sequence").len(), 4);
        assert_eq!(sequences[1].as_array().expect("second sequence").len(), 2);
        assert_eq!(sequences[0][0]["action"], "press");
        assert_eq!(sequences[0][3]["action"], "release");
    }

    #[tokio::test]
    async fn test_perform_carries_anchor_element() {
        let (exec, driver) = test_driver();
        exec.enqueue_value(json!({ ELEMENT_KEY: "el-9" }));

        let anchor = driver.find_element("Canvas").await.expect("find");
        MultiAction::anchored(&anchor)
            .add(TouchAction::new().press((0, 0)).wait(Duration::from_millis(50)).release())
            .perform(&driver)
            .await
            .expect("perform");

        let request = exec.last_request().expect("request sent");
        let body = request.body.expect("body");
        assert_eq!(body["elementId"], "el-9");
        assert_eq!(body["actions"].as_array().expect("actions").len(), 1);
    }

    #[tokio::test]
    async fn test_empty_batch_still_posts() {
        let (exec, driver) = test_driver();

        MultiAction::new().perform(&driver).await.expect("perform");

        let request = exec.last_request().expect("request sent");
        let body = request.body.expect("body");
        assert_eq!(body, json!({ "actions": [] }));
    }
}
