//! Single-finger touch action scripting.
//!
//! A [`TouchAction`] is a client-side script: steps accumulate locally and
//! nothing touches the device until [`TouchAction::perform`] ships the whole
//! sequence to the server in one request. Waits are part of the script and
//! are executed server-side, not slept on the client.
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use appium_webdriver::TouchAction;
//!
//! // Drag an element 200 pixels down.
//! TouchAction::new()
//!     .press(&list_item)
//!     .wait(Duration::from_millis(300))
//!     .move_to((0, 200))
//!     .release()
//!     .perform(&driver)
//!     .await?;
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::driver::Driver;
use crate::element::Element;
use crate::error::Result;
use crate::identifiers::ElementId;
use crate::protocol::CommandId;

// ============================================================================
// Constants
// ============================================================================

/// Hold duration used by [`TouchAction::long_press`].
const DEFAULT_LONG_PRESS: Duration = Duration::from_millis(1000);

// ============================================================================
// Types
// ============================================================================

/// Where a touch step lands: an element, a point, or an element plus offset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Target {
    /// Element to touch, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<ElementId>,

    /// Horizontal coordinate, or offset when an element is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<i64>,

    /// Vertical coordinate, or offset when an element is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<i64>,
}

impl Target {
    /// Targets a screen point.
    #[inline]
    #[must_use]
    pub fn point(x: i64, y: i64) -> Self {
        Self {
            element: None,
            x: Some(x),
            y: Some(y),
        }
    }

    /// Targets an element.
    #[inline]
    #[must_use]
    pub fn element(element: &Element) -> Self {
        Self {
            element: Some(element.id().clone()),
            x: None,
            y: None,
        }
    }

    /// Targets a point offset from an element.
    #[inline]
    #[must_use]
    pub fn offset(element: &Element, x: i64, y: i64) -> Self {
        Self {
            element: Some(element.id().clone()),
            x: Some(x),
            y: Some(y),
        }
    }
}

impl From<(i64, i64)> for Target {
    fn from((x, y): (i64, i64)) -> Self {
        Target::point(x, y)
    }
}

impl From<&Element> for Target {
    fn from(element: &Element) -> Self {
        Target::element(element)
    }
}

/// One primitive step in a touch script.
///
/// Serializes to the wire form the server executes, e.g.
/// `{"action": "press", "options": {"x": 100, "y": 200}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "options", rename_all = "camelCase")]
pub enum ActionStep {
    /// Finger down on a target.
    Press(Target),

    /// Finger down, held for `duration` milliseconds before the next step.
    LongPress {
        #[serde(flatten)]
        target: Target,
        duration: u64,
    },

    /// Quick press-and-lift, `count` times.
    Tap {
        #[serde(flatten)]
        target: Target,
        count: u32,
    },

    /// Slide the finger to a target while down.
    MoveTo(Target),

    /// Pause the finger in place for `ms`.
    Wait { ms: u64 },

    /// Lift the finger.
    Release {},
}

// ============================================================================
// TouchAction
// ============================================================================

/// An ordered single-finger touch script.
///
/// Steps are appended through the chainable builder methods and the script
/// is consumed by [`perform`](TouchAction::perform) or by adding it to a
/// [`MultiAction`](crate::touch::MultiAction) batch, so a submitted script
/// cannot be resubmitted or extended.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TouchAction {
    /// Accumulated steps, in execution order.
    steps: Vec<ActionStep>,
}

// ============================================================================
// TouchAction - Constructor
// ============================================================================

impl TouchAction {
    /// Creates an empty touch script.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

// ============================================================================
// TouchAction - Steps
// ============================================================================

impl TouchAction {
    /// Presses down on a target.
    #[must_use]
    pub fn press(mut self, target: impl Into<Target>) -> Self {
        self.steps.push(ActionStep::Press(target.into()));
        self
    }

    /// Presses and holds for one second.
    #[must_use]
    pub fn long_press(self, target: impl Into<Target>) -> Self {
        self.long_press_for(target, DEFAULT_LONG_PRESS)
    }

    /// Presses and holds for a chosen duration.
    #[must_use]
    pub fn long_press_for(mut self, target: impl Into<Target>, duration: Duration) -> Self {
        self.steps.push(ActionStep::LongPress {
            target: target.into(),
            duration: as_millis(duration),
        });
        self
    }

    /// Taps a target once.
    #[must_use]
    pub fn tap(self, target: impl Into<Target>) -> Self {
        self.tap_count(target, 1)
    }

    /// Taps a target a number of times.
    #[must_use]
    pub fn tap_count(mut self, target: impl Into<Target>, count: u32) -> Self {
        self.steps.push(ActionStep::Tap {
            target: target.into(),
            count,
        });
        self
    }

    /// Slides the finger to a target.
    #[must_use]
    pub fn move_to(mut self, target: impl Into<Target>) -> Self {
        self.steps.push(ActionStep::MoveTo(target.into()));
        self
    }

    /// Pauses the finger in place.
    #[must_use]
    pub fn wait(mut self, duration: Duration) -> Self {
        self.steps.push(ActionStep::Wait {
            ms: as_millis(duration),
        });
        self
    }

    /// Lifts the finger.
    #[must_use]
    pub fn release(mut self) -> Self {
        self.steps.push(ActionStep::Release {});
        self
    }
}

// ============================================================================
// TouchAction - Accessors
// ============================================================================

impl TouchAction {
    /// Returns the accumulated steps.
    #[inline]
    #[must_use]
    pub fn steps(&self) -> &[ActionStep] {
        &self.steps
    }

    /// Returns the number of steps.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if no steps have been added.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Consumes the script, yielding its steps.
    pub(crate) fn into_steps(self) -> Vec<ActionStep> {
        self.steps
    }
}

// ============================================================================
// TouchAction - Submission
// ============================================================================

impl TouchAction {
    /// Sends the script to the server for execution.
    ///
    /// The whole sequence travels in a single request; the server plays it
    /// back step by step.
    ///
    /// # Errors
    ///
    /// Surfaces any server rejection of the gesture unchanged.
    pub async fn perform(self, driver: &Driver) -> Result<()> {
        debug!(steps = self.steps.len(), "Performing touch action");

        driver
            .execute(&CommandId::TOUCH_ACTION, json!({ "actions": self.steps }))
            .await?;
        Ok(())
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Converts a duration to whole milliseconds, saturating on overflow.
fn as_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use serde_json::Value;

    use crate::transport::Executor;
    use crate::transport::recording::RecordingExecutor;

    fn test_driver() -> (Arc<RecordingExecutor>, Driver) {
        let exec = Arc::new(RecordingExecutor::new());
        let driver = Driver::with_executor(Arc::clone(&exec) as Arc<dyn Executor>, "sess-1".into());
        (exec, driver)
    }

    #[test]
    fn test_press_point_wire_shape() {
        let action = TouchAction::new().press((100, 200));
        let wire = serde_json::to_value(action.steps()).expect("serialize");
        assert_eq!(
            wire,
            json!([{ "action": "press", "options": { "x": 100, "y": 200 } }])
        );
    }

    #[test]
    fn test_long_press_defaults_to_one_second() {
        let action = TouchAction::new().long_press((5, 5));
        let wire = serde_json::to_value(action.steps()).expect("serialize");
        assert_eq!(wire[0]["action"], "longPress");
        assert_eq!(wire[0]["options"]["duration"], 1000);
    }

    #[test]
    fn test_long_press_holds_under_duration_key() {
        let action = TouchAction::new().long_press_for((100, 200), Duration::from_millis(500));
        let wire = serde_json::to_value(action.steps()).expect("serialize");
        assert_eq!(
            wire[0],
            json!({
                "action": "longPress",
                "options": { "x": 100, "y": 200, "duration": 500 }
            })
        );
    }

    #[test]
    fn test_wait_and_release_wire_shape() {
        let action = TouchAction::new()
            .wait(Duration::from_millis(250))
            .release();
        let wire = serde_json::to_value(action.steps()).expect("serialize");
        assert_eq!(wire[0], json!({ "action": "wait", "options": { "ms": 250 } }));
        assert_eq!(wire[1], json!({ "action": "release", "options": {} }));
    }

    #[test]
    fn test_tap_count_wire_shape() {
        let action = TouchAction::new().tap_count((10, 20), 2);
        let wire = serde_json::to_value(action.steps()).expect("serialize");
        assert_eq!(
            wire[0],
            json!({ "action": "tap", "options": { "x": 10, "y": 20, "count": 2 } })
        );
    }

    #[test]
    fn test_target_offset_carries_element_and_point() {
        let target = Target {
            element: Some("el-1".into()),
            x: Some(10),
            y: Some(-75),
        };
        let wire = serde_json::to_value(ActionStep::MoveTo(target)).expect("serialize");
        assert_eq!(
            wire,
            json!({
                "action": "moveTo",
                "options": { "element": "el-1", "x": 10, "y": -75 }
            })
        );
    }

    #[test]
    fn test_steps_accumulate_in_order() {
        let action = TouchAction::new()
            .press((0, 0))
            .wait(Duration::from_millis(100))
            .move_to((0, 300))
            .release();
        assert_eq!(action.len(), 4);
        assert!(matches!(action.steps()[0], ActionStep::Press(_)));
        assert!(matches!(action.steps()[3], ActionStep::Release {}));
    }

    #[tokio::test]
    async fn test_perform_sends_single_request() {
        let (exec, driver) = test_driver();

        TouchAction::new()
            .press((50, 500))
            .move_to((50, 100))
            .release()
            .perform(&driver)
            .await
            .expect("perform");

        assert_eq!(exec.request_count(), 1);
        let request = exec.last_request().expect("request sent");
        assert_eq!(request.path, "/session/sess-1/touch/perform");
        let body = request.body.expect("body");
        let actions = body["actions"].as_array().expect("actions array");
        assert_eq!(actions.len(), 3);
        assert_eq!(actions[0]["action"], "press");
        assert_eq!(actions[2]["action"], "release");
    }

    #[test]
    fn test_step_round_trip() {
        let steps = vec![
            ActionStep::Press(Target::point(1, 2)),
            ActionStep::Wait { ms: 42 },
            ActionStep::Release {},
        ];
        let wire = serde_json::to_value(&steps).expect("serialize");
        let back: Vec<ActionStep> = serde_json::from_value(wire).expect("deserialize");
        assert_eq!(back, steps);
    }

    #[test]
    fn test_empty_script_serializes_to_empty_array() {
        let action = TouchAction::new();
        assert!(action.is_empty());
        let wire = serde_json::to_value(action.steps()).expect("serialize");
        assert_eq!(wire, Value::Array(Vec::new()));
    }
}
