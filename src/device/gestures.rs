//! High-level gesture shortcuts.
//!
//! Each shortcut compiles down to a [`TouchAction`] or [`MultiAction`]
//! script and submits it in one request; nothing here adds behavior the
//! scripting layer cannot express by hand.

// ============================================================================
// Imports
// ============================================================================

use std::time::Duration;

use tracing::debug;

use crate::driver::Driver;
use crate::element::Element;
use crate::error::{Error, Result};
use crate::touch::{MultiAction, TouchAction};

// ============================================================================
// Constants
// ============================================================================

/// Fingers a device digitizer can be assumed to track.
const MAX_TAP_FINGERS: usize = 5;

/// Pause between press and move used by [`Driver::scroll`].
const DEFAULT_SCROLL_PAUSE: Duration = Duration::from_millis(600);

// ============================================================================
// Driver - Gestures
// ============================================================================

impl Driver {
    /// Taps the screen at one or more positions at once.
    ///
    /// With a `duration`, every finger holds that long before lifting.
    /// A single position produces a plain touch action; several positions
    /// are batched so the server lands the fingers together.
    ///
    /// # Errors
    ///
    /// Fails with an invalid-argument error for zero positions or more
    /// than five.
    pub async fn tap(
        &self,
        positions: &[(i64, i64)],
        duration: Option<Duration>,
    ) -> Result<&Self> {
        if positions.is_empty() || positions.len() > MAX_TAP_FINGERS {
            return Err(Error::invalid_argument(format!(
                "tap requires between 1 and {} positions, got {}",
                MAX_TAP_FINGERS,
                positions.len()
            )));
        }

        debug!(fingers = positions.len(), "Tapping");

        if let [position] = positions {
            let action = match duration {
                Some(hold) => TouchAction::new().long_press_for(*position, hold).release(),
                None => TouchAction::new().tap(*position),
            };
            action.perform(self).await?;
            return Ok(self);
        }

        let mut batch = MultiAction::new();
        for position in positions {
            let finger = match duration {
                Some(hold) => TouchAction::new().long_press_for(*position, hold).release(),
                None => TouchAction::new().press(*position).release(),
            };
            batch = batch.add(finger);
        }
        batch.perform(self).await?;
        Ok(self)
    }

    /// Swipes from one point to another.
    ///
    /// A zero `duration` swipes as fast as the server allows; otherwise the
    /// finger rests at the start point for `duration` before moving.
    pub async fn swipe(
        &self,
        start: (i64, i64),
        end: (i64, i64),
        duration: Duration,
    ) -> Result<&Self> {
        debug!(?start, ?end, "Swiping");

        let mut action = TouchAction::new().press(start);
        if !duration.is_zero() {
            action = action.wait(duration);
        }
        action.move_to(end).release().perform(self).await?;
        Ok(self)
    }

    /// Scrolls from one element to another with the default pause.
    pub async fn scroll(&self, origin: &Element, destination: &Element) -> Result<&Self> {
        self.scroll_for(origin, destination, DEFAULT_SCROLL_PAUSE)
            .await
    }

    /// Scrolls from one element to another, pausing `pause` after the press.
    ///
    /// The pause gives the platform time to recognize the gesture as a drag
    /// rather than a fling.
    pub async fn scroll_for(
        &self,
        origin: &Element,
        destination: &Element,
        pause: Duration,
    ) -> Result<&Self> {
        debug!(origin = %origin.id(), destination = %destination.id(), "Scrolling");

        TouchAction::new()
            .press(origin)
            .wait(pause)
            .move_to(destination)
            .release()
            .perform(self)
            .await?;
        Ok(self)
    }
}

// ============================================================================
// Tests
// ============================================================================
