//! Screen capture.

// ============================================================================
// Imports
// ============================================================================

use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as Base64Standard;
use tracing::debug;

use crate::driver::Driver;
use crate::error::Result;
use crate::protocol::CommandId;

// ============================================================================
// Driver - Screenshot
// ============================================================================

impl Driver {
    /// Captures the screen and returns PNG bytes.
    pub async fn screenshot(&self) -> Result<Vec<u8>> {
        debug!("Capturing screenshot");

        let value = self
            .execute(&CommandId::SCREENSHOT, serde_json::Value::Null)
            .await?;
        let encoded = value.as_str().unwrap_or_default();
        Ok(Base64Standard.decode(encoded)?)
    }

    /// Captures the screen as a decoded image.
    ///
    /// Useful when the test needs to inspect pixels, for example to check
    /// a rendered color or crop a region.
    pub async fn screenshot_image(&self) -> Result<image::DynamicImage> {
        let bytes = self.screenshot().await?;
        Ok(image::load_from_memory(&bytes)?)
    }

    /// Captures the screen and writes the PNG to a file.
    ///
    /// The server always produces PNG data; the bytes are written as-is
    /// regardless of the file extension.
    pub async fn save_screenshot(&self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.screenshot().await?;
        std::fs::write(path.as_ref(), bytes)?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
