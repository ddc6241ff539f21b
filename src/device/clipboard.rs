//! Device clipboard access.
//!
//! Clipboard bytes always travel base64-encoded on the wire, tagged with a
//! [`ClipboardContentType`]. Only plaintext is reliably supported across
//! platforms; other types are passed through untouched and the server
//! decides whether it can honor them.
//!
//! # Example
//!
//! ```ignore
//! driver
//!     .set_clipboard_text("hello from the test", None)
//!     .await?;
//!
//! let text = driver.get_clipboard_text().await?;
//! assert_eq!(text, "hello from the test");
//! ```

// ============================================================================
// Imports
// ============================================================================

use base64::Engine;
use base64::engine::general_purpose::STANDARD as Base64Standard;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use tracing::debug;

use crate::driver::Driver;
use crate::error::{Error, Result};
use crate::protocol::CommandId;

// ============================================================================
// Types
// ============================================================================

/// How clipboard bytes should be interpreted.
///
/// The client does not validate platform support; an unsupported type is
/// sent as-is and the server's rejection comes back as a server error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardContentType {
    /// UTF-8 text. The only type every platform supports.
    #[default]
    Plaintext,
    /// A URL (iOS only).
    Url,
    /// Image data (iOS only).
    Image,
}

impl ClipboardContentType {
    /// Returns the wire name of this content type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plaintext => "plaintext",
            Self::Url => "url",
            Self::Image => "image",
        }
    }
}

impl std::fmt::Display for ClipboardContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Driver - Clipboard
// ============================================================================

impl Driver {
    /// Replaces the device clipboard with raw bytes.
    ///
    /// An empty or absent `label` is omitted from the request. Returns the
    /// driver so clipboard calls can be chained.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use appium_webdriver::ClipboardContentType;
    ///
    /// driver
    ///     .set_clipboard(png_bytes, ClipboardContentType::Image, Some("qr code"))
    ///     .await?;
    /// ```
    pub async fn set_clipboard(
        &self,
        content: impl AsRef<[u8]>,
        content_type: ClipboardContentType,
        label: Option<&str>,
    ) -> Result<&Self> {
        let content = content.as_ref();
        debug!(
            bytes = content.len(),
            content_type = %content_type,
            "Setting clipboard"
        );

        let params = clipboard_params(content, content_type, label);
        self.execute(&CommandId::SET_CLIPBOARD, params).await?;
        Ok(self)
    }

    /// Replaces the device clipboard with UTF-8 text.
    pub async fn set_clipboard_text(&self, text: &str, label: Option<&str>) -> Result<&Self> {
        self.set_clipboard(text.as_bytes(), ClipboardContentType::Plaintext, label)
            .await
    }

    /// Reads the device clipboard as raw bytes.
    ///
    /// An empty clipboard is not an error; it comes back as zero bytes.
    pub async fn get_clipboard(&self, content_type: ClipboardContentType) -> Result<Vec<u8>> {
        debug!(content_type = %content_type, "Reading clipboard");

        let value = self
            .execute(&CommandId::GET_CLIPBOARD, json!({ "contentType": content_type }))
            .await?;
        let encoded = value.as_str().unwrap_or_default();
        Ok(Base64Standard.decode(encoded)?)
    }

    /// Reads the device clipboard as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Fails with a protocol error if the clipboard holds bytes that are
    /// not valid UTF-8.
    pub async fn get_clipboard_text(&self) -> Result<String> {
        let bytes = self.get_clipboard(ClipboardContentType::Plaintext).await?;
        String::from_utf8(bytes).map_err(|_| Error::protocol("clipboard content is not valid UTF-8"))
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Builds the set-clipboard request parameters.
fn clipboard_params(
    content: &[u8],
    content_type: ClipboardContentType,
    label: Option<&str>,
) -> Value {
    let mut params = Map::new();
    params.insert(
        "content".to_owned(),
        Value::String(Base64Standard.encode(content)),
    );
    params.insert("contentType".to_owned(), json!(content_type));
    if let Some(label) = label.filter(|l| !l.is_empty()) {
        params.insert("label".to_owned(), Value::String(label.to_owned()));
    }
    Value::Object(params)
}

// ============================================================================
// Tests
// ============================================================================
