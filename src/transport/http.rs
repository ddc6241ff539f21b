//! reqwest-backed wire executor.
//!
//! Builds absolute URLs from the configured server root, sends JSON
//! bodies on POST, and parses every response body as JSON without
//! interpreting it.
//!
//! The server root may carry a path prefix (`http://host:4723/wd/hub`),
//! so rendered paths are appended to it textually rather than joined as
//! absolute URLs.

// ============================================================================
// Imports
// ============================================================================

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, trace};
use url::Url;

use crate::error::Result;
use crate::protocol::{HttpMethod, WireRequest, WireResponse};

use super::Executor;

// ============================================================================
// Constants
// ============================================================================

/// Default timeout for a single HTTP request.
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

// ============================================================================
// HttpExecutor
// ============================================================================

/// Production [`Executor`] speaking JSON over HTTP via reqwest.
#[derive(Debug, Clone)]
pub struct HttpExecutor {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpExecutor {
    /// Creates an executor for a server root with the default timeout.
    pub fn new(base_url: Url) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Creates an executor with a custom per-request timeout.
    pub fn with_timeout(base_url: Url, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Creates an executor reusing a preconfigured reqwest client.
    #[must_use]
    pub fn with_client(client: reqwest::Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// Returns the configured server root.
    #[inline]
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends a rendered path to the server root.
    fn endpoint(&self, path: &str) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{path}"))?)
    }
}

#[async_trait]
impl Executor for HttpExecutor {
    async fn call(&self, request: WireRequest) -> Result<WireResponse> {
        let url = self.endpoint(&request.path)?;

        debug!(
            id = %request.id,
            method = %request.method,
            path = %request.path,
            "Dispatching request"
        );

        let builder = match request.method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Delete => self.client.delete(url),
            HttpMethod::Post => {
                // W3C requires a JSON body on every POST, {} at minimum.
                let body = request.body.unwrap_or_else(|| Value::Object(Default::default()));
                trace!(id = %request.id, %body, "Request body");
                self.client.post(url).json(&body)
            }
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text)?
        };

        debug!(id = %request.id, status, "Received response");
        trace!(id = %request.id, %body, "Response body");

        Ok(WireResponse::new(status, body))
    }
}

// ============================================================================
// Tests
// ============================================================================
