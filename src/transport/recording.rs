//! Scripted executor double for unit tests.
//!
//! Records every dispatched request and replays queued responses in FIFO
//! order. When the queue is empty it answers with `{"value": null}`, the
//! envelope most commands return on success.

// ============================================================================
// Imports
// ============================================================================

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{Value, json};

use crate::error::Result;
use crate::protocol::{WireRequest, WireResponse};

use super::Executor;

// ============================================================================
// RecordingExecutor
// ============================================================================

/// In-memory [`Executor`] that captures requests and replays scripted
/// responses.
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    requests: Mutex<Vec<WireRequest>>,
    responses: Mutex<VecDeque<WireResponse>>,
}

impl RecordingExecutor {
    /// Creates an empty recording executor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a raw response.
    pub fn enqueue(&self, response: WireResponse) {
        self.responses.lock().push_back(response);
    }

    /// Queues a 200 response with the given `value` payload.
    pub fn enqueue_value(&self, value: Value) {
        self.enqueue(WireResponse::new(200, json!({ "value": value })));
    }

    /// Queues an error envelope with the given status and W3C error code.
    pub fn enqueue_error(&self, status: u16, error: &str, message: &str) {
        self.enqueue(WireResponse::new(
            status,
            json!({ "value": { "error": error, "message": message, "stacktrace": "" } }),
        ));
    }

    /// Returns copies of all dispatched requests, in order.
    #[must_use]
    pub fn requests(&self) -> Vec<WireRequest> {
        self.requests.lock().clone()
    }

    /// Returns how many requests were dispatched.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    /// Returns the most recently dispatched request.
    #[must_use]
    pub fn last_request(&self) -> Option<WireRequest> {
        self.requests.lock().last().cloned()
    }
}

#[async_trait]
impl Executor for RecordingExecutor {
    async fn call(&self, request: WireRequest) -> Result<WireResponse> {
        self.requests.lock().push(request);

        let scripted = self.responses.lock().pop_front();
        Ok(scripted.unwrap_or_else(|| WireResponse::new(200, json!({ "value": null }))))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use crate::protocol::HttpMethod;

    #[tokio::test]
    async fn test_replays_in_fifo_order() {
        let exec = RecordingExecutor::new();
        exec.enqueue_value(json!(1));
        exec.enqueue_value(json!(2));

        let first = exec
            .call(WireRequest::new(HttpMethod::Get, "/a"))
            .await
            .expect("first");
        let second = exec
            .call(WireRequest::new(HttpMethod::Get, "/b"))
            .await
            .expect("second");

        assert_eq!(first.body, json!({ "value": 1 }));
        assert_eq!(second.body, json!({ "value": 2 }));
        assert_eq!(exec.request_count(), 2);
    }

    #[tokio::test]
    async fn test_defaults_to_null_value() {
        let exec = RecordingExecutor::new();

        let resp = exec
            .call(WireRequest::new(HttpMethod::Post, "/c"))
            .await
            .expect("default");

        assert_eq!(resp.status, 200);
        assert_eq!(resp.body, json!({ "value": null }));
        assert_eq!(exec.last_request().map(|r| r.path), Some("/c".to_string()));
    }
}
