//! HTTP transport layer.
//!
//! This module carries wire requests to the Appium server and hands back
//! parsed response envelopes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐                              ┌─────────────────┐
//! │  Driver (Rust)  │                              │  Appium Server  │
//! │                 │       JSON over HTTP         │                 │
//! │  WireRequest ───┼─────────────────────────────►│  /session/...   │
//! │  WireResponse ◄─┼──────────────────────────────┼── {"value": …}  │
//! └─────────────────┘                              └─────────────────┘
//! ```
//!
//! The [`Executor`] trait is the seam between command plumbing and the
//! actual HTTP stack; [`HttpExecutor`] is the production implementation.
//! Tests swap in a scripted double instead of standing up a server.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `http` | reqwest-backed executor |
//! | `recording` | Scripted executor double (test builds only) |

// ============================================================================
// Imports
// ============================================================================

use async_trait::async_trait;

use crate::error::Result;
use crate::protocol::{WireRequest, WireResponse};

// ============================================================================
// Submodules
// ============================================================================

/// reqwest-backed executor.
pub mod http;

/// Scripted executor double for tests.
#[cfg(test)]
pub mod recording;

// ============================================================================
// Executor Trait
// ============================================================================

/// Dispatches one wire request and returns the server's response.
///
/// Implementations do not interpret the envelope; extracting `value` and
/// surfacing server errors happens upstream in the driver.
#[async_trait]
pub trait Executor: Send + Sync {
    /// Performs the HTTP call described by `request`.
    async fn call(&self, request: WireRequest) -> Result<WireResponse>;
}

// ============================================================================
// Re-exports
// ============================================================================

pub use http::HttpExecutor;
