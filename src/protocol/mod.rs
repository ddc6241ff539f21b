//! Wire protocol types for the Appium HTTP endpoints.
//!
//! This module defines how symbolic commands map to HTTP endpoints and
//! what travels over the wire in each direction.
//!
//! # Protocol Overview
//!
//! | Type | Direction | Purpose |
//! |------|-----------|---------|
//! | [`CommandTable`] | local | Command id to endpoint registry |
//! | [`WireRequest`] | Client → Server | Rendered method, path and body |
//! | [`WireResponse`] | Server → Client | Status plus W3C `value` envelope |
//!
//! # Command Naming
//!
//! Command ids are camelCase verbs matching the Appium wire vocabulary:
//!
//! - `setClipboard`
//! - `multiAction`
//! - `findElement`
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `command` | Command ids, path templates and the command table |
//! | `request` | Wire request and response envelope types |

// ============================================================================
// Submodules
// ============================================================================

/// Command ids, path templates and the command table.
pub mod command;

/// Wire request and response envelope types.
pub mod request;

// ============================================================================
// Re-exports
// ============================================================================

pub use command::{CommandId, CommandSpec, CommandTable, HttpMethod, PathTemplate};
pub use request::{WireRequest, WireResponse};
