//! Touch gesture scripting.
//!
//! Gestures are built client-side as scripts and executed server-side:
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`TouchAction`] | A single-finger sequence of press/move/wait/release steps |
//! | [`MultiAction`] | Several sequences batched for concurrent execution |
//!
//! Both ship their whole script in a single request when performed, and
//! both are consumed by submission, so a sent gesture can never be
//! resubmitted by accident.

// ============================================================================
// Submodules
// ============================================================================

/// Single-finger touch scripts.
pub mod action;

/// Multi-finger gesture batches.
pub mod multi;

// ============================================================================
// Re-exports
// ============================================================================

pub use action::{ActionStep, Target, TouchAction};
pub use multi::MultiAction;
