//! Mobile device operations.
//!
//! Everything here extends [`Driver`](crate::driver::Driver) with
//! device-level commands:
//!
//! | Module | Commands |
//! |--------|----------|
//! | [`clipboard`] | Set and read the device clipboard |
//! | [`gestures`] | Tap, swipe, and scroll shortcuts |
//! | [`screenshot`] | Screen capture |

// ============================================================================
// Submodules
// ============================================================================

/// Clipboard read and write.
pub mod clipboard;

/// Gesture shortcuts built on touch scripting.
pub mod gestures;

/// Screen capture.
pub mod screenshot;

// ============================================================================
// Re-exports
// ============================================================================

pub use clipboard::ClipboardContentType;
