//! Device clipboard round-trips.
//!
//! Demonstrates:
//! - Creating a session against a running Appium server
//! - Writing and reading clipboard text
//! - Writing labeled binary content
//! - Chained clipboard calls
//!
//! Usage:
//!   cargo run --example 001_clipboard
//!   cargo run --example 001_clipboard -- --debug
//!   cargo run --example 001_clipboard -- --no-quit

mod common;

// ============================================================================
// Imports
// ============================================================================

use common::Args;

use appium_webdriver::{ClipboardContentType, Driver, Result};

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() {
    let args = Args::parse();
    common::init_logging(args.debug);

    if let Err(e) = run(args).await {
        eprintln!("\n[ERROR] {e}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    println!("=== 001: Clipboard ===\n");

    // ========================================================================
    // Create Session
    // ========================================================================

    let server_url = common::server_url();
    println!("[1] Creating session...");
    println!("    Server: {server_url}");

    let driver = Driver::builder()
        .server_url(server_url)
        .capabilities(common::android_caps())
        .connect()
        .await?;

    println!("    ✓ Session: {}\n", driver.session_id());

    // ========================================================================
    // Text Round-Trip
    // ========================================================================

    println!("[2] Writing clipboard text...");

    driver
        .set_clipboard_text("copied by the demo 📋", None)
        .await?;
    let text = driver.get_clipboard_text().await?;

    println!("    ✓ Read back: {text:?}\n");

    // ========================================================================
    // Labeled Binary Content
    // ========================================================================

    println!("[3] Writing labeled binary content...");

    let payload = b"\x01\x02\x03\x04";
    driver
        .set_clipboard(payload, ClipboardContentType::Plaintext, Some("demo bytes"))
        .await?;
    let bytes = driver.get_clipboard(ClipboardContentType::Plaintext).await?;

    println!("    ✓ {} bytes round-tripped\n", bytes.len());

    // ========================================================================
    // Chained Calls
    // ========================================================================

    println!("[4] Chaining clipboard calls...");

    let last = driver
        .set_clipboard_text("first", None)
        .await?
        .set_clipboard_text("second", None)
        .await?
        .get_clipboard_text()
        .await?;

    println!("    ✓ Last write wins: {last:?}\n");

    // ========================================================================
    // Teardown
    // ========================================================================

    if args.no_quit {
        println!("[--no-quit] Leaving session open");
    } else {
        driver.quit().await?;
        println!("[5] ✓ Session closed");
    }

    Ok(())
}
