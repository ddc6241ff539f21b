//! Touch action scripting and gestures.
//!
//! Demonstrates:
//! - Swipe and tap shortcuts
//! - Hand-built touch action scripts
//! - Concurrent multi-finger batches
//!
//! Usage:
//!   cargo run --example 002_touch_gestures
//!   cargo run --example 002_touch_gestures -- --debug
//!   cargo run --example 002_touch_gestures -- --no-quit

mod common;

// ============================================================================
// Imports
// ============================================================================

use std::time::Duration;

use common::Args;

use appium_webdriver::{Driver, MultiAction, Result, TouchAction};

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
    println!("=== 002: Touch Gestures ===\n");

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
    // Shortcuts
    // ========================================================================

    println!("[2] Swiping up...");
    driver
        .swipe((540, 1600), (540, 400), Duration::from_millis(500))
        .await?;
    println!("    ✓ Swipe sent\n");

    println!("[3] Tapping the center of the screen...");
    driver.tap(&[(540, 960)], None).await?;
    println!("    ✓ Tap sent\n");

    // ========================================================================
    // Hand-Built Script
    // ========================================================================

    println!("[4] Running a scripted long-press drag...");

    TouchAction::new()
        .long_press_for((200, 1200), Duration::from_millis(800))
        .move_to((200, 600))
        .wait(Duration::from_millis(200))
        .release()
        .perform(&driver)
        .await?;

    println!("    ✓ Script executed\n");

    // ========================================================================
    // Multi-Finger Batch
    // ========================================================================

    println!("[5] Pinching with two fingers...");

    let upper = TouchAction::new()
        .press((540, 700))
        .move_to((540, 900))
        .release();
    let lower = TouchAction::new()
        .press((540, 1220))
        .move_to((540, 1020))
        .release();

    let batch = MultiAction::new().add(upper).add(lower);
    println!("    Fingers: {}", batch.finger_count());
    batch.perform(&driver).await?;

    println!("    ✓ Batch executed in one request\n");

    // ========================================================================
    // Teardown
    // ========================================================================

    if args.no_quit {
        println!("[--no-quit] Leaving session open");
    } else {
        driver.quit().await?;
        println!("[6] ✓ Session closed");
    }

    Ok(())
}
