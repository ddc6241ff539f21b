//! Extending the command table at runtime.
//!
//! Demonstrates:
//! - Registering vendor endpoints the client does not ship with
//! - Overriding an existing registration
//! - The distinct unknown-command failure
//!
//! Usage:
//!   cargo run --example 003_custom_commands
//!   cargo run --example 003_custom_commands -- --debug

mod common;

// ============================================================================
// Imports
// ============================================================================

use common::Args;

use appium_webdriver::{CommandId, Driver, HttpMethod, Result};
use serde_json::{Value, json};

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
    println!("=== 003: Custom Commands ===\n");

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

    println!("    ✓ Session: {}", driver.session_id());
    println!("    Built-in commands: {}\n", driver.command_count());

    // ========================================================================
    // Unknown Command
    // ========================================================================

    println!("[2] Invoking an unregistered command...");

    let lock = CommandId::custom("lockDevice");
    match driver.execute(&lock, Value::Null).await {
        Err(e) if e.is_unknown_command() => println!("    ✓ Rejected locally: {e}\n"),
        other => println!("    ✗ Unexpected outcome: {other:?}\n"),
    }

    // ========================================================================
    // Register Vendor Endpoints
    // ========================================================================

    println!("[3] Registering device lock endpoints...");

    driver.register_command(
        lock.clone(),
        HttpMethod::Post,
        "/session/{sessionId}/appium/device/lock",
    );
    driver.register_command(
        CommandId::custom("unlockDevice"),
        HttpMethod::Post,
        "/session/{sessionId}/appium/device/unlock",
    );

    println!("    ✓ Commands now: {}\n", driver.command_count());

    println!("[4] Locking the device for two seconds...");
    driver.execute(&lock, json!({ "seconds": 2 })).await?;
    println!("    ✓ Device locked\n");

    // ========================================================================
    // Override a Registration
    // ========================================================================

    println!("[5] Re-registering lockDevice...");

    let replaced = driver.register_command(
        lock.clone(),
        HttpMethod::Post,
        "/session/{sessionId}/appium/device/lock",
    );
    match replaced {
        Some(old) => println!("    ✓ Replaced {} {}\n", old.method(), old.path()),
        None => println!("    ✗ Expected to replace the earlier registration\n"),
    }

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
