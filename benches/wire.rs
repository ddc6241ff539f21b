//! Client-side wire cost benchmarks.
//!
//! Measures the work the client does per command without any server:
//! - Command table lookup and path template rendering
//! - Touch script serialization at different lengths
//! - Full dispatch through a no-op executor
//!
//! Run with: cargo bench --bench wire
//! Results saved to: target/criterion/

use std::hint::black_box;
use std::sync::Arc;

use async_trait::async_trait;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use serde_json::json;
use tokio::runtime::Runtime;

use appium_webdriver::{
    CommandId, CommandTable, Driver, Executor, Result, TouchAction, WireRequest, WireResponse,
};

// ============================================================================
// Benchmark Parameters
// ============================================================================

const SCRIPT_LENGTHS: &[usize] = &[4, 64];

// ============================================================================
// Benchmark: Command Table
// ============================================================================

fn bench_command_table(c: &mut Criterion) {
    let table = CommandTable::builtin();
    let mut group = c.benchmark_group("command_table");

    group.bench_function("lookup", |b| {
        b.iter(|| black_box(table.lookup(black_box(&CommandId::SET_CLIPBOARD))));
    });

    group.bench_function("render_set_clipboard", |b| {
        let spec = table
            .lookup(&CommandId::SET_CLIPBOARD)
            .expect("built-in command");
        b.iter(|| {
            let mut params = json!({ "sessionId": "bench-session" });
            let map = params.as_object_mut().expect("object params");
            black_box(spec.path().render(map)).expect("render")
        });
    });

    group.bench_function("render_element_click", |b| {
        let spec = table
            .lookup(&CommandId::CLICK_ELEMENT)
            .expect("built-in command");
        b.iter(|| {
            let mut params = json!({
                "sessionId": "bench-session",
                "elementId": "element with spaces",
            });
            let map = params.as_object_mut().expect("object params");
            black_box(spec.path().render(map)).expect("render")
        });
    });

    group.finish();
}

// ============================================================================
// Benchmark: Touch Script Encoding
// ============================================================================

fn bench_touch_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("touch_encoding");

    for &len in SCRIPT_LENGTHS {
        group.bench_with_input(BenchmarkId::new("steps", len), &len, |b, &len| {
            let script = build_script(len);
            b.iter(|| serde_json::to_value(black_box(script.steps())).expect("serialize"));
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: Dispatch
// ============================================================================

fn bench_dispatch(c: &mut Criterion) {
    let rt = Runtime::new().expect("runtime");
    let driver = Driver::with_executor(Arc::new(NullExecutor), "bench-session".into());
    let payload = vec![0xa5u8; 1024];

    let mut group = c.benchmark_group("dispatch");

    group.bench_function("element_click", |b| {
        b.to_async(&rt).iter(|| async {
            driver
                .execute(&CommandId::CLICK_ELEMENT, json!({ "elementId": "el-1" }))
                .await
                .expect("dispatch")
        });
    });

    group.bench_function("set_clipboard_1k", |b| {
        b.to_async(&rt).iter(|| async {
            driver
                .set_clipboard(
                    &payload,
                    appium_webdriver::ClipboardContentType::Plaintext,
                    None,
                )
                .await
                .expect("dispatch");
        });
    });

    group.finish();
}

// ============================================================================
// Helper Functions
// ============================================================================

fn build_script(len: usize) -> TouchAction {
    let mut action = TouchAction::new().press((0, 0));
    for i in 1..len.saturating_sub(1) {
        action = action.move_to((i as i64, i as i64 * 2));
    }
    action.release()
}

/// Executor that answers every request with an empty success envelope.
struct NullExecutor;

#[async_trait]
impl Executor for NullExecutor {
    async fn call(&self, _request: WireRequest) -> Result<WireResponse> {
        Ok(WireResponse::new(200, json!({ "value": null })))
    }
}

// ============================================================================
// Criterion Setup
// ============================================================================

criterion_group!(
    benches,
    bench_command_table,
    bench_touch_encoding,
    bench_dispatch
);
criterion_main!(benches);
