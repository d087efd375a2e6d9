//! Shared fixtures for the drawing sheet suite

use drawflags::{DrawingHooks, HookConfig, Payload};
use serde_json::{json, Value};

pub const MODULE: &str = "advanced-drawing-tools";

/// Route library logs to the test harness; safe to call from every test
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

pub fn hooks() -> DrawingHooks {
    init_tracing();
    DrawingHooks::new(HookConfig::new())
}

/// Wrap `flags` under `flags.<module>` of an otherwise plain payload
pub fn with_flags(flags: Value) -> Payload {
    Payload::from_value(json!({ "flags": { MODULE: flags } }))
}

/// The module flags of a payload
pub fn flags_of(payload: &Payload) -> &Value {
    &payload["flags"][MODULE]
}
