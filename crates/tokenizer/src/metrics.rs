//! Per-call telemetry delivered to a caller-supplied hook.

use log::warn;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Telemetry for one encode call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsPayload {
    /// Model or encoding name the tokenizer was created for
    pub model: String,
    /// Number of tokens produced
    pub total_tokens: usize,
    /// Wall-clock time spent in the engine's encode
    pub elapsed_ms: f64,
    /// Engine version string
    pub engine_version: String,
}

/// Callback receiving a [`MetricsPayload`] after each encode.
pub type MetricsHook = Arc<dyn Fn(&MetricsPayload) + Send + Sync>;

/// Deliver `payload` to `hook`, if one is registered.
///
/// A panicking hook is caught and logged so the encode that produced the
/// payload can still return. Returns whether the hook ran to completion.
pub fn dispatch(hook: Option<&MetricsHook>, payload: &MetricsPayload) -> bool {
    let Some(hook) = hook else {
        return false;
    };

    match panic::catch_unwind(AssertUnwindSafe(|| hook(payload))) {
        Ok(()) => true,
        Err(cause) => {
            warn!(
                "Metrics hook panicked for model '{}': {}",
                payload.model,
                panic_message(cause.as_ref())
            );
            false
        }
    }
}

fn panic_message(cause: &(dyn Any + Send)) -> &str {
    if let Some(message) = cause.downcast_ref::<&str>() {
        *message
    } else if let Some(message) = cause.downcast_ref::<String>() {
        message.as_str()
    } else {
        "non-string panic payload"
    }
}
