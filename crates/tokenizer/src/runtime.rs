//! Per-tokenizer runtime: the immutable configuration plus the small amount
//! of state that changes between calls.

use crate::metrics::MetricsHook;
use crate::result::TokenizationResult;
use crate::TokenizerConfiguration;
use parking_lot::Mutex;
use std::fmt;

#[derive(Default)]
struct RuntimeState {
    last_result: Option<TokenizationResult>,
    metrics_hook: Option<MetricsHook>,
}

/// Configuration and mutable state owned by one [`Encoding`](crate::Encoding).
///
/// The last result and the metrics hook sit behind a single lock, so a
/// runtime can be shared across threads. The lock is never held while a
/// hook runs.
pub struct TokenizerRuntime {
    config: TokenizerConfiguration,
    state: Mutex<RuntimeState>,
}

impl TokenizerRuntime {
    /// Wrap a validated configuration.
    pub fn new(config: TokenizerConfiguration) -> Self {
        Self {
            config,
            state: Mutex::new(RuntimeState::default()),
        }
    }

    /// The configuration this runtime was created with.
    pub fn config(&self) -> &TokenizerConfiguration {
        &self.config
    }

    /// Maximum token count accepted by a single encode call.
    pub fn chunk_limit(&self) -> usize {
        self.config.chunk_limit()
    }

    /// Replace the metrics hook, returning the previous one.
    pub fn set_metrics_hook(&self, hook: Option<MetricsHook>) -> Option<MetricsHook> {
        std::mem::replace(&mut self.state.lock().metrics_hook, hook)
    }

    /// The currently registered metrics hook.
    pub fn metrics_hook(&self) -> Option<MetricsHook> {
        self.state.lock().metrics_hook.clone()
    }

    /// Store `result` as the last result, replacing any previous one.
    pub fn record(&self, result: TokenizationResult) {
        self.state.lock().last_result = Some(result);
    }

    /// Snapshot of the last result.
    pub fn last_result(&self) -> Option<TokenizationResult> {
        self.state.lock().last_result.clone()
    }
}

impl fmt::Debug for TokenizerRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("TokenizerRuntime")
            .field("config", &self.config)
            .field("last_result", &state.last_result)
            .field("has_metrics_hook", &state.metrics_hook.is_some())
            .finish()
    }
}
