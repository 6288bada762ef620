//! The `Encoding` facade.
//!
//! This module provides the public tokenizer object returned by
//! [`encoding_for_model`](crate::encoding_for_model) and
//! [`get_encoding`](crate::get_encoding). It enforces the input-size and
//! special-token policies, delegates to the engine handle, and records
//! timing for every encode.

use crate::engine::{Engine, EngineHandle};
use crate::metrics::{self, MetricsHook, MetricsPayload};
use crate::result::TokenizationResult;
use crate::runtime::TokenizerRuntime;
use crate::{Capability, EncodeOptions, Result, TokenizerConfiguration, TokenizerError};
use ahash::AHashMap;
use log::{debug, trace};
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

mod builder;
pub use builder::EncodingBuilder;

/// A tokenizer bound to one resolved configuration.
///
/// Owns exactly one engine handle for its whole lifetime. All methods take
/// `&self`; the last result and metrics hook are guarded internally, so an
/// `Encoding` can be shared between threads.
pub struct Encoding {
    runtime: TokenizerRuntime,
    handle: Box<dyn EngineHandle>,
    engine_version: String,
}

impl Encoding {
    /// Create an encoding builder.
    pub fn builder() -> EncodingBuilder {
        EncodingBuilder::new()
    }

    /// Bind a validated configuration to a fresh handle from `engine`.
    pub fn from_config(config: TokenizerConfiguration, engine: &dyn Engine) -> Result<Self> {
        config.validate()?;
        let handle = engine.tokenizer_for_model(config.encoding_id())?;
        debug!(
            "Created encoding '{}' for '{}' ({})",
            config.encoding_id(),
            config.model_name(),
            engine.engine_version()
        );

        Ok(Self {
            runtime: TokenizerRuntime::new(config),
            handle,
            engine_version: engine.engine_version().to_string(),
        })
    }

    /// Encode text to token IDs with default special-token handling.
    pub fn encode(&self, text: &str) -> Result<Vec<u32>> {
        self.encode_with_options(text, &EncodeOptions::default())
    }

    /// Encode text to token IDs.
    ///
    /// The input is counted first and rejected with
    /// [`TokenizerError::TokenLimit`] if it exceeds the chunk limit; the full
    /// encode only runs for input within the limit.
    pub fn encode_with_options(&self, text: &str, options: &EncodeOptions) -> Result<Vec<u32>> {
        options.ensure_no_overrides()?;

        let limit = self.runtime.chunk_limit();
        let count = self.handle.count(text)?;
        if count > limit {
            return Err(TokenizerError::TokenLimit { count, limit });
        }

        let start = Instant::now();
        let token_ids = self.handle.encode(text)?;
        let elapsed_ms = start.elapsed().as_secs_f64() * 1_000.0;
        trace!(
            "Encoded {} bytes into {} tokens in {:.3}ms",
            text.len(),
            token_ids.len(),
            elapsed_ms
        );

        let result = TokenizationResult::new(token_ids.clone(), elapsed_ms);
        let payload = MetricsPayload {
            model: self.model_name().to_string(),
            total_tokens: result.total_tokens,
            elapsed_ms: result.elapsed_ms,
            engine_version: self.engine_version.clone(),
        };
        self.runtime.record(result);

        // Cloned out so the hook runs without the state lock held.
        let hook = self.runtime.metrics_hook();
        metrics::dispatch(hook.as_ref(), &payload);

        Ok(token_ids)
    }

    /// Decode token IDs back to text.
    pub fn decode(&self, ids: &[u32]) -> Result<String> {
        self.handle.decode(ids)
    }

    /// Encode each text in order. Stops at the first error.
    pub fn encode_batch<S: AsRef<str>>(&self, texts: &[S]) -> Result<Vec<Vec<u32>>> {
        texts.iter().map(|text| self.encode(text.as_ref())).collect()
    }

    /// Decode each token list in order. Stops at the first error.
    pub fn decode_batch<B: AsRef<[u32]>>(&self, batches: &[B]) -> Result<Vec<String>> {
        batches
            .iter()
            .map(|ids| self.decode(ids.as_ref()))
            .collect()
    }

    /// Always fails: the engine's vocabulary is fixed.
    pub fn register_special_tokens<K, I>(&self, _tokens: I) -> Result<()>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, u32)>,
    {
        Err(TokenizerError::NotImplemented(Capability::CustomSpecialTokens))
    }

    /// Replace the metrics hook.
    pub fn set_metrics_hook<F>(&self, hook: F)
    where
        F: Fn(&MetricsPayload) + Send + Sync + 'static,
    {
        self.runtime.set_metrics_hook(Some(Arc::new(hook)));
    }

    /// Replace the metrics hook with an already shared one.
    pub fn set_shared_metrics_hook(&self, hook: MetricsHook) {
        self.runtime.set_metrics_hook(Some(hook));
    }

    /// Remove the metrics hook.
    pub fn clear_metrics_hook(&self) {
        self.runtime.set_metrics_hook(None);
    }

    /// Snapshot of the most recent encode result.
    pub fn last_result(&self) -> Option<TokenizationResult> {
        self.runtime.last_result()
    }

    /// Encoding identifier.
    pub fn name(&self) -> &str {
        self.runtime.config().encoding_id()
    }

    /// Model or encoding name this tokenizer was requested with.
    pub fn model_name(&self) -> &str {
        self.runtime.config().model_name()
    }

    /// Maximum token count accepted by a single encode call.
    pub fn chunk_limit(&self) -> usize {
        self.runtime.chunk_limit()
    }

    /// Special token strings and their IDs.
    pub fn special_tokens(&self) -> &AHashMap<String, u32> {
        self.runtime.config().special_tokens()
    }

    /// The resolved configuration.
    pub fn configuration(&self) -> &TokenizerConfiguration {
        self.runtime.config()
    }

    /// Version of the engine backing this encoding.
    pub fn engine_version(&self) -> &str {
        &self.engine_version
    }
}

impl fmt::Debug for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Encoding")
            .field("name", &self.name())
            .field("model", &self.model_name())
            .field("engine_version", &self.engine_version)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::mock::{CharEngine, MOCK_ENGINE_VERSION};
    use crate::ErrorKind;
    use parking_lot::Mutex;
    use proptest::prelude::*;

    fn encoding_for(engine: &Arc<CharEngine>, model: &str) -> Encoding {
        Encoding::builder()
            .model(model)
            .engine(engine.clone())
            .build()
            .unwrap()
    }

    fn gpt4o() -> (Arc<CharEngine>, Encoding) {
        let engine = Arc::new(CharEngine::new());
        let encoding = encoding_for(&engine, "gpt-4o");
        (engine, encoding)
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let (_, encoding) = gpt4o();

        let text = "迅速な茶色の狐 🌟 on ne voit bien qu'avec le cœur";
        let ids = encoding.encode(text).unwrap();
        assert_eq!(encoding.decode(&ids).unwrap(), text);
    }

    #[test]
    fn test_token_limit_checked_before_encode() {
        let (engine, encoding) = gpt4o();
        let long_text = "一".repeat(210_000);

        let err = encoding.encode(&long_text).unwrap_err();
        assert!(matches!(
            err,
            TokenizerError::TokenLimit {
                count: 210_000,
                limit: 200_000
            }
        ));
        let message = err.to_string();
        assert!(message.contains("210000"));
        assert!(message.to_lowercase().contains("chunk limit"));

        assert_eq!(engine.calls.counts(), 1);
        assert_eq!(engine.calls.encodes(), 0);
        assert!(encoding.last_result().is_none());
    }

    #[test]
    fn test_input_at_limit_is_accepted() {
        let (_, encoding) = gpt4o();
        let ids = encoding.encode(&"a".repeat(200_000)).unwrap();
        assert_eq!(ids.len(), 200_000);
    }

    #[test]
    fn test_override_rejected_before_engine() {
        let (engine, encoding) = gpt4o();

        let options = EncodeOptions::new().allowed_special("<|endoftext|>");
        let err = encoding.encode_with_options("hi", &options).unwrap_err();
        assert!(err.is_not_implemented());

        let options = EncodeOptions::new().disallowed_special(vec!["<|endoftext|>".to_string()]);
        let err = encoding.encode_with_options("hi", &options).unwrap_err();
        assert!(err.is_not_implemented());

        assert_eq!(engine.calls.counts(), 0);
    }

    #[test]
    fn test_all_selection_is_accepted() {
        let (_, encoding) = gpt4o();
        let options = EncodeOptions::new().allowed_special("all");
        assert_eq!(encoding.encode_with_options("hi", &options).unwrap(), vec![104, 105]);
    }

    #[test]
    fn test_register_special_tokens_always_fails() {
        let (_, encoding) = gpt4o();

        let err = encoding
            .register_special_tokens([("<|endoftext|>", 1)])
            .unwrap_err();
        assert!(matches!(
            err,
            TokenizerError::NotImplemented(Capability::CustomSpecialTokens)
        ));

        let empty: Vec<(String, u32)> = Vec::new();
        let err = encoding.register_special_tokens(empty).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedCapability);
    }

    #[test]
    fn test_metrics_hook_invoked_once() {
        let (_, encoding) = gpt4o();
        let payloads = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&payloads);
        encoding.set_metrics_hook(move |payload| sink.lock().push(payload.clone()));

        let ids = encoding.encode("monitor this").unwrap();

        let payloads = payloads.lock();
        assert_eq!(payloads.len(), 1);
        assert_eq!(payloads[0].model, "gpt-4o");
        assert_eq!(payloads[0].total_tokens, ids.len());
        assert!(payloads[0].elapsed_ms >= 0.0);
        assert_eq!(payloads[0].engine_version, MOCK_ENGINE_VERSION);
    }

    #[test]
    fn test_metrics_hook_is_replaced() {
        let (_, encoding) = gpt4o();
        let first = Arc::new(Mutex::new(0usize));
        let second = Arc::new(Mutex::new(0usize));

        let counter = Arc::clone(&first);
        encoding.set_metrics_hook(move |_| *counter.lock() += 1);
        let counter = Arc::clone(&second);
        encoding.set_metrics_hook(move |_| *counter.lock() += 1);

        encoding.encode("abc").unwrap();
        assert_eq!(*first.lock(), 0);
        assert_eq!(*second.lock(), 1);

        encoding.clear_metrics_hook();
        encoding.encode("abc").unwrap();
        assert_eq!(*second.lock(), 1);
    }

    #[test]
    fn test_panicking_hook_does_not_break_encode() {
        let (_, encoding) = gpt4o();
        encoding.set_metrics_hook(|_| panic!("broken hook"));

        let ids = encoding.encode("still works").unwrap();
        assert_eq!(ids.len(), "still works".len());
        assert_eq!(encoding.last_result().unwrap().token_ids, ids);
    }

    #[test]
    fn test_hook_may_reenter_encoding() {
        let (_, encoding) = gpt4o();
        let encoding = Arc::new(encoding);
        let seen = Arc::new(Mutex::new(None));

        let inner = Arc::downgrade(&encoding);
        let sink = Arc::clone(&seen);
        encoding.set_metrics_hook(move |_| {
            if let Some(encoding) = inner.upgrade() {
                *sink.lock() = encoding.last_result().map(|r| r.total_tokens);
            }
        });

        encoding.encode("abcd").unwrap();
        assert_eq!(*seen.lock(), Some(4));
    }

    #[test]
    fn test_last_result_is_independent_copy() {
        let (_, encoding) = gpt4o();

        let mut ids = encoding.encode("xyz").unwrap();
        ids.clear();

        let last = encoding.last_result().unwrap();
        assert_eq!(last.token_ids, vec![120, 121, 122]);
        assert_eq!(last.total_tokens, 3);
        assert!(!last.truncated);

        encoding.encode("q").unwrap();
        assert_eq!(encoding.last_result().unwrap().token_ids, vec![113]);
    }

    #[test]
    fn test_decode_skips_policy_checks() {
        let (engine, encoding) = gpt4o();
        let ids: Vec<u32> = "a".repeat(250_000).chars().map(u32::from).collect();

        let text = encoding.decode(&ids).unwrap();
        assert_eq!(text.len(), 250_000);
        assert_eq!(engine.calls.counts(), 0);
        assert_eq!(engine.calls.decodes.load(std::sync::atomic::Ordering::SeqCst), 1);
    }

    #[test]
    fn test_decode_engine_failure() {
        let (_, encoding) = gpt4o();
        let err = encoding.decode(&[0xD800]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EngineFailure);
    }

    #[test]
    fn test_batch_preserves_order() {
        let (_, encoding) = gpt4o();

        let batches = encoding.encode_batch(&["ab", "", "c"]).unwrap();
        assert_eq!(batches, vec![vec![97, 98], vec![], vec![99]]);

        let texts = encoding.decode_batch(&batches).unwrap();
        assert_eq!(texts, vec!["ab", "", "c"]);
    }

    #[test]
    fn test_batch_stops_at_first_error() {
        let (_, encoding) = gpt4o();
        let texts = vec!["ok".to_string(), "x".repeat(200_001), "never".to_string()];

        let err = encoding.encode_batch(&texts).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputTooLarge);
        assert_eq!(encoding.last_result().unwrap().token_ids, vec![111, 107]);
    }

    #[test]
    fn test_each_encoding_owns_its_handle() {
        let engine = Arc::new(CharEngine::new());
        let _first = encoding_for(&engine, "gpt-4o");
        let _second = encoding_for(&engine, "gpt-4o");
        assert_eq!(engine.calls.handles(), 2);
    }

    #[test]
    fn test_accessors() {
        let (_, encoding) = gpt4o();

        assert_eq!(encoding.name(), "o200k_base");
        assert_eq!(encoding.model_name(), "gpt-4o");
        assert_eq!(encoding.chunk_limit(), 200_000);
        assert_eq!(encoding.special_tokens().get("<|endoftext|>"), Some(&100_257));
        assert_eq!(encoding.configuration().encoding_id(), "o200k_base");
        assert_eq!(encoding.engine_version(), MOCK_ENGINE_VERSION);
    }

    #[test]
    fn test_encoding_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Encoding>();
    }

    proptest! {
        #[test]
        fn prop_encode_is_idempotent(text in "\\PC{0,64}") {
            let (_, encoding) = gpt4o();
            let first = encoding.encode(&text).unwrap();
            let second = encoding.encode(&text).unwrap();
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(encoding.decode(&first).unwrap(), text);
        }

        #[test]
        fn prop_batch_matches_single(texts in prop::collection::vec("\\PC{0,16}", 0..8)) {
            let (_, encoding) = gpt4o();
            let batched = encoding.encode_batch(&texts).unwrap();
            let single: Vec<Vec<u32>> = texts.iter().map(|t| encoding.encode(t).unwrap()).collect();
            prop_assert_eq!(batched, single);
        }
    }
}
