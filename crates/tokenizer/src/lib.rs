//! Tokshim-tokenizer - tiktoken-compatible tokenizer facade
//!
//! This crate exposes the familiar `encoding_for_model` / `get_encoding`
//! surface and hands the byte-pair encoding itself to an external engine.
//! Around every call it enforces the facade's policies and reports telemetry.
//!
//! # Features
//!
//! - Model and encoding name resolution through a static registry
//! - Pre-flight chunk-limit check before any full encode
//! - Explicit errors for special-token overrides and runtime vocabulary
//!   registration, which the facade does not implement
//! - Per-call timing, a "last result" snapshot and an optional metrics hook
//! - Pluggable engines; `bpe-openai` is used by default
//!
//! # Example
//!
//! ```rust
//! use tokshim_tokenizer::encoding_for_model;
//!
//! let encoding = encoding_for_model("gpt-4o")?;
//! encoding.set_metrics_hook(|payload| println!("{} tokens", payload.total_tokens));
//!
//! let ids = encoding.encode("Hello, world!")?;
//! assert_eq!(encoding.decode(&ids)?, "Hello, world!");
//! # Ok::<(), tokshim_tokenizer::TokenizerError>(())
//! ```

// Re-export core types
pub use tokshim_core::{
    default_special_tokens, lookup_model, Capability, EncodeOptions, ErrorKind, ModelMetadata,
    ModelRegistry, Result, SpecialSelection, TokenizerConfiguration, TokenizerError,
    DEFAULT_CHUNK_LIMIT,
};

// Engine binding
pub mod engine;
pub use engine::{default_engine, BpeOpenAiEngine, Engine, EngineHandle};

// Facade
pub mod encoding;
pub use encoding::{Encoding, EncodingBuilder};

pub mod metrics;
pub use metrics::{MetricsHook, MetricsPayload};

pub mod result;
pub use result::TokenizationResult;

pub mod runtime;
pub use runtime::TokenizerRuntime;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Alphabetically sorted names of all built-in models.
pub fn list_supported_models() -> Vec<String> {
    tokshim_core::list_supported_models()
}

/// Create an encoding for a registered model name.
pub fn encoding_for_model(model_name: &str) -> Result<Encoding> {
    Encoding::builder().model(model_name).build()
}

/// Create an encoding for an encoding name.
pub fn get_encoding(encoding_name: &str) -> Result<Encoding> {
    get_encoding_with_options(encoding_name, &EncodeOptions::default())
}

/// Create an encoding for an encoding name, checking special-token options.
///
/// Any non-empty `allowed_special` or `disallowed_special` set fails with
/// [`TokenizerError::NotImplemented`].
pub fn get_encoding_with_options(encoding_name: &str, options: &EncodeOptions) -> Result<Encoding> {
    Encoding::builder()
        .encoding(encoding_name)
        .options(options.clone())
        .build()
}
