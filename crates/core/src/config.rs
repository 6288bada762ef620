//! Tokenizer configuration and its resolution from model or encoding names.

use crate::error::{Result, TokenizerError};
use crate::registry::{ModelRegistry, DEFAULT_CHUNK_LIMIT};
use ahash::AHashMap;
use log::debug;

/// Resolved, validated configuration for one tokenizer instance.
///
/// Fields are private so a configuration cannot change after validation.
#[derive(Debug, Clone)]
pub struct TokenizerConfiguration {
    model_name: String,
    encoding_id: String,
    chunk_limit: usize,
    special_tokens: AHashMap<String, u32>,
}

impl TokenizerConfiguration {
    /// Create and validate a configuration from its parts.
    pub fn new(
        model_name: impl Into<String>,
        encoding_id: impl Into<String>,
        chunk_limit: usize,
        special_tokens: AHashMap<String, u32>,
    ) -> Result<Self> {
        let config = Self {
            model_name: model_name.into(),
            encoding_id: encoding_id.into(),
            chunk_limit,
            special_tokens,
        };
        config.validate()?;
        Ok(config)
    }

    /// Resolve a configuration from a model name in the built-in registry.
    pub fn for_model(model_name: &str) -> Result<Self> {
        Self::for_model_in(ModelRegistry::global(), model_name)
    }

    /// Resolve a configuration from a model name in `registry`.
    ///
    /// `model_name` is kept exactly as given; the lookup itself ignores case.
    pub fn for_model_in(registry: &ModelRegistry, model_name: &str) -> Result<Self> {
        let metadata = registry.lookup(model_name)?;
        debug!(
            "Resolved model '{}' to encoding '{}' (chunk limit {})",
            model_name, metadata.encoding_id, metadata.chunk_limit
        );

        Self::new(
            model_name,
            metadata.encoding_id,
            metadata.chunk_limit,
            metadata.special_token_map(),
        )
    }

    /// Build a configuration for an encoding name.
    ///
    /// Any non-empty name is accepted here; whether the engine can actually
    /// materialize it is checked when the tokenizer is constructed.
    pub fn for_encoding(encoding_name: &str) -> Result<Self> {
        Self::for_encoding_in(ModelRegistry::global(), encoding_name)
    }

    /// Build a configuration for an encoding name, taking default special
    /// tokens from `registry`.
    pub fn for_encoding_in(registry: &ModelRegistry, encoding_name: &str) -> Result<Self> {
        let special_tokens = registry.default_special_tokens(encoding_name);
        debug!(
            "Resolved encoding '{}' with {} default special tokens",
            encoding_name,
            special_tokens.len()
        );

        Self::new(
            encoding_name,
            encoding_name,
            DEFAULT_CHUNK_LIMIT,
            special_tokens,
        )
    }

    /// Check the configuration invariants.
    pub fn validate(&self) -> Result<()> {
        if self.encoding_id.trim().is_empty() {
            return Err(TokenizerError::InvalidConfig(
                "encoding identifier must not be empty".to_string(),
            ));
        }
        if self.model_name.trim().is_empty() {
            return Err(TokenizerError::InvalidConfig(
                "model name must not be empty".to_string(),
            ));
        }
        if self.chunk_limit == 0 {
            return Err(TokenizerError::InvalidConfig(format!(
                "chunk limit for '{}' must be greater than zero",
                self.model_name
            )));
        }
        Ok(())
    }

    /// Name the configuration was requested with.
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Encoding identifier handed to the engine.
    pub fn encoding_id(&self) -> &str {
        &self.encoding_id
    }

    /// Maximum token count accepted by a single encode call.
    pub fn chunk_limit(&self) -> usize {
        self.chunk_limit
    }

    /// Special token strings and their IDs.
    pub fn special_tokens(&self) -> &AHashMap<String, u32> {
        &self.special_tokens
    }
}
