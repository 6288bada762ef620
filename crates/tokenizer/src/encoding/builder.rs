//! Builder for [`Encoding`].

use super::Encoding;
use crate::engine::{default_engine, Engine};
use crate::metrics::{MetricsHook, MetricsPayload};
use crate::{EncodeOptions, Result, SpecialSelection, TokenizerConfiguration, TokenizerError};
use std::sync::Arc;

#[derive(Debug, Clone)]
enum Target {
    Model(String),
    Encoding(String),
}

/// Builder for creating an [`Encoding`].
///
/// Exactly one of [`model`](EncodingBuilder::model) or
/// [`encoding`](EncodingBuilder::encoding) must be set; the last call wins.
#[derive(Clone, Default)]
pub struct EncodingBuilder {
    target: Option<Target>,
    options: EncodeOptions,
    engine: Option<Arc<dyn Engine>>,
    metrics_hook: Option<MetricsHook>,
}

impl EncodingBuilder {
    /// Create a new builder with the default engine and no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve through the model registry.
    pub fn model(mut self, name: impl Into<String>) -> Self {
        self.target = Some(Target::Model(name.into()));
        self
    }

    /// Use an encoding name directly.
    pub fn encoding(mut self, name: impl Into<String>) -> Self {
        self.target = Some(Target::Encoding(name.into()));
        self
    }

    /// Set the special-token options checked at construction.
    pub fn options(mut self, options: EncodeOptions) -> Self {
        self.options = options;
        self
    }

    /// Set `allowed_special`.
    pub fn allowed_special(mut self, selection: impl Into<SpecialSelection>) -> Self {
        self.options = self.options.allowed_special(selection);
        self
    }

    /// Set `disallowed_special`.
    pub fn disallowed_special(mut self, selection: impl Into<SpecialSelection>) -> Self {
        self.options = self.options.disallowed_special(selection);
        self
    }

    /// Use a specific engine instead of the default `bpe-openai` engine.
    pub fn engine(mut self, engine: Arc<dyn Engine>) -> Self {
        self.engine = Some(engine);
        self
    }

    /// Register a metrics hook on the built encoding.
    pub fn metrics_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&MetricsPayload) + Send + Sync + 'static,
    {
        self.metrics_hook = Some(Arc::new(hook));
        self
    }

    /// Build the encoding.
    pub fn build(self) -> Result<Encoding> {
        self.options.ensure_no_overrides()?;

        let config = match &self.target {
            Some(Target::Model(name)) => TokenizerConfiguration::for_model(name)?,
            Some(Target::Encoding(name)) => TokenizerConfiguration::for_encoding(name)?,
            None => {
                return Err(TokenizerError::InvalidConfig(
                    "either a model or an encoding name is required".to_string(),
                ))
            }
        };

        let engine = self.engine.unwrap_or_else(default_engine);
        let encoding = Encoding::from_config(config, engine.as_ref())?;
        if let Some(hook) = self.metrics_hook {
            encoding.set_shared_metrics_hook(hook);
        }

        Ok(encoding)
    }
}
