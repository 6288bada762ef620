//! Error types for the tokenizer facade.

use std::fmt;
use thiserror::Error;

/// A feature of the reference tokenizer API that this facade deliberately
/// does not implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// A non-empty `allowed_special` argument
    AllowedSpecialOverride,
    /// A non-empty `disallowed_special` argument
    DisallowedSpecialOverride,
    /// Registering special tokens at runtime
    CustomSpecialTokens,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::AllowedSpecialOverride => {
                f.write_str("allowed_special overrides are not supported yet")
            }
            Capability::DisallowedSpecialOverride => {
                f.write_str("disallowed_special overrides are not supported yet")
            }
            Capability::CustomSpecialTokens => f.write_str(
                "custom special tokens are not supported; the underlying tokenizer is fixed",
            ),
        }
    }
}

/// Broad category of a [`TokenizerError`].
///
/// Conformance tooling matches on this instead of on individual variants so
/// that "not supported yet" can be told apart from "does not exist".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnknownIdentifier,
    InputTooLarge,
    UnsupportedCapability,
    EngineFailure,
    InvalidConfiguration,
}

/// Main error type for the tokenizer facade.
#[derive(Error, Debug)]
pub enum TokenizerError {
    /// Model or encoding name with no registry entry and no engine support
    #[error(
        "Unsupported model or encoding '{name}'. Supported models: {}",
        .supported.join(", ")
    )]
    UnsupportedModel { name: String, supported: Vec<String> },

    /// Pre-flight token count above the configured chunk limit
    #[error("Input of {count} tokens exceeds the chunk limit of {limit} tokens")]
    TokenLimit { count: usize, limit: usize },

    /// Feature deliberately left out of the facade
    #[error("Not implemented: {0}")]
    NotImplemented(Capability),

    /// Failure inside the external engine
    #[error("Engine error: {0}")]
    Engine(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl TokenizerError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TokenizerError::UnsupportedModel { .. } => ErrorKind::UnknownIdentifier,
            TokenizerError::TokenLimit { .. } => ErrorKind::InputTooLarge,
            TokenizerError::NotImplemented(_) => ErrorKind::UnsupportedCapability,
            TokenizerError::Engine(_) => ErrorKind::EngineFailure,
            TokenizerError::InvalidConfig(_) => ErrorKind::InvalidConfiguration,
        }
    }

    /// Whether the error marks a deliberately unimplemented capability.
    pub fn is_not_implemented(&self) -> bool {
        self.kind() == ErrorKind::UnsupportedCapability
    }
}

/// Result type alias for tokenizer operations.
pub type Result<T> = std::result::Result<T, TokenizerError>;
