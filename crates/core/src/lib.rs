//! Tokshim-core - Registry, configuration and errors for the tokenizer facade
//!
//! This crate holds everything the facade decides before it ever talks to a
//! tokenizer engine: which encoding a model name maps to, how large a single
//! request may be, which special tokens an encoding reserves, and the error
//! taxonomy surfaced to callers.
//!
//! # Features
//!
//! - Static, case-insensitive model registry built once at first use
//! - Immutable, validated `TokenizerConfiguration`
//! - Special-token selection arguments with the reference API's shape
//! - Typed errors distinguishing unknown names, oversized input,
//!   unimplemented capabilities and engine failures
//!
//! # Example
//!
//! ```rust
//! use tokshim_core::{list_supported_models, TokenizerConfiguration};
//!
//! assert!(list_supported_models().contains(&"gpt-4o".to_string()));
//!
//! let config = TokenizerConfiguration::for_model("gpt-4o")?;
//! assert_eq!(config.encoding_id(), "o200k_base");
//! # Ok::<(), tokshim_core::TokenizerError>(())
//! ```

pub mod error;
pub use error::{Capability, ErrorKind, Result, TokenizerError};

// Model/encoding registry
pub mod registry;
pub use registry::{
    default_special_tokens, list_supported_models, lookup_model, ModelMetadata, ModelRegistry,
    DEFAULT_CHUNK_LIMIT,
};

// Special-token arguments
pub mod special;
pub use special::{EncodeOptions, SpecialSelection};

// Configuration resolution
pub mod config;
pub use config::TokenizerConfiguration;
