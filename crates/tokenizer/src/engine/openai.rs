//! Engine backed by the `bpe-openai` crate.

use super::{Engine, EngineHandle};
use crate::{ModelRegistry, Result, TokenizerError};
use bpe_openai::Tokenizer;
use log::debug;
use std::collections::BTreeSet;

/// Version string reported in metrics payloads.
pub const BPE_OPENAI_ENGINE_VERSION: &str = "bpe-openai/0.3";

/// Encodings loadable by name.
const ENCODINGS: &[&str] = &["cl100k_base", "o200k_base", "voyage3_base"];

/// Engine producing handles over the `bpe-openai` tokenizers.
///
/// The vocabularies are compiled into `bpe-openai` and built once per
/// process, so loading never touches the network and a handle is a cheap
/// reference to the shared tokenizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct BpeOpenAiEngine;

impl BpeOpenAiEngine {
    /// Create a new engine.
    pub fn new() -> Self {
        Self
    }

    fn load(identifier: &str) -> Result<&'static Tokenizer> {
        match identifier {
            "cl100k_base" => Ok(bpe_openai::cl100k_base()),
            "o200k_base" => Ok(bpe_openai::o200k_base()),
            "voyage3_base" => Ok(bpe_openai::voyage3_base()),
            other => {
                debug!("bpe-openai has no encoding named '{}'", other);
                Err(ModelRegistry::global().unsupported(other))
            }
        }
    }
}

impl Engine for BpeOpenAiEngine {
    fn tokenizer_for_model(&self, identifier: &str) -> Result<Box<dyn EngineHandle>> {
        let tokenizer = Self::load(identifier)?;
        debug!("Loaded bpe-openai encoding for '{}'", identifier);
        Ok(Box::new(BpeOpenAiHandle { tokenizer }))
    }

    fn supported_encodings(&self) -> BTreeSet<String> {
        ENCODINGS.iter().map(|name| name.to_string()).collect()
    }

    /// Registry models whose encoding this engine can load.
    fn supported_models(&self) -> BTreeSet<String> {
        ModelRegistry::global()
            .entries()
            .filter(|(_, metadata)| ENCODINGS.contains(&metadata.encoding_id))
            .map(|(name, _)| name.to_string())
            .collect()
    }

    fn engine_version(&self) -> &str {
        BPE_OPENAI_ENGINE_VERSION
    }
}

struct BpeOpenAiHandle {
    tokenizer: &'static Tokenizer,
}

impl EngineHandle for BpeOpenAiHandle {
    fn count(&self, text: &str) -> Result<usize> {
        Ok(self.tokenizer.count(text))
    }

    fn encode(&self, text: &str) -> Result<Vec<u32>> {
        Ok(self.tokenizer.encode(text))
    }

    fn decode(&self, ids: &[u32]) -> Result<String> {
        self.tokenizer.decode(ids).ok_or_else(|| {
            TokenizerError::Engine(format!(
                "Failed to decode {} tokens: not valid UTF-8",
                ids.len()
            ))
        })
    }
}
