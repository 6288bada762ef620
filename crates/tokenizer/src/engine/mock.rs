//! One-token-per-character engine for unit tests.

use super::{Engine, EngineHandle};
use crate::{ModelRegistry, Result, TokenizerError};
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub(crate) const MOCK_ENGINE_VERSION: &str = "mock/1";

/// Call counters shared by an engine and every handle it creates.
#[derive(Debug, Default)]
pub(crate) struct CallLog {
    pub handles: AtomicUsize,
    pub counts: AtomicUsize,
    pub encodes: AtomicUsize,
    pub decodes: AtomicUsize,
}

impl CallLog {
    pub fn handles(&self) -> usize {
        self.handles.load(Ordering::SeqCst)
    }

    pub fn counts(&self) -> usize {
        self.counts.load(Ordering::SeqCst)
    }

    pub fn encodes(&self) -> usize {
        self.encodes.load(Ordering::SeqCst)
    }
}

/// Encodes each `char` as its Unicode scalar value.
#[derive(Debug, Default)]
pub(crate) struct CharEngine {
    pub calls: Arc<CallLog>,
}

impl CharEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Engine for CharEngine {
    fn tokenizer_for_model(&self, identifier: &str) -> Result<Box<dyn EngineHandle>> {
        if !self.supported_encodings().contains(identifier) {
            return Err(ModelRegistry::global().unsupported(identifier));
        }
        self.calls.handles.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(CharHandle {
            calls: Arc::clone(&self.calls),
        }))
    }

    fn supported_encodings(&self) -> BTreeSet<String> {
        ["cl100k_base", "o200k_base", "voyage3_base"]
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    fn supported_models(&self) -> BTreeSet<String> {
        BTreeSet::new()
    }

    fn engine_version(&self) -> &str {
        MOCK_ENGINE_VERSION
    }
}

struct CharHandle {
    calls: Arc<CallLog>,
}

impl EngineHandle for CharHandle {
    fn count(&self, text: &str) -> Result<usize> {
        self.calls.counts.fetch_add(1, Ordering::SeqCst);
        Ok(text.chars().count())
    }

    fn encode(&self, text: &str) -> Result<Vec<u32>> {
        self.calls.encodes.fetch_add(1, Ordering::SeqCst);
        Ok(text.chars().map(u32::from).collect())
    }

    fn decode(&self, ids: &[u32]) -> Result<String> {
        self.calls.decodes.fetch_add(1, Ordering::SeqCst);
        ids.iter()
            .map(|&id| {
                char::from_u32(id)
                    .ok_or_else(|| TokenizerError::Engine(format!("Unknown token ID: {}", id)))
            })
            .collect()
    }
}
