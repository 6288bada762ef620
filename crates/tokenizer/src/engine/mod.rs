//! Engine binding capability interface.
//!
//! The facade never runs byte-pair encoding itself. It asks an [`Engine`] for
//! a handle bound to one encoding and delegates every count, encode and
//! decode to that handle.

use crate::Result;
use std::collections::BTreeSet;
use std::sync::Arc;

pub mod openai;
pub use openai::BpeOpenAiEngine;

#[cfg(test)]
pub(crate) mod mock;

/// A tokenizer bound to a single encoding.
pub trait EngineHandle: Send + Sync {
    /// Count the tokens `text` encodes to.
    ///
    /// Used as a pre-flight guard. Engines with a cheaper counting path
    /// should override this.
    fn count(&self, text: &str) -> Result<usize> {
        self.encode(text).map(|ids| ids.len())
    }

    /// Encode text to token IDs.
    fn encode(&self, text: &str) -> Result<Vec<u32>>;

    /// Decode token IDs back to text.
    ///
    /// Must reproduce the original text for any sequence produced by
    /// [`EngineHandle::encode`].
    fn decode(&self, ids: &[u32]) -> Result<String>;
}

/// Factory for [`EngineHandle`]s.
pub trait Engine: Send + Sync {
    /// Materialize a handle for a model or encoding identifier.
    fn tokenizer_for_model(&self, identifier: &str) -> Result<Box<dyn EngineHandle>>;

    /// Encoding identifiers this engine can materialize.
    fn supported_encodings(&self) -> BTreeSet<String>;

    /// Model names this engine can materialize.
    fn supported_models(&self) -> BTreeSet<String>;

    /// Version string used for telemetry attribution.
    fn engine_version(&self) -> &str;
}

/// The engine used when none is configured explicitly.
pub fn default_engine() -> Arc<dyn Engine> {
    Arc::new(BpeOpenAiEngine::new())
}
