//! Static model and encoding registry.
//!
//! Maps user-facing model names to the encoding they use, the largest input
//! (in tokens) a single encode call may carry, and the special tokens the
//! encoding reserves. The table is fixed at compile time; the lookup index is
//! built once on first use.

use crate::error::{Result, TokenizerError};
use ahash::AHashMap;
use once_cell::sync::Lazy;

/// Chunk limit applied when a configuration is resolved from a bare
/// encoding name.
pub const DEFAULT_CHUNK_LIMIT: usize = 200_000;

/// Special tokens shared by every registered model.
const DEFAULT_SPECIALS: &[(&str, u32)] = &[
    ("<|endoftext|>", 100_257),
    ("<|reserved_special_0|>", 100_258),
];

/// Registry entry for one model or encoding name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelMetadata {
    /// Encoding identifier handed to the engine
    pub encoding_id: &'static str,
    /// Maximum token count accepted by a single encode call
    pub chunk_limit: usize,
    /// Special token strings and their IDs
    pub special_tokens: &'static [(&'static str, u32)],
}

impl ModelMetadata {
    const fn new(encoding_id: &'static str) -> Self {
        Self {
            encoding_id,
            chunk_limit: DEFAULT_CHUNK_LIMIT,
            special_tokens: DEFAULT_SPECIALS,
        }
    }

    /// Owned copy of the special token table.
    pub fn special_token_map(&self) -> AHashMap<String, u32> {
        self.special_tokens
            .iter()
            .map(|&(token, id)| (token.to_string(), id))
            .collect()
    }
}

/// Declaration order matters: the encoding fallback in
/// [`ModelRegistry::default_special_tokens`] takes the first match.
const MODEL_TABLE: &[(&str, ModelMetadata)] = &[
    ("cl100k_base", ModelMetadata::new("cl100k_base")),
    ("o200k_base", ModelMetadata::new("o200k_base")),
    ("voyage3_base", ModelMetadata::new("voyage3_base")),
    ("gpt-4o", ModelMetadata::new("o200k_base")),
    ("gpt-4o-mini", ModelMetadata::new("o200k_base")),
    ("gpt-4.1", ModelMetadata::new("o200k_base")),
    ("gpt-4.1-mini", ModelMetadata::new("o200k_base")),
    ("gpt-4o-128k", ModelMetadata::new("o200k_base")),
    ("gpt-4.1-128k", ModelMetadata::new("o200k_base")),
    ("voyage-3", ModelMetadata::new("voyage3_base")),
];

static GLOBAL_REGISTRY: Lazy<ModelRegistry> = Lazy::new(|| ModelRegistry::from_table(MODEL_TABLE));

/// Immutable name -> metadata mapping.
#[derive(Debug)]
pub struct ModelRegistry {
    entries: &'static [(&'static str, ModelMetadata)],
    /// Lower-cased name -> position in `entries`
    index: AHashMap<String, usize>,
}

impl ModelRegistry {
    /// The process-wide registry of built-in models.
    pub fn global() -> &'static ModelRegistry {
        &GLOBAL_REGISTRY
    }

    /// Build a registry over a static table.
    ///
    /// When two entries share a name (ignoring case) the first one wins.
    pub fn from_table(entries: &'static [(&'static str, ModelMetadata)]) -> Self {
        let mut index = AHashMap::with_capacity(entries.len());
        for (position, (name, _)) in entries.iter().enumerate() {
            index.entry(name.to_lowercase()).or_insert(position);
        }
        Self { entries, index }
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static ModelMetadata)> {
        self.entries.iter().map(|(name, metadata)| (*name, metadata))
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Whether `name` has an entry (case-insensitive).
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&name.to_lowercase())
    }

    /// Alphabetically sorted model names, without duplicates.
    pub fn list_models(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .entries
            .iter()
            .map(|(name, _)| name.to_string())
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Look up a model by name, ignoring case.
    pub fn lookup(&self, name: &str) -> Result<&'static ModelMetadata> {
        match self.index.get(&name.to_lowercase()) {
            Some(&position) => Ok(&self.entries[position].1),
            None => Err(self.unsupported(name)),
        }
    }

    /// Default special tokens for an encoding identifier.
    ///
    /// Tries an entry named `encoding_id` first, then the first entry (in
    /// declaration order) whose encoding equals `encoding_id`. Returns an
    /// empty map if neither exists.
    pub fn default_special_tokens(&self, encoding_id: &str) -> AHashMap<String, u32> {
        if let Ok(metadata) = self.lookup(encoding_id) {
            return metadata.special_token_map();
        }

        self.entries
            .iter()
            .find(|(_, metadata)| metadata.encoding_id == encoding_id)
            .map(|(_, metadata)| metadata.special_token_map())
            .unwrap_or_default()
    }

    /// Error for a name this registry cannot resolve, listing the supported
    /// models so the caller can correct the request.
    pub fn unsupported(&self, name: &str) -> TokenizerError {
        TokenizerError::UnsupportedModel {
            name: name.to_string(),
            supported: self.list_models(),
        }
    }
}

/// Alphabetically sorted names of all built-in models.
pub fn list_supported_models() -> Vec<String> {
    ModelRegistry::global().list_models()
}

/// Look up a built-in model by name, ignoring case.
pub fn lookup_model(name: &str) -> Result<&'static ModelMetadata> {
    ModelRegistry::global().lookup(name)
}

/// Default special tokens for an encoding identifier in the built-in registry.
pub fn default_special_tokens(encoding_id: &str) -> AHashMap<String, u32> {
    ModelRegistry::global().default_special_tokens(encoding_id)
}
