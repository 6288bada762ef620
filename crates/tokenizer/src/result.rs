//! Outcome of a single encode call.

use serde::{Deserialize, Serialize};

/// Result of encoding text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenizationResult {
    /// Token IDs
    pub token_ids: Vec<u32>,
    /// Number of tokens, always `token_ids.len()`
    pub total_tokens: usize,
    /// Reserved for partial results; always `false`
    pub truncated: bool,
    /// Wall-clock time spent in the engine's encode
    pub elapsed_ms: f64,
}

impl TokenizationResult {
    /// Create a complete (untruncated) result.
    pub fn new(token_ids: Vec<u32>, elapsed_ms: f64) -> Self {
        Self {
            total_tokens: token_ids.len(),
            token_ids,
            truncated: false,
            elapsed_ms: elapsed_ms.max(0.0),
        }
    }

    /// Get the number of tokens.
    pub fn len(&self) -> usize {
        self.total_tokens
    }

    /// Check if the result is empty.
    pub fn is_empty(&self) -> bool {
        self.total_tokens == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_result() {
        let result = TokenizationResult::new(vec![1, 2, 3], 1.5);

        assert_eq!(result.len(), 3);
        assert_eq!(result.total_tokens, result.token_ids.len());
        assert!(!result.truncated);
        assert!(!result.is_empty());
    }

    #[test]
    fn test_negative_elapsed_clamped() {
        let result = TokenizationResult::new(Vec::new(), -0.1);
        assert_eq!(result.elapsed_ms, 0.0);
        assert!(result.is_empty());
    }

    #[test]
    fn test_len_and_is_empty_agree() {
        let mut result = TokenizationResult::new(vec![7, 8], 0.0);
        result.total_tokens = 0;
        assert_eq!(result.len(), 0);
        assert!(result.is_empty());

        let mut result = TokenizationResult::new(Vec::new(), 0.0);
        result.total_tokens = 4;
        assert_eq!(result.len(), 4);
        assert!(!result.is_empty());
    }
}
