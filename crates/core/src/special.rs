//! Special-token selection arguments.
//!
//! The reference API lets callers pass `allowed_special` and
//! `disallowed_special` either as the literal `"all"` or as a set of token
//! strings. The facade accepts those arguments for signature parity but
//! rejects any non-empty explicit set.

use crate::error::{Capability, Result, TokenizerError};

/// Value of an `allowed_special` / `disallowed_special` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecialSelection {
    /// The literal `"all"`; keeps the encoding's default behaviour
    All,
    /// An explicit set of special token strings
    Tokens(Vec<String>),
}

impl SpecialSelection {
    /// Whether this selection would change the encoding's default
    /// special-token handling.
    pub fn is_override(&self) -> bool {
        match self {
            SpecialSelection::All => false,
            SpecialSelection::Tokens(tokens) => !tokens.is_empty(),
        }
    }
}

impl From<&str> for SpecialSelection {
    fn from(value: &str) -> Self {
        if value == "all" {
            SpecialSelection::All
        } else {
            SpecialSelection::Tokens(vec![value.to_string()])
        }
    }
}

impl From<Vec<String>> for SpecialSelection {
    fn from(tokens: Vec<String>) -> Self {
        SpecialSelection::Tokens(tokens)
    }
}

impl From<&[&str]> for SpecialSelection {
    fn from(tokens: &[&str]) -> Self {
        SpecialSelection::Tokens(tokens.iter().map(|token| token.to_string()).collect())
    }
}

/// Per-call encoding options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Special tokens allowed to appear as themselves
    pub allowed_special: Option<SpecialSelection>,
    /// Special tokens that must be rejected if present
    pub disallowed_special: Option<SpecialSelection>,
}

impl EncodeOptions {
    /// Options with no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `allowed_special`.
    pub fn allowed_special(mut self, selection: impl Into<SpecialSelection>) -> Self {
        self.allowed_special = Some(selection.into());
        self
    }

    /// Set `disallowed_special`.
    pub fn disallowed_special(mut self, selection: impl Into<SpecialSelection>) -> Self {
        self.disallowed_special = Some(selection.into());
        self
    }

    /// Fail with [`TokenizerError::NotImplemented`] if either argument is an
    /// override.
    pub fn ensure_no_overrides(&self) -> Result<()> {
        if self
            .allowed_special
            .as_ref()
            .is_some_and(SpecialSelection::is_override)
        {
            return Err(TokenizerError::NotImplemented(Capability::AllowedSpecialOverride));
        }

        if self
            .disallowed_special
            .as_ref()
            .is_some_and(SpecialSelection::is_override)
        {
            return Err(TokenizerError::NotImplemented(Capability::DisallowedSpecialOverride));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_not_an_override() {
        let options = EncodeOptions::new()
            .allowed_special("all")
            .disallowed_special("all");
        assert!(options.ensure_no_overrides().is_ok());
    }

    #[test]
    fn test_empty_set_is_not_an_override() {
        let options = EncodeOptions::new().allowed_special(Vec::<String>::new());
        assert!(options.ensure_no_overrides().is_ok());
        assert!(EncodeOptions::default().ensure_no_overrides().is_ok());
    }

    #[test]
    fn test_single_string_becomes_override() {
        assert_eq!(
            SpecialSelection::from("<|endoftext|>"),
            SpecialSelection::Tokens(vec!["<|endoftext|>".to_string()])
        );
    }

    #[test]
    fn test_allowed_override_rejected() {
        let options = EncodeOptions::new().allowed_special(&["<|endoftext|>"][..]);
        let err = options.ensure_no_overrides().unwrap_err();
        assert!(matches!(
            err,
            TokenizerError::NotImplemented(Capability::AllowedSpecialOverride)
        ));
    }

    #[test]
    fn test_disallowed_override_rejected() {
        let options = EncodeOptions::new().disallowed_special("<|endoftext|>");
        let err = options.ensure_no_overrides().unwrap_err();
        assert!(matches!(
            err,
            TokenizerError::NotImplemented(Capability::DisallowedSpecialOverride)
        ));
    }
}
