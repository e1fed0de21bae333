//! Vocabulary loaded from the vectorizer's exported feature names.
//!
//! The artifact is a JSON array of lower-case tokens whose position is the
//! feature index the model was trained against. Order is load-bearing: the
//! feature vector's index space is exactly this list's index space.

use crate::error::ClassifierError;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::info;

/// Ordered token list with an exact-match token -> index lookup.
#[derive(Debug)]
pub struct Vocabulary {
    tokens: Vec<String>,
    /// Built once at load time so extraction is O(tokens) instead of a
    /// per-token linear scan over the full list.
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Load the vocabulary from a JSON array artifact.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ClassifierError> {
        let path = path.as_ref();

        let raw = fs::read_to_string(path)
            .map_err(|e| ClassifierError::artifact_load(path, e))?;
        let tokens: Vec<String> = serde_json::from_str(&raw)
            .map_err(|e| ClassifierError::artifact_load(path, e))?;

        info!(path = %path.display(), tokens = tokens.len(), "Vocabulary loaded");

        Ok(Self::from_tokens(tokens))
    }

    /// Build a vocabulary from an in-memory token list.
    ///
    /// Tokens are expected to be distinct; should a duplicate slip into the
    /// artifact, the first occurrence wins, matching a positional scan.
    pub fn from_tokens(tokens: Vec<String>) -> Self {
        let mut index = HashMap::with_capacity(tokens.len());
        for (i, token) in tokens.iter().enumerate() {
            index.entry(token.clone()).or_insert(i);
        }

        Self { tokens, index }
    }

    /// Feature index of an exact-match token, if present.
    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }

    /// Number of tokens, which is also the feature vector length.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token at a feature index.
    pub fn token_at(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }
}
