//! Feature extraction for UPI transaction message classification.
//!
//! Transforms raw message text into the binary-presence vector the ONNX
//! model was trained on: one slot per vocabulary token, 1.0 if the token
//! occurs in the text, 0.0 otherwise. Presence, not count, matching the
//! binary vectorization scheme used during training.

use crate::vocabulary::Vocabulary;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// English stop words excluded before feature matching. Mirrors the list the
/// training-side vectorizer used; the contraction entries keep their
/// apostrophes even though tokenization strips them first.
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're",
        "you've", "you'll", "you'd", "your", "yours", "yourself", "yourselves",
        "he", "him", "his", "himself", "she", "she's", "her", "hers",
        "herself", "it", "it's", "its", "itself", "they", "them", "their",
        "theirs", "themselves", "what", "which", "who", "whom", "this",
        "that", "that'll", "these", "those", "am", "is", "are", "was",
        "were", "be", "been", "being", "have", "has", "had", "having",
        "do", "does", "did", "doing", "a", "an", "the", "and", "but",
        "if", "or", "because", "as", "until", "while", "of", "at",
        "by", "for", "with", "about", "against", "between", "into",
        "through", "during", "before", "after", "above", "below", "to",
        "from", "up", "down", "in", "out", "on", "off", "over", "under",
        "again", "further", "then", "once", "here", "there", "when",
        "where", "why", "how", "all", "any", "both", "each", "few",
        "more", "most", "other", "some", "such", "no", "nor", "not",
        "only", "own", "same", "so", "than", "too", "very", "s", "t",
        "can", "will", "just", "don", "don't", "should", "should've",
        "now", "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren",
        "aren't", "couldn", "couldn't", "didn", "didn't", "doesn",
        "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven",
        "haven't", "isn", "isn't", "ma", "mightn", "mightn't", "mustn",
        "mustn't", "needn", "needn't", "shan", "shan't", "shouldn",
        "shouldn't", "wasn", "wasn't", "weren", "weren't", "won",
        "won't", "wouldn", "wouldn't",
    ])
});

/// Feature extractor that turns message text into model input features.
///
/// Owns the vocabulary the model was trained on; extraction output length is
/// always exactly the vocabulary length, regardless of input text.
#[derive(Debug)]
pub struct FeatureExtractor {
    vocabulary: Vocabulary,
}

impl FeatureExtractor {
    /// Create an extractor over a loaded vocabulary.
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Extract a binary feature vector from message text.
    ///
    /// Tokenization: lower-case, strip everything outside the ASCII word
    /// class (letters, digits, underscore) and whitespace, split on
    /// whitespace runs, drop stop words. Surviving tokens that match a
    /// vocabulary entry set that index to 1.0; everything else stays 0.0.
    /// Repeated tokens are idempotent.
    pub fn extract(&self, text: &str) -> Vec<f32> {
        let mut features = vec![0.0_f32; self.vocabulary.len()];

        // ASCII word class only: the trained vectorizer never saw non-Latin
        // characters, so accented or non-Latin letters are stripped, not kept.
        let cleaned: String = text
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace())
            .collect();

        for token in cleaned.split_whitespace() {
            if STOP_WORDS.contains(token) {
                continue;
            }
            if let Some(index) = self.vocabulary.index_of(token) {
                features[index] = 1.0;
            }
        }

        features
    }

    /// Length of the feature vectors this extractor produces.
    pub fn feature_count(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }
}
