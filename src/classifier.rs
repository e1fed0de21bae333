//! Top-level classifier tying feature extraction to model inference.

use crate::config::AppConfig;
use crate::error::ClassifierError;
use crate::feature_extractor::FeatureExtractor;
use crate::models::InferenceEngine;
use crate::types::Classification;
use crate::vocabulary::Vocabulary;
use std::path::Path;
use tracing::info;

/// Classifies free-text messages as UPI transactions.
///
/// Loads the vocabulary and ONNX model once at construction; the value is
/// `Send + Sync` and meant to be built at startup and shared (e.g. behind an
/// `Arc`) for the lifetime of the process.
#[derive(Debug)]
pub struct UpiClassifier {
    extractor: FeatureExtractor,
    engine: InferenceEngine,
}

impl UpiClassifier {
    /// Build a classifier from application configuration.
    pub fn new(config: &AppConfig) -> Result<Self, ClassifierError> {
        Self::from_artifacts(
            &config.artifacts.vocabulary_path,
            &config.artifacts.model_path,
            config.artifacts.onnx_threads,
        )
    }

    /// Build a classifier from explicit artifact paths.
    ///
    /// Fails with `ArtifactLoad` if either artifact is missing or malformed,
    /// or if the model's declared input width disagrees with the vocabulary
    /// length.
    pub fn from_artifacts<P: AsRef<Path>, Q: AsRef<Path>>(
        vocabulary_path: P,
        model_path: Q,
        onnx_threads: usize,
    ) -> Result<Self, ClassifierError> {
        let vocabulary = Vocabulary::load(vocabulary_path)?;
        let engine = InferenceEngine::new(model_path, vocabulary.len(), onnx_threads)?;
        let extractor = FeatureExtractor::new(vocabulary);

        info!(
            features = extractor.feature_count(),
            "UPI classifier initialized"
        );

        Ok(Self { extractor, engine })
    }

    /// Classify one message: extract features, run one forward pass.
    ///
    /// A single logical operation with no observable intermediate state; a
    /// failure yields no classification, not a low-confidence default.
    pub fn classify_text(&self, text: &str) -> Result<Classification, ClassifierError> {
        let features = self.extractor.extract(text);
        self.engine.classify(&features)
    }

    /// The feature space width shared by extractor and model.
    pub fn feature_count(&self) -> usize {
        self.extractor.feature_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_vocabulary_is_artifact_load_error() {
        let err =
            UpiClassifier::from_artifacts("missing_vocab.json", "missing_model.onnx", 1)
                .unwrap_err();
        assert!(matches!(err, ClassifierError::ArtifactLoad { .. }));
    }

    #[test]
    fn test_missing_model_is_artifact_load_error() {
        // Vocabulary present, model absent: construction must still fail.
        let mut vocab = tempfile::NamedTempFile::new().unwrap();
        write!(vocab, r#"["upi", "received"]"#).unwrap();

        let err = UpiClassifier::from_artifacts(vocab.path(), "missing_model.onnx", 1)
            .unwrap_err();
        assert!(matches!(err, ClassifierError::ArtifactLoad { .. }));
    }
}
