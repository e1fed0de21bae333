//! Error taxonomy for the classification pipeline.
//!
//! Every failure aborts the classification call and surfaces to the caller
//! with the stage that failed; there is no retry and no fallback result.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading artifacts or running inference.
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// Vocabulary or model artifact missing, unreadable, or malformed.
    #[error("failed to load artifact {path}: {source}")]
    ArtifactLoad {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// Feature vector length does not match the model's expected input width.
    #[error("feature vector has {actual} elements, model expects {expected}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// The ONNX runtime failed during the forward pass, or the model
    /// produced output the engine could not read a probability from.
    #[error("inference execution failed: {0}")]
    InferenceExecution(#[from] ort::Error),
}

impl ClassifierError {
    /// Wrap an artifact loading failure with the path that caused it.
    pub fn artifact_load<P: Into<PathBuf>, E: Into<anyhow::Error>>(path: P, source: E) -> Self {
        Self::ArtifactLoad {
            path: path.into(),
            source: source.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_message() {
        let err = ClassifierError::ShapeMismatch {
            expected: 5000,
            actual: 36,
        };
        assert_eq!(
            err.to_string(),
            "feature vector has 36 elements, model expects 5000"
        );
    }

    #[test]
    fn test_inference_execution_keeps_source() {
        use std::error::Error;

        let err = ClassifierError::from(ort::Error::new("runtime failure"));
        assert!(matches!(err, ClassifierError::InferenceExecution(_)));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_artifact_load_includes_path() {
        let err = ClassifierError::artifact_load(
            "ml/tfidf_feature_names.json",
            anyhow::anyhow!("file not found"),
        );
        assert!(err.to_string().contains("tfidf_feature_names.json"));
    }
}
