//! Inference engine for the UPI message classifier
//!
//! Holds one ONNX Runtime session for the lifetime of the process and runs a
//! single forward pass per classification. The model maps a `[1, V]` float32
//! binary-presence vector to the probability that the message describes a
//! UPI transaction.

use crate::error::ClassifierError;
use crate::models::loader::{LoadedModel, ModelLoader};
use crate::types::Classification;
use ort::value::Tensor;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, info};

/// Classifier inference engine using ONNX Runtime.
///
/// The session is loaded once and reused for every call. Runs take the
/// session mutably, so concurrent callers are serialized through the lock;
/// forward passes on the immutable model are otherwise side-effect free.
#[derive(Debug)]
pub struct InferenceEngine {
    model: Mutex<LoadedModel>,
    /// Input width the model was exported with; every feature vector must
    /// have exactly this many elements.
    expected_width: usize,
}

impl InferenceEngine {
    /// Load the model and prepare a reusable session.
    ///
    /// `vocabulary_len` is the feature space the caller extracts into. If the
    /// model declares a concrete input width it must match; a silent mismatch
    /// here is the likeliest source of silently wrong classifications.
    pub fn new<P: AsRef<Path>>(
        model_path: P,
        vocabulary_len: usize,
        onnx_threads: usize,
    ) -> Result<Self, ClassifierError> {
        let model_path = model_path.as_ref();
        let loader = ModelLoader::with_threads(onnx_threads)?;
        let model = loader.load_model(model_path)?;

        if let Some(width) = model.expected_width {
            if width != vocabulary_len {
                return Err(ClassifierError::artifact_load(
                    model_path,
                    anyhow::anyhow!(
                        "model expects input width {}, vocabulary has {} tokens",
                        width,
                        vocabulary_len
                    ),
                ));
            }
        }

        info!(
            input_width = vocabulary_len,
            "Inference engine ready"
        );

        Ok(Self {
            model: Mutex::new(model),
            expected_width: vocabulary_len,
        })
    }

    /// Input width this engine accepts.
    pub fn expected_width(&self) -> usize {
        self.expected_width
    }

    /// Run one forward pass over a feature vector.
    ///
    /// Marshals the vector into a `[1, V]` float32 tensor, reads the first
    /// element of the probability output, and applies the strict >0.5
    /// decision rule. Any runtime failure aborts the call; there is no
    /// default classification.
    pub fn classify(&self, features: &[f32]) -> Result<Classification, ClassifierError> {
        validate_width(self.expected_width, features)?;

        let shape = vec![1_i64, features.len() as i64];
        let input_tensor = Tensor::from_array((shape, features.to_vec()))?;

        // A poisoned lock means a prior caller panicked mid-run; the session
        // itself is still usable.
        let mut guard = self
            .model
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let model = &mut *guard;

        let outputs = model
            .session
            .run(ort::inputs![&model.input_name => input_tensor])?;

        let confidence = extract_probability(&outputs, &model.output_name)?;

        debug!(confidence = confidence, "Forward pass complete");

        Ok(Classification::from_confidence(confidence))
    }
}

/// Reject feature vectors whose length differs from the model's input width.
fn validate_width(expected: usize, features: &[f32]) -> Result<(), ClassifierError> {
    if features.len() != expected {
        return Err(ClassifierError::ShapeMismatch {
            expected,
            actual: features.len(),
        });
    }
    Ok(())
}

/// Pull the probability scalar out of the session outputs.
///
/// The reference export disables zipmap, so probabilities arrive as a plain
/// float tensor whose first element is the positive-class score. Classifier
/// exports also carry a label output, which is skipped.
fn extract_probability(
    outputs: &ort::session::SessionOutputs,
    output_name: &str,
) -> Result<f32, ClassifierError> {
    if let Some(output) = outputs.get(output_name) {
        if let Ok((_, data)) = output.try_extract_tensor::<f32>() {
            if let Some(&prob) = data.first() {
                return Ok(prob);
            }
        }
    }

    // Fallback: first float tensor among the remaining outputs.
    for (name, output) in outputs.iter() {
        if name.contains("label") {
            continue;
        }
        if let Ok((_, data)) = output.try_extract_tensor::<f32>() {
            if let Some(&prob) = data.first() {
                debug!(output = %name, "Probability taken from fallback output");
                return Ok(prob);
            }
        }
    }

    Err(ClassifierError::InferenceExecution(ort::Error::new(
        format!("no probability tensor in model outputs (looked for {output_name})"),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Exercising the full engine needs the real ONNX artifact; the decision
    // rule and shape guard are covered without it.

    #[test]
    fn test_decision_rule_is_strict() {
        let result = Classification::from_confidence(0.5);
        assert!(!result.is_transaction);

        let result = Classification::from_confidence(0.51);
        assert!(result.is_transaction);
        assert_eq!(result.confidence, 0.51);
    }

    #[test]
    fn test_wrong_length_vector_is_shape_mismatch() {
        let err = validate_width(5000, &[0.0_f32; 36]).unwrap_err();
        assert!(matches!(
            err,
            ClassifierError::ShapeMismatch {
                expected: 5000,
                actual: 36,
            }
        ));

        assert!(validate_width(36, &[0.0_f32; 36]).is_ok());
    }

    #[test]
    fn test_missing_model_is_artifact_load_error() {
        let err = InferenceEngine::new("does/not/exist.onnx", 5000, 1).unwrap_err();
        assert!(matches!(err, ClassifierError::ArtifactLoad { .. }));
    }
}
