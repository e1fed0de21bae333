//! ONNX model loader

use crate::error::ClassifierError;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::ValueType;
use std::path::Path;
use tracing::info;

/// Loaded ONNX model with the metadata needed to run it
#[derive(Debug)]
pub struct LoadedModel {
    /// ONNX Runtime session, reusable across calls
    pub session: Session,
    /// Input name for the model
    pub input_name: String,
    /// Output name for probabilities
    pub output_name: String,
    /// Input width declared by the model, if the dimension is concrete
    pub expected_width: Option<usize>,
}

/// Loader for the classifier's ONNX model
pub struct ModelLoader {
    /// Number of threads for ONNX inference
    onnx_threads: usize,
}

impl ModelLoader {
    /// Create a new model loader with default settings (1 thread)
    pub fn new() -> Result<Self, ClassifierError> {
        Self::with_threads(1)
    }

    /// Create a new model loader with specified number of threads
    pub fn with_threads(onnx_threads: usize) -> Result<Self, ClassifierError> {
        ort::init().commit()?;
        info!(onnx_threads = onnx_threads, "ONNX Runtime initialized");
        Ok(Self { onnx_threads })
    }

    /// Load the classifier model from file
    pub fn load_model<P: AsRef<Path>>(&self, path: P) -> Result<LoadedModel, ClassifierError> {
        let path = path.as_ref();

        info!(path = %path.display(), threads = self.onnx_threads, "Loading ONNX model");

        let session = Session::builder()?
            .with_optimization_level(GraphOptimizationLevel::Level3)?
            .with_intra_threads(self.onnx_threads)?
            .commit_from_file(path)
            .map_err(|e| ClassifierError::artifact_load(path, e))?;

        // The reference export names its input "input"; fall back to
        // whatever the model declares first.
        let input_name = session
            .inputs
            .first()
            .map(|i| i.name.clone())
            .unwrap_or_else(|| "input".to_string());

        // skl2onnx classifier exports emit a label output alongside the
        // probabilities; prefer the probability-shaped name.
        let output_name = session
            .outputs
            .iter()
            .find(|o| o.name.contains("prob") || o.name.contains("output"))
            .map(|o| o.name.clone())
            .unwrap_or_else(|| {
                session
                    .outputs
                    .last()
                    .map(|o| o.name.clone())
                    .unwrap_or_else(|| "output".to_string())
            });

        let expected_width = session.inputs.first().and_then(|i| match &i.input_type {
            ValueType::Tensor { shape, .. } => shape
                .iter()
                .last()
                .copied()
                .filter(|&dim| dim > 0)
                .map(|dim| dim as usize),
            _ => None,
        });

        info!(
            input = %input_name,
            output = %output_name,
            expected_width = ?expected_width,
            "Model loaded successfully"
        );

        Ok(LoadedModel {
            session,
            input_name,
            output_name,
            expected_width,
        })
    }
}
