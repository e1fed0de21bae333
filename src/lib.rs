//! UPI Message Classifier Library
//!
//! Decides whether a free-text message describes a UPI financial
//! transaction: text is turned into a binary-presence feature vector over a
//! fixed vocabulary and scored by a pre-trained ONNX model.

pub mod classifier;
pub mod config;
pub mod error;
pub mod feature_extractor;
pub mod metrics;
pub mod models;
pub mod types;
pub mod vocabulary;

pub use classifier::UpiClassifier;
pub use config::AppConfig;
pub use error::ClassifierError;
pub use feature_extractor::FeatureExtractor;
pub use models::InferenceEngine;
pub use types::Classification;
pub use vocabulary::Vocabulary;
