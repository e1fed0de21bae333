//! UPI Message Classifier - Demonstration Driver
//!
//! Loads the vocabulary and ONNX model once, then feeds a fixed list of
//! sample texts through the classifier and logs each decision.

use anyhow::Result;
use std::time::Instant;
use tracing::{error, info};
use upi_message_classifier::{config::AppConfig, metrics::ClassifierMetrics, UpiClassifier};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("upi_message_classifier=info".parse()?),
        )
        .init();

    info!("Starting UPI Message Classifier");

    // Load configuration
    let config = AppConfig::load()?;
    info!(
        vocabulary = %config.artifacts.vocabulary_path,
        model = %config.artifacts.model_path,
        "Configuration loaded successfully"
    );

    // Load artifacts once; the classifier is reused for every text
    let classifier = UpiClassifier::new(&config)?;
    info!(
        "Classifier initialized ({} features)",
        classifier.feature_count()
    );

    let metrics = ClassifierMetrics::new();

    let sample_texts = [
        "Received Rs. 500 from John via UPI at SBI",
        "Hello, how are you today?",
        "Your bill payment of Rs. 1000 is successful",
        "UPI transaction completed for mobile recharge",
    ];

    for text in sample_texts {
        let start_time = Instant::now();

        match classifier.classify_text(text) {
            Ok(result) => {
                metrics.record_classification(start_time.elapsed(), &result);
                info!(
                    text = text,
                    is_transaction = result.is_transaction,
                    confidence = result.confidence,
                    "Classified"
                );
            }
            Err(e) => {
                error!(text = text, error = %e, "Classification failed");
                return Err(e.into());
            }
        }
    }

    metrics.print_summary();

    Ok(())
}
