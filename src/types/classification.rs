//! Classification result data structures

use serde::{Deserialize, Serialize};

/// Probability above which a message is called a UPI transaction.
/// Strictly greater-than: exactly 0.5 is not a transaction.
pub const DECISION_THRESHOLD: f32 = 0.5;

/// Result of classifying one message.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Whether the message describes a UPI transaction.
    pub is_transaction: bool,

    /// Raw model output: probability of the positive class, in [0, 1].
    /// Not recalibrated or rescaled.
    pub confidence: f32,
}

impl Classification {
    /// Apply the decision rule to a raw model probability.
    pub fn from_confidence(confidence: f32) -> Self {
        Self {
            is_transaction: confidence > DECISION_THRESHOLD,
            confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_strict() {
        assert!(!Classification::from_confidence(0.5).is_transaction);
        assert!(Classification::from_confidence(0.5000001).is_transaction);
        assert!(!Classification::from_confidence(0.4999999).is_transaction);
    }

    #[test]
    fn test_confidence_is_raw_score() {
        let result = Classification::from_confidence(0.87);
        assert!(result.is_transaction);
        assert_eq!(result.confidence, 0.87);
    }

    #[test]
    fn test_serialization_round_trip() {
        let result = Classification::from_confidence(0.93);

        let json = serde_json::to_string(&result).unwrap();
        let deserialized: Classification = serde_json::from_str(&json).unwrap();

        assert_eq!(result, deserialized);
    }
}
