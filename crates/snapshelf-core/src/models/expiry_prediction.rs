use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Confidence;

/// Result of an expiry prediction.
///
/// Produced by every strategy; immutable once built. Fields are private so the
/// confidence range and non-empty reasoning cannot be broken after the fact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpiryPrediction {
    expiry_date: NaiveDate,
    confidence: Confidence,
    strategy_name: String,
    reasoning: String,
}

impl ExpiryPrediction {
    pub fn new(
        expiry_date: NaiveDate,
        confidence: impl Into<Confidence>,
        strategy_name: impl Into<String>,
        reasoning: impl Into<String>,
    ) -> Self {
        let mut reasoning = reasoning.into();
        if reasoning.trim().is_empty() {
            reasoning = "no reasoning provided".to_string();
        }
        Self {
            expiry_date,
            confidence: confidence.into(),
            strategy_name: strategy_name.into(),
            reasoning,
        }
    }

    /// Predicted expiration date.
    pub fn expiry_date(&self) -> NaiveDate {
        self.expiry_date
    }

    pub fn confidence(&self) -> Confidence {
        self.confidence
    }

    /// Identifier of the strategy that produced this prediction.
    pub fn strategy_name(&self) -> &str {
        &self.strategy_name
    }

    /// Human-readable basis for the prediction. Never empty.
    pub fn reasoning(&self) -> &str {
        &self.reasoning
    }
}
