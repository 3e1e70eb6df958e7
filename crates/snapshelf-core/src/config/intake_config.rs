use serde::{Deserialize, Serialize};

use super::defaults;

/// Draft intake policy: whether to auto-predict, and when to ask for review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeConfig {
    /// Fill in a missing expiration date on new drafts.
    pub predict_expiry: bool,
    /// Confidence below which an auto-filled date is flagged for review.
    pub review_threshold: f64,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            predict_expiry: defaults::DEFAULT_PREDICT_EXPIRY,
            review_threshold: defaults::DEFAULT_REVIEW_THRESHOLD,
        }
    }
}
