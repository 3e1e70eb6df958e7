//! Request/response shapes of the prediction entry point.
//!
//! Transport is handled elsewhere; these types only fix the serialized
//! contract (ISO 8601 dates, numeric confidence) and the request checks.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::MAX_ITEM_NAME_LEN;
use crate::errors::ValidationError;

use super::{ExpiryPrediction, ItemAttributes};

/// Incoming prediction request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiryPredictionRequest {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub storage_location: Option<String>,
    #[serde(default)]
    pub purchase_date: Option<NaiveDate>,
}

impl ExpiryPredictionRequest {
    /// Check the request and turn it into item attributes.
    pub fn validate(self) -> Result<ItemAttributes, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let length = name.chars().count();
        if length > MAX_ITEM_NAME_LEN {
            return Err(ValidationError::NameTooLong {
                length,
                max: MAX_ITEM_NAME_LEN,
            });
        }
        Ok(ItemAttributes {
            name: name.to_string(),
            category: self.category,
            storage_location: self.storage_location,
            purchase_date: self.purchase_date,
        })
    }
}

/// Outgoing prediction, one per strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpiryPredictionResponse {
    pub expiry_date: NaiveDate,
    pub confidence: f64,
    pub strategy_name: String,
    pub reasoning: String,
}

impl From<ExpiryPrediction> for ExpiryPredictionResponse {
    fn from(prediction: ExpiryPrediction) -> Self {
        Self {
            expiry_date: prediction.expiry_date(),
            confidence: prediction.confidence().value(),
            strategy_name: prediction.strategy_name().to_string(),
            reasoning: prediction.reasoning().to_string(),
        }
    }
}

/// Per-strategy outputs for comparison and debugging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyComparisonResponse {
    pub predictions: Vec<ExpiryPredictionResponse>,
}

impl FromIterator<ExpiryPrediction> for StrategyComparisonResponse {
    fn from_iter<I: IntoIterator<Item = ExpiryPrediction>>(iter: I) -> Self {
        Self {
            predictions: iter.into_iter().map(Into::into).collect(),
        }
    }
}
