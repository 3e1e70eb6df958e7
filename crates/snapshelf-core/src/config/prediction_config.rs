use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults::MAX_SHELF_LIFE_DAYS;
use crate::errors::ConfigError;

/// Prediction subsystem configuration.
///
/// Everything here extends the built-in shelf-life table; nothing replaces it
/// wholesale. Entries for an existing key override the built-in value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// Name of the strategy `predict_expiry` delegates to. Default: first registered.
    pub default_strategy: Option<String>,
    /// Extra or overriding `(category, storage)` rules.
    pub rules: Vec<ShelfLifeRuleConfig>,
    /// Extra or overriding storage-only defaults, keyed by storage location.
    pub storage_defaults: BTreeMap<String, ShelfLifeEntry>,
    /// Replacement for the absolute fallback.
    pub fallback: Option<ShelfLifeEntry>,
}

impl PredictionConfig {
    /// Check every configured entry: non-blank keys, confidence within
    /// [0.0, 1.0], days at most `MAX_SHELF_LIFE_DAYS`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref name) = self.default_strategy {
            if name.trim().is_empty() {
                return Err(invalid("prediction.default_strategy", "must not be blank"));
            }
        }
        for (i, rule) in self.rules.iter().enumerate() {
            if rule.category.trim().is_empty() || rule.storage.trim().is_empty() {
                return Err(invalid(
                    &format!("prediction.rules[{i}]"),
                    "category and storage must not be blank",
                ));
            }
            rule.entry().validate(&format!("prediction.rules[{i}]"))?;
        }
        for (storage, entry) in &self.storage_defaults {
            if storage.trim().is_empty() {
                return Err(invalid(
                    "prediction.storage_defaults",
                    "storage key must not be blank",
                ));
            }
            entry.validate(&format!("prediction.storage_defaults.{storage}"))?;
        }
        if let Some(ref fallback) = self.fallback {
            fallback.validate("prediction.fallback")?;
        }
        Ok(())
    }
}

/// A `(days, confidence)` pair as written in config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShelfLifeEntry {
    pub days: u32,
    pub confidence: f64,
}

impl ShelfLifeEntry {
    /// Range-check this entry, reporting errors under `field`.
    pub fn validate(&self, field: &str) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(invalid(
                &format!("{field}.confidence"),
                "must be between 0.0 and 1.0",
            ));
        }
        if self.days > MAX_SHELF_LIFE_DAYS {
            return Err(invalid(
                &format!("{field}.days"),
                &format!("must be at most {MAX_SHELF_LIFE_DAYS}"),
            ));
        }
        Ok(())
    }
}

/// One `[[prediction.rules]]` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShelfLifeRuleConfig {
    pub category: String,
    pub storage: String,
    pub days: u32,
    pub confidence: f64,
}

impl ShelfLifeRuleConfig {
    pub fn entry(&self) -> ShelfLifeEntry {
        ShelfLifeEntry {
            days: self.days,
            confidence: self.confidence,
        }
    }
}

pub(crate) fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
