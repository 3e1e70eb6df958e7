//! Top-level SnapShelf configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::prediction_config::invalid;
use super::{IntakeConfig, PredictionConfig};
use crate::constants::CONFIG_FILENAME;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`SNAPSHELF_*`)
/// 2. Project config (`snapshelf.toml` in the project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshelfConfig {
    pub prediction: PredictionConfig,
    pub intake: IntakeConfig,
}

impl SnapshelfConfig {
    /// Load configuration for a project rooted at `root`.
    ///
    /// A missing `snapshelf.toml` is fine; a malformed one is an error.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILENAME);
        let mut config = if path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load a specific TOML file without env overrides.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `SNAPSHELF_*` overrides read through `lookup`.
    ///
    /// Unparseable values are ignored and the lower layer wins.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("SNAPSHELF_DEFAULT_STRATEGY") {
            self.prediction.default_strategy = Some(val);
        }
        if let Some(val) = lookup("SNAPSHELF_PREDICT_EXPIRY") {
            if let Ok(v) = val.parse::<bool>() {
                self.intake.predict_expiry = v;
            }
        }
        if let Some(val) = lookup("SNAPSHELF_REVIEW_THRESHOLD") {
            if let Ok(v) = val.parse::<f64>() {
                self.intake.review_threshold = v;
            }
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.prediction.validate()?;
        if !(0.0..=1.0).contains(&self.intake.review_threshold) {
            return Err(invalid("intake.review_threshold", "must be between 0.0 and 1.0"));
        }
        Ok(())
    }
}
