//! PredictionService: coordinates registered strategies.
//!
//! Stateless after construction. Share one instance (behind an `Arc` if
//! needed) across every caller; no locking is involved.

use std::sync::Arc;

use chrono::NaiveDate;
use snapshelf_core::config::PredictionConfig;
use snapshelf_core::errors::{ServiceError, SnapshelfResult};
use snapshelf_core::traits::local_today;
use snapshelf_core::{comparison_span, prediction_span};
use snapshelf_core::{ExpiryPrediction, IExpiryStrategy, ItemAttributes};

use crate::strategies::{RuleBasedStrategy, ShelfLifeTable};

/// Ordered set of strategies with one designated default.
#[derive(Clone)]
pub struct PredictionService {
    strategies: Vec<Arc<dyn IExpiryStrategy>>,
    default_index: usize,
}

impl PredictionService {
    /// Service with only the built-in rule-based strategy.
    pub fn new() -> Self {
        Self {
            strategies: vec![Arc::new(RuleBasedStrategy::new())],
            default_index: 0,
        }
    }

    pub fn builder() -> PredictionServiceBuilder {
        PredictionServiceBuilder::default()
    }

    /// Rule-based service over the built-in table extended by `config`.
    pub fn from_config(config: &PredictionConfig) -> SnapshelfResult<Self> {
        let table = ShelfLifeTable::builtin().extended_with(config)?;
        let mut builder = Self::builder().register(RuleBasedStrategy::with_table(table));
        if let Some(ref name) = config.default_strategy {
            builder = builder.default_strategy(name.clone());
        }
        Ok(builder.build()?)
    }

    /// Registered strategy names, in registration order.
    pub fn strategy_names(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    pub fn default_strategy(&self) -> &dyn IExpiryStrategy {
        self.strategies[self.default_index].as_ref()
    }

    /// Predict with the default strategy. Never fails; missing inputs only
    /// lower the confidence.
    pub fn predict_expiry(&self, item: &ItemAttributes) -> ExpiryPrediction {
        self.predict_expiry_as_of(item, local_today())
    }

    /// `predict_expiry` with "today" fixed by the caller.
    pub fn predict_expiry_as_of(
        &self,
        item: &ItemAttributes,
        today: NaiveDate,
    ) -> ExpiryPrediction {
        let strategy = self.default_strategy();
        let _span =
            prediction_span!(strategy.name(), item.category, item.storage_location).entered();
        strategy.predict_as_of(item, today)
    }

    /// Run every strategy in registration order, one result each.
    pub fn predict_with_all_strategies(&self, item: &ItemAttributes) -> Vec<ExpiryPrediction> {
        self.predict_with_all_strategies_as_of(item, local_today())
    }

    /// `predict_with_all_strategies` with "today" fixed by the caller, so
    /// every strategy sees the same date.
    pub fn predict_with_all_strategies_as_of(
        &self,
        item: &ItemAttributes,
        today: NaiveDate,
    ) -> Vec<ExpiryPrediction> {
        let _span = comparison_span!(self.strategies.len()).entered();
        self.strategies
            .iter()
            .map(|strategy| strategy.predict_as_of(item, today))
            .collect()
    }

    /// Highest-confidence prediction across all strategies. Ties go to the
    /// earliest registered strategy.
    pub fn select_best(&self, item: &ItemAttributes) -> ExpiryPrediction {
        self.select_best_as_of(item, local_today())
    }

    /// `select_best` with "today" fixed by the caller.
    pub fn select_best_as_of(&self, item: &ItemAttributes, today: NaiveDate) -> ExpiryPrediction {
        let best = self
            .predict_with_all_strategies_as_of(item, today)
            .into_iter()
            .reduce(|best, candidate| {
                if candidate.confidence() > best.confidence() {
                    candidate
                } else {
                    best
                }
            });

        match best {
            Some(prediction) => {
                tracing::debug!(
                    strategy = prediction.strategy_name(),
                    confidence = prediction.confidence().value(),
                    "selected best prediction"
                );
                prediction
            }
            // The builder never produces an empty service.
            None => self.predict_expiry_as_of(item, today),
        }
    }
}

impl Default for PredictionService {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PredictionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredictionService")
            .field("strategies", &self.strategy_names())
            .field("default", &self.default_strategy().name())
            .finish()
    }
}

/// Assembles a `PredictionService`. Registration order is preserved and
/// decides ties in `select_best`.
#[derive(Default)]
pub struct PredictionServiceBuilder {
    strategies: Vec<Arc<dyn IExpiryStrategy>>,
    default_name: Option<String>,
}

impl PredictionServiceBuilder {
    pub fn register<S>(mut self, strategy: S) -> Self
    where
        S: IExpiryStrategy + 'static,
    {
        self.strategies.push(Arc::new(strategy));
        self
    }

    /// Register an already shared strategy.
    pub fn register_shared(mut self, strategy: Arc<dyn IExpiryStrategy>) -> Self {
        self.strategies.push(strategy);
        self
    }

    /// Name of the strategy `predict_expiry` uses. Default: the first one.
    pub fn default_strategy(mut self, name: impl Into<String>) -> Self {
        self.default_name = Some(name.into());
        self
    }

    pub fn build(self) -> Result<PredictionService, ServiceError> {
        if self.strategies.is_empty() {
            return Err(ServiceError::NoStrategies);
        }

        for (i, strategy) in self.strategies.iter().enumerate() {
            if self.strategies[..i].iter().any(|s| s.name() == strategy.name()) {
                return Err(ServiceError::DuplicateStrategy {
                    name: strategy.name().to_string(),
                });
            }
        }

        let default_index = match self.default_name {
            Some(name) => self
                .strategies
                .iter()
                .position(|s| s.name() == name)
                .ok_or(ServiceError::UnknownDefault { name })?,
            None => 0,
        };

        Ok(PredictionService {
            strategies: self.strategies,
            default_index,
        })
    }
}
