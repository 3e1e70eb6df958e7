//! # snapshelf-prediction
//!
//! Expiry date prediction for food items from name, category, storage
//! location, and purchase date.
//!
//! ## Fallback chain (first match wins)
//!
//! | Tier | Requires | Typical confidence |
//! |------|----------|--------------------|
//! | Exact | category + storage found in the rule table | 0.60–0.90 |
//! | Storage-only | storage found in the storage defaults | 0.45–0.55 |
//! | Fallback | nothing | 0.30 |
//!
//! ## Orchestration
//!
//! `PredictionService` holds an ordered list of strategies. `predict_expiry`
//! uses the default one, `predict_with_all_strategies` runs them all, and
//! `select_best` keeps the highest confidence (earliest registered on ties).

pub mod engine;
pub mod intake;
pub mod strategies;

pub use engine::{PredictionService, PredictionServiceBuilder};
pub use intake::{DraftEnricher, DraftItem, EnrichedDraft};
pub use strategies::{MatchTier, RuleBasedStrategy, RuleMatch, ShelfLife, ShelfLifeTable};
