//! Prediction strategies and the shelf-life data they consult.

pub mod rule_based;
pub mod shelf_life;

pub use rule_based::RuleBasedStrategy;
pub use shelf_life::{MatchTier, RuleMatch, ShelfLife, ShelfLifeTable};
