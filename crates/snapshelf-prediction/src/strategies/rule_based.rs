use std::sync::Arc;

use chrono::{Days, NaiveDate};
use snapshelf_core::constants::RULE_BASED_STRATEGY;
use snapshelf_core::{ExpiryPrediction, IExpiryStrategy, ItemAttributes};

use super::shelf_life::{RuleMatch, ShelfLifeTable};

/// Rule-based expiry prediction using shelf-life lookup tables.
///
/// Walks exact `(category, storage)` → storage-only → absolute default and
/// adds the matched number of days to the purchase date. Holds no state
/// besides its read-only table.
#[derive(Debug, Clone)]
pub struct RuleBasedStrategy {
    table: Arc<ShelfLifeTable>,
}

impl RuleBasedStrategy {
    /// Strategy over the shared built-in table.
    pub fn new() -> Self {
        Self {
            table: ShelfLifeTable::builtin(),
        }
    }

    /// Strategy over a custom table, e.g. one extended from config.
    pub fn with_table(table: ShelfLifeTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    pub fn table(&self) -> &ShelfLifeTable {
        &self.table
    }
}

impl Default for RuleBasedStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl IExpiryStrategy for RuleBasedStrategy {
    fn name(&self) -> &str {
        RULE_BASED_STRATEGY
    }

    fn predict_as_of(&self, item: &ItemAttributes, today: NaiveDate) -> ExpiryPrediction {
        let purchase_date = item.purchase_date.unwrap_or(today);
        let category = item.normalized_category();
        let storage = item.normalized_storage();

        let matched = self.table.lookup(category.as_deref(), storage.as_deref());
        let shelf_life = matched.shelf_life();
        let expiry_date = add_days(purchase_date, shelf_life.days);

        tracing::debug!(
            tier = matched.tier().as_str(),
            category = ?category,
            storage = ?storage,
            days = shelf_life.days,
            confidence = shelf_life.confidence.value(),
            "rule-based shelf life resolved"
        );

        ExpiryPrediction::new(
            expiry_date,
            shelf_life.confidence,
            RULE_BASED_STRATEGY,
            reasoning(&matched),
        )
    }
}

/// Calendar addition that saturates at the last representable date.
fn add_days(date: NaiveDate, days: u32) -> NaiveDate {
    date.checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MAX)
}

fn reasoning(matched: &RuleMatch<'_>) -> String {
    match *matched {
        RuleMatch::Exact {
            category,
            storage,
            shelf_life,
        } => format!(
            "Based on category '{category}' stored in '{storage}': typical shelf life is {} days",
            shelf_life.days
        ),
        RuleMatch::StorageOnly {
            storage,
            shelf_life,
        } => format!(
            "Based on storage in '{storage}' (category unknown): estimated {} days",
            shelf_life.days
        ),
        RuleMatch::Fallback { shelf_life } => format!(
            "No usable category or storage: using conservative default of {} days",
            shelf_life.days
        ),
    }
}
