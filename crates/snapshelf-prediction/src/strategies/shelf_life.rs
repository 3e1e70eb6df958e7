//! Shelf-life lookup tables.
//!
//! Static domain data: how long a category keeps in a given storage location,
//! and how sure we are about it. The built-in table is built once and shared;
//! configured tables are copies extended at construction time.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use snapshelf_core::config::defaults::{DEFAULT_FALLBACK_CONFIDENCE, DEFAULT_FALLBACK_DAYS};
use snapshelf_core::config::{PredictionConfig, ShelfLifeEntry};
use snapshelf_core::errors::ConfigError;
use snapshelf_core::models::item_attributes::normalize;
use snapshelf_core::Confidence;

/// `(category, storage, days, confidence)`.
const BUILTIN_RULES: &[(&str, &str, u32, f64)] = &[
    // Dairy
    ("dairy", "fridge", 7, 0.85),
    ("dairy", "freezer", 60, 0.80),
    ("dairy", "pantry", 1, 0.60),
    // Meat & poultry
    ("meat", "fridge", 3, 0.85),
    ("meat", "freezer", 90, 0.90),
    ("meat", "pantry", 1, 0.30),
    ("poultry", "fridge", 2, 0.85),
    ("poultry", "freezer", 90, 0.90),
    ("poultry", "pantry", 1, 0.30),
    // Fish & seafood
    ("fish", "fridge", 2, 0.80),
    ("fish", "freezer", 60, 0.85),
    ("fish", "pantry", 1, 0.20),
    // Produce
    ("produce", "fridge", 7, 0.70),
    ("produce", "pantry", 5, 0.65),
    ("produce", "freezer", 180, 0.75),
    ("vegetables", "fridge", 7, 0.75),
    ("vegetables", "pantry", 5, 0.70),
    ("vegetables", "freezer", 240, 0.80),
    ("fruits", "fridge", 10, 0.70),
    ("fruits", "pantry", 5, 0.65),
    ("fruits", "freezer", 180, 0.75),
    // Bakery
    ("bakery", "pantry", 5, 0.80),
    ("bakery", "fridge", 7, 0.75),
    ("bakery", "freezer", 90, 0.85),
    ("bread", "pantry", 5, 0.85),
    ("bread", "fridge", 10, 0.80),
    ("bread", "freezer", 90, 0.90),
    // Eggs
    ("eggs", "fridge", 21, 0.90),
    ("eggs", "pantry", 7, 0.60),
    ("eggs", "freezer", 180, 0.70),
    // Condiments & sauces
    ("condiments", "fridge", 90, 0.75),
    ("condiments", "pantry", 180, 0.80),
    ("condiments", "freezer", 365, 0.70),
    // Canned goods (2 years)
    ("canned", "pantry", 730, 0.90),
    ("canned", "fridge", 730, 0.85),
    ("canned", "freezer", 730, 0.70),
    // Frozen foods, already frozen at purchase
    ("frozen", "freezer", 180, 0.85),
    ("frozen", "fridge", 3, 0.70),
    ("frozen", "pantry", 1, 0.30),
];

/// `(storage, days, confidence)` used when the category is unknown or unmatched.
const BUILTIN_STORAGE_DEFAULTS: &[(&str, u32, f64)] = &[
    ("fridge", 7, 0.50),
    ("freezer", 90, 0.55),
    ("pantry", 30, 0.45),
];

static BUILTIN: LazyLock<Arc<ShelfLifeTable>> =
    LazyLock::new(|| Arc::new(ShelfLifeTable::from_builtin_data()));

/// Days an item keeps and the confidence in that estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShelfLife {
    pub days: u32,
    pub confidence: Confidence,
}

impl ShelfLife {
    pub fn new(days: u32, confidence: f64) -> Self {
        Self {
            days,
            confidence: Confidence::new(confidence),
        }
    }
}

impl From<ShelfLifeEntry> for ShelfLife {
    fn from(entry: ShelfLifeEntry) -> Self {
        Self::new(entry.days, entry.confidence)
    }
}

/// Which link of the fallback chain produced a shelf life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchTier {
    Exact,
    StorageOnly,
    Fallback,
}

impl MatchTier {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchTier::Exact => "exact",
            MatchTier::StorageOnly => "storage_only",
            MatchTier::Fallback => "fallback",
        }
    }
}

/// Outcome of a table lookup, carrying the keys that actually matched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RuleMatch<'a> {
    Exact {
        category: &'a str,
        storage: &'a str,
        shelf_life: ShelfLife,
    },
    StorageOnly {
        storage: &'a str,
        shelf_life: ShelfLife,
    },
    Fallback {
        shelf_life: ShelfLife,
    },
}

impl RuleMatch<'_> {
    pub fn shelf_life(&self) -> ShelfLife {
        match *self {
            RuleMatch::Exact { shelf_life, .. }
            | RuleMatch::StorageOnly { shelf_life, .. }
            | RuleMatch::Fallback { shelf_life } => shelf_life,
        }
    }

    pub fn tier(&self) -> MatchTier {
        match self {
            RuleMatch::Exact { .. } => MatchTier::Exact,
            RuleMatch::StorageOnly { .. } => MatchTier::StorageOnly,
            RuleMatch::Fallback { .. } => MatchTier::Fallback,
        }
    }
}

/// Category × storage → shelf life, with storage-only and absolute fallbacks.
///
/// Keys are stored normalized (trimmed, lower-case). Lookups expect
/// already-normalized keys.
#[derive(Debug, Clone, PartialEq)]
pub struct ShelfLifeTable {
    rules: HashMap<String, HashMap<String, ShelfLife>>,
    storage_defaults: HashMap<String, ShelfLife>,
    fallback: ShelfLife,
}

impl ShelfLifeTable {
    /// The shared built-in table.
    pub fn builtin() -> Arc<ShelfLifeTable> {
        Arc::clone(&BUILTIN)
    }

    fn from_builtin_data() -> Self {
        let mut table = Self {
            rules: HashMap::new(),
            storage_defaults: HashMap::new(),
            fallback: ShelfLife::new(DEFAULT_FALLBACK_DAYS, DEFAULT_FALLBACK_CONFIDENCE),
        };
        for &(category, storage, days, confidence) in BUILTIN_RULES {
            table.insert_rule(category, storage, ShelfLife::new(days, confidence));
        }
        for &(storage, days, confidence) in BUILTIN_STORAGE_DEFAULTS {
            table
                .storage_defaults
                .insert(storage.to_string(), ShelfLife::new(days, confidence));
        }
        table
    }

    /// A copy of this table with configured rules, storage defaults, and
    /// fallback layered on top.
    ///
    /// Rejects entries that fail `PredictionConfig::validate`, and a result in
    /// which any storage default is not strictly more confident than the
    /// absolute fallback.
    pub fn extended_with(&self, config: &PredictionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut table = self.clone();
        for rule in &config.rules {
            let (Some(category), Some(storage)) = (
                normalize(Some(rule.category.as_str())),
                normalize(Some(rule.storage.as_str())),
            ) else {
                return Err(ConfigError::ValidationFailed {
                    field: "prediction.rules".to_string(),
                    message: "category and storage must not be blank".to_string(),
                });
            };
            table.insert_rule(&category, &storage, rule.entry().into());
        }
        for (storage, entry) in &config.storage_defaults {
            let Some(storage) = normalize(Some(storage.as_str())) else {
                return Err(ConfigError::ValidationFailed {
                    field: "prediction.storage_defaults".to_string(),
                    message: "storage key must not be blank".to_string(),
                });
            };
            table.storage_defaults.insert(storage, (*entry).into());
        }
        if let Some(fallback) = config.fallback {
            table.fallback = fallback.into();
        }

        let floor = table.fallback.confidence;
        let mut storages: Vec<_> = table.storage_defaults.iter().collect();
        storages.sort_by(|a, b| a.0.cmp(b.0));
        for (storage, shelf_life) in storages {
            if shelf_life.confidence <= floor {
                return Err(ConfigError::ValidationFailed {
                    field: format!("prediction.storage_defaults.{storage}.confidence"),
                    message: format!(
                        "must be greater than the fallback confidence {floor} (got {})",
                        shelf_life.confidence
                    ),
                });
            }
        }
        Ok(table)
    }

    fn insert_rule(&mut self, category: &str, storage: &str, shelf_life: ShelfLife) {
        self.rules
            .entry(category.to_string())
            .or_default()
            .insert(storage.to_string(), shelf_life);
    }

    /// Walk the fallback chain: exact pair, then storage alone, then the
    /// absolute default. The storage-only tier needs a storage value; a
    /// category on its own never matches anything.
    pub fn lookup<'a>(&self, category: Option<&'a str>, storage: Option<&'a str>) -> RuleMatch<'a> {
        if let (Some(category), Some(storage)) = (category, storage) {
            if let Some(&shelf_life) = self.rules.get(category).and_then(|s| s.get(storage)) {
                return RuleMatch::Exact {
                    category,
                    storage,
                    shelf_life,
                };
            }
        }

        if let Some(storage) = storage {
            if let Some(&shelf_life) = self.storage_defaults.get(storage) {
                return RuleMatch::StorageOnly {
                    storage,
                    shelf_life,
                };
            }
        }

        RuleMatch::Fallback {
            shelf_life: self.fallback,
        }
    }

    /// Exact rule for a normalized pair, if any.
    pub fn rule(&self, category: &str, storage: &str) -> Option<ShelfLife> {
        self.rules.get(category)?.get(storage).copied()
    }

    /// Storage-only default for a normalized storage location, if any.
    pub fn storage_default(&self, storage: &str) -> Option<ShelfLife> {
        self.storage_defaults.get(storage).copied()
    }

    pub fn fallback(&self) -> ShelfLife {
        self.fallback
    }

    /// Number of exact `(category, storage)` rules.
    pub fn rule_count(&self) -> usize {
        self.rules.values().map(HashMap::len).sum()
    }
}
