use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Attributes of a food item that a strategy predicts from.
///
/// Not a stored entity: built per call by the intake workflow or from a
/// validated request. `category` and `storage_location` are free text and
/// matched case-insensitively; `purchase_date` defaults to today when absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ItemAttributes {
    pub name: String,
    pub category: Option<String>,
    pub storage_location: Option<String>,
    pub purchase_date: Option<NaiveDate>,
}

impl ItemAttributes {
    /// Attributes with only a name; everything else is left to fall back.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_storage(mut self, storage_location: impl Into<String>) -> Self {
        self.storage_location = Some(storage_location.into());
        self
    }

    pub fn with_purchase_date(mut self, purchase_date: NaiveDate) -> Self {
        self.purchase_date = Some(purchase_date);
        self
    }

    /// Trimmed, lower-cased category. Blank input counts as absent.
    pub fn normalized_category(&self) -> Option<String> {
        normalize(self.category.as_deref())
    }

    /// Trimmed, lower-cased storage location. Blank input counts as absent.
    pub fn normalized_storage(&self) -> Option<String> {
        normalize(self.storage_location.as_deref())
    }
}

/// Trim and lower-case a lookup key. Never turns absence into a value.
pub fn normalize(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_lowercase)
}
