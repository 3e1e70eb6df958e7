use chrono::NaiveDate;

use crate::models::{ExpiryPrediction, ItemAttributes};

/// One expiry prediction algorithm.
///
/// Implementations must be total (always return a prediction, lowering
/// confidence instead of failing), deterministic for identical inputs and
/// the same `today`, and must explain themselves in `reasoning`.
pub trait IExpiryStrategy: Send + Sync {
    /// Stable identifier, used for comparison output and default selection.
    fn name(&self) -> &str;

    /// Predict with "today" already fixed by the caller. A missing
    /// `purchase_date` resolves to `today`.
    fn predict_as_of(&self, item: &ItemAttributes, today: NaiveDate) -> ExpiryPrediction;

    /// Predict using the current local date for a missing purchase date.
    fn predict(&self, item: &ItemAttributes) -> ExpiryPrediction {
        self.predict_as_of(item, local_today())
    }
}

/// The current calendar date in the local timezone.
///
/// The only point where wall-clock time enters a prediction.
pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
