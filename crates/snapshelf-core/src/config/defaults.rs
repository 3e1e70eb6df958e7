// Single source of truth for all default values.

// --- Prediction ---
/// Absolute fallback when neither category nor storage can be used.
pub const DEFAULT_FALLBACK_DAYS: u32 = 7;
pub const DEFAULT_FALLBACK_CONFIDENCE: f64 = 0.30;
/// Upper bound accepted for a configured shelf life (100 years).
pub const MAX_SHELF_LIFE_DAYS: u32 = 36_500;

// --- Intake ---
pub const DEFAULT_PREDICT_EXPIRY: bool = true;
/// Predictions below this confidence are flagged for manual review.
pub const DEFAULT_REVIEW_THRESHOLD: f64 = 0.40;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
