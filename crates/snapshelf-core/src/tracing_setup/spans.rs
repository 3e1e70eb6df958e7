//! Span definitions per operation: prediction, comparison, intake.

/// Create a span around a single default-strategy prediction.
#[macro_export]
macro_rules! prediction_span {
    ($strategy:expr, $category:expr, $storage:expr) => {
        tracing::info_span!(
            "snapshelf.prediction",
            strategy = %$strategy,
            category = ?$category,
            storage = ?$storage
        )
    };
}

/// Create a span around an all-strategies comparison run.
#[macro_export]
macro_rules! comparison_span {
    ($strategy_count:expr) => {
        tracing::info_span!("snapshelf.comparison", strategy_count = $strategy_count)
    };
}

/// Create a span around draft enrichment.
#[macro_export]
macro_rules! intake_span {
    ($has_expiry:expr) => {
        tracing::info_span!("snapshelf.intake", has_expiry = $has_expiry)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const PREDICTION: &str = "snapshelf.prediction";
    pub const COMPARISON: &str = "snapshelf.comparison";
    pub const INTAKE: &str = "snapshelf.intake";
}
