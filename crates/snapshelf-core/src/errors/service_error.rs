/// Errors assembling a prediction service. Never raised by prediction calls.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("a prediction service needs at least one strategy")]
    NoStrategies,

    #[error("strategy {name} registered more than once")]
    DuplicateStrategy { name: String },

    #[error("default strategy {name} is not registered")]
    UnknownDefault { name: String },
}
