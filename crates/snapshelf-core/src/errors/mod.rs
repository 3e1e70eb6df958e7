//! Error handling for SnapShelf.
//! One error enum per concern, `thiserror` only. Prediction itself never
//! fails; these cover config loading, request checks, and service assembly.

pub mod config_error;
pub mod service_error;
pub mod validation_error;

pub use config_error::ConfigError;
pub use service_error::ServiceError;
pub use validation_error::ValidationError;

/// Umbrella error for callers that handle every edge failure in one place.
#[derive(Debug, thiserror::Error)]
pub enum SnapshelfError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

pub type SnapshelfResult<T> = Result<T, SnapshelfError>;
