//! # snapshelf-core
//!
//! Foundation crate for SnapShelf expiry prediction.
//! Defines the value types, the strategy trait, errors, config, tracing setup,
//! and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::SnapshelfConfig;
pub use errors::{SnapshelfError, SnapshelfResult};
pub use models::{Confidence, ExpiryPrediction, ItemAttributes};
pub use traits::IExpiryStrategy;
