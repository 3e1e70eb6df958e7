//! Configuration for SnapShelf.
//! TOML-based, 3-layer resolution: env > project file > compiled defaults.

pub mod defaults;
pub mod intake_config;
pub mod prediction_config;
pub mod snapshelf_config;

pub use intake_config::IntakeConfig;
pub use prediction_config::{PredictionConfig, ShelfLifeEntry, ShelfLifeRuleConfig};
pub use snapshelf_config::SnapshelfConfig;
