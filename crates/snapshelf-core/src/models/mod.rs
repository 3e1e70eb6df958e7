pub mod api;
pub mod confidence;
pub mod expiry_prediction;
pub mod item_attributes;

pub use api::{ExpiryPredictionRequest, ExpiryPredictionResponse, StrategyComparisonResponse};
pub use confidence::Confidence;
pub use expiry_prediction::ExpiryPrediction;
pub use item_attributes::ItemAttributes;
