pub mod strategy;

pub use strategy::{local_today, IExpiryStrategy};
