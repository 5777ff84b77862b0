//! Configuration model for osgi-validator.
//!
//! This module defines the Config struct that represents `osgi-validator.yaml`.
//! Every setting is passed explicitly into the derivation and validation
//! functions; there are no process-wide defaults.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::Config;
pub use types::DEFAULT_CONFIG_FILE;
