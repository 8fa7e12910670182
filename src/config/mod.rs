//! TOML-backed application configuration.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{AppConfig, EstimateConfig, ExportConfig};
