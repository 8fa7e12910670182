use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::export::Orientation;

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Quiet period in milliseconds before an input burst triggers an
    /// estimate (default: 500).
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default)]
    pub estimate: EstimateConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            estimate: EstimateConfig::default(),
            export: ExportConfig::default(),
        }
    }
}

impl AppConfig {
    /// Debounce quiet period as a [`Duration`].
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Settings for the estimate collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateConfig {
    /// Simulated server latency of the placeholder estimator in
    /// milliseconds (default: 100).
    #[serde(default = "default_simulate_delay_ms")]
    pub simulate_delay_ms: u64,
}

impl Default for EstimateConfig {
    fn default() -> Self {
        Self {
            simulate_delay_ms: default_simulate_delay_ms(),
        }
    }
}

impl EstimateConfig {
    pub fn simulate_delay(&self) -> Duration {
        Duration::from_millis(self.simulate_delay_ms)
    }
}

/// Settings for PDF export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Page orientation: "portrait" or "landscape" (default: portrait).
    #[serde(default)]
    pub orientation: Orientation,
    /// Capture scale factor passed to the capture collaborator (default: 2).
    #[serde(default = "default_scale")]
    pub scale: u32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            scale: default_scale(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    crate::sync::DEFAULT_DEBOUNCE.as_millis() as u64
}

fn default_simulate_delay_ms() -> u64 {
    100
}

fn default_scale() -> u32 {
    2
}
