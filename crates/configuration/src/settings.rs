use crate::error::ConfigError;
use core_types::{GrowthOptions, HypothesisCriteria};
use serde::Deserialize;

/// The root configuration structure for the entire application.
///
/// Every section is optional; omitted sections fall back to their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Options for ad-hoc growth calculations requested from the CLI.
    pub growth: GrowthOptions,
    /// Thresholds for the business hypotheses.
    pub hypotheses: HypothesisCriteria,
    pub logging: Logging,
}

/// Log output settings. `RUST_LOG` takes precedence when set.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Logging {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    pub level: String,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl Config {
    /// Rejects values that deserialize fine but make no sense.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tolerance = self.hypotheses.tolerance_pct;
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "hypotheses.tolerance_pct must be a non-negative number, got {tolerance}"
            )));
        }
        if !self.hypotheses.bathroom_count.is_finite() {
            return Err(ConfigError::ValidationError(
                "hypotheses.bathroom_count must be finite".to_string(),
            ));
        }
        if !LOG_LEVELS.contains(&self.logging.level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "logging.level must be one of {LOG_LEVELS:?}, got '{}'",
                self.logging.level
            )));
        }
        Ok(())
    }
}
