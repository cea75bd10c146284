//! Tunables for the explorer, loadable from JSON.
//!
//! Every field has a default, so `{}` is a valid config. `rng_seed` works like
//! a training request seed: `Some(u64)` makes simulations reproducible, `None`
//! draws from entropy.

use serde::{Deserialize, Serialize};

use crate::paradox_engine::{error::ConfigError, probability::DAYS_IN_YEAR};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub calendar_days: u32,
    pub series_start: u32,
    pub series_end: u32,
    pub threshold_target: f64,
    pub monty_hall_doors: u32,
    pub simulation_trials: u32,
    pub rng_seed: Option<u64>,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        ExplorerConfig {
            calendar_days: DAYS_IN_YEAR,
            series_start: 1,
            series_end: 100,
            threshold_target: 0.5,
            monty_hall_doors: 3,
            simulation_trials: 10_000,
            rng_seed: None,
        }
    }
}

impl ExplorerConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: ExplorerConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.calendar_days == 0 {
            return Err(ConfigError::Invalid("calendar_days must be at least 1".into()));
        }
        if self.series_start > self.series_end {
            return Err(ConfigError::Invalid(format!(
                "series_start ({}) is after series_end ({})",
                self.series_start, self.series_end
            )));
        }
        if !(0.0..=1.0).contains(&self.threshold_target) {
            return Err(ConfigError::Invalid(format!(
                "threshold_target {} is outside [0, 1]",
                self.threshold_target
            )));
        }
        if self.monty_hall_doors < 3 {
            return Err(ConfigError::Invalid(format!(
                "monty_hall_doors must be at least 3 (got {})",
                self.monty_hall_doors
            )));
        }
        Ok(())
    }
}
