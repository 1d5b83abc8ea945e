use crate::balancer::NOMINAL_CELL_VOLTAGE;
use crate::error::BalanceError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Delta (mAh) above which a layout is flagged
pub const DEFAULT_DELTA_WARNING_MAH: f64 = 100.0;

/// Tunables read from a `cellpack.toml` file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalancerConfig {
    /// Nominal voltage of a single cell (V)
    pub nominal_voltage: f64,
    /// Delta threshold for the warning flag (mAh)
    pub delta_warning_mah: f64,
}

impl Default for BalancerConfig {
    fn default() -> Self {
        Self {
            nominal_voltage: NOMINAL_CELL_VOLTAGE,
            delta_warning_mah: DEFAULT_DELTA_WARNING_MAH,
        }
    }
}

impl BalancerConfig {
    /// Load and validate a TOML config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .context(format!("Failed to read config at {}", path.display()))?;
        let config = Self::from_toml(&raw)
            .context(format!("Failed to load config at {}", path.display()))?;

        tracing::debug!(
            path = %path.display(),
            nominal_voltage = config.nominal_voltage,
            delta_warning_mah = config.delta_warning_mah,
            "loaded balancer config"
        );

        Ok(config)
    }

    /// Parse and validate config text
    pub fn from_toml(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw).context("Malformed TOML")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BalanceError> {
        if !(self.nominal_voltage.is_finite() && self.nominal_voltage > 0.0) {
            return Err(BalanceError::InvalidConfig(format!(
                "nominal_voltage must be positive, got {}",
                self.nominal_voltage
            )));
        }
        if !(self.delta_warning_mah.is_finite() && self.delta_warning_mah >= 0.0) {
            return Err(BalanceError::InvalidConfig(format!(
                "delta_warning_mah must not be negative, got {}",
                self.delta_warning_mah
            )));
        }
        Ok(())
    }

    /// Whether a layout's delta deserves a warning
    pub fn exceeds_warning(&self, delta: f64) -> bool {
        delta > self.delta_warning_mah
    }
}
