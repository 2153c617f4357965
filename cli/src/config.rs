//! TOML configuration for the `share-option` binary.
//!
//! ```toml
//! log_level = "debug"
//!
//! [pricing]
//! risk_free_rate = 0.035
//! trading_days = 252
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use share_pricing::common::DEFAULT_TRADING_DAYS;
use share_pricing::rates::DEFAULT_RISK_FREE_RATE;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Root configuration structure.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PricerConfig {
    /// Log filter used when `RUST_LOG` is not set
    pub log_level: Option<String>,
    #[serde(default)]
    pub pricing: PricingConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PricingConfig {
    /// Flat continuously compounded rate used for discounting
    #[serde(default = "default_risk_free_rate")]
    pub risk_free_rate: f64,
    /// Trading days per year, used to annualize daily volatilities
    #[serde(default = "default_trading_days")]
    pub trading_days: u32,
}

fn default_risk_free_rate() -> f64 {
    DEFAULT_RISK_FREE_RATE
}

fn default_trading_days() -> u32 {
    DEFAULT_TRADING_DAYS
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            risk_free_rate: default_risk_free_rate(),
            trading_days: default_trading_days(),
        }
    }
}

impl PricerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.as_ref().to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = PricerConfig::from_toml("").unwrap();
        assert_eq!(config, PricerConfig::default());
        assert_eq!(config.pricing.risk_free_rate, 0.03);
        assert_eq!(config.pricing.trading_days, 252);
        assert!(config.log_level.is_none());
    }

    #[test]
    fn partial_pricing_section() {
        let config = PricerConfig::from_toml(
            r#"
            log_level = "debug"

            [pricing]
            risk_free_rate = 0.045
            "#,
        )
        .unwrap();

        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.pricing.risk_free_rate, 0.045);
        assert_eq!(config.pricing.trading_days, 252);
    }

    #[test]
    fn rejects_unknown_and_mistyped_keys() {
        assert!(matches!(
            PricerConfig::from_toml("[pricing]\nrisk_free = 0.01"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            PricerConfig::from_toml("[pricing]\ntrading_days = \"many\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file() {
        let err = PricerConfig::from_file("/nonexistent/share-option.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/share-option.toml"));
    }
}
