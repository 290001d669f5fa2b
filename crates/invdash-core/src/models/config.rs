//! Configuration structures for the dashboard.

use serde::{Deserialize, Serialize};

use crate::error::DashError;
use crate::loader::LoadPolicy;

/// Upper bound on rate decimals; `f64` carries no more useful precision.
const MAX_RATE_DECIMALS: usize = 10;

/// Main configuration for invdash.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashConfig {
    /// CSV loading configuration.
    pub load: LoadConfig,

    /// Display formatting configuration.
    pub display: DisplayConfig,

    /// Search configuration.
    pub search: SearchConfig,
}

/// CSV loading configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadConfig {
    /// How rows with the wrong number of fields are handled.
    pub policy: LoadPolicy,
}

/// Display formatting configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Symbol prefixed to money amounts.
    pub currency_symbol: String,

    /// Decimal places for hourly rates.
    pub rate_decimals: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            rate_decimals: 2,
        }
    }
}

/// Search configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum results to print (0 = unlimited).
    pub max_results: usize,
}

impl DashConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }

    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> crate::Result<()> {
        if self.display.rate_decimals > MAX_RATE_DECIMALS {
            return Err(DashError::Config(format!(
                "display.rate_decimals must be at most {}, got {}",
                MAX_RATE_DECIMALS, self.display.rate_decimals
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: DashConfig =
            serde_json::from_str(r#"{"load": {"policy": "strict"}}"#).unwrap();

        assert_eq!(config.load.policy, LoadPolicy::Strict);
        assert_eq!(config.display.currency_symbol, "$");
        assert_eq!(config.search.max_results, 0);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = DashConfig::default();
        config.display.currency_symbol = "€".to_string();
        config.save(&path).unwrap();

        let loaded = DashConfig::from_file(&path).unwrap();
        assert_eq!(loaded.display.currency_symbol, "€");
        assert_eq!(loaded.load.policy, LoadPolicy::Lenient);
    }

    #[test]
    fn test_validate_rate_decimals() {
        let mut config = DashConfig::default();
        assert!(config.validate().is_ok());

        config.display.rate_decimals = 11;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("rate_decimals"));
    }

    #[test]
    fn test_invalid_json_is_invalid_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = DashConfig::from_file(&path).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }
}
