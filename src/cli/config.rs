//! Configuration management for bootcamp
//!
//! Provides TOML-based configuration with defaults and validation.
//! Location: ~/.bootcamp/config.toml

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::errors::{BootcampError, Result};

/// Complete configuration for bootcamp
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub finance: FinanceConfig,
    pub sentiment: SentimentConfig,
}

/// Console rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub width: usize,
    pub currency: String,
    pub color: bool,
    pub progress_step_ms: u64,
}

/// Finance calculator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FinanceConfig {
    pub receipt_dir: String,
    pub open_exports: bool,
}

/// Sentiment analysis configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SentimentConfig {
    pub text_column: String,
    pub positive_threshold: f64,
    pub negative_threshold: f64,
    pub lexicon_path: Option<String>,
    pub report_dir: String,
    pub similarity_rows: [usize; 2],
    pub open_report: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 80,
            currency: "£".to_string(),
            color: true,
            progress_step_ms: 20,
        }
    }
}

impl Default for FinanceConfig {
    fn default() -> Self {
        Self {
            receipt_dir: ".".to_string(),
            open_exports: true,
        }
    }
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            text_column: "reviews.text".to_string(),
            positive_threshold: 0.1,
            negative_threshold: -0.1,
            lexicon_path: None,
            report_dir: ".".to_string(),
            similarity_rows: [10, 20],
            open_report: true,
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            Self::load_from_file(&config_path)
        } else {
            Self::load_default()
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| BootcampError::ConfigError(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| BootcampError::ConfigError(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load default configuration from standard location or use built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Some(config_path) = Self::default_path() {
            if config_path.exists() {
                return Self::load_from_file(&config_path);
            }
        }

        debug!("no config file found, using built-in defaults");
        Ok(Config::default())
    }

    /// Standard config location
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".bootcamp").join("config.toml"))
    }

    /// Prompt history kept next to the config file
    pub fn history_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".bootcamp").join("history"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.display.width < 40 {
            return Err(BootcampError::ConfigError(
                "display.width must be at least 40".to_string()
            ));
        }

        if self.display.currency.trim().is_empty() {
            return Err(BootcampError::ConfigError(
                "display.currency must not be empty".to_string()
            ));
        }

        let s = &self.sentiment;
        if s.positive_threshold < 0.0 || s.positive_threshold > 1.0 {
            return Err(BootcampError::ConfigError(
                "sentiment.positive_threshold must be between 0.0 and 1.0".to_string()
            ));
        }

        if s.negative_threshold > 0.0 || s.negative_threshold < -1.0 {
            return Err(BootcampError::ConfigError(
                "sentiment.negative_threshold must be between -1.0 and 0.0".to_string()
            ));
        }

        if s.text_column.trim().is_empty() {
            return Err(BootcampError::ConfigError(
                "sentiment.text_column must not be empty".to_string()
            ));
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| BootcampError::ConfigError(format!("Failed to serialize config: {}", e)))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| BootcampError::ConfigError(format!("Failed to create config dir: {}", e)))?;
        }

        std::fs::write(path, contents)
            .map_err(|e| BootcampError::ConfigError(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Expand tilde in paths
    pub fn expand_path(path: &str) -> PathBuf {
        if let Some(rest) = path.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
        PathBuf::from(path)
    }

    /// Directory receipts are exported to
    pub fn receipt_dir(&self) -> PathBuf {
        Self::expand_path(&self.finance.receipt_dir)
    }

    /// Directory PDF reports are written to
    pub fn report_dir(&self) -> PathBuf {
        Self::expand_path(&self.sentiment.report_dir)
    }

    /// Optional extra lexicon file
    pub fn lexicon_path(&self) -> Option<PathBuf> {
        self.sentiment.lexicon_path.as_deref().map(Self::expand_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.display.width, 80);
        assert_eq!(config.display.currency, "£");
        assert_eq!(config.sentiment.text_column, "reviews.text");
        assert_eq!(config.sentiment.similarity_rows, [10, 20]);
    }

    #[test]
    fn test_config_validation_success() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_config_validation_narrow_width() {
        let mut config = Config::default();
        config.display.width = 20;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_thresholds() {
        let mut config = Config::default();
        config.sentiment.positive_threshold = -0.2;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.sentiment.negative_threshold = 0.3;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_empty_column() {
        let mut config = Config::default();
        config.sentiment.text_column = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[display]\nwidth = 100\n").unwrap();

        let config = Config::load(Some(path)).unwrap();
        assert_eq!(config.display.width, 100);
        assert_eq!(config.display.currency, "£");
        assert!(config.finance.open_exports);
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[display]\nwidth = 10\n").unwrap();

        assert!(Config::load(Some(path)).is_err());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.sentiment.positive_threshold = 0.25;
        config.save(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.sentiment.positive_threshold, 0.25);
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let expanded = Config::expand_path("~/.bootcamp");
        assert!(!expanded.to_string_lossy().contains('~'));
    }

    #[test]
    fn test_expand_path_without_tilde() {
        let path = "/absolute/path";
        assert_eq!(Config::expand_path(path).to_string_lossy(), path);
    }
}
