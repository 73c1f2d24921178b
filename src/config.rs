//! Configuration management for `hourcast`
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::ForecastError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable the API key is also read from
pub const API_KEY_ENV: &str = "WEATHER_API_KEY";

/// Root configuration structure for `hourcast`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HourcastConfig {
    /// Weather API configuration
    #[serde(default)]
    pub weather: WeatherConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Default request settings
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// Report output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Weather API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// weatherapi.com API key
    pub api_key: Option<String>,
    /// Base URL for the weather API
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
    /// Number of forecast days to request
    #[serde(default = "default_forecast_days")]
    pub days: u32,
    /// Request timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_seconds: u32,
    /// Maximum number of retries for failed requests
    #[serde(default = "default_weather_max_retries")]
    pub max_retries: u32,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Defaults used when the command line leaves a value out
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Location query
    #[serde(default = "default_location")]
    pub location: String,
    /// Language code
    #[serde(default = "default_language")]
    pub language: String,
}

/// Report output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Colorize the report
    #[serde(default = "default_true")]
    pub color: bool,
    /// Write the raw payload to `raw_payload_path` after fetching
    #[serde(default = "default_true")]
    pub save_raw_payload: bool,
    /// Where the raw payload is written
    #[serde(default = "default_raw_payload_path")]
    pub raw_payload_path: String,
}

// Default value functions
fn default_weather_base_url() -> String {
    "https://api.weatherapi.com/v1".to_string()
}

fn default_forecast_days() -> u32 {
    7
}

fn default_weather_timeout() -> u32 {
    30
}

fn default_weather_max_retries() -> u32 {
    2
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_location() -> String {
    crate::models::request::DEFAULT_LOCATION.to_string()
}

fn default_language() -> String {
    crate::models::request::DEFAULT_LANGUAGE.to_string()
}

fn default_true() -> bool {
    true
}

fn default_raw_payload_path() -> String {
    "weather.json".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_weather_base_url(),
            days: default_forecast_days(),
            timeout_seconds: default_weather_timeout(),
            max_retries: default_weather_max_retries(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            location: default_location(),
            language: default_language(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: default_true(),
            save_raw_payload: default_true(),
            raw_payload_path: default_raw_payload_path(),
        }
    }
}

impl HourcastConfig {
    /// Load configuration from `config_path` (or the default location) and
    /// environment variables
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides, e.g. HOURCAST_WEATHER__API_KEY
        builder = builder.add_source(
            Environment::with_prefix("HOURCAST")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: HourcastConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        if config.weather.api_key.is_none() {
            config.weather.api_key = std::env::var(API_KEY_ENV)
                .ok()
                .filter(|key| !key.trim().is_empty());
        }

        // Apply defaults for missing values
        config.apply_defaults();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("hourcast").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.weather.base_url.is_empty() {
            self.weather.base_url = default_weather_base_url();
        }
        if self.weather.days == 0 {
            self.weather.days = default_forecast_days();
        }
        if self.weather.timeout_seconds == 0 {
            self.weather.timeout_seconds = default_weather_timeout();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.defaults.location.trim().is_empty() {
            self.defaults.location = default_location();
        }
        if self.defaults.language.trim().is_empty() {
            self.defaults.language = default_language();
        }
        if self.output.raw_payload_path.is_empty() {
            self.output.raw_payload_path = default_raw_payload_path();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_key()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate the API key, when one is configured
    pub fn validate_api_key(&self) -> Result<()> {
        if let Some(api_key) = &self.weather.api_key {
            if api_key.trim().is_empty() {
                return Err(ForecastError::config(
                    "Weather API key cannot be empty if provided. Either remove it or provide a valid key."
                ).into());
            }

            if api_key.len() > 100 {
                return Err(ForecastError::config(
                    "Weather API key appears to be invalid (too long). Please check your API key."
                ).into());
            }
        }

        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if !(1..=14).contains(&self.weather.days) {
            return Err(ForecastError::config(
                "Forecast days must be between 1 and 14"
            ).into());
        }

        if self.weather.timeout_seconds > 300 {
            return Err(ForecastError::config(
                "Weather API timeout cannot exceed 300 seconds"
            ).into());
        }

        if self.weather.max_retries > 10 {
            return Err(ForecastError::config(
                "Weather API max retries cannot exceed 10"
            ).into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(ForecastError::config(
                format!("Invalid log level '{}'. Must be one of: {}",
                    self.logging.level,
                    valid_log_levels.join(", ")
                )
            ).into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(ForecastError::config(
                format!("Invalid log format '{}'. Must be one of: {}",
                    self.logging.format,
                    valid_log_formats.join(", ")
                )
            ).into());
        }

        if !self.weather.base_url.starts_with("http://") && !self.weather.base_url.starts_with("https://") {
            return Err(ForecastError::config(
                "Weather API base URL must be a valid HTTP or HTTPS URL"
            ).into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = HourcastConfig::default();
        assert_eq!(config.weather.base_url, "https://api.weatherapi.com/v1");
        assert_eq!(config.weather.days, 7);
        assert_eq!(config.weather.timeout_seconds, 30);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.defaults.location, "Los_Angeles");
        assert_eq!(config.defaults.language, "en");
        assert_eq!(config.output.raw_payload_path, "weather.json");
        assert!(config.output.color);
        assert!(config.weather.api_key.is_none());
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(HourcastConfig::default().validate().is_ok());
    }

    #[test]
    fn test_config_validation_empty_api_key() {
        let mut config = HourcastConfig::default();
        config.weather.api_key = Some("   ".to_string());
        let result = config.validate_api_key();
        assert!(result.is_err());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = HourcastConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = HourcastConfig::default();
        config.weather.timeout_seconds = 500;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout cannot exceed"));

        let mut config = HourcastConfig::default();
        config.weather.days = 30;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_apply_defaults_fills_blanks() {
        let mut config = HourcastConfig::default();
        config.defaults.language = String::new();
        config.weather.days = 0;
        config.apply_defaults();
        assert_eq!(config.defaults.language, "en");
        assert_eq!(config.weather.days, 7);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("hourcast-config-{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[weather]\napi_key = \"file_key_123\"\ndays = 3\n\n[defaults]\nlanguage = \"ja\"\n\n[output]\ncolor = false"
        )
        .unwrap();

        let config = HourcastConfig::load_from_path(Some(path.clone())).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.weather.api_key.as_deref(), Some("file_key_123"));
        assert_eq!(config.weather.days, 3);
        assert_eq!(config.defaults.language, "ja");
        assert_eq!(config.defaults.location, "Los_Angeles");
        assert!(!config.output.color);
        assert!(config.output.save_raw_payload);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("hourcast-no-such-config.toml");
        let config = HourcastConfig::load_from_path(Some(path)).unwrap();
        assert_eq!(config.weather.days, 7);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_config_path_generation() {
        if let Some(path) = HourcastConfig::get_config_path() {
            assert!(path.to_string_lossy().contains("hourcast"));
            assert!(path.to_string_lossy().contains("config.toml"));
        }
    }
}
