//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `AHP_REPORT` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment yields a working setup.
//!
//! # Example
//!
//! ```no_run
//! use ahp_report::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Submitting to {}", config.service.upload_url());
//! ```

mod error;
mod export;
mod service;

pub use error::{ConfigError, ValidationError};
pub use export::ExportConfig;
pub use service::ServiceConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Analysis service endpoint and submission bound
    #[serde(default)]
    pub service: ServiceConfig,

    /// Export naming, rendering, and output location
    #[serde(default)]
    pub export: ExportConfig,

    /// Rust log filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `AHP_REPORT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `AHP_REPORT__SERVICE__BASE_URL=...` -> `service.base_url = ...`
    /// - `AHP_REPORT__EXPORT__FORMAT=json` -> `export.format = json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("AHP_REPORT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.service.validate()?;
        self.export.validate()?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
            export: ExportConfig::default(),
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info,ahp_report=debug".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ExportFormat;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("AHP_REPORT__SERVICE__BASE_URL");
        env::remove_var("AHP_REPORT__SERVICE__TIMEOUT_SECS");
        env::remove_var("AHP_REPORT__EXPORT__FORMAT");
        env::remove_var("AHP_REPORT__EXPORT__DEFAULT_FILENAME");
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.service.base_url, "http://localhost:8000");
        assert_eq!(config.export.default_filename, "ahp_analysis");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AHP_REPORT__SERVICE__BASE_URL", "https://ahp.example.com");
        env::set_var("AHP_REPORT__SERVICE__TIMEOUT_SECS", "15");
        env::set_var("AHP_REPORT__EXPORT__FORMAT", "json");
        env::set_var("AHP_REPORT__EXPORT__DEFAULT_FILENAME", "quarterly");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.service.base_url, "https://ahp.example.com");
        assert_eq!(config.service.timeout_secs, 15);
        assert_eq!(config.export.format, ExportFormat::Json);
        assert_eq!(config.export.default_filename, "quarterly");
    }

    #[test]
    fn test_validate_propagates_section_errors() {
        let config = AppConfig {
            service: ServiceConfig {
                timeout_secs: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTimeout));
    }
}
