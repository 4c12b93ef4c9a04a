//! Configuration management for AgriSense Morocco
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with AGRI_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Synthetic climate sampling ranges
    pub climate: ClimateConfig,

    /// Report generation configuration
    pub report: ReportConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

/// Sampling ranges for the synthetic climate generator
///
/// Defaults match the demonstration data the dashboard was designed around.
#[derive(Debug, Deserialize, Clone)]
pub struct ClimateConfig {
    pub temperature_min_celsius: f64,
    pub temperature_max_celsius: f64,
    pub rainfall_min_mm: f64,
    pub rainfall_max_mm: f64,
    pub ndvi_min: f64,
    pub ndvi_max: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportConfig {
    /// Base URL reports are shared under (the QR code target)
    pub base_url: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("AGRI_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("climate.temperature_min_celsius", 15.0)?
            .set_default("climate.temperature_max_celsius", 35.0)?
            .set_default("climate.rainfall_min_mm", 5.0)?
            .set_default("climate.rainfall_max_mm", 80.0)?
            .set_default("climate.ndvi_min", 0.25)?
            .set_default("climate.ndvi_max", 0.80)?
            .set_default("report.base_url", "https://agrisense.ma")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (AGRI_ prefix)
            .add_source(
                Environment::with_prefix("AGRI")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for ClimateConfig {
    fn default() -> Self {
        Self {
            temperature_min_celsius: 15.0,
            temperature_max_celsius: 35.0,
            rainfall_min_mm: 5.0,
            rainfall_max_mm: 80.0,
            ndvi_min: 0.25,
            ndvi_max: 0.80,
        }
    }
}
