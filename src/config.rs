//! Configuration for the goldbach tools.
//!
//! Supports YAML configuration files with sensible defaults.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub plot: PlotConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Console report configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Character repeated once per prime pair in range bars
    pub bar_char: char,
}

/// Chart configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Upper bound for the pair-count chart
    pub goldbach_max: i64,
    /// Upper bound for the prime gap chart
    pub gaps_max: i64,
    /// Initial window width in points
    pub window_width: f32,
    /// Initial window height in points
    pub window_height: f32,
    /// Marker radius for scatter points
    pub marker_radius: f32,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { bar_char: '*' }
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            goldbach_max: 2000,
            gaps_max: 10_000,
            window_width: 1000.0,
            window_height: 700.0,
            marker_radius: 2.0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            log::info!("Loading config from: {}", path.display());
            Self::from_file(path)
        } else {
            log::info!("Using default configuration");
            Ok(Self::default())
        }
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.report.bar_char.is_control() {
            return Err(Error::Config("bar_char must be a printable character".to_string()));
        }
        if self.plot.goldbach_max < 4 {
            return Err(Error::Config("plot.goldbach_max must be >= 4".to_string()));
        }
        if self.plot.gaps_max < 2 {
            return Err(Error::Config("plot.gaps_max must be >= 2".to_string()));
        }
        if self.plot.window_width <= 0.0 || self.plot.window_height <= 0.0 {
            return Err(Error::Config("plot window size must be positive".to_string()));
        }
        if self.plot.marker_radius <= 0.0 {
            return Err(Error::Config("plot.marker_radius must be > 0".to_string()));
        }
        let level = self.logging.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(Error::Config(format!(
                "unknown log_level '{}' (expected one of {})",
                self.logging.log_level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }
}
