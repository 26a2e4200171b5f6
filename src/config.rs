//! Probe configuration
//!
//! Loaded from TOML files; every section and field is optional.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ProbeError, Result};

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level or filter directive (trace, debug, info, warn, error)
    pub level: String,

    /// Output format (pretty, json)
    pub format: String,

    /// libav's own log level (quiet, error, warning, info, verbose, debug)
    pub ffmpeg_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            ffmpeg_level: "warning".to_string(),
        }
    }
}

/// Probe configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Stream metadata key holding the language tag
    pub language_key: String,

    /// Worker threads for batch probing (0 = one per available core)
    pub workers: usize,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            language_key: "language".to_string(),
            workers: 0,
            logging: LoggingConfig::default(),
        }
    }
}

impl ProbeConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ProbeConfig =
            toml::from_str(content).map_err(|e| ProbeError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ProbeError::Config(e.to_string()))?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.language_key.trim().is_empty() {
            return Err(ProbeError::Config("language_key must not be empty".to_string()));
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ProbeError::Config(format!(
                "Unknown log format {:?} (expected pretty or json)",
                self.logging.format
            )));
        }
        if crate::ffmpeg_utils::parse_log_level(&self.logging.ffmpeg_level).is_none() {
            return Err(ProbeError::Config(format!(
                "Unknown FFmpeg log level {:?}",
                self.logging.ffmpeg_level
            )));
        }
        Ok(())
    }

    /// Number of worker threads to use for batch probing
    pub fn effective_workers(&self) -> usize {
        if self.workers > 0 {
            return self.workers;
        }
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    }
}
