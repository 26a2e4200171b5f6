//! Diagnostic sink setup
//!
//! The probe only emits `tracing` events. Hosts that do not install their own
//! subscriber can call [`init`] once at startup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;
use crate::error::{ProbeError, Result};
use crate::ffmpeg_utils;

/// Install the global subscriber and route libav's log output into it.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let ffmpeg_level = ffmpeg_utils::parse_log_level(&config.ffmpeg_level).ok_or_else(|| {
        ProbeError::Config(format!("Unknown FFmpeg log level {:?}", config.ffmpeg_level))
    })?;
    let json = match config.format.as_str() {
        "json" => true,
        "pretty" => false,
        other => {
            return Err(ProbeError::Config(format!(
                "Unknown log format {:?} (expected pretty or json)",
                other
            )))
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| ProbeError::Config(format!("Invalid log level {:?}: {}", config.level, e)))?;

    let registry = tracing_subscriber::registry().with(filter);
    let installed = if json {
        registry.with(tracing_subscriber::fmt::layer().json()).try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    };
    installed.map_err(|e| ProbeError::Config(format!("Failed to install subscriber: {}", e)))?;

    ffmpeg_utils::init().map_err(|e| ProbeError::Config(e.to_string()))?;
    ffmpeg_utils::install_log_bridge(ffmpeg_level);

    tracing::info!("Logging initialized (level={}, format={})", config.level, config.format);
    Ok(())
}
