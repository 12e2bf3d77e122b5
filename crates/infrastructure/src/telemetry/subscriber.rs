//! Tracing subscriber initialization and configuration
//!
//! Console logging through `tracing-subscriber`, either human-readable or
//! JSON. `RUST_LOG` takes precedence over the configured filter.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Configuration for logging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Log level filter (e.g. "info", "application=debug,integration_routing=trace")
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Emit one JSON object per event instead of human-readable lines
    #[serde(default)]
    pub json: bool,

    /// Include source file and line in each event
    #[serde(default)]
    pub with_source_location: bool,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            json: false,
            with_source_location: false,
        }
    }
}

/// Guard marking the lifetime of the installed subscriber
///
/// Logs the session's uptime when dropped.
pub struct TelemetryGuard {
    started: Instant,
}

impl std::fmt::Debug for TelemetryGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelemetryGuard")
            .field("uptime", &self.started.elapsed())
            .finish()
    }
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        debug!(uptime = ?self.started.elapsed(), "Telemetry shutting down");
    }
}

/// Initialize logging with the given configuration
///
/// Returns a guard that should be kept alive for the duration of the
/// application. Only the first call in a process can install the global
/// subscriber; later calls fail with [`TelemetryError::Init`].
///
/// # Example
///
/// ```ignore
/// use infrastructure::telemetry::{TelemetryConfig, init_telemetry};
///
/// let _guard = init_telemetry(&TelemetryConfig { json: true, ..Default::default() })?;
/// ```
pub fn init_telemetry(config: &TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_filter)
            .map_err(|e| TelemetryError::Filter(format!("{}: {e}", config.log_filter)))?,
    };

    let json_layer = config.json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_file(config.with_source_location)
            .with_line_number(config.with_source_location)
    });

    let text_layer = (!config.json).then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_file(config.with_source_location)
            .with_line_number(config.with_source_location)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .map_err(|e| TelemetryError::Init(e.to_string()))?;

    info!(json = config.json, "Telemetry initialized");

    Ok(TelemetryGuard {
        started: Instant::now(),
    })
}

/// Error type for telemetry initialization
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Failed to install the tracing subscriber
    #[error("Failed to initialize tracing: {0}")]
    Init(String),

    /// The configured log filter could not be parsed
    #[error("Invalid log filter: {0}")]
    Filter(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = TelemetryConfig::default();
        assert_eq!(config.log_filter, "info");
        assert!(!config.json);
        assert!(!config.with_source_location);
    }

    #[test]
    fn test_config_serialization() {
        let config = TelemetryConfig {
            log_filter: "debug".to_string(),
            json: true,
            with_source_location: true,
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TelemetryConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.log_filter, "debug");
        assert!(parsed.json);
        assert!(parsed.with_source_location);
    }

    #[test]
    fn test_config_partial_json_uses_defaults() {
        let parsed: TelemetryConfig = serde_json::from_str(r#"{"json": true}"#).unwrap();
        assert!(parsed.json);
        assert_eq!(parsed.log_filter, "info");
    }

    #[test]
    fn test_telemetry_guard_drop() {
        let guard = TelemetryGuard {
            started: Instant::now(),
        };
        assert!(format!("{guard:?}").contains("uptime"));
        drop(guard);
    }

    #[test]
    fn test_error_display() {
        let err = TelemetryError::Filter("=[".to_string());
        assert!(err.to_string().contains("Invalid log filter"));
    }
}
