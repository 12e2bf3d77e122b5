//! Application configuration
//!
//! Split into focused sub-modules:
//! - `database`: SQLite driver index settings
//! - `location`: live tracking fallback and driver matching radius
//!
//! Provider settings reuse the integration crates' own config types, and
//! telemetry settings live next to the subscriber setup.

mod database;
mod location;

use std::path::Path;

use domain::entities::FareSchedule;
use integration_geocoding::NominatimConfig;
use integration_routing::OpenRouteServiceConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use database::DatabaseConfig;
pub use location::{MatchingConfig, TrackingConfig};

use crate::telemetry::TelemetryConfig;

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "QUICKWHEELS";

/// Separator between nested keys in environment variables
///
/// e.g. `QUICKWHEELS_ROUTING__API_KEY` sets `routing.api_key`.
pub const ENV_SEPARATOR: &str = "__";

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Geocoding provider (Nominatim)
    #[serde(default)]
    pub geocoding: NominatimConfig,

    /// Routing provider (OpenRouteService)
    #[serde(default)]
    pub routing: OpenRouteServiceConfig,

    /// Driver index database
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Live tracking
    #[serde(default)]
    pub tracking: TrackingConfig,

    /// Driver matching
    #[serde(default)]
    pub matching: MatchingConfig,

    /// Fare schedule per vehicle type
    #[serde(default)]
    pub fares: FareSchedule,

    /// Logging
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (optional) and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(config::File::with_name("config").required(false))
    }

    /// Load configuration from a specific file, still honoring environment overrides
    pub fn load_from_file(path: &Path) -> Result<Self, config::ConfigError> {
        Self::build(config::File::from(path).required(true))
    }

    fn build<S>(file: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let config = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?;

        let app_config: Self = config.try_deserialize()?;
        debug!(
            geocoding = %app_config.geocoding.base_url,
            routing = %app_config.routing.base_url,
            database = %app_config.database.path,
            "Configuration loaded"
        );
        Ok(app_config)
    }

    /// Validate every section
    ///
    /// The routing API key is not required here; it may still come from
    /// the `ORS_API_KEY` environment variable when the adapter is built.
    ///
    /// # Errors
    ///
    /// Returns the first section's validation message.
    pub fn validate(&self) -> Result<(), String> {
        self.geocoding
            .validate()
            .map_err(|e| format!("geocoding: {e}"))?;
        self.database.validate()?;
        self.tracking.validate()?;
        self.matching.validate()?;
        self.fares.validate().map_err(|e| format!("fares: {e}"))?;
        Ok(())
    }

    /// Configuration for tests: in-memory database, short timeouts
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            geocoding: NominatimConfig::for_testing(),
            routing: OpenRouteServiceConfig::for_testing(),
            database: DatabaseConfig::for_testing(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use domain::entities::VehicleType;
    use secrecy::ExposeSecret;

    use super::*;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.geocoding.user_agent, "QuickWheelsApp");
        assert_eq!(config.routing.profile, "driving-car");
        assert!((config.matching.search_radius_km - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn default_fallback_center() {
        let center = TrackingConfig::default().fallback_center().unwrap();
        assert!((center.latitude() + 3.745).abs() < f64::EPSILON);
        assert!((center.longitude() + 38.523).abs() < f64::EPSILON);
    }

    #[test]
    fn load_from_file_with_partial_sections() {
        let file = write_config(
            r#"
            [geocoding]
            base_url = "http://nominatim.local"
            country_filter = "br"

            [routing]
            api_key = "file-key"
            profile = "driving-hgv"

            [matching]
            search_radius_km = 3.5

            [fares.car]
            base = 60.0
            per_km = 12.0
            per_minute = 2.0
            "#,
        );

        let config = AppConfig::load_from_file(file.path()).unwrap();

        assert_eq!(config.geocoding.base_url, "http://nominatim.local");
        assert_eq!(config.geocoding.country_filter, "br");
        assert_eq!(config.geocoding.timeout_secs, 5);
        assert_eq!(config.routing.profile, "driving-hgv");
        assert_eq!(
            config.routing.api_key.as_ref().map(|k| k.expose_secret()),
            Some("file-key")
        );
        assert!((config.matching.search_radius_km - 3.5).abs() < f64::EPSILON);
        assert!((config.fares.rate(VehicleType::Car).base - 60.0).abs() < f64::EPSILON);
        assert!((config.fares.rate(VehicleType::Auto).base - 30.0).abs() < f64::EPSILON);
        assert!(config.database.run_migrations);
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = AppConfig::load_from_file(Path::new("/nonexistent/quickwheels.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn invalid_radius_fails_validation() {
        let config = AppConfig {
            matching: MatchingConfig {
                search_radius_km: 0.0,
            },
            ..AppConfig::default()
        };
        assert!(config.validate().unwrap_err().contains("search_radius_km"));
    }

    #[test]
    fn invalid_fallback_center_fails_validation() {
        let config = AppConfig {
            tracking: TrackingConfig {
                fallback_latitude: 123.0,
                ..TrackingConfig::default()
            },
            ..AppConfig::default()
        };
        assert!(config.validate().unwrap_err().contains("fallback"));
    }

    #[test]
    fn testing_config_uses_memory_database() {
        let config = AppConfig::for_testing();
        assert!(config.database.is_in_memory());
        assert!(config.routing.has_api_key());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn api_key_not_serialized() {
        let json = serde_json::to_string(&AppConfig::for_testing()).unwrap();
        assert!(!json.contains("test-api-key"));
    }
}
