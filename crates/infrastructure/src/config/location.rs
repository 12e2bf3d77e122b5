//! Live tracking and driver matching configuration.

use std::time::Duration;

use application::DEFAULT_SEARCH_RADIUS_KM;
use domain::{Coordinate, DomainError};
use serde::{Deserialize, Serialize};

/// Live tracking settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingConfig {
    /// Latitude shown before the device reports a fix
    #[serde(default = "default_fallback_latitude")]
    pub fallback_latitude: f64,

    /// Longitude shown before the device reports a fix
    #[serde(default = "default_fallback_longitude")]
    pub fallback_longitude: f64,

    /// How long a one-shot position request waits for the device (ms)
    #[serde(default = "default_initial_fix_timeout_ms")]
    pub initial_fix_timeout_ms: u64,

    /// Fixes buffered per watcher before stale ones are dropped
    #[serde(default = "default_feed_capacity")]
    pub feed_capacity: usize,
}

const fn default_fallback_latitude() -> f64 {
    -3.745
}

const fn default_fallback_longitude() -> f64 {
    -38.523
}

const fn default_initial_fix_timeout_ms() -> u64 {
    5000
}

const fn default_feed_capacity() -> usize {
    crate::adapters::DEFAULT_FEED_CAPACITY
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            fallback_latitude: default_fallback_latitude(),
            fallback_longitude: default_fallback_longitude(),
            initial_fix_timeout_ms: default_initial_fix_timeout_ms(),
            feed_capacity: default_feed_capacity(),
        }
    }
}

impl TrackingConfig {
    /// Fallback map center as a coordinate
    ///
    /// # Errors
    ///
    /// Returns an error if the configured values are out of range.
    pub fn fallback_center(&self) -> Result<Coordinate, DomainError> {
        Coordinate::new(self.fallback_latitude, self.fallback_longitude)
    }

    /// One-shot fix timeout
    #[must_use]
    pub const fn initial_fix_timeout(&self) -> Duration {
        Duration::from_millis(self.initial_fix_timeout_ms)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        self.fallback_center()
            .map_err(|e| format!("tracking fallback center: {e}"))?;
        if self.feed_capacity == 0 {
            return Err("tracking.feed_capacity must be greater than 0".to_string());
        }
        Ok(())
    }
}

/// Driver matching settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Radius around the pickup point searched for drivers (km)
    #[serde(default = "default_search_radius_km")]
    pub search_radius_km: f64,
}

const fn default_search_radius_km() -> f64 {
    DEFAULT_SEARCH_RADIUS_KM
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            search_radius_km: default_search_radius_km(),
        }
    }
}

impl MatchingConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if !self.search_radius_km.is_finite() || self.search_radius_km <= 0.0 {
            return Err(format!(
                "matching.search_radius_km must be positive, got {}",
                self.search_radius_km
            ));
        }
        Ok(())
    }
}
