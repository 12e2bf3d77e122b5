//! Nominatim client configuration

use serde::{Deserialize, Serialize};

/// Configuration for the Nominatim geocoding service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NominatimConfig {
    /// Base URL for the Nominatim API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Client identifier sent as `User-Agent` (mandatory for Nominatim)
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Country code filter, comma separated (e.g. "fr,de"); empty for worldwide
    #[serde(default)]
    pub country_filter: String,

    /// Preferred result language (`accept-language`); empty for provider default
    #[serde(default)]
    pub accept_language: String,

    /// Minimum spacing between requests in milliseconds (0 disables)
    ///
    /// The public nominatim.openstreetmap.org instance allows at most one
    /// request per second; self-hosted instances usually need no limit.
    #[serde(default)]
    pub min_request_interval_ms: u64,
}

fn default_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

const fn default_timeout_secs() -> u64 {
    5
}

fn default_user_agent() -> String {
    "QuickWheelsApp".to_string()
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            country_filter: String::new(),
            accept_language: String::new(),
            min_request_interval_ms: 0,
        }
    }
}

impl NominatimConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 2,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.user_agent.trim().is_empty() {
            return Err(
                "user_agent must not be empty (required by Nominatim usage policy)".to_string(),
            );
        }

        Ok(())
    }
}
