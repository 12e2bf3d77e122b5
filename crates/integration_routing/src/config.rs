//! OpenRouteService client configuration

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Environment variable consulted when no API key is configured
pub const API_KEY_ENV: &str = "ORS_API_KEY";

/// Configuration for the OpenRouteService directions API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenRouteServiceConfig {
    /// Base URL for the OpenRouteService API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Routing profile (e.g. "driving-car", "driving-hgv")
    #[serde(default = "default_profile")]
    pub profile: String,

    /// API key (sensitive - uses `SecretString`)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openrouteservice.org".to_string()
}

fn default_profile() -> String {
    "driving-car".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for OpenRouteServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            profile: default_profile(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl OpenRouteServiceConfig {
    /// Default configuration with the API key taken from `ORS_API_KEY`
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_env_fallback()
    }

    /// Fill a missing API key from the `ORS_API_KEY` environment variable
    #[must_use]
    pub fn with_env_fallback(mut self) -> Self {
        if !self.has_api_key() {
            self.api_key = std::env::var(API_KEY_ENV)
                .ok()
                .filter(|key| !key.trim().is_empty())
                .map(SecretString::from);
        }
        self
    }

    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            api_key: Some(SecretString::from("test-api-key".to_string())),
            timeout_secs: 2,
            ..Default::default()
        }
    }

    /// Check whether a non-empty API key is present
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().trim().is_empty())
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

        if self.profile.trim().is_empty() {
            return Err("profile must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if !self.has_api_key() {
            return Err(format!(
                "api_key must be configured (or set the {API_KEY_ENV} environment variable)"
            ));
        }

        Ok(())
    }
}
