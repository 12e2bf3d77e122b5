//! Geocoding error types

use thiserror::Error;

/// Errors that can occur during geocoding
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Connection to geocoding service failed
    #[error("Geocoding connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to geocoding service failed (non-2xx response)
    #[error("Geocoding request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse geocoding response
    #[error("Geocoding parse error: {0}")]
    ParseError(String),

    /// Address could not be resolved to coordinates
    #[error("Address not found: {0}")]
    AddressNotFound(String),

    /// Query text was empty
    #[error("Invalid geocoding query: {0}")]
    InvalidQuery(String),

    /// Request timeout
    #[error("Geocoding request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// Configuration error
    #[error("Geocoding configuration error: {0}")]
    ConfigurationError(String),
}

impl GeocodingError {
    /// Returns true if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_) | Self::RequestFailed(_) | Self::Timeout { .. }
        )
    }

    pub(crate) fn from_reqwest(err: &reqwest::Error, timeout_secs: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout { timeout_secs }
        } else {
            Self::ConnectionFailed(err.to_string())
        }
    }
}
