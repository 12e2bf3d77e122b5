//! Routing error types

use thiserror::Error;

/// Errors that can occur during route estimation
#[derive(Debug, Error)]
pub enum RoutingError {
    /// Connection to the routing service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to the routing service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the routing service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimitExceeded {
        /// Seconds to wait before retrying (if provided by API)
        retry_after_secs: Option<u64>,
    },

    /// API key rejected
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// No route found between origin and destination
    #[error("No route found from {from} to {to}")]
    NoRouteFound {
        /// Origin description
        from: String,
        /// Destination description
        to: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl RoutingError {
    /// Returns true if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_)
                | Self::RequestFailed(_)
                | Self::Timeout { .. }
                | Self::RateLimitExceeded { .. }
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
