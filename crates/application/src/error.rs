//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors surfaced to callers of the location core
///
/// Errors are returned unmodified: the core never retries and never
/// substitutes fallback values.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Malformed or missing input (missing coordinate, empty address, bad radius)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The geocoder found no match for the address
    #[error("Not found: {0}")]
    NotFound(String),

    /// The router found no path between the two points
    #[error("No route found from {from} to {to}")]
    NoRoute {
        /// Origin description
        from: String,
        /// Destination description
        to: String,
    },

    /// Network failure, non-2xx response, timeout or payload shape mismatch
    #[error("Upstream service error: {0}")]
    Upstream(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error is retryable by the caller
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Upstream(_))
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}
