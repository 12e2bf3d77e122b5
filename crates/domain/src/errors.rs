//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Latitude or longitude outside of the valid range
    #[error(
        "Invalid coordinates ({latitude}, {longitude}): latitude must be -90 to 90, longitude must be -180 to 180"
    )]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    /// Address text was empty after trimming
    #[error("Address query must not be empty")]
    EmptyAddressQuery,

    /// Search radius was zero, negative or not a number
    #[error("Invalid search radius: {0} km (must be greater than 0)")]
    InvalidRadius(f64),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}
