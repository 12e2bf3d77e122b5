//! Route estimate entity

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Aggregate distance and travel time of a driving route
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteEstimate {
    distance_meters: f64,
    duration_seconds: f64,
}

impl RouteEstimate {
    /// Create a route estimate
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` if either value is negative or not finite.
    pub fn new(distance_meters: f64, duration_seconds: f64) -> Result<Self, DomainError> {
        if !distance_meters.is_finite() || distance_meters < 0.0 {
            return Err(DomainError::ValidationError(format!(
                "route distance must be a non-negative number, got {distance_meters}"
            )));
        }
        if !duration_seconds.is_finite() || duration_seconds < 0.0 {
            return Err(DomainError::ValidationError(format!(
                "route duration must be a non-negative number, got {duration_seconds}"
            )));
        }
        Ok(Self {
            distance_meters,
            duration_seconds,
        })
    }

    /// Route length in meters
    #[must_use]
    pub const fn distance_meters(&self) -> f64 {
        self.distance_meters
    }

    /// Expected driving time in seconds
    #[must_use]
    pub const fn duration_seconds(&self) -> f64 {
        self.duration_seconds
    }

    /// Route length in kilometers
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        self.distance_meters / 1000.0
    }

    /// Expected driving time in minutes
    #[must_use]
    pub fn duration_minutes(&self) -> f64 {
        self.duration_seconds / 60.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_estimate() {
        let estimate = RouteEstimate::new(4200.0, 720.0).unwrap();
        assert!((estimate.distance_km() - 4.2).abs() < f64::EPSILON);
        assert!((estimate.duration_minutes() - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_length_route_is_valid() {
        assert!(RouteEstimate::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn negative_values_rejected() {
        assert!(RouteEstimate::new(-1.0, 10.0).is_err());
        assert!(RouteEstimate::new(10.0, -1.0).is_err());
    }

    #[test]
    fn nan_rejected() {
        assert!(RouteEstimate::new(f64::NAN, 10.0).is_err());
        assert!(RouteEstimate::new(10.0, f64::INFINITY).is_err());
    }
}
