//! Radius search value object

use serde::{Deserialize, Serialize};

use super::coordinate::{Coordinate, EARTH_RADIUS_KM};
use crate::errors::DomainError;

/// A "find everything within `radius_km` of `center`" query
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadiusQuery {
    center: Coordinate,
    radius_km: f64,
}

impl RadiusQuery {
    /// Create a new radius query
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRadius` if the radius is not a finite
    /// value greater than zero.
    pub fn new(center: Coordinate, radius_km: f64) -> Result<Self, DomainError> {
        if !radius_km.is_finite() || radius_km <= 0.0 {
            return Err(DomainError::InvalidRadius(radius_km));
        }
        Ok(Self { center, radius_km })
    }

    /// Center of the search
    #[must_use]
    pub const fn center(&self) -> Coordinate {
        self.center
    }

    /// Search radius in kilometers
    #[must_use]
    pub const fn radius_km(&self) -> f64 {
        self.radius_km
    }

    /// Radius as an angle in radians on a sphere of mean Earth radius
    ///
    /// This is the form a spherical-cap containment predicate expects.
    #[must_use]
    pub fn angular_radius(&self) -> f64 {
        self.radius_km / EARTH_RADIUS_KM
    }

    /// Whether `point` lies inside the spherical cap described by this query
    #[must_use]
    pub fn contains(&self, point: &Coordinate) -> bool {
        self.center.central_angle(point) <= self.angular_radius()
    }
}
