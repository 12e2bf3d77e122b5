//! Geographic coordinate value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Mean Earth radius in kilometers, shared by distance and spherical-cap math
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographic coordinate with latitude and longitude in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
}

#[derive(Deserialize)]
struct RawCoordinate {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = DomainError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Self::new(raw.latitude, raw.longitude)
    }
}

impl Coordinate {
    /// Create a new coordinate with validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if latitude is not in [-90, 90]
    /// or longitude is not in [-180, 180] (NaN is never in range).
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::InvalidCoordinates {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Central angle to another coordinate in radians
    ///
    /// Uses the Haversine formula, which stays numerically stable for
    /// the short distances typical of pickup searches.
    #[must_use]
    pub fn central_angle(&self, other: &Self) -> f64 {
        central_angle(self.latitude, self.longitude, other.latitude, other.longitude)
    }

    /// Great-circle distance to another coordinate in kilometers
    #[must_use]
    pub fn distance_km(&self, other: &Self) -> f64 {
        EARTH_RADIUS_KM * self.central_angle(other)
    }

    /// Format as `lon,lat`, the ordering used by routing providers
    #[must_use]
    pub fn to_lon_lat_string(&self) -> String {
        format!("{},{}", self.longitude, self.latitude)
    }
}

/// Central angle in radians between two points given in degrees
#[must_use]
pub fn central_angle(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (lat1_rad.cos() * lat2_rad.cos()).mul_add(
        (delta_lon / 2.0).sin().powi(2),
        (delta_lat / 2.0).sin().powi(2),
    );
    // Rounding can push `a` marginally above 1 for antipodal points
    let a = a.clamp(0.0, 1.0);
    2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}
