//! Nominatim response models

use domain::value_objects::Coordinate;
use serde::{Deserialize, Serialize};

use crate::error::GeocodingError;

/// One place returned by the Nominatim `/search` endpoint
///
/// Nominatim encodes coordinates as decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NominatimPlace {
    /// Latitude as a decimal string
    pub lat: String,
    /// Longitude as a decimal string
    pub lon: String,
    /// Human-readable full address
    #[serde(default)]
    pub display_name: Option<String>,
}

impl NominatimPlace {
    /// Parse the place's position into a validated coordinate
    pub fn coordinate(&self) -> Result<Coordinate, GeocodingError> {
        let lat: f64 = self
            .lat
            .trim()
            .parse()
            .map_err(|_| GeocodingError::ParseError(format!("Invalid latitude: {}", self.lat)))?;
        let lon: f64 = self
            .lon
            .trim()
            .parse()
            .map_err(|_| GeocodingError::ParseError(format!("Invalid longitude: {}", self.lon)))?;

        Coordinate::new(lat, lon).map_err(|e| GeocodingError::ParseError(e.to_string()))
    }
}
