//! Driver entity as seen by the proximity index

use serde::{Deserialize, Serialize};

use crate::value_objects::{Coordinate, DriverId};

/// A driver with a last known position
///
/// Driver records are owned by the surrounding service. The core only reads
/// them back from the proximity index and filters them geometrically.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    /// Driver identifier
    pub id: DriverId,
    /// Last reported position
    pub location: Coordinate,
}

impl Driver {
    /// Create a driver record
    #[must_use]
    pub const fn new(id: DriverId, location: Coordinate) -> Self {
        Self { id, location }
    }

    /// Great-circle distance from this driver to `point` in kilometers
    #[must_use]
    pub fn distance_km_to(&self, point: &Coordinate) -> f64 {
        self.location.distance_km(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_to_own_location_is_zero() {
        let location = Coordinate::new(48.86, 2.29).unwrap();
        let driver = Driver::new(DriverId::new(), location);
        assert!(driver.distance_km_to(&location).abs() < 1e-9);
    }
}
