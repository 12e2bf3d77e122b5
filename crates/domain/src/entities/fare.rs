//! Fare schedule and fare estimates

use std::fmt;

use serde::{Deserialize, Serialize};

use super::route_estimate::RouteEstimate;
use crate::errors::DomainError;

/// Vehicle category offered to riders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    /// Auto rickshaw
    Auto,
    /// Car
    Car,
    /// Motorcycle
    Moto,
}

impl VehicleType {
    /// All vehicle types in display order
    pub const ALL: [Self; 3] = [Self::Auto, Self::Car, Self::Moto];

    /// Lowercase identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Car => "car",
            Self::Moto => "moto",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pricing for one vehicle type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FareRate {
    /// Flat amount charged per ride
    pub base: f64,
    /// Amount per kilometer driven
    pub per_km: f64,
    /// Amount per minute of travel time
    pub per_minute: f64,
}

impl FareRate {
    /// Price a route, rounded to the nearest whole currency unit
    #[must_use]
    pub fn price(&self, route: &RouteEstimate) -> f64 {
        self.per_minute
            .mul_add(
                route.duration_minutes(),
                self.per_km.mul_add(route.distance_km(), self.base),
            )
            .round()
    }

    fn validate(&self, vehicle: VehicleType) -> Result<(), DomainError> {
        let values = [self.base, self.per_km, self.per_minute];
        if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(DomainError::ValidationError(format!(
                "fare rate for {vehicle} must contain non-negative numbers"
            )));
        }
        Ok(())
    }
}

/// Fare rates for every vehicle type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FareSchedule {
    /// Auto rickshaw rates
    #[serde(default = "default_auto")]
    pub auto: FareRate,
    /// Car rates
    #[serde(default = "default_car")]
    pub car: FareRate,
    /// Motorcycle rates
    #[serde(default = "default_moto")]
    pub moto: FareRate,
}

const fn default_auto() -> FareRate {
    FareRate {
        base: 30.0,
        per_km: 10.0,
        per_minute: 2.0,
    }
}

const fn default_car() -> FareRate {
    FareRate {
        base: 50.0,
        per_km: 15.0,
        per_minute: 3.0,
    }
}

const fn default_moto() -> FareRate {
    FareRate {
        base: 20.0,
        per_km: 8.0,
        per_minute: 1.5,
    }
}

impl Default for FareSchedule {
    fn default() -> Self {
        Self {
            auto: default_auto(),
            car: default_car(),
            moto: default_moto(),
        }
    }
}

impl FareSchedule {
    /// Rates for a vehicle type
    #[must_use]
    pub const fn rate(&self, vehicle: VehicleType) -> &FareRate {
        match vehicle {
            VehicleType::Auto => &self.auto,
            VehicleType::Car => &self.car,
            VehicleType::Moto => &self.moto,
        }
    }

    /// Price a route for every vehicle type
    #[must_use]
    pub fn estimate(&self, route: &RouteEstimate) -> Vec<FareEstimate> {
        VehicleType::ALL
            .iter()
            .map(|&vehicle| FareEstimate {
                vehicle,
                amount: self.rate(vehicle).price(route),
            })
            .collect()
    }

    /// Validate the schedule
    ///
    /// # Errors
    ///
    /// Returns an error if any rate is negative or not finite.
    pub fn validate(&self) -> Result<(), DomainError> {
        VehicleType::ALL
            .iter()
            .try_for_each(|&vehicle| self.rate(vehicle).validate(vehicle))
    }
}

/// Price of a route for one vehicle type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FareEstimate {
    /// Vehicle type priced
    pub vehicle: VehicleType,
    /// Fare in whole currency units
    pub amount: f64,
}
