//! Ride quote service
//!
//! The ride-request control path: resolve pickup and destination, estimate
//! the route, price it for every vehicle type and look up candidate drivers
//! around the pickup point. Each step's error propagates unmodified.

use std::fmt;

use domain::entities::{Driver, FareEstimate, FareSchedule, RouteEstimate};
use domain::value_objects::Coordinate;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::{GeocoderService, ProximityService, RouterService};
use crate::error::ApplicationError;

/// Default radius for candidate-driver lookup, in kilometers
pub const DEFAULT_SEARCH_RADIUS_KM: f64 = 5.0;

/// Everything a rider needs to confirm a ride request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RideQuote {
    /// Resolved pickup point
    pub pickup: Coordinate,
    /// Resolved destination
    pub destination: Coordinate,
    /// Driving distance and duration
    pub route: RouteEstimate,
    /// Fare for each vehicle type
    pub fares: Vec<FareEstimate>,
    /// Drivers within the search radius of the pickup, in index order
    pub nearby_drivers: Vec<Driver>,
}

/// Builds ride quotes from the geocoder, router and proximity services
#[derive(Clone)]
pub struct RideQuoteService {
    geocoder: GeocoderService,
    router: RouterService,
    proximity: ProximityService,
    fares: FareSchedule,
    search_radius_km: f64,
}

impl fmt::Debug for RideQuoteService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RideQuoteService")
            .field("fares", &self.fares)
            .field("search_radius_km", &self.search_radius_km)
            .finish_non_exhaustive()
    }
}

impl RideQuoteService {
    /// Create a new ride quote service
    pub fn new(
        geocoder: GeocoderService,
        router: RouterService,
        proximity: ProximityService,
        fares: FareSchedule,
        search_radius_km: f64,
    ) -> Self {
        Self {
            geocoder,
            router,
            proximity,
            fares,
            search_radius_km,
        }
    }

    /// Radius used for candidate-driver lookup
    #[must_use]
    pub const fn search_radius_km(&self) -> f64 {
        self.search_radius_km
    }

    /// Quote a ride between two free-text addresses
    ///
    /// Both addresses are geocoded concurrently; the route and the driver
    /// lookup then run concurrently from the resolved points.
    ///
    /// # Errors
    ///
    /// Returns the first failing step's error: `InvalidArgument` or
    /// `NotFound` from geocoding, `NoRoute` from routing, `Upstream` from
    /// any provider.
    #[instrument(skip(self))]
    pub async fn quote(
        &self,
        pickup: &str,
        destination: &str,
    ) -> Result<RideQuote, ApplicationError> {
        let (pickup_at, destination_at) = tokio::try_join!(
            self.geocoder.resolve_address(pickup),
            self.geocoder.resolve_address(destination),
        )?;

        let (route, nearby_drivers) = tokio::try_join!(
            self.router
                .estimate_route(Some(pickup_at), Some(destination_at)),
            self.proximity.find_nearby(pickup_at, self.search_radius_km),
        )?;

        let fares = self.fares.estimate(&route);

        info!(
            pickup = %pickup_at,
            destination = %destination_at,
            distance_km = route.distance_km(),
            drivers = nearby_drivers.len(),
            "Ride quoted"
        );

        Ok(RideQuote {
            pickup: pickup_at,
            destination: destination_at,
            route,
            fares,
            nearby_drivers,
        })
    }
}
