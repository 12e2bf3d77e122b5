//! Composition root
//!
//! Wires adapters into application services from an [`AppConfig`]. The
//! surrounding service builds one [`LocationCore`] at startup and shares it.

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{DeviceLocationPort, DriverIndexPort, GeocodingPort, RoutingPort};
use application::{
    GeocoderService, LiveTracker, ProximityService, RideQuoteService, RouterService,
};
use tracing::info;

use crate::adapters::{DevicePositionFeed, GeocodingAdapter, RoutingAdapter};
use crate::config::AppConfig;
use crate::persistence::{SqliteDriverIndex, create_pool};

/// The wired location and matching core
#[derive(Debug, Clone)]
pub struct LocationCore {
    /// Address resolution and autocomplete
    pub geocoder: GeocoderService,
    /// Route distance/duration estimates
    pub router: RouterService,
    /// Nearby-driver lookup
    pub proximity: ProximityService,
    /// Rider live position tracking
    pub tracker: LiveTracker,
    /// Ride request quotes
    pub quotes: RideQuoteService,
    drivers: SqliteDriverIndex,
    device_feed: Arc<DevicePositionFeed>,
}

impl LocationCore {
    /// Build every adapter and service from configuration
    ///
    /// # Errors
    ///
    /// Returns `Configuration` for invalid settings (including a missing
    /// routing API key) and `Internal` if the database cannot be opened.
    pub fn from_config(config: &AppConfig) -> Result<Self, ApplicationError> {
        config.validate().map_err(ApplicationError::Configuration)?;

        let geocoding: Arc<dyn GeocodingPort> =
            Arc::new(GeocodingAdapter::with_config(&config.geocoding)?);
        let routing: Arc<dyn RoutingPort> =
            Arc::new(RoutingAdapter::with_config(config.routing.clone())?);

        let pool = create_pool(&config.database)
            .map_err(|e| ApplicationError::Internal(format!("Failed to open database: {e}")))?;
        let drivers = SqliteDriverIndex::new(Arc::new(pool), config.database.query_timeout());
        let index: Arc<dyn DriverIndexPort> = Arc::new(drivers.clone());

        let device_feed = Arc::new(DevicePositionFeed::new(
            config.tracking.feed_capacity,
            config.tracking.initial_fix_timeout(),
        ));
        let device: Arc<dyn DeviceLocationPort> = Arc::clone(&device_feed) as _;
        let fallback = config.tracking.fallback_center()?;

        let geocoder = GeocoderService::new(geocoding);
        let router = RouterService::new(routing);
        let proximity = ProximityService::new(index);
        let tracker = LiveTracker::new(device, fallback);
        let quotes = RideQuoteService::new(
            geocoder.clone(),
            router.clone(),
            proximity.clone(),
            config.fares,
            config.matching.search_radius_km,
        );

        info!(
            geocoding = %config.geocoding.base_url,
            routing = %config.routing.base_url,
            database = %config.database.path,
            search_radius_km = config.matching.search_radius_km,
            "Location core ready"
        );

        Ok(Self {
            geocoder,
            router,
            proximity,
            tracker,
            quotes,
            drivers,
            device_feed,
        })
    }

    /// Driver store, for seeding and captain position updates
    #[must_use]
    pub const fn drivers(&self) -> &SqliteDriverIndex {
        &self.drivers
    }

    /// Device feed into which rider GPS fixes are pushed
    #[must_use]
    pub fn device_feed(&self) -> Arc<DevicePositionFeed> {
        Arc::clone(&self.device_feed)
    }
}
