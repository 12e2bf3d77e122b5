//! Application services - Use case implementations

mod geocoder_service;
mod live_tracking;
mod proximity_service;
mod ride_quote_service;
mod router_service;

pub use geocoder_service::GeocoderService;
pub use live_tracking::{LiveSession, LiveTracker};
pub use proximity_service::ProximityService;
pub use ride_quote_service::{DEFAULT_SEARCH_RADIUS_KM, RideQuote, RideQuoteService};
pub use router_service::RouterService;
