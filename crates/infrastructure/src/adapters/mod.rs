//! Adapters - Implementations of application ports

mod device_position_feed;
mod geocoding_adapter;
mod routing_adapter;

pub use device_position_feed::{DEFAULT_FEED_CAPACITY, DevicePositionFeed};
pub use geocoding_adapter::GeocodingAdapter;
pub use routing_adapter::RoutingAdapter;
