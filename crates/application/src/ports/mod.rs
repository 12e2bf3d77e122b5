//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod device_location_port;
mod driver_index_port;
mod geocoding_port;
mod routing_port;

pub use device_location_port::{DeviceLocationPort, PositionStream};
#[cfg(test)]
pub use driver_index_port::MockDriverIndexPort;
pub use driver_index_port::DriverIndexPort;
#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use geocoding_port::GeocodingPort;
#[cfg(test)]
pub use routing_port::MockRoutingPort;
pub use routing_port::RoutingPort;
