//! Value Objects - Immutable, identity-less domain primitives

mod address_query;
mod coordinate;
mod driver_id;
mod radius_query;

pub use address_query::AddressQuery;
pub use coordinate::{Coordinate, EARTH_RADIUS_KM, central_angle};
pub use driver_id::DriverId;
pub use radius_query::RadiusQuery;
